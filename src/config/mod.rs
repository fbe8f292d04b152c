//! Bookshelf parameters, their slider limits and validation.

mod limits;
mod validation;

pub use limits::{
    BOOKS_DENSITY, BOOKS_HEIGHT, BOOKS_THICKNESS, BOOKS_WIDTH, INTERNAL_DEPTH, INTERNAL_HEIGHT,
    INTERNAL_WIDTH, MAX_SHELVES, PLANKS_WIDTH, SHELVES_COUNT,
};
pub use validation::ConfigError;

use bevy::prelude::*;

use crate::random::RandomSource;

/// Parameters for one bookshelf generation pass.
///
/// Dimensions describe the internal cavity, not the outer case. The case
/// grows by one plank thickness per shelf so that the user-facing
/// `internal_height` is the sum of the open compartments.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct BookshelfConfig {
    pub internal_height: f32,
    pub internal_width: f32,
    pub internal_depth: f32,

    /// Thickness of every plank, shelves included.
    pub planks_width: f32,

    pub shelves_count: u32,

    /// Fraction of the available shelf length covered by books, `0.0..=1.0`.
    ///
    /// Also controls the average gap between neighbouring books: at `1.0`
    /// books are packed without gaps.
    pub books_density: f32,
    pub books_thickness: f32,
    pub books_height: f32,

    /// Book extent along the depth axis.
    pub books_width: f32,

    /// Base color painted on case planks and shelves.
    pub color: Color,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            internal_height: 1.5,
            internal_width: 0.7,
            internal_depth: 0.2,
            planks_width: 0.05,
            shelves_count: 3,
            books_density: 0.5,
            books_thickness: 0.03,
            books_height: 0.25,
            books_width: 0.15,
            color: Color::WHITE,
        }
    }
}

impl BookshelfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the internal cavity size (width, height, depth).
    pub fn with_internal_size(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.internal_width = width;
        self.internal_height = height;
        self.internal_depth = depth;
        self
    }

    pub fn with_planks_width(mut self, planks_width: f32) -> Self {
        self.planks_width = planks_width;
        self
    }

    pub fn with_shelves(mut self, shelves_count: u32) -> Self {
        self.shelves_count = shelves_count;
        self
    }

    /// Set book density, thickness, height and width in one go.
    pub fn with_books(mut self, density: f32, thickness: f32, height: f32, width: f32) -> Self {
        self.books_density = density;
        self.books_thickness = thickness;
        self.books_height = height;
        self.books_width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Internal height including the space taken by shelf planks.
    pub fn usable_height(&self) -> f32 {
        self.internal_height + self.shelves_count as f32 * self.planks_width
    }

    /// Height of a single open compartment between two planks.
    pub fn height_per_shelf(&self) -> f32 {
        self.internal_height / (self.shelves_count as f32 + 1.0)
    }

    /// Outer case size as (width, height, depth).
    pub fn outer_size(&self) -> Vec3 {
        let p = self.planks_width;
        vec3(
            self.internal_width + 2.0 * p,
            self.usable_height() + 2.0 * p,
            self.internal_depth + p,
        )
    }

    /// Check every parameter, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Copy of this config with every numeric field pulled into its slider limits.
    ///
    /// NaN fields are replaced by the lower limit. The color is kept.
    pub fn clamped(&self) -> Self {
        Self {
            internal_height: clamp_to(self.internal_height, &INTERNAL_HEIGHT),
            internal_width: clamp_to(self.internal_width, &INTERNAL_WIDTH),
            internal_depth: clamp_to(self.internal_depth, &INTERNAL_DEPTH),
            planks_width: clamp_to(self.planks_width, &PLANKS_WIDTH),
            shelves_count: self
                .shelves_count
                .clamp(*SHELVES_COUNT.start(), *SHELVES_COUNT.end()),
            books_density: clamp_to(self.books_density, &BOOKS_DENSITY),
            books_thickness: clamp_to(self.books_thickness, &BOOKS_THICKNESS),
            books_height: clamp_to(self.books_height, &BOOKS_HEIGHT),
            books_width: clamp_to(self.books_width, &BOOKS_WIDTH),
            color: self.color,
        }
    }

    /// Draw a new base color and case dimensions within the slider limits.
    ///
    /// Shelf and book parameters are kept.
    pub fn randomize(&mut self, rng: &mut impl RandomSource) {
        self.color = rng.random_color();
        self.internal_height = sample(rng, &INTERNAL_HEIGHT);
        self.internal_width = sample(rng, &INTERNAL_WIDTH);
        self.internal_depth = sample(rng, &INTERNAL_DEPTH);
        self.planks_width = sample(rng, &PLANKS_WIDTH);
    }
}

fn clamp_to(value: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

fn sample(rng: &mut impl RandomSource, range: &std::ops::RangeInclusive<f32>) -> f32 {
    rng.uniform(*range.start(), *range.end())
}
