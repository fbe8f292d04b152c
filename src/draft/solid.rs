//! Tagged, colored axis-aligned boxes.

use bevy::prelude::*;

/// Which part of the bookshelf a solid belongs to.
///
/// Used to group solids into meshes that get different materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub enum SolidTag {
    /// Bottom, top, back and side planks.
    Case,
    Shelf,
    Book,
}

impl SolidTag {
    pub const ALL: [SolidTag; 3] = [SolidTag::Case, SolidTag::Shelf, SolidTag::Book];

    /// Stable numeric id, written into the solid-tag vertex attribute.
    #[inline]
    pub const fn id(self) -> u32 {
        match self {
            SolidTag::Case => 0,
            SolidTag::Shelf => 1,
            SolidTag::Book => 2,
        }
    }

    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(SolidTag::Case),
            1 => Some(SolidTag::Shelf),
            2 => Some(SolidTag::Book),
            _ => None,
        }
    }

    /// Case planks and shelves share the case material.
    pub const fn is_structural(self) -> bool {
        matches!(self, SolidTag::Case | SolidTag::Shelf)
    }

    pub const fn name(self) -> &'static str {
        match self {
            SolidTag::Case => "case",
            SolidTag::Shelf => "shelf",
            SolidTag::Book => "book",
        }
    }
}

/// An axis-aligned box positioned by its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solid {
    pub tag: SolidTag,
    pub center: Vec3,
    /// Full extents along x, y and z.
    pub size: Vec3,
    pub color: Color,
}

impl Solid {
    pub fn new(tag: SolidTag, center: Vec3, size: Vec3) -> Self {
        Self {
            tag,
            center,
            size,
            color: Color::WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Shift the solid by `offset`.
    pub fn moved(mut self, offset: Vec3) -> Self {
        self.center += offset;
        self
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    pub fn volume(&self) -> f32 {
        self.size.x * self.size.y * self.size.z
    }

    /// True when any extent is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.size.is_finite() && self.size.min_element() > 0.0)
    }
}
