//! Case planks and shelves.

use bevy::prelude::*;

use crate::config::BookshelfConfig;
use crate::draft::{Solid, SolidTag};

/// The five planks of the case: bottom, back, left, right, top.
///
/// The cavity between them is `internal_width` wide, `internal_depth` deep
/// and `usable_height()` tall. The back plank sits on the +Z side.
pub fn case_planks(config: &BookshelfConfig) -> [Solid; 5] {
    let p = config.planks_width;
    let width = config.internal_width;
    let depth = config.internal_depth;
    let height = config.usable_height();

    let outer_width = width + 2.0 * p;
    let side_offset = width / 2.0 + p / 2.0;
    let wall_center_y = height / 2.0 + p;

    let bottom = Solid::new(
        SolidTag::Case,
        vec3(0.0, p / 2.0, 0.0),
        vec3(outer_width, p, depth + p),
    );
    let back = Solid::new(
        SolidTag::Case,
        vec3(0.0, wall_center_y, depth / 2.0),
        vec3(outer_width, height, p),
    );
    let left = Solid::new(
        SolidTag::Case,
        vec3(-side_offset, wall_center_y, -p / 2.0),
        vec3(p, height, depth),
    );
    let right = Solid::new(
        SolidTag::Case,
        vec3(side_offset, wall_center_y, -p / 2.0),
        vec3(p, height, depth),
    );
    let top = Solid::new(
        SolidTag::Case,
        vec3(0.0, height + 3.0 * p / 2.0, 0.0),
        vec3(outer_width, p, depth + p),
    );

    [bottom, back, left, right, top]
}

/// Vertical center of shelf `index`.
///
/// The internal height is split into `shelves_count + 1` equal compartments
/// and every shelf sits on top of the compartment below it.
pub fn shelf_center_y(config: &BookshelfConfig, index: u32) -> f32 {
    let p = config.planks_width;
    p / 2.0 + (index as f32 + 1.0) * (config.height_per_shelf() + p)
}

/// Height of the top surface of shelf `index`.
pub fn shelf_top_y(config: &BookshelfConfig, index: u32) -> f32 {
    shelf_center_y(config, index) + config.planks_width / 2.0
}

/// One plank per shelf, spanning the internal width and depth.
pub fn shelves(config: &BookshelfConfig) -> impl Iterator<Item = Solid> + '_ {
    let p = config.planks_width;
    let size = vec3(config.internal_width, p, config.internal_depth);
    (0..config.shelves_count).map(move |i| {
        Solid::new(
            SolidTag::Shelf,
            vec3(0.0, shelf_center_y(config, i), -p / 2.0),
            size,
        )
    })
}
