//! Slider limits for interactive tweaking and config randomization.

use std::ops::RangeInclusive;

pub const INTERNAL_HEIGHT: RangeInclusive<f32> = 0.03..=5.20;
pub const INTERNAL_WIDTH: RangeInclusive<f32> = 0.03..=5.20;
pub const INTERNAL_DEPTH: RangeInclusive<f32> = 0.03..=2.00;
pub const PLANKS_WIDTH: RangeInclusive<f32> = 0.03..=0.30;

pub const SHELVES_COUNT: RangeInclusive<u32> = 0..=8;
pub const BOOKS_DENSITY: RangeInclusive<f32> = 0.0..=1.0;
pub const BOOKS_THICKNESS: RangeInclusive<f32> = 0.01..=0.10;
pub const BOOKS_HEIGHT: RangeInclusive<f32> = 0.05..=1.00;
pub const BOOKS_WIDTH: RangeInclusive<f32> = 0.05..=1.00;

/// Largest shelf count accepted by validation.
pub const MAX_SHELVES: u32 = 1024;
