//! Round display platform under the bookshelf.

use bevy::prelude::*;

use crate::config::BookshelfConfig;
use crate::mesh::MeshPaintExt;

pub const PLATFORM_HEIGHT: f32 = 0.05;

/// Margin added around the case footprint.
pub const PLATFORM_RADIUS_OFFSET: f32 = 0.20;

/// Radius of the circle passing through the corners of a `width` by `depth` rectangle.
pub fn circumradius(width: f32, depth: f32) -> f32 {
    (width * width + depth * depth).sqrt() / 2.0
}

/// Platform radius for the internal cavity footprint plus the margin.
pub fn platform_radius(config: &BookshelfConfig) -> f32 {
    circumradius(config.internal_width, config.internal_depth) + PLATFORM_RADIUS_OFFSET
}

/// Platform cylinder painted with `color`.
pub fn platform_mesh(config: &BookshelfConfig, color: Color) -> Mesh {
    Mesh::from(Cylinder::new(platform_radius(config), PLATFORM_HEIGHT)).with_uniform_color(color)
}

/// Platform transform: top face flush with y = 0.
pub fn platform_transform() -> Transform {
    Transform::from_xyz(0.0, -PLATFORM_HEIGHT / 2.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circumradius() {
        assert!((circumradius(3.0, 4.0) - 2.5).abs() < 1e-6);
        assert_eq!(circumradius(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_platform_radius_default() {
        let config = BookshelfConfig::default();
        let expected = (0.7f32 * 0.7 + 0.2 * 0.2).sqrt() / 2.0 + 0.2;
        assert!((platform_radius(&config) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_platform_mesh_has_colors() {
        let mesh = platform_mesh(&BookshelfConfig::default(), Color::WHITE);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
        assert!(mesh.count_vertices() > 0);
    }

    #[test]
    fn test_platform_top_at_ground() {
        let transform = platform_transform();
        assert!((transform.translation.y + PLATFORM_HEIGHT / 2.0).abs() < 1e-6);
    }
}
