//! Mesh utilities for bookshelf drafts.
//!
//! Solids are emitted as flat-shaded boxes. Colors go into
//! `Mesh::ATTRIBUTE_COLOR` as linear RGBA so a white `StandardMaterial`
//! renders them unchanged.

use bevy::color::ColorToComponents;
use bevy::prelude::*;

mod attributes;
mod builder;

pub use attributes::ATTRIBUTE_SOLID_TAG;
pub use builder::{DraftMeshBuilder, INDICES_PER_SOLID, VERTICES_PER_SOLID};

/// Extension trait for painting existing meshes with a vertex color.
pub trait MeshPaintExt {
    /// Set every vertex color to `color`.
    fn with_uniform_color(self, color: Color) -> Self;
}

impl MeshPaintExt for Mesh {
    fn with_uniform_color(mut self, color: Color) -> Self {
        let vertex_count = self
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .map(|a| a.len())
            .unwrap_or(0);

        let linear = color.to_linear().to_f32_array();
        self.insert_attribute(Mesh::ATTRIBUTE_COLOR, vec![linear; vertex_count]);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;

    #[test]
    fn test_uniform_color_covers_every_vertex() {
        let mesh = Mesh::from(Cuboid::default()).with_uniform_color(Color::BLACK);
        let vertex_count = mesh.count_vertices();

        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("colors missing");
        };
        assert_eq!(colors.len(), vertex_count);
        assert!(colors.iter().all(|c| *c == [0.0, 0.0, 0.0, 1.0]));
    }
}
