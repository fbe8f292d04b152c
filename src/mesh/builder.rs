//! Mesh builder for bookshelf drafts.

use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::prelude::*;

use super::attributes::ATTRIBUTE_SOLID_TAG;
use crate::draft::{Solid, SolidTag};

/// Vertices emitted per solid (four per face, flat shaded).
pub const VERTICES_PER_SOLID: usize = 24;

/// Indices emitted per solid (two triangles per face).
pub const INDICES_PER_SOLID: usize = 36;

/// Builder for vertex-colored meshes made of draft solids.
///
/// Produces a Bevy [`Mesh`] with positions, normals, linear RGBA vertex
/// colors and the [`ATTRIBUTE_SOLID_TAG`] attribute.
///
/// # Example
/// ```ignore
/// use bevy_bookshelf::prelude::*;
///
/// let mut builder = DraftMeshBuilder::new();
/// builder.push_solid(&Solid::new(SolidTag::Case, Vec3::ZERO, Vec3::ONE));
/// let mesh = builder.build_unwrap();
/// ```
#[derive(Default)]
pub struct DraftMeshBuilder {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    tags: Vec<u32>,
    indices: Vec<u32>,
}

impl DraftMeshBuilder {
    /// Create a new empty mesh builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            tags: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Create a builder sized for `solid_count` boxes.
    pub fn for_solids(solid_count: usize) -> Self {
        Self::with_capacity(
            solid_count * VERTICES_PER_SOLID,
            solid_count * INDICES_PER_SOLID,
        )
    }

    /// Add a vertex (mutable version for loops).
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], color: Color, tag: SolidTag) {
        self.positions.push(position);
        self.normals.push(normal);
        self.colors.push(color.to_linear().to_f32_array());
        self.tags.push(tag.id());
    }

    /// Add a single triangle by vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Add a quad given its corners in counter-clockwise order seen from `normal`.
    pub fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: Color, tag: SolidTag) {
        let base = self.positions.len() as u32;
        for corner in corners {
            self.push_vertex(corner.to_array(), normal.to_array(), color, tag);
        }
        self.push_triangle(base, base + 1, base + 2);
        self.push_triangle(base, base + 2, base + 3);
    }

    /// Add the six faces of a solid.
    pub fn push_solid(&mut self, solid: &Solid) {
        let min = solid.min();
        let max = solid.max();
        let (color, tag) = (solid.color, solid.tag);

        // Front (-Z)
        self.push_quad(
            [
                vec3(max.x, min.y, min.z),
                vec3(min.x, min.y, min.z),
                vec3(min.x, max.y, min.z),
                vec3(max.x, max.y, min.z),
            ],
            Vec3::NEG_Z,
            color,
            tag,
        );
        // Back (+Z)
        self.push_quad(
            [
                vec3(min.x, min.y, max.z),
                vec3(max.x, min.y, max.z),
                vec3(max.x, max.y, max.z),
                vec3(min.x, max.y, max.z),
            ],
            Vec3::Z,
            color,
            tag,
        );
        // Left (-X)
        self.push_quad(
            [
                vec3(min.x, min.y, min.z),
                vec3(min.x, min.y, max.z),
                vec3(min.x, max.y, max.z),
                vec3(min.x, max.y, min.z),
            ],
            Vec3::NEG_X,
            color,
            tag,
        );
        // Right (+X)
        self.push_quad(
            [
                vec3(max.x, min.y, max.z),
                vec3(max.x, min.y, min.z),
                vec3(max.x, max.y, min.z),
                vec3(max.x, max.y, max.z),
            ],
            Vec3::X,
            color,
            tag,
        );
        // Top (+Y)
        self.push_quad(
            [
                vec3(min.x, max.y, max.z),
                vec3(max.x, max.y, max.z),
                vec3(max.x, max.y, min.z),
                vec3(min.x, max.y, min.z),
            ],
            Vec3::Y,
            color,
            tag,
        );
        // Bottom (-Y)
        self.push_quad(
            [
                vec3(min.x, min.y, min.z),
                vec3(max.x, min.y, min.z),
                vec3(max.x, min.y, max.z),
                vec3(min.x, min.y, max.z),
            ],
            Vec3::NEG_Y,
            color,
            tag,
        );
    }

    /// Get the current vertex count.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the current index count.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Build the final mesh.
    ///
    /// Returns `None` if there are no vertices or indices.
    pub fn build(self) -> Option<Mesh> {
        if self.positions.is_empty() || self.indices.is_empty() {
            return None;
        }

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        );

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.colors);
        mesh.insert_attribute(ATTRIBUTE_SOLID_TAG, self.tags);
        mesh.insert_indices(Indices::U32(self.indices));

        Some(mesh)
    }

    /// Build the mesh, panicking if invalid.
    ///
    /// # Panics
    /// Panics if there are no vertices or indices.
    pub fn build_unwrap(self) -> Mesh {
        self.build().expect("Cannot build empty mesh")
    }
}
