//! Custom vertex attributes for bookshelf meshes.

use bevy::mesh::MeshVertexAttribute;
use bevy::render::render_resource::VertexFormat;

/// Vertex attribute carrying the [`SolidTag`](crate::draft::SolidTag) id of
/// the solid a vertex was emitted for.
///
/// Standard materials ignore it. Custom shaders can use it to tell books
/// from planks when all parts share one mesh.
///
/// # Example
/// ```ignore
/// // Vertex belonging to a book
/// let tag: u32 = SolidTag::Book.id();
/// ```
pub const ATTRIBUTE_SOLID_TAG: MeshVertexAttribute =
    MeshVertexAttribute::new("SolidTag", 988540930, VertexFormat::Uint32);
