//! Intermediate geometric description of a bookshelf.
//!
//! A draft is a list of boxes, each tagged with the part it belongs to and
//! painted with a color. It is turned into renderable meshes by
//! [`DraftCollection::build_meshes`].

mod collection;
mod solid;

pub use collection::DraftCollection;
pub use solid::{Solid, SolidTag};
