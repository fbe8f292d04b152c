//! Ordered collection of solids produced by one generation pass.

use bevy::prelude::*;

use super::solid::{Solid, SolidTag};
use crate::mesh::DraftMeshBuilder;

/// Ordered sequence of solids, grouped by tag on demand.
///
/// The generator fills it case first, then shelves, then books. The caller
/// owns it outright; nothing keeps a reference after generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftCollection {
    solids: Vec<Solid>,
}

impl DraftCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            solids: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, solid: Solid) {
        self.solids.push(solid);
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solid> {
        self.solids.iter()
    }

    /// Solids carrying `tag`, in insertion order.
    pub fn by_tag(&self, tag: SolidTag) -> impl Iterator<Item = &Solid> {
        self.solids.iter().filter(move |s| s.tag == tag)
    }

    pub fn count(&self, tag: SolidTag) -> usize {
        self.by_tag(tag).count()
    }

    /// Paint every solid carrying `tag` with `color`.
    pub fn paint(&mut self, tag: SolidTag, color: Color) {
        for solid in self.solids.iter_mut().filter(|s| s.tag == tag) {
            solid.color = color;
        }
    }

    /// Axis-aligned bounds over all solids, `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.solids.first()?;
        let init = (first.min(), first.max());
        Some(
            self.solids
                .iter()
                .fold(init, |(min, max), s| (min.min(s.min()), max.max(s.max()))),
        )
    }

    /// Build one mesh holding every solid.
    pub fn build_mesh(&self) -> Option<Mesh> {
        let mut builder = DraftMeshBuilder::for_solids(self.solids.len());
        for solid in &self.solids {
            builder.push_solid(solid);
        }
        builder.build()
    }

    /// Build a mesh holding only the solids carrying `tag`.
    pub fn build_mesh_for(&self, tag: SolidTag) -> Option<Mesh> {
        let mut builder = DraftMeshBuilder::for_solids(self.count(tag));
        for solid in self.by_tag(tag) {
            builder.push_solid(solid);
        }
        builder.build()
    }

    /// One mesh per tag present in the collection, in [`SolidTag::ALL`] order.
    pub fn build_meshes(&self) -> Vec<(SolidTag, Mesh)> {
        SolidTag::ALL
            .into_iter()
            .filter_map(|tag| self.build_mesh_for(tag).map(|mesh| (tag, mesh)))
            .collect()
    }
}

impl Extend<Solid> for DraftCollection {
    fn extend<I: IntoIterator<Item = Solid>>(&mut self, iter: I) {
        self.solids.extend(iter);
    }
}

impl FromIterator<Solid> for DraftCollection {
    fn from_iter<I: IntoIterator<Item = Solid>>(iter: I) -> Self {
        Self {
            solids: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DraftCollection {
    type Item = Solid;
    type IntoIter = std::vec::IntoIter<Solid>;

    fn into_iter(self) -> Self::IntoIter {
        self.solids.into_iter()
    }
}

impl<'a> IntoIterator for &'a DraftCollection {
    type Item = &'a Solid;
    type IntoIter = std::slice::Iter<'a, Solid>;

    fn into_iter(self) -> Self::IntoIter {
        self.solids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DraftCollection {
        [
            Solid::new(SolidTag::Case, Vec3::ZERO, Vec3::ONE),
            Solid::new(SolidTag::Shelf, Vec3::Y, Vec3::ONE),
            Solid::new(SolidTag::Book, vec3(2.0, 0.0, 0.0), Vec3::ONE),
            Solid::new(SolidTag::Book, vec3(-2.0, 0.0, 0.0), Vec3::ONE),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_grouping_by_tag() {
        let drafts = sample();
        assert_eq!(drafts.len(), 4);
        assert_eq!(drafts.count(SolidTag::Case), 1);
        assert_eq!(drafts.count(SolidTag::Shelf), 1);
        assert_eq!(drafts.count(SolidTag::Book), 2);
    }

    #[test]
    fn test_paint_only_touches_tag() {
        let mut drafts = sample();
        drafts.paint(SolidTag::Book, Color::BLACK);
        assert!(drafts.by_tag(SolidTag::Book).all(|s| s.color == Color::BLACK));
        assert!(drafts.by_tag(SolidTag::Case).all(|s| s.color == Color::WHITE));
    }

    #[test]
    fn test_bounds() {
        assert!(DraftCollection::new().bounds().is_none());
        let (min, max) = sample().bounds().unwrap();
        assert_eq!(min, vec3(-2.5, -0.5, -0.5));
        assert_eq!(max, vec3(2.5, 1.5, 0.5));
    }

    #[test]
    fn test_build_meshes_per_tag() {
        let meshes = sample().build_meshes();
        let tags: Vec<_> = meshes.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, vec![SolidTag::Case, SolidTag::Shelf, SolidTag::Book]);

        let (_, books) = &meshes[2];
        assert_eq!(books.count_vertices(), 48);
    }

    #[test]
    fn test_build_meshes_skips_missing_tags() {
        let drafts: DraftCollection = [Solid::new(SolidTag::Case, Vec3::ZERO, Vec3::ONE)]
            .into_iter()
            .collect();
        let meshes = drafts.build_meshes();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].0, SolidTag::Case);
        assert!(drafts.build_mesh_for(SolidTag::Book).is_none());
    }

    #[test]
    fn test_empty_collection_has_no_mesh() {
        assert!(DraftCollection::new().build_mesh().is_none());
        assert!(DraftCollection::new().build_meshes().is_empty());
    }
}
