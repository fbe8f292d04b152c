//! Plugin for procedural bookshelves.
use bevy::prelude::*;

use crate::systems::{BookshelfMaterials, BookshelfSystems, RegenerateBookshelf, regenerate_bookshelves};

/// Plugin that keeps [`Bookshelf`](crate::systems::Bookshelf) meshes up to date.
///
/// This plugin registers:
/// - the [`RegenerateBookshelf`] message
/// - the [`BookshelfMaterials`] resource
/// - [`regenerate_bookshelves`] in [`BookshelfSystems`] on [`Update`]
///
/// Add it after the PBR plugin, since the materials are created on build.
///
/// # Example
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_bookshelf::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(BookshelfPlugin)
///     .run();
/// ```
pub struct BookshelfPlugin;

impl Plugin for BookshelfPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RegenerateBookshelf>()
            .init_resource::<BookshelfMaterials>()
            .configure_sets(Update, BookshelfSystems)
            .add_systems(Update, regenerate_bookshelves.in_set(BookshelfSystems));
    }
}
