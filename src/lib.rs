//! # bevy_bookshelf
//!
//! Procedural bookshelves for Bevy: a plank case, evenly spaced shelves and
//! randomly packed, randomly colored books, built from scratch on every
//! config change.
//!
//! ## Features
//!
//! - Pure layout core: [`generator::generate`] maps a config and a seeded
//!   random source to tagged, colored boxes
//! - Vertex-colored meshes, one per part, so case and books can use
//!   different materials
//! - Explicit seeding for reproducible output
//! - Change-driven regeneration through the [`Bookshelf`](systems::Bookshelf)
//!   component and the [`RegenerateBookshelf`](systems::RegenerateBookshelf) message
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_bookshelf::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(BookshelfPlugin)
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     let config = BookshelfConfig::default().with_shelves(4);
//!     commands.spawn(Bookshelf::new(config).with_seed(0));
//! }
//! ```
//!
//! Without the plugin, the layout can be used directly:
//!
//! ```
//! use bevy_bookshelf::prelude::*;
//!
//! let drafts = generate(&BookshelfConfig::default(), &mut SeededRandom::new(1));
//! let meshes = drafts.build_meshes();
//! assert_eq!(meshes.len(), 3);
//! ```

pub mod config;
pub mod draft;
pub mod generator;
pub mod mesh;
pub mod platform;
mod plugin;
pub mod random;
pub mod systems;

pub mod prelude {
    pub use crate::config::{BookshelfConfig, ConfigError};
    pub use crate::draft::{DraftCollection, Solid, SolidTag};
    pub use crate::generator::{generate, try_generate};
    pub use crate::mesh::{ATTRIBUTE_SOLID_TAG, DraftMeshBuilder, MeshPaintExt};
    pub use crate::plugin::BookshelfPlugin;
    pub use crate::random::{RandomSource, SeededRandom};
    pub use crate::systems::{
        Bookshelf, BookshelfMaterials, BookshelfPart, BookshelfPlatform, BookshelfSystems,
        RegenerateBookshelf,
    };
}
