//! Components, messages and systems that keep bookshelf meshes in sync with their config.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::config::BookshelfConfig;
use crate::draft::SolidTag;
use crate::generator::generate;
use crate::platform::{platform_mesh, platform_transform};
use crate::random::SeededRandom;

/// System set for bookshelf regeneration.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookshelfSystems;

/// A procedurally generated bookshelf.
///
/// Any change to this component rebuilds the bookshelf meshes on the next
/// [`Update`]. Generated parts are spawned as children.
#[derive(Component, Clone, Debug, Default)]
#[require(Transform, Visibility)]
pub struct Bookshelf {
    pub config: BookshelfConfig,

    /// Seed used for every regeneration. `None` draws a fresh seed each time.
    pub seed: Option<u64>,
}

impl Bookshelf {
    pub fn new(config: BookshelfConfig) -> Self {
        Self { config, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Child entity holding the mesh for one [`SolidTag`].
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookshelfPart(pub SolidTag);

/// Child entity holding the platform mesh.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BookshelfPlatform;

/// Request to rebuild a bookshelf even if its config did not change.
#[derive(Message, Clone, Copy, Debug)]
pub struct RegenerateBookshelf {
    pub entity: Entity,

    /// Draw a new base color and case dimensions before generating.
    pub randomize_config: bool,
}

impl RegenerateBookshelf {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            randomize_config: false,
        }
    }

    pub fn randomized(entity: Entity) -> Self {
        Self {
            entity,
            randomize_config: true,
        }
    }
}

/// Materials applied to generated parts.
///
/// All of them are white so vertex colors show through unchanged.
#[derive(Resource, Clone, Debug)]
pub struct BookshelfMaterials {
    /// Case planks and shelves.
    pub case: Handle<StandardMaterial>,
    pub books: Handle<StandardMaterial>,
    pub platform: Handle<StandardMaterial>,
}

impl BookshelfMaterials {
    pub fn for_tag(&self, tag: SolidTag) -> Handle<StandardMaterial> {
        if tag.is_structural() {
            self.case.clone()
        } else {
            self.books.clone()
        }
    }
}

impl FromWorld for BookshelfMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        Self {
            case: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                perceptual_roughness: 0.8,
                ..default()
            }),
            books: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                perceptual_roughness: 0.6,
                ..default()
            }),
            platform: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                perceptual_roughness: 0.9,
                ..default()
            }),
        }
    }
}

/// Base color of the platform under each bookshelf.
pub const PLATFORM_COLOR: Color = Color::srgb(0.25, 0.25, 0.28);

/// Rebuilds bookshelves whose component changed or that received a [`RegenerateBookshelf`].
///
/// Each rebuild seeds its own random source, optionally randomizes the
/// config with it, then generates. Invalid configs are logged and leave the
/// previous meshes in place.
pub fn regenerate_bookshelves(
    mut commands: Commands,
    mut requests: MessageReader<RegenerateBookshelf>,
    mut bookshelves: Query<(Entity, &mut Bookshelf)>,
    parts: Query<(Entity, &ChildOf), Or<(With<BookshelfPart>, With<BookshelfPlatform>)>>,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<BookshelfMaterials>,
) {
    let mut pending: HashMap<Entity, bool> = HashMap::new();
    for request in requests.read() {
        *pending.entry(request.entity).or_default() |= request.randomize_config;
    }

    for (entity, mut bookshelf) in &mut bookshelves {
        let randomize = match pending.remove(&entity) {
            Some(randomize) => randomize,
            None if bookshelf.is_changed() => false,
            None => continue,
        };

        let mut rng = SeededRandom::from_seed_option(bookshelf.seed);
        if randomize {
            bookshelf.config.randomize(&mut rng);
        }

        if let Err(e) = bookshelf.config.validate() {
            warn!("Skipping bookshelf {entity}: {e}");
            continue;
        }

        let drafts = generate(&bookshelf.config, &mut rng);
        debug!(
            "Regenerated bookshelf {entity} with seed {}: {} solids",
            rng.seed(),
            drafts.len()
        );

        for (part, child_of) in &parts {
            if child_of.parent() == entity {
                commands.entity(part).despawn();
            }
        }

        let platform = meshes.add(platform_mesh(&bookshelf.config, PLATFORM_COLOR));
        let part_meshes: Vec<_> = drafts
            .build_meshes()
            .into_iter()
            .map(|(tag, mesh)| (tag, meshes.add(mesh)))
            .collect();

        commands.entity(entity).with_children(|parent| {
            for (tag, mesh) in part_meshes {
                parent.spawn((
                    BookshelfPart(tag),
                    Name::new(format!("bookshelf {}", tag.name())),
                    Mesh3d(mesh),
                    MeshMaterial3d(materials.for_tag(tag)),
                ));
            }
            parent.spawn((
                BookshelfPlatform,
                Name::new("bookshelf platform"),
                Mesh3d(platform),
                MeshMaterial3d(materials.platform.clone()),
                platform_transform(),
            ));
        });
    }

    for entity in pending.keys() {
        warn!("Regeneration requested for {entity}, which is not a bookshelf");
    }
}
