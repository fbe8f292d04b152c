//! Interactive bookshelf generator.
//!
//! Keyboard controls tweak the config; every change regenerates the mesh.

use bevy::prelude::*;
use bevy_bookshelf::config::{
    BOOKS_DENSITY, INTERNAL_DEPTH, INTERNAL_HEIGHT, INTERNAL_WIDTH, PLANKS_WIDTH, SHELVES_COUNT,
};
use bevy_bookshelf::prelude::*;

/// Parameter edited by the arrow keys.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
enum Selected {
    #[default]
    Height,
    Width,
    Depth,
    PlanksWidth,
    Shelves,
    Density,
}

impl Selected {
    const ALL: [Selected; 6] = [
        Selected::Height,
        Selected::Width,
        Selected::Depth,
        Selected::PlanksWidth,
        Selected::Shelves,
        Selected::Density,
    ];

    fn label(self) -> &'static str {
        match self {
            Selected::Height => "Height",
            Selected::Width => "Width",
            Selected::Depth => "Depth",
            Selected::PlanksWidth => "Planks width",
            Selected::Shelves => "Shelves",
            Selected::Density => "Books density",
        }
    }

    fn step(self, delta: i32) -> Self {
        let index = Self::ALL.iter().position(|&s| s == self).unwrap_or(0) as i32;
        let len = Self::ALL.len() as i32;
        Self::ALL[(index + delta).rem_euclid(len) as usize]
    }
}

#[derive(Component)]
struct UiText;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(BookshelfPlugin)
        .init_resource::<Selected>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (select_parameter, adjust_parameter, request_regeneration).before(BookshelfSystems),
        )
        .add_systems(Update, ui_text.after(BookshelfSystems))
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Bookshelf::new(BookshelfConfig::default()));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, -3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(1.2, 1.4, -3.2).looking_at(Vec3::new(0.0, 0.8, 0.0), Vec3::Y),
    ));

    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        UiText,
    ));

    info!("Bookshelf demo loaded!");
    info!("Up/Down select, Left/Right adjust, Space regenerate, R randomize, C toggle constant seed");
}

fn select_parameter(keyboard: Res<ButtonInput<KeyCode>>, mut selected: ResMut<Selected>) {
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        *selected = selected.step(1);
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        *selected = selected.step(-1);
    }
}

fn adjust_parameter(
    keyboard: Res<ButtonInput<KeyCode>>,
    selected: Res<Selected>,
    mut bookshelves: Query<&mut Bookshelf>,
) {
    let delta: i32 = match (
        keyboard.just_pressed(KeyCode::ArrowRight),
        keyboard.just_pressed(KeyCode::ArrowLeft),
    ) {
        (true, false) => 1,
        (false, true) => -1,
        _ => return,
    };

    for mut bookshelf in &mut bookshelves {
        let config = &mut bookshelf.config;
        let step = delta as f32;
        match *selected {
            Selected::Height => {
                config.internal_height = nudge(config.internal_height, step * 0.1, &INTERNAL_HEIGHT)
            }
            Selected::Width => {
                config.internal_width = nudge(config.internal_width, step * 0.1, &INTERNAL_WIDTH)
            }
            Selected::Depth => {
                config.internal_depth = nudge(config.internal_depth, step * 0.05, &INTERNAL_DEPTH)
            }
            Selected::PlanksWidth => {
                config.planks_width = nudge(config.planks_width, step * 0.01, &PLANKS_WIDTH)
            }
            Selected::Shelves => {
                config.shelves_count = config
                    .shelves_count
                    .saturating_add_signed(delta)
                    .clamp(*SHELVES_COUNT.start(), *SHELVES_COUNT.end());
            }
            Selected::Density => {
                config.books_density = nudge(config.books_density, step * 0.05, &BOOKS_DENSITY)
            }
        }
    }
}

fn nudge(value: f32, delta: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
    (value + delta).clamp(*range.start(), *range.end())
}

fn request_regeneration(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut bookshelves: Query<(Entity, &mut Bookshelf)>,
    mut requests: MessageWriter<RegenerateBookshelf>,
) {
    for (entity, mut bookshelf) in &mut bookshelves {
        if keyboard.just_pressed(KeyCode::Space) {
            requests.write(RegenerateBookshelf::new(entity));
        }
        if keyboard.just_pressed(KeyCode::KeyR) {
            requests.write(RegenerateBookshelf::randomized(entity));
        }
        if keyboard.just_pressed(KeyCode::KeyC) {
            bookshelf.seed = match bookshelf.seed {
                Some(_) => None,
                None => Some(0),
            };
        }
    }
}

fn ui_text(
    selected: Res<Selected>,
    bookshelves: Query<&Bookshelf>,
    mut text_q: Query<&mut Text, With<UiText>>,
) {
    let Ok(mut text) = text_q.single_mut() else { return };
    let Ok(bookshelf) = bookshelves.single() else { return };
    let config = &bookshelf.config;

    let values = [
        format!("{:.2}", config.internal_height),
        format!("{:.2}", config.internal_width),
        format!("{:.2}", config.internal_depth),
        format!("{:.2}", config.planks_width),
        format!("{}", config.shelves_count),
        format!("{:.2}", config.books_density),
    ];
    let rows: String = Selected::ALL
        .iter()
        .zip(values)
        .map(|(&param, value)| {
            let marker = if param == *selected { ">" } else { " " };
            format!("{} {}: {}", marker, param.label(), value)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let seed = match bookshelf.seed {
        Some(seed) => format!("constant ({seed})"),
        None => "random".to_string(),
    };

    *text = Text::new(format!(
        "Bookshelf Controls:\n\
         Up/Down: Select parameter\n\
         Left/Right: Adjust\n\
         Space: Regenerate\n\
         R: Randomize config\n\
         C: Toggle constant seed ({})\n\
         \n\
         {}\n",
        seed, rows
    ));
}
