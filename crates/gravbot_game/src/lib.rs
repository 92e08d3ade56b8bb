#![warn(clippy::unwrap_used)]
#![warn(clippy::perf, clippy::disallowed_types)] // performance warns
#![warn(clippy::pedantic)]
// most bevy systems violate these. Nothing I can do about it at the moment.
#![allow(
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::needless_pass_by_value // TODO: separate out system functions from non-system
)]
#![allow(clippy::cast_possible_truncation)]

#[cfg(feature = "fps-diagnostics")]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
#[cfg(feature = "developer-tools")]
use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "developer-tools")]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use gravbot_controllers::{
    player::PlayerControllerBundle, LocomotionBundle, LocomotionController, LocomotionEvent,
    LocomotionInput,
};
use gravbot_core::{config::LocomotionConfig, PhysicsSet};
use gravbot_physics::{Arena, PhysicsComponentBase, PhysicsPlugin, WallHit};

mod camera;
mod debug_text;

/// Half the size of the box the player is kept in
const ARENA_HALF_EXTENTS: Vec3 = Vec3::new(2000., 600., 2000.);

/// Capsule radius and half height of the player
const PLAYER_RADIUS: f32 = 42.;
const PLAYER_HALF_HEIGHT: f32 = 96.;

/// the bundle for spawning a player character
#[derive(Bundle)]
struct PlayerBundle {
    pbr: PbrBundle,
    physics_component: PhysicsComponentBase,
    player_controller_bundle: PlayerControllerBundle,
    name: Name,
}

#[cfg(feature = "developer-tools")]
fn quit_on_eq(mut exit: EventWriter<AppExit>, keys: Res<Input<KeyCode>>) {
    if keys.pressed(KeyCode::Equals) {
        exit.send_default();
    }
}

/// Walls reflect whoever runs into them, with that controller's own bounce factor
fn bounce_off_walls(
    mut wall_hits: EventReader<WallHit>,
    mut locomotion_events: EventWriter<LocomotionEvent>,
) {
    for hit in wall_hits.iter() {
        locomotion_events.send(LocomotionEvent::new(
            hit.entity,
            LocomotionInput::WallBounce(None),
        ));
    }
}

pub fn run_game() {
    let mut app = App::new();

    // bevy plugins
    app.add_plugins(DefaultPlugins);

    #[cfg(feature = "fps-diagnostics")]
    app.add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()));

    #[cfg(feature = "developer-tools")]
    app.add_plugins(WorldInspectorPlugin::new());

    // our plugins
    app.add_plugins((
        gravbot_core::CorePlugin,
        PhysicsPlugin,
        gravbot_controllers::Plugin,
        camera::Plugin,
        debug_text::Plugin,
    ));

    trace!("setting up resources, adding startup systems");
    app.insert_resource(ClearColor(Color::BLACK))
        // bodies are contained by their center, so pull the walls in by the capsule size
        .insert_resource(Arena::new(
            ARENA_HALF_EXTENTS - Vec3::new(PLAYER_RADIUS, PLAYER_HALF_HEIGHT, PLAYER_RADIUS),
        ))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 0.3,
        })
        .add_systems(Startup, setup)
        .add_systems(Update, bounce_off_walls.in_set(PhysicsSet::Completed));

    #[cfg(feature = "developer-tools")]
    app.add_systems(Update, quit_on_eq);

    trace!("Running app");
    app.run();
}

/// spawn the arena, a light, and the player
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let wall_material = materials.add(Color::rgb(0.3, 0.3, 0.35).into());
    let thickness = 10.;

    // one slab per face, pushed out so the inside of the box is exactly the arena
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        let size = ARENA_HALF_EXTENTS * 2. * (Vec3::ONE - axis) + axis * thickness;
        let offset = ARENA_HALF_EXTENTS * axis + axis * (thickness / 2.);

        for side in [1., -1.] {
            commands.spawn((
                PbrBundle {
                    mesh: meshes.add(Mesh::from(shape::Box::new(size.x, size.y, size.z))),
                    material: wall_material.clone(),
                    transform: Transform::from_translation(offset * side),
                    ..default()
                },
                Name::new("Arena Face"),
            ));
        }
    }

    commands.spawn((
        PointLightBundle {
            point_light: PointLight {
                intensity: 4_000_000.,
                range: 5000.,
                ..default()
            },
            ..default()
        },
        Name::new("Light"),
    ));

    let controller = LocomotionController::try_new(LocomotionConfig::default())
        .unwrap_or_else(|error| {
            error!("bad locomotion config, falling back to defaults: {error}");
            LocomotionController::default()
        });

    // player
    commands.spawn(PlayerBundle {
        pbr: PbrBundle {
            mesh: meshes.add(Mesh::from(shape::Capsule {
                radius: PLAYER_RADIUS,
                depth: (PLAYER_HALF_HEIGHT - PLAYER_RADIUS) * 2.,
                ..default()
            })),
            material: materials.add(Color::rgb(0.9, 0.5, 0.1).into()),
            transform: Transform::from_xyz(0., 0., 0.),
            ..default()
        },
        physics_component: PhysicsComponentBase::default(),
        player_controller_bundle: PlayerControllerBundle {
            locomotion: LocomotionBundle {
                controller,
                ..default()
            },
            ..default()
        },
        name: Name::new("Player"),
    });
}
