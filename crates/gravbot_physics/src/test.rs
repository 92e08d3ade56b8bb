#![allow(clippy::unwrap_used)]

use bevy_app::prelude::*;
use bevy_core::Name;
use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_transform::prelude::*;

use gravbot_core::test_utils::DefaultTestPlugin;

use crate::{
    Arena, FallVelocity, GravityDirection, Grounded, JumpIntent, MovementCommand,
    PhysicsComponentBase, WallHit,
};

const HALF_EXTENT: f32 = 100.;

fn test_app(with_arena: bool) -> App {
    let mut app = App::new();

    app.add_plugins(DefaultTestPlugin);
    app.add_plugins(crate::PhysicsPlugin);

    if with_arena {
        app.insert_resource(Arena::new(Vec3::splat(HALF_EXTENT)));
    }

    app
}

fn spawn_body(app: &mut App, at: Vec3) -> Entity {
    app.world
        .spawn((
            Name::new("Body"),
            PhysicsComponentBase::default(),
            TransformBundle::from_transform(Transform::from_translation(at)),
        ))
        .id()
}

/// update until `done` holds, failing after five simulated seconds
fn run_until(app: &mut App, mut done: impl FnMut(&mut App) -> bool) {
    for _ in 0..300 {
        app.update();

        if done(app) {
            return;
        }
    }

    panic!("condition not reached after 300 frames");
}

fn grounded(app: &App, entity: Entity) -> bool {
    app.world.get::<Grounded>(entity).unwrap().0
}

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world.get::<Transform>(entity).unwrap().translation
}

#[test]
fn body_falls_to_the_floor() {
    let mut app = test_app(true);
    let body = spawn_body(&mut app, Vec3::new(0., 50., 0.));

    run_until(&mut app, |app| grounded(app, body));

    assert_eq!(translation(&app, body).y, -HALF_EXTENT);
    assert_eq!(app.world.get::<FallVelocity>(body).unwrap().y, 0.);

    // stays put once landed
    app.update();
    assert!(grounded(&app, body));
    assert_eq!(translation(&app, body).y, -HALF_EXTENT);
}

#[test]
fn flipped_gravity_lands_on_the_ceiling() {
    let mut app = test_app(true);
    let body = spawn_body(&mut app, Vec3::ZERO);

    run_until(&mut app, |app| grounded(app, body));

    app.world.get_mut::<GravityDirection>(body).unwrap().0 = Vec3::Y;
    app.update();
    assert!(!grounded(&app, body), "the old floor is now a ceiling");

    run_until(&mut app, |app| grounded(app, body));
    assert_eq!(translation(&app, body).y, HALF_EXTENT);
}

#[test]
fn jump_leaves_the_ground_and_comes_back() {
    let mut app = test_app(true);
    let body = spawn_body(&mut app, Vec3::new(0., -HALF_EXTENT, 0.));

    run_until(&mut app, |app| grounded(app, body));

    app.world.get_mut::<JumpIntent>(body).unwrap().0 = true;
    app.update();
    app.world.get_mut::<JumpIntent>(body).unwrap().0 = false;

    assert!(!grounded(&app, body));
    assert!(translation(&app, body).y > -HALF_EXTENT);

    run_until(&mut app, |app| grounded(app, body));
    assert_eq!(translation(&app, body).y, -HALF_EXTENT);
}

#[test]
fn running_into_a_wall_reports_it() {
    let mut app = test_app(true);
    let body = spawn_body(&mut app, Vec3::new(HALF_EXTENT - 5., -HALF_EXTENT, 0.));

    *app.world.get_mut::<MovementCommand>(body).unwrap() = MovementCommand {
        direction: Vec3::X,
        speed: 600.,
    };

    let mut reader = app.world.resource::<Events<WallHit>>().get_reader();
    let mut hits = Vec::new();

    run_until(&mut app, |app| {
        let events = app.world.resource::<Events<WallHit>>();
        hits.extend(reader.iter(events).copied());
        !hits.is_empty()
    });

    assert_eq!(hits[0], WallHit {
        entity: body,
        normal: Vec3::X,
    });
    assert_eq!(translation(&app, body).x, HALF_EXTENT);
}

#[test]
fn no_arena_never_grounds() {
    let mut app = test_app(false);
    let body = spawn_body(&mut app, Vec3::ZERO);

    for _ in 0..10 {
        app.update();
    }

    assert!(!grounded(&app, body));
    assert!(translation(&app, body).y < 0.);
}
