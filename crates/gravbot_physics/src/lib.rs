//! A small kinematic body for velocity driven characters
//!
//! This is not a collision engine. It moves bodies by the [`MovementCommand`] their controller
//! published, pulls them along their own [`GravityDirection`], launches jumps, and keeps them inside
//! an [`arena::Arena`], which is also where grounded state and wall hits come from.
//!
//! Any system that wants to use the results of a physics update should not run until after
//! [`PhysicsSet::Movement`] has been completed.

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

use bevy_app::prelude::*;
use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_reflect::{GetTypeRegistration, Reflect};

pub use gravbot_core::body::{BodyBundle, GravityDirection, Grounded, JumpIntent, MovementCommand};
pub use gravbot_core::PhysicsSet;

pub use arena::{Arena, WallHit};

pub mod arena;
pub mod movement;

#[cfg(test)]
mod test;

/// Acceleration due to gravity, in units per second squared
pub const GRAVITY: f32 = 980.;

/// Launch speed of a jump, against gravity
pub const JUMP_VELOCITY: f32 = 500.;

/// Velocity gained from gravity and jumps. Kept apart from the controller's velocity, which only
/// ever arrives trough the [`MovementCommand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Component, Deref, DerefMut, Reflect)]
pub struct FallVelocity(pub Vec3);

/// The components necessary for the physics engine to move an entity.
///
/// You must provide a transform yourself in order to get movement, in order to stay compatible
/// with other bundles.
#[derive(Bundle, Debug, Default)]
pub struct PhysicsComponentBase {
    pub body: BodyBundle,
    pub fall_velocity: FallVelocity,
}

fn startup(type_registry: Res<AppTypeRegistry>) {
    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(FallVelocity::get_type_registration());
    type_registry_w.add_registration(Arena::get_type_registration());
}

/// A plugin to setup essential physics systems
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WallHit>()
            .add_systems(Startup, startup)
            .add_systems(
                Update,
                (movement::integrate_bodies, arena::contain_bodies)
                    .chain()
                    .in_set(PhysicsSet::Movement),
            );
    }
}
