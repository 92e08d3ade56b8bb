//! The box every body lives in
//!
//! Which face counts as the floor depends on the body's own gravity, so flipping gravity turns
//! the ceiling into the floor without anything here knowing about it.

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::Vec3;
use bevy_reflect::Reflect;
use bevy_transform::prelude::*;

use crate::{FallVelocity, GravityDirection, Grounded, MovementCommand};

/// How closely a face normal has to line up with gravity to be the floor. Anything closer to
/// perpendicular is a wall.
const FLOOR_ALIGNMENT: f32 = 0.5;

/// An axis aligned box centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Resource, Reflect)]
pub struct Arena {
    pub half_extents: Vec3,
}

impl Arena {
    #[must_use]
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            half_extents: half_extents.abs(),
        }
    }
}

/// Sent when a body runs into a wall while heading into it
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub entity: Entity,
    /// outward normal of the wall that was hit
    pub normal: Vec3,
}

/// remove the part of `velocity` heading trough a face with outward `normal`
fn stop_into(velocity: Vec3, normal: Vec3) -> Vec3 {
    let into = velocity.dot(normal);

    if into > 0. {
        velocity - normal * into
    } else {
        velocity
    }
}

/// Clamp bodies into the [`Arena`], deciding if they are grounded and reporting wall hits.
///
/// Bodies are never grounded when there is no arena.
pub(super) fn contain_bodies(
    mut bodies: Query<(
        Entity,
        &mut Transform,
        &MovementCommand,
        &GravityDirection,
        &mut Grounded,
        &mut FallVelocity,
    )>,
    arena: Option<Res<Arena>>,
    mut wall_hits: EventWriter<WallHit>,
) {
    let Some(arena) = arena else { return };

    for (entity, mut transform, command, gravity, mut grounded, mut fall_velocity) in &mut bodies {
        let gravity = gravity.normalize_or_zero();
        let mut on_floor = false;

        for (index, axis) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().enumerate() {
            let extent = arena.half_extents[index];
            let position = transform.translation[index];

            let normal = if position >= extent {
                axis
            } else if position <= -extent {
                -axis
            } else {
                continue;
            };

            transform.translation[index] = position.clamp(-extent, extent);
            fall_velocity.0 = stop_into(fall_velocity.0, normal);

            let alignment = normal.dot(gravity);

            if alignment > FLOOR_ALIGNMENT {
                on_floor = true;
            } else if alignment.abs() < FLOOR_ALIGNMENT && command.velocity().dot(normal) > 0. {
                debug!("{entity:?} hit the wall facing {normal}");
                wall_hits.send(WallHit { entity, normal });
            }
        }

        if grounded.0 != on_floor {
            trace!("{entity:?} grounded = {on_floor}");
            grounded.0 = on_floor;
        }
    }
}
