use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_time::Time;
use bevy_transform::prelude::*;

use crate::{FallVelocity, GravityDirection, Grounded, JumpIntent, MovementCommand};

/// Move every body by its movement command plus whatever gravity and jumping add.
///
/// Grounded state is the one from last frame's containment; this frame's is only known once
/// [`super::arena::contain_bodies`] has run.
pub(super) fn integrate_bodies(
    mut bodies: Query<(
        &mut Transform,
        &MovementCommand,
        &GravityDirection,
        &JumpIntent,
        &mut Grounded,
        &mut FallVelocity,
    )>,
    time: Res<Time>,
) {
    let delta_seconds = time.delta_seconds();

    for (mut transform, command, gravity, jump, mut grounded, mut fall_velocity) in &mut bodies {
        let gravity = gravity.normalize_or_zero();

        if grounded.0 && jump.0 {
            trace!("launching jump at {}", transform.translation);
            fall_velocity.0 = -gravity * super::JUMP_VELOCITY;
            grounded.0 = false;
        } else if !grounded.0 {
            fall_velocity.0 += gravity * super::GRAVITY * delta_seconds;
        }

        transform.translation += (command.velocity() + fall_velocity.0) * delta_seconds;

        debug_assert!(transform.translation.is_finite());
    }
}
