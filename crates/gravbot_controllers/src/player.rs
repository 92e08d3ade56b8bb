use bevy_ecs::prelude::*;
use bevy_input::{keyboard::KeyCode, mouse::MouseMotion, Input};
use bevy_log::prelude::*;
use bevy_math::Vec2;

use super::{LocomotionEvent, LocomotionInput};

/// Radians turned per pixel of mouse motion
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// A marker for an entity controlled as a player
#[derive(Component, Default)]
pub struct Controller();

#[derive(Bundle, Default)]
pub struct PlayerControllerBundle {
    pub locomotion: super::LocomotionBundle,
    pub controller: Controller,
}

/// Turn held movement keys into (right, forward) axes
#[must_use]
pub fn movement_axes(keys: &Input<KeyCode>) -> Vec2 {
    let axis = |positive, negative| {
        f32::from(u8::from(keys.pressed(positive))) - f32::from(u8::from(keys.pressed(negative)))
    };

    Vec2::new(axis(KeyCode::D, KeyCode::A), axis(KeyCode::W, KeyCode::S))
}

/// Handle keyboard and mouse input for every player controlled entity.
pub(super) fn read_player_input(
    keys: Res<Input<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    players: Query<Entity, With<Controller>>,
    mut locomotion_events: EventWriter<LocomotionEvent>,
) {
    let look = mouse_motion
        .iter()
        .fold(Vec2::ZERO, |acc, motion| acc + motion.delta);

    let axes = movement_axes(&keys);

    // press/release pairs, same as any other held action
    let held_actions = [
        (
            KeyCode::Space,
            LocomotionInput::JumpStart,
            LocomotionInput::JumpEnd,
        ),
        (
            KeyCode::ShiftLeft,
            LocomotionInput::BrakeStart,
            LocomotionInput::BrakeEnd,
        ),
    ];

    for player in &players {
        let mut send = |input| locomotion_events.send(LocomotionEvent::new(player, input));

        if axes != Vec2::ZERO {
            send(LocomotionInput::Move {
                right: axes.x,
                forward: axes.y,
            });
        }

        if look != Vec2::ZERO {
            send(LocomotionInput::Look {
                yaw: -look.x * MOUSE_SENSITIVITY,
                pitch: -look.y * MOUSE_SENSITIVITY,
            });
        }

        for (key, start, end) in held_actions {
            if keys.just_pressed(key) {
                send(start);
            }
            if keys.just_released(key) {
                send(end);
            }
        }

        if keys.just_pressed(KeyCode::F) {
            send(LocomotionInput::FlipGravity);
        }

        if keys.just_pressed(KeyCode::R) {
            debug!("realigning {player:?} to view");
            send(LocomotionInput::Realign);
        }
    }
}
