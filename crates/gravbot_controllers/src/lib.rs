//! Controllers for the player character
//!
//! Input never touches a [`LocomotionController`] directly. It is sent as a [`LocomotionEvent`],
//! all events for a frame are applied in [`PhysicsSet::Input`], and then every controller ticks
//! once in [`PhysicsSet::Velocity`]. The final output of a controller is a
//! [`gravbot_core::body::MovementCommand`] for the physics crate to act on.

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

use bevy_app::{App, Startup, Update};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::GetTypeRegistration;
use bevy_time::Time;

use gravbot_core::body::{BodyView, GravityDirection, Grounded, JumpIntent, MovementCommand};
use gravbot_core::orientation::ViewRotation;
use gravbot_core::telemetry::DebugMessage;
use gravbot_core::PhysicsSet;

pub use locomotion::{apply_friction, LocomotionController, MotionState};

pub mod locomotion;
pub mod player;


/// One verb for a controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionInput {
    Move { right: f32, forward: f32 },
    Look { yaw: f32, pitch: f32 },
    BrakeStart,
    BrakeEnd,
    JumpStart,
    JumpEnd,
    FlipGravity,
    /// `None` bounces with the controller's configured factor
    WallBounce(Option<f32>),
    Realign,
    SetVelocity(Vec3),
}

/// Input addressed to the controller on `entity`
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionEvent {
    pub entity: Entity,
    pub input: LocomotionInput,
}

impl LocomotionEvent {
    #[must_use]
    pub fn new(entity: Entity, input: LocomotionInput) -> Self {
        Self { entity, input }
    }
}

/// The components a controlled entity carries on top of a
/// [`gravbot_core::body::BodyBundle`]
#[derive(Bundle, Debug, Default)]
pub struct LocomotionBundle {
    pub controller: LocomotionController,
    pub view_rotation: ViewRotation,
}

/// Apply every pending [`LocomotionEvent`], in the order they were sent.
fn apply_locomotion_events(
    mut events: EventReader<LocomotionEvent>,
    mut controllers: Query<(
        &mut LocomotionController,
        &mut ViewRotation,
        &Grounded,
        &mut MovementCommand,
        &mut GravityDirection,
        &mut JumpIntent,
    )>,
    time: Res<Time>,
) {
    let delta_seconds = time.delta_seconds();

    for event in events.iter() {
        let Ok((
            mut controller,
            mut view_rotation,
            grounded,
            mut movement_command,
            mut gravity_direction,
            mut jump_intent,
        )) = controllers.get_mut(event.entity)
        else {
            warn!(
                "dropping {:?}: {:?} has no locomotion controller",
                event.input, event.entity
            );
            continue;
        };

        trace!("applying {:?} to {:?}", event.input, event.entity);

        let mut body = BodyView {
            grounded: grounded.0,
            movement_command: &mut *movement_command,
            gravity_direction: &mut *gravity_direction,
            jump_intent: &mut *jump_intent,
        };

        match event.input {
            LocomotionInput::Move { right, forward } => {
                controller.move_input(&*view_rotation, right, forward, delta_seconds);
            }
            LocomotionInput::Look { yaw, pitch } => {
                LocomotionController::look_input(&mut *view_rotation, yaw, pitch);
            }
            LocomotionInput::BrakeStart => controller.brake_start(),
            LocomotionInput::BrakeEnd => controller.brake_end(),
            LocomotionInput::JumpStart => LocomotionController::jump_start(&mut body),
            LocomotionInput::JumpEnd => LocomotionController::jump_end(&mut body),
            LocomotionInput::FlipGravity => LocomotionController::flip_gravity(&mut body),
            LocomotionInput::WallBounce(factor) => {
                let factor = factor.unwrap_or_else(|| controller.wall_bounce_factor());
                controller.wall_bounce(factor);
            }
            LocomotionInput::Realign => controller.realign_velocity(&*view_rotation),
            LocomotionInput::SetVelocity(velocity) => controller.set_velocity(velocity),
        }
    }
}

/// Tick every controller once and publish its movement command
fn tick_locomotion(
    mut controllers: Query<(
        &mut LocomotionController,
        &Grounded,
        &mut MovementCommand,
        &mut GravityDirection,
        &mut JumpIntent,
    )>,
    mut debug_messages: EventWriter<DebugMessage>,
    time: Res<Time>,
) {
    let delta_seconds = time.delta_seconds();

    for (mut controller, grounded, mut movement_command, mut gravity_direction, mut jump_intent) in
        &mut controllers
    {
        let mut body = BodyView {
            grounded: grounded.0,
            movement_command: &mut *movement_command,
            gravity_direction: &mut *gravity_direction,
            jump_intent: &mut *jump_intent,
        };

        controller.tick(&mut body, delta_seconds, &mut debug_messages);
    }
}

fn register_types(type_registry: Res<AppTypeRegistry>) {
    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(LocomotionController::get_type_registration());
    type_registry_w.add_registration(MotionState::get_type_registration());
    type_registry_w.add_registration(
        gravbot_core::config::LocomotionConfig::get_type_registration(),
    );
    type_registry_w.add_registration(
        gravbot_core::config::MovementBasis::get_type_registration(),
    );
    type_registry_w.add_registration(ViewRotation::get_type_registration());
}

pub struct Plugin;
impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LocomotionEvent>()
            .add_event::<DebugMessage>()
            .add_systems(Startup, register_types)
            .add_systems(
                Update,
                (player::read_player_input, apply_locomotion_events)
                    .chain()
                    .in_set(PhysicsSet::Input),
            )
            .add_systems(Update, tick_locomotion.in_set(PhysicsSet::Velocity));
    }
}
