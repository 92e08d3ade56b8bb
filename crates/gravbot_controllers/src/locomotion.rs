//! Velocity driven locomotion
//!
//! A [`LocomotionController`] keeps its own velocity rather than letting the body decide how fast
//! to walk. Input accelerates it, ground friction bleeds speed off (a lot more while braking), and
//! each tick the resulting heading and speed are handed to the [`Body`] as a movement command.

use bevy_ecs::prelude::Component;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::Reflect;

use gravbot_core::body::Body;
use gravbot_core::config::{ConfigError, LocomotionConfig, MovementBasis};
use gravbot_core::orientation::OrientationSource;
use gravbot_core::telemetry::{Telemetry, TelemetrySink};
use gravbot_core::utils;

/// Shrink `velocity` by `friction * delta_seconds` without changing its direction.
///
/// The magnitude floors at zero; friction can stop a body but never push it backwards. Negative
/// friction and negative time are treated as zero.
#[must_use]
pub fn apply_friction(velocity: Vec3, friction: f32, delta_seconds: f32) -> Vec3 {
    let friction = utils::non_negative(friction);
    let delta_seconds = utils::non_negative(delta_seconds);

    let (direction, magnitude) = utils::direction_and_magnitude(velocity);

    // zero, or too large to shrink by any finite amount
    if magnitude == 0. || !magnitude.is_finite() {
        return velocity;
    }

    let new_magnitude = (magnitude - friction * delta_seconds).max(0.);

    direction * new_magnitude
}

/// Motion state of one controlled entity.
///
/// `direction` and `speed` are a snapshot of `velocity` taken on the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct MotionState {
    pub velocity: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub is_braking: bool,
}

#[derive(Debug, Component, Clone, Default, Reflect)]
pub struct LocomotionController {
    state: MotionState,
    config: LocomotionConfig,
}

impl LocomotionController {
    /// A stationary controller. Out of range tuning is clamped where it is used.
    #[must_use]
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            state: MotionState::default(),
            config,
        }
    }

    /// # Errors
    /// If `config` fails [`LocomotionConfig::validate`]
    pub fn try_new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    /// Overwrite the velocity. `direction` and `speed` catch up on the next tick.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.state.velocity = velocity;
    }

    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.state.direction
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    #[must_use]
    pub fn is_braking(&self) -> bool {
        self.state.is_braking
    }

    #[must_use]
    pub fn wall_bounce_factor(&self) -> f32 {
        self.config.wall_bounce_factor
    }

    /// Accelerate along the view basis. Axes are not clamped and there is no top speed here; the
    /// body is expected to cap speed itself if it wants one.
    pub fn move_input(
        &mut self,
        orientation: &impl OrientationSource,
        right: f32,
        forward: f32,
        delta_seconds: f32,
    ) {
        let basis = self.config.movement_basis;

        let desired =
            orientation.forward_axis(basis) * forward + orientation.right_axis(basis) * right;

        let acceleration = utils::non_negative(self.config.acceleration);

        self.state.velocity += desired * acceleration * delta_seconds;
    }

    pub fn look_input(orientation: &mut impl OrientationSource, yaw: f32, pitch: f32) {
        orientation.add_yaw(yaw);
        orientation.add_pitch(pitch);
    }

    pub fn brake_start(&mut self) {
        self.state.is_braking = true;
    }

    pub fn brake_end(&mut self) {
        self.state.is_braking = false;
    }

    pub fn jump_start(body: &mut impl Body) {
        body.begin_jump();
    }

    pub fn jump_end(body: &mut impl Body) {
        body.end_jump();
    }

    /// Invert the body's gravity. Velocity is kept as is, so momentum carries through the flip.
    pub fn flip_gravity(body: &mut impl Body) {
        let flipped = -body.gravity_direction();

        debug!("flipping gravity to {flipped}");
        body.set_gravity_direction(flipped);
    }

    /// Reverse the last ticked heading, keeping `factor` of the last ticked speed.
    ///
    /// `factor` of 1 is a perfect reflection, 0 stops dead. Negative factors count as 0.
    pub fn wall_bounce(&mut self, factor: f32) {
        let factor = utils::non_negative(factor);
        let MotionState {
            direction, speed, ..
        } = self.state;

        self.state.velocity = -direction * speed * factor;
    }

    /// Point all current speed along the full view forward, dropping the old heading.
    pub fn realign_velocity(&mut self, orientation: &impl OrientationSource) {
        self.state.velocity = orientation.forward_axis(MovementBasis::Full) * self.state.speed;
    }

    /// Advance one simulation step. Must run after every input for the step has been applied.
    pub fn tick(
        &mut self,
        body: &mut impl Body,
        delta_seconds: f32,
        telemetry: &mut impl TelemetrySink,
    ) {
        let (_, magnitude) = utils::direction_and_magnitude(self.state.velocity);

        if !self.state.velocity.is_finite() || !magnitude.is_finite() {
            warn!(
                "velocity {} has no finite speed; stopping instead of propagating it",
                self.state.velocity
            );
            self.state.velocity = Vec3::ZERO;
        }

        if body.is_grounded() {
            let friction = if self.state.is_braking {
                self.config.friction_coefficient * self.config.braking_amplifier
            } else {
                self.config.friction_coefficient
            };

            self.state.velocity = apply_friction(self.state.velocity, friction, delta_seconds);

            if self.state.is_braking {
                telemetry.report(Telemetry::Braking {
                    speed: utils::direction_and_magnitude(self.state.velocity).1,
                });
            }
        }

        let (direction, speed) = utils::direction_and_magnitude(self.state.velocity);
        self.state.direction = direction;
        self.state.speed = speed;

        body.apply_movement_command(direction, speed);
    }
}
