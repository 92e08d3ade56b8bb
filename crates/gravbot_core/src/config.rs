//! Tuning for the locomotion controller
//!
//! A [`LocomotionConfig`] is handed to a controller when its entity spawns and is not changed by
//! the controller afterwards. It derives [`Reflect`] so the developer inspector can show it.

use bevy_reflect::Reflect;
use thiserror::Error;

/// Which rotation axes of the view feed the movement basis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum MovementBasis {
    /// forward and right follow the full pitch + yaw rotation, so looking up while moving forward
    /// climbs
    #[default]
    Full,
    /// forward and right only follow yaw, so movement stays in the horizontal plane
    YawOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LocomotionConfig {
    /// input-to-velocity gain, in units per second squared at full input
    pub acceleration: f32,
    /// speed lost per second while grounded
    pub friction_coefficient: f32,
    /// multiplier on `friction_coefficient` while braking
    pub braking_amplifier: f32,
    /// fraction of speed kept (and reversed) by a wall bounce
    pub wall_bounce_factor: f32,
    pub movement_basis: MovementBasis,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            acceleration: 1000.,
            friction_coefficient: 500.,
            braking_amplifier: 100.,
            wall_bounce_factor: 0.5,
            movement_basis: MovementBasis::Full,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("acceleration must be positive and finite, got {0}")]
    BadAcceleration(f32),
    #[error("`{field}` must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
}

impl LocomotionConfig {
    #[must_use]
    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    #[must_use]
    pub fn with_friction(mut self, friction_coefficient: f32) -> Self {
        self.friction_coefficient = friction_coefficient;
        self
    }

    #[must_use]
    pub fn with_braking_amplifier(mut self, braking_amplifier: f32) -> Self {
        self.braking_amplifier = braking_amplifier;
        self
    }

    #[must_use]
    pub fn with_wall_bounce_factor(mut self, wall_bounce_factor: f32) -> Self {
        self.wall_bounce_factor = wall_bounce_factor;
        self
    }

    #[must_use]
    pub fn with_movement_basis(mut self, movement_basis: MovementBasis) -> Self {
        self.movement_basis = movement_basis;
        self
    }

    /// Check every field is in range.
    ///
    /// # Errors
    /// Returns the first field found out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.acceleration.is_finite() && self.acceleration > 0.) {
            return Err(ConfigError::BadAcceleration(self.acceleration));
        }

        for (field, value) in [
            ("friction_coefficient", self.friction_coefficient),
            ("braking_amplifier", self.braking_amplifier),
            ("wall_bounce_factor", self.wall_bounce_factor),
        ] {
            if !(value.is_finite() && value >= 0.) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }
}
