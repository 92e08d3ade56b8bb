//! Where the player is looking, and how that turns into a movement basis
//!
//! Coordinates are y-up with -Z forward, the same as bevy's cameras.

use bevy_ecs::prelude::Component;
use bevy_math::{EulerRot, Quat, Vec3};
use bevy_reflect::Reflect;

use crate::config::MovementBasis;

/// Pitch stays just short of straight up/down so the basis never degenerates
pub const PITCH_LIMIT: f32 = 89. * std::f32::consts::PI / 180.;

/// Anything that can turn 2d input into world space directions
pub trait OrientationSource {
    fn forward_axis(&self, basis: MovementBasis) -> Vec3;

    fn right_axis(&self, basis: MovementBasis) -> Vec3;

    fn add_yaw(&mut self, delta: f32);

    fn add_pitch(&mut self, delta: f32);
}

/// The view rotation of a controlled entity, in radians
#[derive(Debug, Component, Clone, Copy, Default, PartialEq, Reflect)]
pub struct ViewRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl ViewRotation {
    #[must_use]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    #[must_use]
    pub fn rotation(&self, basis: MovementBasis) -> Quat {
        match basis {
            MovementBasis::Full => Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.),
            MovementBasis::YawOnly => Quat::from_rotation_y(self.yaw),
        }
    }
}

impl OrientationSource for ViewRotation {
    fn forward_axis(&self, basis: MovementBasis) -> Vec3 {
        self.rotation(basis) * Vec3::NEG_Z
    }

    fn right_axis(&self, basis: MovementBasis) -> Vec3 {
        self.rotation(basis) * Vec3::X
    }

    fn add_yaw(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(std::f32::consts::TAU);
    }

    fn add_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}
