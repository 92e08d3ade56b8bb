//! The seam between a locomotion controller and whatever actually moves an entity
//!
//! A controller only ever talks to a [`Body`]. In the ECS that body is spread over a few plain
//! components ([`Grounded`], [`MovementCommand`], [`GravityDirection`], [`JumpIntent`]) so that
//! controllers and the physics crate never need to know about each other; [`BodyView`] stitches
//! them back together for the duration of one call.

use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_reflect::Reflect;

/// Everything a locomotion controller needs from the entity it drives
pub trait Body {
    /// true when the body rests on a supporting surface
    fn is_grounded(&self) -> bool;

    /// `direction` is a unit vector (or zero) and `speed` is the ceiling the body should move at
    /// this step
    fn apply_movement_command(&mut self, direction: Vec3, speed: f32);

    fn gravity_direction(&self) -> Vec3;

    fn set_gravity_direction(&mut self, direction: Vec3);

    fn begin_jump(&mut self);

    fn end_jump(&mut self);
}

/// The movement a controller requested for this frame. Written once per tick, read by whoever
/// moves the body.
#[derive(Debug, Component, Clone, Copy, Default, PartialEq, Reflect)]
pub struct MovementCommand {
    pub direction: Vec3,
    pub speed: f32,
}

impl MovementCommand {
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.direction * self.speed
    }
}

/// Reported by the body after it moves
#[derive(Debug, Component, Clone, Copy, Default, PartialEq, Eq, Deref, DerefMut, Reflect)]
pub struct Grounded(pub bool);

/// Unit vector gravity pulls along
#[derive(Debug, Component, Clone, Copy, PartialEq, Deref, DerefMut, Reflect)]
pub struct GravityDirection(pub Vec3);

impl Default for GravityDirection {
    fn default() -> Self {
        Self(Vec3::NEG_Y)
    }
}

/// Whether jump is currently held. The body launches whenever this is set while grounded.
#[derive(Debug, Component, Clone, Copy, Default, PartialEq, Eq, Deref, DerefMut, Reflect)]
pub struct JumpIntent(pub bool);

/// The components an entity needs to be driven by a locomotion controller
#[derive(Bundle, Debug, Default)]
pub struct BodyBundle {
    pub movement_command: MovementCommand,
    pub grounded: Grounded,
    pub gravity_direction: GravityDirection,
    pub jump_intent: JumpIntent,
}

/// Borrowed view of one entity's body components
pub struct BodyView<'a> {
    pub grounded: bool,
    pub movement_command: &'a mut MovementCommand,
    pub gravity_direction: &'a mut GravityDirection,
    pub jump_intent: &'a mut JumpIntent,
}

impl Body for BodyView<'_> {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn apply_movement_command(&mut self, direction: Vec3, speed: f32) {
        *self.movement_command = MovementCommand { direction, speed };
    }

    fn gravity_direction(&self) -> Vec3 {
        self.gravity_direction.0
    }

    fn set_gravity_direction(&mut self, direction: Vec3) {
        self.gravity_direction.0 = direction;
    }

    fn begin_jump(&mut self) {
        self.jump_intent.0 = true;
    }

    fn end_jump(&mut self) {
        self.jump_intent.0 = false;
    }
}
