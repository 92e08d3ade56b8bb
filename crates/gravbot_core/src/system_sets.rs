//! System sets use externally between crates

use bevy_ecs::prelude::SystemSet;

#[derive(SystemSet, Hash, Debug, Clone, Eq, PartialEq)]
/// Every locomotion input for a frame must be applied in [`PhysicsSet::Input`]; controllers tick
/// exactly once per frame in [`PhysicsSet::Velocity`], after all input has landed.
///
/// Bodies consume the resulting movement commands in [`PhysicsSet::Movement`]. If wanting to use
/// newly updated locations or grounded state, run after [`PhysicsSet::Movement`]
pub enum PhysicsSet {
    Input,
    Velocity,
    Movement,
    Completed,
}
