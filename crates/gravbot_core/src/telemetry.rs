//! Optional debug output from controllers
//!
//! Controllers report what they are doing to a [`TelemetrySink`]. Nothing about movement depends
//! on a sink being present; `()` discards everything.

use std::fmt;

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;

/// Something a controller wants a developer to see
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Telemetry {
    /// the brake is being applied on the ground this tick
    Braking { speed: f32 },
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Telemetry::Braking { .. } => write!(f, "Braking"),
        }
    }
}

pub trait TelemetrySink {
    fn report(&mut self, telemetry: Telemetry);
}

impl TelemetrySink for () {
    fn report(&mut self, _telemetry: Telemetry) {}
}

/// How long a [`DebugMessage`] stays up by default
pub const DEBUG_MESSAGE_SECONDS: f32 = 5.;

/// A line of text for whatever on screen debug display the app has
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DebugMessage {
    pub text: String,
    pub display_seconds: f32,
}

impl From<Telemetry> for DebugMessage {
    fn from(telemetry: Telemetry) -> Self {
        Self {
            text: telemetry.to_string(),
            display_seconds: DEBUG_MESSAGE_SECONDS,
        }
    }
}

impl TelemetrySink for EventWriter<'_, DebugMessage> {
    fn report(&mut self, telemetry: Telemetry) {
        debug!("{telemetry:?}");
        self.send(telemetry.into());
    }
}

/// Collects reports in memory
impl TelemetrySink for Vec<Telemetry> {
    fn report(&mut self, telemetry: Telemetry) {
        self.push(telemetry);
    }
}
