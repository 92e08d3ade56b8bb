//! Core vocabulary shared by every gravbot crate
//!
//! This includes the system sets, the body and orientation seams the locomotion controller talks
//! trough, configuration, and telemetry.
//!
//! Almost every other crate will depend on this crate.

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

pub use thiserror;

pub mod body;
pub mod config;
pub mod orientation;
pub mod system_sets;
pub mod telemetry;

pub mod utils;

pub use system_sets::PhysicsSet;

#[cfg(test)]
mod test;

fn register_types(type_registry: bevy_ecs::prelude::Res<bevy_ecs::prelude::AppTypeRegistry>) {
    use bevy_reflect::GetTypeRegistration;

    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(body::MovementCommand::get_type_registration());
    type_registry_w.add_registration(body::Grounded::get_type_registration());
    type_registry_w.add_registration(body::GravityDirection::get_type_registration());
    type_registry_w.add_registration(body::JumpIntent::get_type_registration());
}

/// set up core system sets, events, and type registrations
pub struct CorePlugin;

impl bevy_app::Plugin for CorePlugin {
    fn build(&self, app: &mut bevy_app::App) {
        #[allow(clippy::enum_glob_use)]
        use self::system_sets::PhysicsSet::*;
        use bevy_app::prelude::*;
        use bevy_ecs::schedule::IntoSystemSetConfigs;
        app.configure_sets(Update, (Input, Velocity, Movement, Completed).chain())
            .add_event::<telemetry::DebugMessage>()
            .add_systems(Startup, register_types);
    }
}

/// A plugin that sets up things that nearly every system expects to exist, for quick test setup
pub mod test_utils {
    use std::time::Duration;

    use bevy_app::prelude::*;
    use bevy_core::Name;
    use bevy_ecs::prelude::*;
    use bevy_log::prelude::*;
    use bevy_time::TimeUpdateStrategy;
    use bevy_transform::prelude::*;

    /// Length of every simulated frame under [`DefaultTestPlugin`]
    pub const TEST_FRAME: Duration = Duration::from_millis(16);

    pub struct DefaultTestPlugin;

    impl Plugin for DefaultTestPlugin {
        fn build(&self, app: &mut App) {
            // system to log location of every named entity when it moves
            app.add_systems(
                Last,
                |q: Query<
                    (&GlobalTransform, &Name),
                    Or<(Changed<GlobalTransform>, Added<GlobalTransform>)>,
                >| {
                    q.iter().for_each(|e| {
                        debug!("`{}` moved to {}", e.1.to_string(), e.0.translation());
                    });
                },
            );

            // almost every system assumes these plugins are present
            app.add_plugins(bevy_log::LogPlugin::default())
                .add_plugins(bevy_time::TimePlugin)
                .add_plugins(bevy_transform::TransformPlugin)
                .add_plugins(super::CorePlugin);

            // wall clock time makes tests flaky, so every frame is the same length
            app.insert_resource(TimeUpdateStrategy::ManualDuration(TEST_FRAME));
        }
    }
}
