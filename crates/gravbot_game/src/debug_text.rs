//! On screen debug text, fed by [`DebugMessage`] events
//!
//! Each message is a line of green text that disappears after its display time. Sending the same
//! text again while it is up restarts its timer rather than adding another line.

use bevy::prelude::*;

use gravbot_core::{telemetry::DebugMessage, PhysicsSet};

const FONT_SIZE: f32 = 20.;

#[derive(Component, Debug)]
struct DebugLine {
    text: String,
    timer: Timer,
}

/// The node debug lines are stacked in
#[derive(Resource, Deref)]
struct DebugTextRoot(Entity);

fn setup_debug_text(mut commands: Commands) {
    let root = commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(8.),
                    top: Val::Px(8.),
                    flex_direction: FlexDirection::Column,
                    ..default()
                },
                ..default()
            },
            Name::new("Debug Text"),
        ))
        .id();

    commands.insert_resource(DebugTextRoot(root));
}

fn show_debug_messages(
    mut commands: Commands,
    mut messages: EventReader<DebugMessage>,
    mut lines: Query<&mut DebugLine>,
    root: Res<DebugTextRoot>,
) {
    // lines spawned this frame don't show up in `lines` yet
    let mut spawned: Vec<&str> = Vec::new();

    for message in messages.iter() {
        let timer = Timer::from_seconds(message.display_seconds, TimerMode::Once);

        if let Some(mut line) = lines.iter_mut().find(|line| line.text == message.text) {
            line.timer = timer;
            continue;
        }

        if spawned.contains(&message.text.as_str()) {
            continue;
        }
        spawned.push(&message.text);

        commands.entity(**root).with_children(|parent| {
            parent.spawn((
                TextBundle::from_section(
                    message.text.clone(),
                    TextStyle {
                        font_size: FONT_SIZE,
                        color: Color::GREEN,
                        ..default()
                    },
                ),
                DebugLine {
                    text: message.text.clone(),
                    timer,
                },
            ));
        });
    }
}

fn expire_debug_lines(
    mut commands: Commands,
    mut lines: Query<(Entity, &mut DebugLine)>,
    time: Res<Time>,
) {
    for (entity, mut line) in &mut lines {
        if line.timer.tick(time.delta()).finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

pub(super) struct Plugin;
impl bevy::prelude::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_debug_text).add_systems(
            Update,
            (show_debug_messages, expire_debug_lines)
                .chain()
                .after(PhysicsSet::Velocity),
        );
    }
}
