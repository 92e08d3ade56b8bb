use bevy::{
    prelude::*,
    window::{CursorGrabMode, PrimaryWindow},
};

use gravbot_controllers::player::Controller;
use gravbot_core::{config::MovementBasis, orientation::ViewRotation, PhysicsSet};

/// Distance the camera sits behind the player
pub const BOOM_LENGTH: f32 = 400.;

/// A marker for the camera that trails the player
#[derive(Component, Default)]
pub struct FollowCamera();

fn spawn_camera(mut commands: Commands, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0., 0., BOOM_LENGTH),
            ..default()
        },
        FollowCamera(),
        Name::new("Follow Camera"),
    ));

    // mouse look needs the cursor kept in the window
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor.grab_mode = CursorGrabMode::Locked;
        window.cursor.visible = false;
    }
}

/// Put the camera on the end of a boom behind the player, along the player's view
fn follow_player(
    player: Query<(&Transform, &ViewRotation), (With<Controller>, Without<FollowCamera>)>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok((player_transform, view)) = player.get_single() else {
        return;
    };

    let target = player_transform.translation;
    let boom = view.rotation(MovementBasis::Full) * Vec3::Z * BOOM_LENGTH;

    for mut camera in &mut cameras {
        *camera = Transform::from_translation(target + boom).looking_at(target, Vec3::Y);
    }
}

pub(super) struct Plugin;
impl bevy::prelude::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, follow_player.after(PhysicsSet::Completed));
    }
}
