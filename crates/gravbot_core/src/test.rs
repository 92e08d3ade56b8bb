//! Tests for core types

use bevy_math::Vec3;

use crate::body::{Body, BodyView, GravityDirection, JumpIntent, MovementCommand};
use crate::config::{ConfigError, LocomotionConfig, MovementBasis};
use crate::orientation::{OrientationSource, ViewRotation, PITCH_LIMIT};
use crate::telemetry::{DebugMessage, Telemetry};
use crate::utils;

const EPSILON: f32 = 1e-5;

#[test]
fn zero_vector_has_zero_direction() {
    let (direction, magnitude) = utils::direction_and_magnitude(Vec3::ZERO);

    assert_eq!(direction, Vec3::ZERO);
    assert_eq!(magnitude, 0.);
    assert!(!direction.is_nan());
}

#[test]
fn direction_and_magnitude_splits() {
    let (direction, magnitude) = utils::direction_and_magnitude(Vec3::new(0., 3., 4.));

    assert!((magnitude - 5.).abs() < EPSILON);
    assert!(direction.abs_diff_eq(Vec3::new(0., 0.6, 0.8), EPSILON));
}

#[test]
fn direction_survives_huge_components() {
    let (direction, magnitude) = utils::direction_and_magnitude(Vec3::new(0., 3e20, 4e20));

    assert!(direction.abs_diff_eq(Vec3::new(0., 0.6, 0.8), EPSILON));
    assert!(((magnitude - 5e20) / 5e20).abs() < EPSILON);
}

#[test]
fn non_finite_vector_has_infinite_magnitude() {
    let (direction, magnitude) = utils::direction_and_magnitude(Vec3::new(f32::NAN, 1., 0.));

    assert_eq!(direction, Vec3::ZERO);
    assert!(magnitude.is_infinite());
}

#[test]
fn non_negative_clamps_nan() {
    assert_eq!(utils::non_negative(-3.), 0.);
    assert_eq!(utils::non_negative(f32::NAN), 0.);
    assert_eq!(utils::non_negative(2.5), 2.5);
}

#[test]
fn default_config_is_valid() {
    let config = LocomotionConfig::default();

    assert_eq!(config.acceleration, 1000.);
    assert_eq!(config.friction_coefficient, 500.);
    assert_eq!(config.braking_amplifier, 100.);
    assert_eq!(config.wall_bounce_factor, 0.5);
    assert_eq!(config.movement_basis, MovementBasis::Full);
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_out_of_range() {
    assert_eq!(
        LocomotionConfig::default().with_acceleration(0.).validate(),
        Err(ConfigError::BadAcceleration(0.))
    );

    assert!(matches!(
        LocomotionConfig::default().with_friction(-1.).validate(),
        Err(ConfigError::Negative {
            field: "friction_coefficient",
            ..
        })
    ));

    assert!(matches!(
        LocomotionConfig::default()
            .with_wall_bounce_factor(f32::INFINITY)
            .validate(),
        Err(ConfigError::Negative {
            field: "wall_bounce_factor",
            ..
        })
    ));
}

#[test]
fn level_view_axes() {
    let view = ViewRotation::default();

    for basis in [MovementBasis::Full, MovementBasis::YawOnly] {
        assert!(view.forward_axis(basis).abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert!(view.right_axis(basis).abs_diff_eq(Vec3::X, EPSILON));
    }
}

#[test]
fn yaw_only_basis_ignores_pitch() {
    let view = ViewRotation::new(std::f32::consts::FRAC_PI_2, 0.5);

    let flat = view.forward_axis(MovementBasis::YawOnly);
    let full = view.forward_axis(MovementBasis::Full);

    // a quarter turn left puts forward along -X
    assert!(flat.abs_diff_eq(Vec3::NEG_X, EPSILON));
    assert!(full.y > 0.4, "looking up should tilt the full basis, got {full}");
    assert!((full.length() - 1.).abs() < EPSILON);
}

#[test]
fn pitch_is_clamped() {
    let mut view = ViewRotation::default();
    view.add_pitch(10.);
    assert_eq!(view.pitch, PITCH_LIMIT);

    view.add_pitch(-20.);
    assert_eq!(view.pitch, -PITCH_LIMIT);
}

#[test]
fn body_view_writes_components() {
    let mut command = MovementCommand::default();
    let mut gravity = GravityDirection::default();
    let mut jump = JumpIntent::default();

    let mut body = BodyView {
        grounded: true,
        movement_command: &mut command,
        gravity_direction: &mut gravity,
        jump_intent: &mut jump,
    };

    assert!(body.is_grounded());
    body.apply_movement_command(Vec3::X, 3.);
    body.set_gravity_direction(-body.gravity_direction());
    body.begin_jump();

    assert_eq!(command.velocity(), Vec3::new(3., 0., 0.));
    assert_eq!(gravity.0, Vec3::Y);
    assert!(jump.0);
}

#[test]
fn braking_telemetry_text() {
    let message = DebugMessage::from(Telemetry::Braking { speed: 10. });

    assert_eq!(message.text, "Braking");
    assert_eq!(message.display_seconds, 5.);
}
