//! Integration tests for arcade-vehicle
//!
//! Drives full controller lifecycles against a recording body: activation,
//! countdown, hand-off, per-scheme actuation, tuning and restart.

use arcade_interfaces::{FrameId, NeutralInput, WheelId};
use arcade_test_helpers::prelude::*;
use arcade_vehicle::WheelLayoutProfile;
use arcade_vehicle::prelude::*;
use glam::{Quat, Vec3};

const DT: f32 = 0.02;

fn build(profile: VehicleProfile) -> VehicleController {
    VehicleController::new(must(profile.validate()))
}

fn with_scheme(scheme: ControlScheme) -> VehicleProfile {
    VehicleProfile {
        scheme,
        ..VehicleProfile::default()
    }
}

fn tick(frame: u64) -> TickContext {
    TickContext::new(FrameId(frame), DT)
}

fn brake_wheels(body: &RecordingBody) -> Vec<u16> {
    body.writes_to(WheelChannel::Brake)
        .iter()
        .map(|write| write.wheel.0)
        .collect()
}

#[test]
fn countdown_then_release_lifecycle() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Scripted)?;

    let mut input = ScriptedInput::new()
        .with_axis("Throttle", 1.0)
        .with_axis("Horizontal", 0.5)
        .with_axis("Brake", 1.0);

    body.clear();
    for frame in 1..=10 {
        vehicle.frame_tick(&input, 0.016)?;
        let report = vehicle.fixed_tick(&mut body, &input, tick(frame))?;
        assert_eq!(report.authority, Authority::Scripted);
        assert_eq!(report.intent.steer(), 0.0);
        assert_eq!(report.intent.brake(), 0.0);
        assert_approx_eq!(body.velocity.length(), 30.0 / 3.6, 1e-4);
    }
    assert!(body.writes().is_empty());
    assert_eq!(body.velocity_writes().len(), 10);
    assert_eq!(input.reads(), 0);

    assert!(vehicle.set_player_authority(true));
    body.clear();
    input.set_axis("Brake", 0.0);

    let report = vehicle.fixed_tick(&mut body, &input, tick(11))?;
    assert_eq!(report.authority, Authority::Player);
    assert!(input.reads() > 0);
    assert!(body.velocity_writes().is_empty());
    assert_eq!(report.intent.throttle(), 1.0);
    assert_approx_eq!(report.steer_angle, 15.0, 1e-4);
    assert_eq!(body.wheel(0).map(|c| c.steer_angle), Some(report.steer_angle));
    Ok(())
}

#[test]
fn scripted_velocity_follows_heading() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    body.pose.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    vehicle.activate(&mut body, Authority::Scripted)?;

    let report = vehicle.fixed_tick(&mut body, &NeutralInput, tick(1))?;
    let velocity = must_some(report.scripted_velocity, "scripted velocity");
    assert_approx_eq!(velocity.x, 30.0 / 3.6, 1e-4);
    assert_approx_eq!(velocity.z, 0.0, 1e-4);
    Ok(())
}

#[test]
fn arcade_reference_torque_scenario() -> TestResult {
    let profile = VehicleProfile {
        wheels: WheelLayoutProfile {
            drive: vec![WheelId(3)],
            ..WheelLayoutProfile::default()
        },
        ..VehicleProfile::default()
    };
    let mut vehicle = build(profile);
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.set_forward_speed(50.0 / 3.6);
    body.clear();

    let input = ScriptedInput::new().with_axis("Throttle", 1.0);
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    assert_approx_eq!(report.motor_torque, 1200.0, 0.05);

    let motor = body.writes_to(WheelChannel::Motor);
    assert_eq!(motor.len(), 1);
    assert_eq!(motor[0].wheel, WheelId(3));
    Ok(())
}

#[test]
fn arcade_speed_is_forward_component() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;

    body.velocity = Vec3::new(10.0, 0.0, -5.0);
    let report = vehicle.fixed_tick(&mut body, &NeutralInput, tick(1))?;
    assert_approx_eq!(report.speed_kmh, -18.0, 1e-3);

    let mut progressive = build(with_scheme(ControlScheme::Progressive));
    progressive.activate(&mut body, Authority::Player)?;
    let report = progressive.fixed_tick(&mut body, &NeutralInput, tick(2))?;
    assert_approx_eq!(report.speed_kmh, 125.0_f32.sqrt() * 3.6, 1e-3);
    Ok(())
}

#[test]
fn arcade_brake_reaches_every_wheel() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.clear();

    let input = ScriptedInput::new().with_axis("Brake", 0.5);
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    assert_eq!(report.brake_torque, 750.0);
    assert_eq!(brake_wheels(&body), vec![0, 1, 2, 3]);
    assert!(body.writes_to(WheelChannel::Brake).iter().all(|w| w.value == 750.0));
    Ok(())
}

#[test]
fn progressive_throttle_ramps_on_frame_step() -> TestResult {
    let mut vehicle = build(with_scheme(ControlScheme::Progressive));
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    let input = ScriptedInput::new().with_axis("Throttle", 0.3);

    vehicle.frame_tick(&input, 0.5)?;
    assert_approx_eq!(vehicle.intent().throttle(), 0.25, 1e-6);
    vehicle.frame_tick(&input, 0.5)?;
    assert_approx_eq!(vehicle.intent().throttle(), 0.5, 1e-6);

    let reads = input.reads();
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    // 0.5 * 200 * 4 / 2 drive wheels
    assert_approx_eq!(report.motor_torque, 200.0, 1e-3);
    assert_approx_eq!(report.intent.throttle(), 0.5, 1e-6);
    // Only the boost and drift buttons are read on the fixed tick.
    assert_eq!(input.reads() - reads, 2);

    let released = ScriptedInput::new();
    vehicle.frame_tick(&released, 0.016)?;
    assert_eq!(vehicle.intent().throttle(), 0.0);
    Ok(())
}

#[test]
fn progressive_brake_button_and_blended_steer() -> TestResult {
    let mut vehicle = build(with_scheme(ControlScheme::Progressive));
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.set_current_steer(0, 10.0);
    body.set_current_steer(1, 10.0);

    let input = ScriptedInput::new()
        .with_axis("Horizontal", 1.0)
        .with_held("Brake");
    vehicle.frame_tick(&input, 0.016)?;
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;

    assert_eq!(report.intent.brake(), 1.0);
    assert_eq!(report.brake_torque, 1500.0);
    assert_eq!(brake_wheels(&body).len(), 4);
    // lerp(10, 30, 0.2)
    let steer = body.wheel(0).map(|c| c.steer_angle).unwrap_or_default();
    assert_approx_eq!(steer, 14.0, 1e-4);
    Ok(())
}

#[test]
fn unclamped_brakes_drive_wheels_only() -> TestResult {
    let mut vehicle = build(with_scheme(ControlScheme::Unclamped));
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.clear();

    let idle = ScriptedInput::new();
    vehicle.frame_tick(&idle, 0.016)?;
    vehicle.fixed_tick(&mut body, &idle, tick(1))?;
    assert_eq!(brake_wheels(&body), vec![2, 3]);
    assert!(body.writes_to(WheelChannel::Brake).iter().all(|w| w.value == 0.0));
    assert!(!vehicle.handbrake_engaged());
    body.clear();

    let braking = ScriptedInput::new().with_axis("Brake", 0.8);
    vehicle.frame_tick(&braking, 0.016)?;
    let report = vehicle.fixed_tick(&mut body, &braking, tick(2))?;
    assert_approx_eq!(report.brake_torque, 1200.0, 1e-3);
    assert_eq!(brake_wheels(&body), vec![2, 3]);
    assert!(vehicle.handbrake_engaged());
    Ok(())
}

#[test]
fn unclamped_brake_release_clears_drive_wheels() -> TestResult {
    let mut vehicle = build(with_scheme(ControlScheme::Unclamped));
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;

    let braking = ScriptedInput::new().with_axis("Brake", 1.0);
    vehicle.frame_tick(&braking, 0.016)?;
    vehicle.fixed_tick(&mut body, &braking, tick(1))?;
    assert_eq!(body.wheel(2).map(|c| c.brake_torque), Some(1500.0));

    let released = ScriptedInput::new();
    vehicle.frame_tick(&released, 0.016)?;
    let report = vehicle.fixed_tick(&mut body, &released, tick(2))?;
    assert_eq!(report.brake_torque, 0.0);
    assert_eq!(body.wheel(2).map(|c| c.brake_torque), Some(0.0));
    assert_eq!(body.wheel(3).map(|c| c.brake_torque), Some(0.0));
    assert!(!vehicle.handbrake_engaged());
    Ok(())
}

#[test]
fn handbrake_does_not_touch_wheel_brakes() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    vehicle.toggle_handbrake(true);
    body.clear();

    let report = vehicle.fixed_tick(&mut body, &NeutralInput, tick(1))?;
    assert_eq!(report.brake_torque, 0.0);
    let written: Vec<f32> = body.writes_to(WheelChannel::Brake).iter().map(|w| w.value).collect();
    assert_eq!(written, vec![0.0; 4]);
    assert!(vehicle.handbrake_engaged());
    assert!(vehicle.telemetry().handbrake);
    Ok(())
}

#[test]
fn unclamped_steer_is_not_shaped() -> TestResult {
    let profile = VehicleProfile {
        scheme: ControlScheme::Unclamped,
        steer_curve: Some(vec![
            arcade_curves::Keyframe::new(-1.0, 0.0),
            arcade_curves::Keyframe::new(1.0, 0.0),
        ]),
        ..VehicleProfile::default()
    };
    let mut vehicle = build(profile);
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;

    let input = ScriptedInput::new().with_axis("Horizontal", -0.5);
    vehicle.frame_tick(&input, 0.016)?;
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    assert_approx_eq!(report.steer_angle, -15.0, 1e-4);
    Ok(())
}

#[test]
fn ground_contact_is_queried_once_per_frame() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.clear();

    for frame in 1..=3 {
        for _ in 0..4 {
            vehicle.fixed_tick(&mut body, &NeutralInput, tick(frame))?;
        }
        assert_eq!(body.grounded_queries(), 4 * frame as usize);
    }
    Ok(())
}

#[test]
fn inactive_wheel_counts_as_airborne() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.set_active(1, false);
    body.set_forward_speed(20.0);
    body.clear();

    let report = vehicle.fixed_tick(&mut body, &NeutralInput, tick(1))?;
    assert_eq!(report.grounded, Some(false));
    assert!(body.forces().is_empty());
    Ok(())
}

#[test]
fn downforce_scales_with_speed() -> TestResult {
    let profile = VehicleProfile {
        downforce: 2.5,
        ..VehicleProfile::default()
    };
    let mut vehicle = build(profile);
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.set_forward_speed(-10.0);
    body.clear();

    vehicle.fixed_tick(&mut body, &NeutralInput, tick(1))?;
    let forces = body.forces();
    assert_eq!(forces.len(), 1);
    assert_approx_eq!(forces[0].y, -90.0, 1e-3);
    Ok(())
}

#[test]
fn boost_is_denied_when_disallowed() -> TestResult {
    let profile = VehicleProfile {
        allow_boost: false,
        downforce: 0.0,
        ..VehicleProfile::default()
    };
    let mut vehicle = build(profile);
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    vehicle.set_boost(3.0);
    body.clear();

    let input = ScriptedInput::new().with_held("Boost");
    vehicle.frame_tick(&input, 1.0)?;
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    assert!(!report.boosting);
    assert_eq!(vehicle.boost(), 3.0);
    assert!(body.forces().is_empty());
    Ok(())
}

#[test]
fn boost_drains_and_regenerates() -> TestResult {
    let profile = VehicleProfile {
        downforce: 0.0,
        ..VehicleProfile::default()
    };
    let mut vehicle = build(profile);
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.clear();

    let input = ScriptedInput::new().with_held("Boost");
    for frame in 1..=50 {
        let report = vehicle.fixed_tick(&mut body, &input, tick(frame))?;
        assert!(report.boosting);
    }
    assert_approx_eq!(vehicle.boost(), 9.0, 1e-4);
    assert_eq!(body.forces().len(), 50);

    vehicle.frame_tick(&NeutralInput, 2.0)?;
    assert_approx_eq!(vehicle.boost(), 9.4, 1e-4);
    vehicle.frame_tick(&NeutralInput, 100.0)?;
    assert_eq!(vehicle.boost(), 10.0);
    Ok(())
}

#[test]
fn reset_keeps_authority_and_config() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    body.pose.position = Vec3::new(5.0, 1.0, -3.0);
    vehicle.activate(&mut body, Authority::Scripted)?;

    body.pose.position = Vec3::new(100.0, 7.0, 40.0);
    body.pose.rotation = Quat::from_rotation_y(1.0);
    body.velocity = Vec3::splat(3.0);
    body.angular_velocity = Vec3::splat(1.0);
    vehicle.reset_to_spawn(&mut body)?;

    assert_eq!(body.pose.position, Vec3::new(5.0, 1.0, -3.0));
    assert_eq!(body.pose.rotation, Quat::IDENTITY);
    assert_eq!(body.velocity, Vec3::ZERO);
    assert_eq!(body.angular_velocity, Vec3::ZERO);
    assert_eq!(vehicle.authority(), Authority::Scripted);
    Ok(())
}

#[test]
fn restart_into_player_skips_countdown() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Scripted)?;

    vehicle.restart(&mut body, Authority::Player)?;
    body.clear();
    let input = ScriptedInput::new().with_axis("Throttle", 1.0);
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    assert_eq!(report.authority, Authority::Player);
    assert!(report.motor_torque > 0.0);

    vehicle.restart(&mut body, Authority::Scripted)?;
    assert_eq!(vehicle.authority(), Authority::Scripted);
    Ok(())
}

#[test]
fn set_parameter_clamps_each_kind() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    assert_eq!(vehicle.set_parameter(Parameter::DiffGearing(40.0))?, 16.0);
    assert_eq!(vehicle.set_parameter(Parameter::DiffGearing(0.5))?, 2.0);
    assert_eq!(vehicle.set_parameter(Parameter::SteerSpeed(0.0))?, 0.001);
    assert_eq!(vehicle.set_parameter(Parameter::DriftIntensity(-1.0))?, 0.0);
    assert_eq!(vehicle.set_parameter(Parameter::Downforce(9.0))?, 5.0);
    assert_eq!(vehicle.set_parameter(Parameter::BrakeForce(-10.0))?, 0.0);
    assert_eq!(vehicle.set_parameter(Parameter::BoostForce(8000.0))?, 8000.0);

    let err = must_err(vehicle.set_parameter(Parameter::Downforce(f32::NAN)));
    assert!(matches!(err, ValidationError::NonFinite { .. }));
    assert_eq!(vehicle.config().downforce(), 5.0);
    Ok(())
}

#[test]
fn retuned_diff_changes_torque() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    vehicle.set_parameter(Parameter::DiffGearing(8.0))?;

    let input = ScriptedInput::new().with_axis("Throttle", 1.0);
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    // 200 N·m at standstill, 8:1, two drive wheels
    assert_approx_eq!(report.motor_torque, 800.0, 1e-3);
    Ok(())
}

#[test]
fn blinkers_follow_frame_edges() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Scripted)?;
    let mut input = ScriptedInput::new();

    input.press("blinker_left");
    vehicle.frame_tick(&input, 0.016)?;
    assert_eq!(vehicle.blinkers(), BlinkerState::Off);

    vehicle.set_player_authority(true);
    vehicle.frame_tick(&input, 0.016)?;
    assert_eq!(vehicle.blinkers(), BlinkerState::Left);

    input.end_frame();
    input.press("blinker_left");
    vehicle.frame_tick(&input, 0.016)?;
    assert_eq!(vehicle.blinkers(), BlinkerState::Off);

    input.end_frame();
    input.press("blinker_right");
    vehicle.frame_tick(&input, 0.016)?;
    input.end_frame();
    input.press("blinker_clear");
    vehicle.frame_tick(&input, 0.016)?;
    assert_eq!(vehicle.blinkers(), BlinkerState::Off);
    Ok(())
}

#[test]
fn telemetry_summarizes_player_tick() -> TestResult {
    let mut vehicle = build(VehicleProfile::default());
    let mut body = RecordingBody::four_wheel();
    vehicle.activate(&mut body, Authority::Player)?;
    body.set_forward_speed(10.0);

    let input = ScriptedInput::new()
        .with_axis("Throttle", 0.5)
        .with_held("Boost")
        .with_held("Drift");
    vehicle.fixed_tick(&mut body, &input, tick(1))?;

    let snapshot = vehicle.telemetry();
    assert_eq!(snapshot.authority, Authority::Player);
    assert_eq!(snapshot.throttle, 0.5);
    assert!(snapshot.boosting);
    assert!(snapshot.drift);
    assert!(snapshot.boost < snapshot.max_boost);
    assert!(snapshot.to_string().starts_with("player | 36.0 km/h"));
    Ok(())
}

#[test]
fn profile_from_yaml_drives_controller() -> TestResult {
    let yaml = r#"
name: kart
scheme: unclamped
diff_gearing: 2.0
wheels:
  drive: [0, 1]
  steer: [0]
  all: [0, 1]
"#;
    let config = VehicleProfile::from_yaml_str(yaml)?.validate()?;
    let mut vehicle = VehicleController::new(config);
    let mut body = RecordingBody::with_wheels(&[0, 1]);
    vehicle.activate(&mut body, Authority::Player)?;

    let input = ScriptedInput::new().with_axis("Throttle", 1.0);
    vehicle.frame_tick(&input, 0.016)?;
    let report = vehicle.fixed_tick(&mut body, &input, tick(1))?;
    assert_eq!(vehicle.scheme(), ControlScheme::Unclamped);
    assert_approx_eq!(report.motor_torque, 200.0, 1e-3);
    Ok(())
}
