use super::*;
use glam::Vec3;

fn cloud_drift() -> Motion {
    Motion::Drift { axis: Axis::X, rate: Rate::PerTick(0.5), min: -5000.0, max: 5000.0 }
}

// ============================================================================
// Rates
// ============================================================================

#[test]
fn test_rate_step() {
    assert_eq!(Rate::PerSecond(2.0).step(0.25), 0.5);
    assert_eq!(Rate::PerSecond(2.0).step(0.0), 0.0);
    assert_eq!(Rate::PerTick(0.8).step(0.0), 0.8);
    assert_eq!(Rate::PerTick(0.8).step(10.0), 0.8);
}

// ============================================================================
// Spin
// ============================================================================

#[test]
fn test_spin_per_second_scales_with_elapsed() {
    let spin = Motion::Spin { axis: Axis::X, rate: Rate::PerSecond(0.5) };
    let mut t = Transform::IDENTITY;
    spin.apply(&mut t, 2.0);
    assert!((t.rotation.x - 1.0).abs() < 1e-6);
    assert_eq!(t.rotation.y, 0.0);
}

#[test]
fn test_spin_zero_elapsed_is_noop_for_scaled_rate() {
    let spin = Motion::Spin { axis: Axis::Z, rate: Rate::PerSecond(0.51) };
    let mut t = Transform::IDENTITY.with_rotation(Vec3::new(0.0, 0.0, -0.1));
    spin.apply(&mut t, 0.0);
    assert_eq!(t.rotation.z, -0.1);
}

#[test]
fn test_spin_stays_bounded() {
    let spin = Motion::Spin { axis: Axis::Y, rate: Rate::PerTick(1.0) };
    let mut t = Transform::IDENTITY;
    for _ in 0..100 {
        spin.apply(&mut t, 0.016);
    }
    assert!(t.rotation.y.abs() <= TAU);
}

// ============================================================================
// Drift
// ============================================================================

#[test]
fn test_drift_fixed_step_ignores_elapsed() {
    let mut t = Transform::IDENTITY;
    cloud_drift().apply(&mut t, 0.0);
    assert_eq!(t.position.x, 0.5);
    cloud_drift().apply(&mut t, 3.0);
    assert_eq!(t.position.x, 1.0);
}

#[test]
fn test_drift_wraps_on_the_crossing_tick() {
    let mut t = Transform::from_position(Vec3::new(4999.8, 1000.0, 0.0));
    cloud_drift().apply(&mut t, 0.016);
    assert_eq!(t.position.x, -5000.0);
    assert_eq!(t.position.y, 1000.0);
}

#[test]
fn test_drift_at_bound_does_not_wrap_yet() {
    let mut t = Transform::from_position(Vec3::new(4999.5, 0.0, 0.0));
    cloud_drift().apply(&mut t, 0.016);
    assert_eq!(t.position.x, 5000.0);
}

#[test]
fn test_negative_drift_wraps_to_max() {
    let drift = Motion::Drift { axis: Axis::Z, rate: Rate::PerTick(-1.0), min: -4000.0, max: 4000.0 };
    let mut t = Transform::from_position(Vec3::new(0.0, 0.0, -3999.5));
    drift.apply(&mut t, 0.016);
    assert_eq!(t.position.z, 4000.0);
}

// ============================================================================
// Validation and serde
// ============================================================================

#[test]
fn test_validate() {
    assert!(cloud_drift().validate().is_ok());
    let inverted = Motion::Drift { axis: Axis::X, rate: Rate::PerTick(1.0), min: 10.0, max: -10.0 };
    assert!(matches!(inverted.validate(), Err(Error::ConfigError(_))));
    let nan = Motion::Spin { axis: Axis::X, rate: Rate::PerSecond(f32::NAN) };
    assert!(nan.validate().is_err());
}

#[test]
fn test_deserialize_from_scene_json() {
    let json = r#"{"kind":"drift","axis":"z","rate":{"per_tick":0.8},"min":-5000,"max":5000}"#;
    let motion: Motion = serde_json::from_str(json).unwrap();
    assert_eq!(
        motion,
        Motion::Drift { axis: Axis::Z, rate: Rate::PerTick(0.8), min: -5000.0, max: 5000.0 }
    );

    let json = r#"{"kind":"spin","axis":"x","rate":{"per_second":0.5}}"#;
    let motion: Motion = serde_json::from_str(json).unwrap();
    assert_eq!(motion, Motion::Spin { axis: Axis::X, rate: Rate::PerSecond(0.5) });
}
