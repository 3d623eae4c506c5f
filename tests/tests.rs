use std::f64::consts::FRAC_PI_2;

use hullsim::configuration::config::{CapsizePolicyConfig, DampingLawConfig};
use hullsim::simulation::engine::Engine;
use hullsim::simulation::error::SimulationError;
use hullsim::simulation::forces::{BuoyancyRestoring, TorqueSet};
use hullsim::simulation::integrator::euler_integrator;
use hullsim::simulation::params::Parameters;
use hullsim::simulation::scenario::Scenario;
use hullsim::simulation::states::{BodyState, LoadState};
use hullsim::simulation::{buoyancy, geometry, waves};
use hullsim::ScenarioConfig;

/// Canonical parameters: 160x40 cm hull, 10 kg hull + 5 kg load, g in cm/s^2
pub fn test_params() -> Parameters {
    Parameters {
        hull_width: 160.0,
        hull_height: 40.0,
        hull_mass: 10.0,
        load_mass: 5.0,
        gravity: 980.0,
        water_density: 1.0,
        damping: 0.99,
        damping_rate: 1.0,
        wave_max_angle: 10.0_f64.to_radians(),
        wave_frequency: 0.5,
    }
}

/// Default engine for tests: corner-clearance, per-step damping, waves off
/// so every run is deterministic
pub fn test_engine() -> Engine {
    Engine {
        capsize_policy: CapsizePolicyConfig::CornerClearance,
        damping_law: DampingLawConfig::PerStep,
        waves_enabled: false,
        wave_affects_capsize: true,
    }
}

/// Build the torque set with the buoyancy couple registered
pub fn torque_set() -> TorqueSet {
    TorqueSet::new().with(BuoyancyRestoring)
}

/// A full runtime bundle for exercising the facade
pub fn test_scenario() -> Scenario {
    Scenario {
        engine: test_engine(),
        parameters: test_params(),
        load: LoadState { offset: 0.0 },
        body: BodyState::new(),
        torques: torque_set(),
    }
}

// ==================================================================================
// Geometry tests
// ==================================================================================

#[test]
fn combined_cg_is_mass_weighted() {
    let p = test_params();
    let load = LoadState { offset: 30.0 };

    let cg = geometry::combined_cg(&p, &load);

    // (10 * 0 + 5 * 30) / 15 = 10 to the load side, mid-height
    assert!((cg.x - 10.0).abs() < 1e-12, "cg.x = {}", cg.x);
    assert!((cg.y + 20.0).abs() < 1e-12, "cg.y = {}", cg.y);
}

#[test]
fn centered_load_keeps_cg_on_centerline() {
    let p = test_params();
    let load = LoadState { offset: 0.0 };

    let cg = geometry::combined_cg(&p, &load);

    assert_eq!(cg.x, 0.0);
    assert!((cg.y + p.hull_height / 2.0).abs() < 1e-12);
}

#[test]
fn moment_of_inertia_matches_flat_plate_formula() {
    let p = test_params();

    // (1/12) * 15 * (160^2 + 120^2) = 50000
    let inertia = geometry::moment_of_inertia(&p);
    assert!((inertia - 50000.0).abs() < 1e-9, "I = {}", inertia);
}

#[test]
fn moment_of_inertia_positive_for_valid_parameters() {
    for (w, h, mb, ml) in [(1.0, 1.0, 0.1, 0.1), (160.0, 40.0, 10.0, 5.0), (500.0, 10.0, 1e3, 1e-3)] {
        let p = Parameters {
            hull_width: w,
            hull_height: h,
            hull_mass: mb,
            load_mass: ml,
            ..test_params()
        };
        assert!(geometry::moment_of_inertia(&p) > 0.0);
    }
}

// ==================================================================================
// Buoyancy tests
// ==================================================================================

#[test]
fn cb_centered_when_upright() {
    let p = test_params();
    let cb = buoyancy::center_of_buoyancy(&p, 0.0);

    assert_eq!(cb.x, 0.0);
    assert!((cb.y + 20.0).abs() < 1e-12);
}

#[test]
fn cb_shift_tracks_sine_of_tilt() {
    let p = test_params();

    let cb = buoyancy::center_of_buoyancy(&p, 0.3);
    assert!((cb.x - 20.0 * 0.3_f64.sin()).abs() < 1e-12);

    // opposite tilt, opposite shift
    let cb_neg = buoyancy::center_of_buoyancy(&p, -0.3);
    assert!((cb_neg.x + cb.x).abs() < 1e-12);
}

#[test]
fn draft_from_weight_balance_and_clamped() {
    let p = test_params();

    // 15 / (160 * 1)
    assert!((buoyancy::submerged_depth(&p) - 0.09375).abs() < 1e-12);

    // near-zero density would put the waterline far above the deck;
    // the draft caps at the hull height instead
    let thin = Parameters {
        water_density: 1e-6,
        ..test_params()
    };
    assert_eq!(buoyancy::submerged_depth(&thin), thin.hull_height);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn upright_centered_hull_stays_put() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };
    let mut body = BodyState::new();

    for _ in 0..500 {
        let snap = euler_integrator(&mut body, &torques, &p, &load, &engine, 0.016).unwrap();
        assert!(!snap.body.capsized);
    }

    // exact equilibrium: zero lever arm, zero torque, no drift at all
    assert_eq!(body.angle, 0.0);
    assert_eq!(body.angular_velocity, 0.0);
}

#[test]
fn single_step_of_canonical_example_is_inert() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };
    let mut body = BodyState::new();

    let snap = euler_integrator(&mut body, &torques, &p, &load, &engine, 0.016).unwrap();

    assert_eq!(snap.body.angle, 0.0);
    assert_eq!(snap.body.angular_velocity, 0.0);
    assert!(!snap.body.capsized);
    assert!((snap.geometry.moment_of_inertia - 50000.0).abs() < 1e-9);
}

#[test]
fn side_load_heels_monotonically_until_capsize() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 50.0 };
    let mut body = BodyState::new();

    let dt = 0.016;
    let mut prev = body.angle;
    let mut capsized_at = None;

    for i in 0..313 {
        // up to 5 simulated seconds
        let snap = euler_integrator(&mut body, &torques, &p, &load, &engine, dt).unwrap();
        if snap.body.capsized {
            capsized_at = Some(i);
            break;
        }
        assert!(
            snap.body.angle < prev || i == 0,
            "angle did not keep heeling at step {}: {} vs {}",
            i,
            snap.body.angle,
            prev
        );
        prev = snap.body.angle;
    }

    let steps = capsized_at.expect("hull should capsize well before 5 simulated seconds");
    assert!((steps as f64) * dt < 5.0);
    // clamped exactly to the excursion side, not some intermediate angle
    assert_eq!(body.angle, -FRAC_PI_2);
    assert_eq!(body.angular_velocity, 0.0);
}

#[test]
fn capsized_state_is_terminal_until_reset() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 50.0 };
    let mut body = BodyState::new();

    while !body.capsized {
        euler_integrator(&mut body, &torques, &p, &load, &engine, 0.016).unwrap();
    }
    let frozen_angle = body.angle;
    let t_at_capsize = body.t;

    for _ in 0..100 {
        let snap = euler_integrator(&mut body, &torques, &p, &load, &engine, 0.016).unwrap();
        assert!(snap.body.capsized);
        assert_eq!(snap.body.angle, frozen_angle);
        assert_eq!(snap.body.angular_velocity, 0.0);
    }
    // the wave clock keeps running, the physics does not
    assert!(body.t > t_at_capsize);

    hullsim::reset(&mut body);
    assert_eq!(body, BodyState::new());
}

#[test]
fn per_step_damping_scales_velocity_once_per_step() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };

    // zero torque configuration, so damping is the only thing acting
    let mut body = BodyState {
        angular_velocity: 0.3,
        ..BodyState::new()
    };

    let dt = 0.016;
    euler_integrator(&mut body, &torques, &p, &load, &engine, dt).unwrap();

    assert!((body.angular_velocity - 0.3 * 0.99).abs() < 1e-12);
    // the angle advanced with the pre-damping velocity (velocity first)
    assert!((body.angle - 0.3 * dt).abs() < 1e-15);
}

#[test]
fn time_scaled_damping_uses_dt() {
    let p = test_params();
    let engine = Engine {
        damping_law: DampingLawConfig::TimeScaled,
        ..test_engine()
    };
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };

    let mut body = BodyState {
        angular_velocity: 1.0,
        ..BodyState::new()
    };

    // rate 1.0 over half a second: exp(-0.5)
    euler_integrator(&mut body, &torques, &p, &load, &engine, 0.5).unwrap();
    assert!((body.angular_velocity - (-0.5_f64).exp()).abs() < 1e-12);
}

#[test]
fn zero_dt_step_changes_nothing() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };

    let mut body = BodyState {
        angle: 0.2,
        ..BodyState::new()
    };
    let before = body.clone();

    euler_integrator(&mut body, &torques, &p, &load, &engine, 0.0).unwrap();
    assert_eq!(body, before);
}

#[test]
fn huge_dt_is_coarse_but_never_nan() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 30.0 };
    let mut body = BodyState::new();

    for _ in 0..10 {
        euler_integrator(&mut body, &torques, &p, &load, &engine, 5.0).unwrap();
        assert!(body.angle.is_finite());
        assert!(body.angular_velocity.is_finite());
    }
    // a step that coarse overshoots 90 degrees immediately
    assert!(body.capsized);
}

#[test]
fn degenerate_inertia_skips_the_step() {
    // hand-built, bypassing validation on purpose
    let p = Parameters {
        hull_mass: 0.0,
        load_mass: 0.0,
        ..test_params()
    };
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 10.0 };

    let mut body = BodyState {
        angle: 0.1,
        angular_velocity: 0.05,
        ..BodyState::new()
    };
    let before = body.clone();

    let err = euler_integrator(&mut body, &torques, &p, &load, &engine, 0.016).unwrap_err();
    assert!(matches!(err, SimulationError::DegenerateInertia(_)));
    // nothing leaked into the state, NaN included
    assert_eq!(body, before);
}

#[test]
fn negative_dt_is_rejected() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };
    let mut body = BodyState::new();
    let before = body.clone();

    let err = euler_integrator(&mut body, &torques, &p, &load, &engine, -0.016).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter { name: "dt", .. }));
    assert_eq!(body, before);
}

// ==================================================================================
// Capsize policy tests
// ==================================================================================

#[test]
fn corner_precheck_fires_before_any_torque_is_applied() {
    let p = test_params();
    let engine = test_engine();
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };

    // already past the corner, with a large righting velocity that would
    // pull the angle back if one more step were integrated
    let mut body = BodyState {
        angle: -1.3,
        angular_velocity: 5.0,
        ..BodyState::new()
    };

    let snap = euler_integrator(&mut body, &torques, &p, &load, &engine, 0.016).unwrap();

    assert!(snap.body.capsized);
    assert_eq!(snap.body.angle, -FRAC_PI_2);
    assert_eq!(snap.body.angular_velocity, 0.0);
}

#[test]
fn corner_clearance_capsizes_earlier_than_angle_threshold() {
    let p = test_params();
    let torques = torque_set();
    let load = LoadState { offset: 50.0 };

    let steps_until_capsize = |engine: &Engine| {
        let mut body = BodyState::new();
        let mut n = 0;
        while !body.capsized {
            euler_integrator(&mut body, &torques, &p, &load, engine, 0.016).unwrap();
            n += 1;
            assert!(n < 10_000);
        }
        n
    };

    let corner = steps_until_capsize(&test_engine());
    let threshold = steps_until_capsize(&Engine {
        capsize_policy: CapsizePolicyConfig::AngleThreshold,
        ..test_engine()
    });

    // the CG leaves the support polygon well before the hull reaches 90 deg
    assert!(
        corner < threshold,
        "corner-clearance {} steps, angle-threshold {} steps",
        corner,
        threshold
    );
}

#[test]
fn wave_offset_can_tip_the_corner_test() {
    let p = Parameters {
        wave_max_angle: 15.0_f64.to_radians(),
        ..test_params()
    };
    let torques = torque_set();
    let load = LoadState { offset: 0.0 };

    // heeled 60 deg, wave trough at t = 1.5 s adds another 15 deg:
    // the display angle is past the corner, the raw angle is not
    let start = || BodyState {
        angle: -60.0_f64.to_radians(),
        t: 1.5,
        ..BodyState::new()
    };

    let waves_count = Engine {
        waves_enabled: true,
        wave_affects_capsize: true,
        ..test_engine()
    };
    let mut body = start();
    let snap = euler_integrator(&mut body, &torques, &p, &load, &waves_count, 0.016).unwrap();
    assert!(snap.body.capsized);
    assert_eq!(snap.body.angle, -FRAC_PI_2);

    let raw_only = Engine {
        waves_enabled: true,
        wave_affects_capsize: false,
        ..test_engine()
    };
    let mut body = start();
    let snap = euler_integrator(&mut body, &torques, &p, &load, &raw_only, 0.016).unwrap();
    assert!(!snap.body.capsized);
}

// ==================================================================================
// Wave modulator tests
// ==================================================================================

#[test]
fn wave_crosses_zero_at_integer_seconds() {
    let p = test_params();

    // 0.5 Hz: a full period every 2 s, zero crossing every integer second
    assert!(waves::wave_offset(&p, 1.0, true).abs() < 1e-9);
    assert!(waves::wave_offset(&p, 2.0, true).abs() < 1e-9);
}

#[test]
fn wave_peaks_at_quarter_period() {
    let p = test_params();
    let offset = waves::wave_offset(&p, 0.5, true);
    assert!((offset - p.wave_max_angle).abs() < 1e-12);
}

#[test]
fn disabled_wave_is_exactly_zero() {
    let p = test_params();
    for t in [0.0, 0.25, 1.0, 17.3] {
        assert_eq!(waves::wave_offset(&p, t, false), 0.0);
    }
}

// ==================================================================================
// Scenario facade tests
// ==================================================================================

#[test]
fn invalid_dimensions_rejected_with_prior_state_kept() {
    let mut scenario = test_scenario();

    let err = scenario
        .set_parameters(-160.0, 40.0, 10.0, 5.0, None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter { name: "hull_width", .. }
    ));

    // the previous valid set survives in full
    assert_eq!(scenario.parameters.hull_width, 160.0);
    assert_eq!(scenario.parameters.hull_mass, 10.0);
}

#[test]
fn massless_configuration_is_rejected() {
    let mut scenario = test_scenario();

    let err = scenario
        .set_parameters(160.0, 40.0, 0.0, 0.0, None, None)
        .unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter { .. }));
}

#[test]
fn parameter_change_never_rewrites_integrated_state() {
    let mut scenario = test_scenario();
    scenario.set_load_offset(30.0).unwrap();

    for _ in 0..20 {
        scenario.step(0.016).unwrap();
    }
    let before = scenario.body_state();

    scenario
        .set_parameters(120.0, 30.0, 8.0, 4.0, Some(981.0), Some(1.0))
        .unwrap();

    // only the next step's torque changes, not what was already integrated
    assert_eq!(scenario.body_state(), before);
}

#[test]
fn load_offset_setter_feeds_derived_geometry() {
    let mut scenario = test_scenario();

    scenario.set_load_offset(25.0).unwrap();
    assert_eq!(scenario.derived_geometry().load_cg.x, 25.0);

    let err = scenario.set_load_offset(f64::NAN).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter { .. }));
    assert_eq!(scenario.load.offset, 25.0);
}

#[test]
fn scenario_builds_from_yaml() {
    let yaml = r#"
engine:
  capsize_policy: "corner-clearance"
  damping_law: "per-step"
  waves: true

parameters:
  hull_width: 160.0
  hull_height: 40.0
  hull_mass: 10.0
  load_mass: 5.0
  gravity: 980.0
  water_density: 1.0
  damping: 0.99
  wave_max_angle_deg: 10.0
  wave_frequency: 0.5

load:
  offset: 0.0
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.parameters.hull_width, 160.0);
    assert!((scenario.parameters.wave_max_angle - 10.0_f64.to_radians()).abs() < 1e-12);
    assert!(matches!(
        scenario.engine.capsize_policy,
        CapsizePolicyConfig::CornerClearance
    ));
    // unspecified toggle defaults to the wave-inclusive check
    assert!(scenario.engine.wave_affects_capsize);
    assert_eq!(scenario.body_state(), BodyState::new());
}

#[test]
fn build_rejects_invalid_config() {
    let yaml = r#"
engine:
  capsize_policy: "angle-threshold"
  damping_law: "per-step"
  waves: false

parameters:
  hull_width: 0.0
  hull_height: 40.0
  hull_mass: 10.0
  load_mass: 5.0
  gravity: 980.0
  water_density: 1.0
  damping: 0.99
  wave_max_angle_deg: 10.0
  wave_frequency: 0.5

load:
  offset: 0.0
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter { name: "hull_width", .. }
    ));
}
