use std::time::Instant;

use crate::configuration::config::{CapsizePolicyConfig, DampingLawConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{BuoyancyRestoring, TorqueSet};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyState, LoadState};

/// Time raw integrator throughput for a few step counts, with both capsize
/// policies. Reset to upright whenever a run capsizes so every step does
/// full work.
pub fn bench_step() {
    let ns = [10_000, 100_000, 1_000_000];
    let dt = 0.016; // ~60 Hz frame delta

    let params = make_params();
    let load = LoadState { offset: 20.0 };
    let torques = TorqueSet::new().with(BuoyancyRestoring);

    for policy in [
        CapsizePolicyConfig::CornerClearance,
        CapsizePolicyConfig::AngleThreshold,
    ] {
        let engine = Engine {
            capsize_policy: policy.clone(),
            damping_law: DampingLawConfig::PerStep,
            waves_enabled: true,
            wave_affects_capsize: true,
        };

        for n in ns {
            let mut body = BodyState::new();

            // Warm up
            for _ in 0..1_000 {
                let _ = euler_integrator(&mut body, &torques, &params, &load, &engine, dt);
                if body.capsized {
                    body = BodyState::new();
                }
            }

            let t0 = Instant::now();
            for _ in 0..n {
                let _ = euler_integrator(&mut body, &torques, &params, &load, &engine, dt);
                if body.capsized {
                    body = BodyState::new();
                }
            }
            let elapsed = t0.elapsed().as_secs_f64();

            println!(
                "policy = {:?}, N = {:9}, total = {:8.5} s, per step = {:.1} ns",
                policy,
                n,
                elapsed,
                elapsed / n as f64 * 1e9
            );
        }
    }
}

/// Helper to build benchmark parameters (the canonical 160x40 hull)
fn make_params() -> Parameters {
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
