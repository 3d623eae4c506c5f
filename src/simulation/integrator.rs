//! Fixed-step stability integrator
//!
//! Advances the hull's angle and angular velocity by one semi-implicit Euler
//! step, applies damping, and runs the capsize tests. The step is a free
//! function over `&mut BodyState` plus read-only parameters/load, so a test
//! harness can drive it with any fixed dt sequence and replay runs
//! deterministically.

use std::f64::consts::FRAC_PI_2;

use crate::configuration::config::{CapsizePolicyConfig, DampingLawConfig};
use crate::simulation::buoyancy;
use crate::simulation::engine::Engine;
use crate::simulation::error::SimulationError;
use crate::simulation::forces::TorqueSet;
use crate::simulation::geometry;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyState, DerivedGeometry, LoadState, StepSnapshot};
use crate::simulation::waves::wave_offset;

/// Rebuild the full derived-geometry snapshot for the current tilt.
/// Cheap enough to do from scratch every step; nothing here is persisted.
pub fn derive_geometry(params: &Parameters, load: &LoadState, angle: f64) -> DerivedGeometry {
    DerivedGeometry {
        boat_cg: geometry::boat_cg(params),
        load_cg: geometry::load_cg(params, load),
        combined_cg: geometry::combined_cg(params, load),
        center_of_buoyancy: buoyancy::center_of_buoyancy(params, angle),
        moment_of_inertia: geometry::moment_of_inertia(params),
        submerged_depth: buoyancy::submerged_depth(params),
    }
}

/// Advance the hull by one step of `dt` seconds using semi-implicit Euler
/// (velocity updates first, then angle from the updated velocity).
///
/// In the capsized state this is a no-op for the physical state: the frozen
/// angle/velocity are returned unchanged and only the wave clock advances.
/// A degenerate moment of inertia fails the step with state untouched, so
/// NaN can never leak into `BodyState`.
pub fn euler_integrator(
    body: &mut BodyState,
    torques: &TorqueSet,
    params: &Parameters,
    load: &LoadState,
    engine: &Engine,
    dt: f64,
) -> Result<StepSnapshot, SimulationError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "dt",
            value: dt,
        });
    }

    // Terminal state: keep the display clock running, freeze everything else
    if body.capsized {
        body.t += dt;
        let geometry = derive_geometry(params, load, body.angle);
        return Ok(StepSnapshot {
            body: body.clone(),
            geometry,
        });
    }

    // Geometry at the current tilt, before any new torque is applied
    let geo = derive_geometry(params, load, body.angle);

    let inertia = geo.moment_of_inertia;
    if !inertia.is_finite() || inertia <= 0.0 {
        // Skip the step entirely rather than divide through by it
        return Err(SimulationError::DegenerateInertia(inertia));
    }

    // Corner-clearance pre-check against the current tilt. Checking before
    // integrating avoids applying one more unstable step past the corner.
    if matches!(engine.capsize_policy, CapsizePolicyConfig::CornerClearance) {
        let check_angle = if engine.wave_affects_capsize {
            body.angle + wave_offset(params, body.t, engine.waves_enabled)
        } else {
            body.angle
        };
        let cg_world_x = geometry::world_x(&geo.combined_cg, check_angle);
        if cg_world_x.abs() > geometry::half_corner_x(params, check_angle) {
            // CG is outside the support polygon at the waterline:
            // no restoring torque can exist past this point
            capsize(body, check_angle);
            body.t += dt;
            let geometry = derive_geometry(params, load, body.angle);
            return Ok(StepSnapshot {
                body: body.clone(),
                geometry,
            });
        }
    }

    // Net torque from all registered contributors at the current tilt
    let torque = torques.accumulate_torque(body.t, body.angle, &geo, params);

    // alpha = torque / I
    let angular_acceleration = torque / inertia;

    // Kick: w_n+1 = w_n + alpha * dt
    body.angular_velocity += angular_acceleration * dt;

    // Drift with the just-updated velocity: theta_n+1 = theta_n + w_n+1 * dt
    body.angle += body.angular_velocity * dt;

    // Damping (water resistance). The per-step law multiplies by a fixed
    // factor each step regardless of dt, so its strength follows the frame
    // rate; the time-scaled law is the frame-rate independent alternative.
    match engine.damping_law {
        DampingLawConfig::PerStep => body.angular_velocity *= params.damping,
        DampingLawConfig::TimeScaled => {
            body.angular_velocity *= (-params.damping_rate * dt).exp()
        }
    }

    // Advance the wave clock
    body.t += dt;

    // Angle-threshold safety net: past +-90 degrees nothing rights the hull,
    // whichever policy is active
    if body.angle.abs() > FRAC_PI_2 {
        capsize(body, body.angle);
    }

    let geometry = derive_geometry(params, load, body.angle);
    Ok(StepSnapshot {
        body: body.clone(),
        geometry,
    })
}

/// Transition to the terminal capsized state: clamp the angle to the side
/// the excursion went, zero the velocity, set the flag.
fn capsize(body: &mut BodyState, excursion: f64) {
    body.capsized = true;
    body.angle = if excursion > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    body.angular_velocity = 0.0;
}

/// Back to upright at rest, unconditionally. Parameters and load position
/// are left alone.
pub fn reset(body: &mut BodyState) {
    *body = BodyState::new();
}
