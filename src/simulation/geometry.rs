//! Mass geometry of the hull + load pair
//!
//! Everything here is a pure function of `Parameters` and `LoadState`:
//! - per-body and combined centers of gravity,
//! - the flat-plate moment of inertia,
//! - the world-frame projections used by the corner-clearance capsize test
//!
//! Hull-local frame: origin at the hull's bottom-center, negative y toward
//! the deck. Rotating a local point (x, y) by the tilt angle puts its
//! world-frame horizontal position at x*cos - y*sin.

use crate::simulation::params::Parameters;
use crate::simulation::states::{LoadState, NVec2};

/// Hull CG sits at the geometric center of the rectangle
pub fn boat_cg(params: &Parameters) -> NVec2 {
    NVec2::new(0.0, -params.hull_height / 2.0)
}

/// Load CG at mid-height, displaced sideways by the load offset
pub fn load_cg(params: &Parameters, load: &LoadState) -> NVec2 {
    NVec2::new(load.offset, -params.hull_height / 2.0)
}

/// Mass-weighted average of hull and load CGs.
/// With zero total mass the components divide to NaN; the integrator guards
/// against that through the inertia check before any of this reaches state.
pub fn combined_cg(params: &Parameters, load: &LoadState) -> NVec2 {
    let hull = boat_cg(params);
    let point = load_cg(params, load);
    let total_mass = params.total_mass();
    (params.hull_mass * hull + params.load_mass * point) / total_mass
}

/// Flat-plate approximation: (1/12) * M * (w^2 + (3h)^2).
/// The tripled height term is intentional, not the textbook h^2.
pub fn moment_of_inertia(params: &Parameters) -> f64 {
    let w = params.hull_width;
    let h3 = 3.0 * params.hull_height;
    (1.0 / 12.0) * params.total_mass() * (w * w + h3 * h3)
}

/// World-frame horizontal position of a hull-local point under tilt `angle`
pub fn world_x(point: &NVec2, angle: f64) -> f64 {
    point.x * angle.cos() - point.y * angle.sin()
}

/// World-frame horizontal half-extent of the hull's waterline corner under
/// tilt `angle`: (w/2)*cos + (h/2)*sin, with the signed sine. Once the
/// combined CG's world x passes this, no restoring torque can exist.
pub fn half_corner_x(params: &Parameters, angle: f64) -> f64 {
    (params.hull_width / 2.0) * angle.cos() + (params.hull_height / 2.0) * angle.sin()
}
