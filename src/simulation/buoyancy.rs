//! Buoyancy model
//!
//! A floating hull displaces water equal to its weight, so the submerged
//! volume is treated as constant and only the centroid's horizontal shift
//! with tilt is modeled. Exact for small angles, an engineering
//! approximation beyond ~20-30 degrees.

use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Center of buoyancy: fixed at draft mid-depth, shifted sideways
/// proportional to sin(angle)
pub fn center_of_buoyancy(params: &Parameters, angle: f64) -> NVec2 {
    let shift_x = (params.hull_height / 2.0) * angle.sin();
    NVec2::new(shift_x, -params.hull_height / 2.0)
}

/// Waterline depth from buoyant-force-equals-weight, clamped to the hull
/// height. Display-only; with zero water density the hull just rides at
/// full draft.
pub fn submerged_depth(params: &Parameters) -> f64 {
    let draft = params.total_mass() / (params.hull_width * params.water_density);
    draft.clamp(0.0, params.hull_height)
}
