//! Torque contributors for the stability engine
//!
//! Defines the torque trait and the buoyancy restoring couple. Contributions
//! from every registered term are summed into a single net torque about the
//! hull's bottom-center.

use crate::simulation::params::Parameters;
use crate::simulation::states::DerivedGeometry;

/// Collection of torque terms (buoyancy couple, later maybe wind, towline...)
/// Each term implements [`Torque`] and their contributions are summed
/// into the net torque driving angular acceleration
pub struct TorqueSet {
    terms: Vec<Box<dyn Torque + Send + Sync>>,
}

impl TorqueSet {
    /// Create an empty torque set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a torque term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Torque + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net torque at time `t` for the current tilt and derived geometry
    pub fn accumulate_torque(
        &self,
        t: f64,
        angle: f64,
        geometry: &DerivedGeometry,
        params: &Parameters,
    ) -> f64 {
        let mut total = 0.0;
        // Iterate over all torque contributors
        for term in &self.terms {
            total += term.torque(t, angle, geometry, params);
        }
        total
    }
}

impl Default for TorqueSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TorqueSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TorqueSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Trait for torque sources acting on the hull
/// Implementations return their contribution in (mass unit) * cm^2 / s^2
pub trait Torque {
    fn torque(&self, t: f64, angle: f64, geometry: &DerivedGeometry, params: &Parameters) -> f64;
}

/// Buoyancy/weight couple: the weight acts down through the combined CG,
/// the buoyant force acts up through the CB. The horizontal offset between
/// the two is the lever arm.
pub struct BuoyancyRestoring;

impl Torque for BuoyancyRestoring {
    fn torque(&self, _t: f64, _angle: f64, geometry: &DerivedGeometry, params: &Parameters) -> f64 {
        // Lever arm: horizontal distance between CB and combined CG,
        // both in hull-local coordinates
        let lever_arm = geometry.center_of_buoyancy.x - geometry.combined_cg.x;

        // torque = leverArm * weight
        lever_arm * params.total_mass() * params.gravity
    }
}
