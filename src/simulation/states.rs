//! Core state types for the hull stability simulation.
//!
//! Defines the owned and derived state:
//! - `BodyState`  - the integrator's angle/velocity/capsized state
//! - `LoadState`  - the externally controlled point-load position
//! - `DerivedGeometry` - per-step CG/CB/inertia snapshot, never persisted
//!
//! `BodyState` also carries the elapsed simulated time `t` (the wave clock).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Rotational state of the hull. Owned and mutated by the integrator only.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub angle: f64, // radians, signed tilt
    pub angular_velocity: f64, // radians/second
    pub capsized: bool, // terminal flag, cleared only by reset
    pub t: f64, // elapsed simulated time (seconds)
}

impl BodyState {
    /// Upright hull at rest, clock at zero
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            angular_velocity: 0.0,
            capsized: false,
            t: 0.0,
        }
    }
}

impl Default for BodyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of the movable point load, set by the UI layer.
/// The core reads it, never writes it.
#[derive(Debug, Clone)]
pub struct LoadState {
    pub offset: f64, // signed displacement along the hull's transverse axis
}

/// Geometry derived fresh each step from parameters + load + current angle.
///
/// All points are in hull-local coordinates: origin at the hull's
/// bottom-center, negative y toward the deck (out of the water).
#[derive(Debug, Clone)]
pub struct DerivedGeometry {
    pub boat_cg: NVec2, // hull center of gravity
    pub load_cg: NVec2, // load center of gravity
    pub combined_cg: NVec2, // mass-weighted combination
    pub center_of_buoyancy: NVec2, // submerged-centroid approximation
    pub moment_of_inertia: f64, // flat-plate approximation
    pub submerged_depth: f64, // draft, clamped to [0, hull_height]
}

/// What a step hands back to the driver: a frozen copy of the body state
/// plus the geometry it was computed from.
#[derive(Debug, Clone)]
pub struct StepSnapshot {
    pub body: BodyState,
    pub geometry: DerivedGeometry,
}
