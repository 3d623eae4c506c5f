//! Physical and numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - hull dimensions and masses,
//! - gravity and water density,
//! - damping knobs for both damping laws,
//! - wave amplitude and frequency
//!
//! All of it is mutable at runtime through `Scenario::set_parameters`, which
//! validates a candidate before committing it. A parameter change never
//! touches already-integrated angle/velocity; it only alters the next torque.

use crate::simulation::error::SimulationError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub hull_width: f64, // hull width (cm)
    pub hull_height: f64, // hull height (cm)
    pub hull_mass: f64, // mass of the bare hull (kg)
    pub load_mass: f64, // mass of the movable load (kg)
    pub gravity: f64, // gravity (cm/s^2)
    pub water_density: f64, // relative units
    pub damping: f64, // per-step velocity retention factor
    pub damping_rate: f64, // 1/s, used by the time-scaled damping law
    pub wave_max_angle: f64, // wave amplitude (radians)
    pub wave_frequency: f64, // oscillations per second
}

impl Parameters {
    pub fn total_mass(&self) -> f64 {
        self.hull_mass + self.load_mass
    }

    /// Check every field against its allowed range. Returns the first
    /// offending field so setters can reject a candidate atomically.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("hull_width", self.hull_width),
            ("hull_height", self.hull_height),
            ("hull_mass", self.hull_mass),
            ("load_mass", self.load_mass),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        if !self.water_density.is_finite() || self.water_density < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "water_density",
                value: self.water_density,
            });
        }
        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(SimulationError::InvalidParameter {
                name: "damping",
                value: self.damping,
            });
        }
        let non_negative = [
            ("damping_rate", self.damping_rate),
            ("wave_max_angle", self.wave_max_angle),
            ("wave_frequency", self.wave_frequency),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
