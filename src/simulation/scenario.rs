//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - load position (`LoadState`) and body state (`BodyState` at t = 0)
//! - active torque set (`TorqueSet`)
//!
//! The bundle is inserted into Bevy as a `Resource` and consumed by the
//! physics-step, input, and rendering systems. It is also the external-facing
//! surface of the core: step, reset, parameter/load setters, and snapshot
//! accessors all live here. Multiple independent scenarios are just multiple
//! values of this struct.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::SimulationError;
use crate::simulation::forces::{BuoyancyRestoring, TorqueSet};
use crate::simulation::integrator::{self, derive_geometry, euler_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyState, DerivedGeometry, LoadState, StepSnapshot};
use crate::simulation::waves;

/// Bevy resource representing a fully-initialized hull scenario
#[derive(Debug, Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub load: LoadState,
    pub body: BodyState,
    pub torques: TorqueSet,
}

impl Scenario {
    /// Map the YAML-facing config into the runtime bundle, rejecting
    /// invalid parameters before anything can be stepped.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            hull_width: p_cfg.hull_width,
            hull_height: p_cfg.hull_height,
            hull_mass: p_cfg.hull_mass,
            load_mass: p_cfg.load_mass,
            gravity: p_cfg.gravity,
            water_density: p_cfg.water_density,
            damping: p_cfg.damping,
            damping_rate: p_cfg.damping_rate.unwrap_or(1.0),
            wave_max_angle: p_cfg.wave_max_angle_deg.to_radians(),
            wave_frequency: p_cfg.wave_frequency,
        };
        parameters.validate()?;

        let e_cfg = cfg.engine;
        let engine = Engine {
            capsize_policy: e_cfg.capsize_policy,
            damping_law: e_cfg.damping_law,
            waves_enabled: e_cfg.waves,
            wave_affects_capsize: e_cfg.wave_affects_capsize.unwrap_or(true),
        };

        let load = LoadState {
            offset: cfg.load.offset,
        };
        if !load.offset.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "load_offset",
                value: load.offset,
            });
        }

        // Torques: register the buoyancy/weight couple
        let torques = TorqueSet::new().with(BuoyancyRestoring);

        Ok(Self {
            engine,
            parameters,
            load,
            body: BodyState::new(),
            torques,
        })
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f64) -> Result<StepSnapshot, SimulationError> {
        euler_integrator(
            &mut self.body,
            &self.torques,
            &self.parameters,
            &self.load,
            &self.engine,
            dt,
        )
    }

    /// Back to upright at rest; parameters and load stay as they are
    pub fn reset(&mut self) {
        integrator::reset(&mut self.body);
    }

    /// Replace the physical parameters, validated as a whole before the
    /// swap so a bad value leaves the previous set fully intact. Gravity
    /// and water density keep their current values when not given.
    pub fn set_parameters(
        &mut self,
        hull_width: f64,
        hull_height: f64,
        hull_mass: f64,
        load_mass: f64,
        gravity: Option<f64>,
        water_density: Option<f64>,
    ) -> Result<(), SimulationError> {
        let candidate = Parameters {
            hull_width,
            hull_height,
            hull_mass,
            load_mass,
            gravity: gravity.unwrap_or(self.parameters.gravity),
            water_density: water_density.unwrap_or(self.parameters.water_density),
            ..self.parameters.clone()
        };
        candidate.validate()?;
        self.parameters = candidate;
        Ok(())
    }

    /// Move the point load. Any real offset is allowed; non-finite values
    /// are rejected before they can poison the next torque.
    pub fn set_load_offset(&mut self, value: f64) -> Result<(), SimulationError> {
        if !value.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "load_offset",
                value,
            });
        }
        self.load.offset = value;
        Ok(())
    }

    /// Display-only wave angle at `elapsed` seconds
    pub fn wave_offset(&self, elapsed: f64, enabled: bool) -> f64 {
        waves::wave_offset(&self.parameters, elapsed, enabled)
    }

    /// Physical angle plus the current wave offset; what the renderer draws
    pub fn display_angle(&self) -> f64 {
        self.body.angle + self.wave_offset(self.body.t, self.engine.waves_enabled)
    }

    /// Snapshot copy of the body state
    pub fn body_state(&self) -> BodyState {
        self.body.clone()
    }

    /// Fresh derived geometry for the current tilt
    pub fn derived_geometry(&self) -> DerivedGeometry {
        derive_geometry(&self.parameters, &self.load, self.body.angle)
    }
}
