//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – capsize policy, damping law, wave toggles
//! - [`ParametersConfig`] – hull dimensions, masses, physical constants
//! - [`LoadConfig`]       – initial point-load position
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   capsize_policy: "corner-clearance"   # or "angle-threshold"
//!   damping_law: "per-step"              # or "time-scaled"
//!   waves: true
//!   wave_affects_capsize: true
//!
//! parameters:
//!   hull_width: 160.0        # cm
//!   hull_height: 40.0        # cm
//!   hull_mass: 10.0          # kg
//!   load_mass: 5.0           # kg
//!   gravity: 980.0           # cm/s^2
//!   water_density: 1.0       # relative units
//!   damping: 0.99            # per-step velocity retention
//!   damping_rate: 1.0        # 1/s, time-scaled law only
//!   wave_max_angle_deg: 10.0
//!   wave_frequency: 0.5      # Hz
//!
//! load:
//!   offset: 0.0              # cm, signed, along the transverse axis
//! ```
//!
//! The engine maps this configuration into its internal runtime structs
//! (`Engine`, `Parameters`, `LoadState`) when building a `Scenario`.

use serde::Deserialize;

/// Which capsize test decides the Floating -> Capsized transition
/// capsize_policy: "corner-clearance" or "angle-threshold"
#[derive(Deserialize, Debug, Clone)]
pub enum CapsizePolicyConfig {
    #[serde(rename = "corner-clearance")] // CG passes the waterline corner; checked before each step, more accurate
    CornerClearance,

    #[serde(rename = "angle-threshold")] // plain |angle| > 90 degrees after the step; the earliest behavior, kept as a degraded mode
    AngleThreshold,
}

/// Which damping law the integrator applies after each velocity update
#[derive(Deserialize, Debug, Clone)]
pub enum DampingLawConfig {
    #[serde(rename = "per-step")] // fixed multiplicative factor per step, frame-rate dependent
    PerStep,

    #[serde(rename = "time-scaled")] // exp(-rate * dt), frame-rate independent
    TimeScaled,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub capsize_policy: CapsizePolicyConfig, // which capsize test is primary
    pub damping_law: DampingLawConfig, // how damping scales with dt
    pub waves: bool, // display waves on at start
    pub wave_affects_capsize: Option<bool>, // corner test against display angle (default true)
}

/// Physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub hull_width: f64,   // hull width (cm)
    pub hull_height: f64,  // hull height (cm)
    pub hull_mass: f64,    // bare hull mass (kg)
    pub load_mass: f64,    // movable load mass (kg)
    pub gravity: f64,      // cm/s^2
    pub water_density: f64, // relative units
    pub damping: f64,      // per-step velocity retention factor
    pub damping_rate: Option<f64>, // 1/s for the time-scaled law (default 1.0)
    pub wave_max_angle_deg: f64, // wave amplitude, degrees
    pub wave_frequency: f64, // Hz
}

/// Initial state of the movable load
#[derive(Deserialize, Debug)]
pub struct LoadConfig {
    pub offset: f64, // signed displacement from the hull centerline (cm)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (policies, toggles)
    pub parameters: ParametersConfig, // physical parameters
    pub load: LoadConfig, // initial load position
}
