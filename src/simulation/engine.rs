//! High-level runtime engine settings
//!
//! Selects the capsize policy, the damping law, and how waves interact with
//! the capsize test. Built from `EngineConfig` when a `Scenario` is
//! assembled; the wave toggle is flipped at runtime by the viewer.

use crate::configuration::config::{CapsizePolicyConfig, DampingLawConfig};

#[derive(Debug, Clone)]
pub struct Engine {
    pub capsize_policy: CapsizePolicyConfig, // corner-clearance or angle-threshold
    pub damping_law: DampingLawConfig, // per-step or time-scaled
    pub waves_enabled: bool, // display waves on/off
    pub wave_affects_capsize: bool, // corner test against display angle vs raw angle
}
