pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{BodyState, LoadState, DerivedGeometry, StepSnapshot, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Torque, TorqueSet, BuoyancyRestoring};
pub use simulation::integrator::{euler_integrator, derive_geometry, reset};
pub use simulation::waves::wave_offset;
pub use simulation::scenario::Scenario;
pub use simulation::error::SimulationError;

pub use configuration::config::{
    CapsizePolicyConfig, DampingLawConfig, EngineConfig, ParametersConfig, LoadConfig,
    ScenarioConfig,
};

pub use visualization::hull_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
