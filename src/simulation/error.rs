//! Error types for the simulation core.

use std::fmt;

/// Errors surfaced by setters and by the integrator.
///
/// Capsizing is not an error; it is a terminal state reported through
/// `BodyState::capsized`.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A supplied value is outside its allowed range. Prior state is kept.
    InvalidParameter { name: &'static str, value: f64 },
    /// The moment of inertia came out zero or non-finite; the step was
    /// skipped so NaN never reaches the body state.
    DegenerateInertia(f64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {} = {}", name, value)
            }
            SimulationError::DegenerateInertia(value) => {
                write!(f, "degenerate moment of inertia ({}), step skipped", value)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
