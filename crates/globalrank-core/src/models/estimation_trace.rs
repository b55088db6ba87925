use serde::{Deserialize, Serialize};

/// Outcome of one MAP estimation run.
///
/// `converged == false` means the iteration cap was reached first; `theta`
/// is still the best estimate available and callers use it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationTrace {
    pub theta: f64,
    pub iterations: u32,
    pub converged: bool,
}

impl EstimationTrace {
    /// Trace for an empty response set: the prior mean, no iterations.
    pub fn prior() -> Self {
        Self {
            theta: 0.0,
            iterations: 0,
            converged: true,
        }
    }
}
