//! Estimator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONVERGENCE_TOLERANCE, DEFAULT_MAX_ITERATIONS};

/// Configuration for the ability estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Newton-Raphson iteration cap. Default: 40.
    pub max_iterations: Option<u32>,
    /// Step size below which iteration stops. Default: 1e-8.
    pub convergence_tolerance: Option<f64>,
}

impl ScoringConfig {
    /// Returns the effective iteration cap, defaulting to 40.
    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    /// Returns the effective convergence tolerance, defaulting to 1e-8.
    pub fn effective_convergence_tolerance(&self) -> f64 {
        self.convergence_tolerance
            .unwrap_or(DEFAULT_CONVERGENCE_TOLERANCE)
    }
}
