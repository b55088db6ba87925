//! MAP ability estimation under a Rasch model with a N(0, 1) prior.
//!
//! ```text
//! P(yes_i | θ) = σ(θ - b_i)
//! g(θ) = -θ + Σ (y_i - P_i)
//! h(θ) = -1 - Σ P_i (1 - P_i)
//! θ ← θ - g / h
//! ```
//!
//! `h ≤ -1` everywhere, so the log-posterior is strictly concave and every
//! step is well defined, including for all-yes and all-no sequences.

use globalrank_core::config::ScoringConfig;
use globalrank_core::constants::{DEFAULT_CONVERGENCE_TOLERANCE, DEFAULT_MAX_ITERATIONS};
use globalrank_core::models::EstimationTrace;
use globalrank_core::traits::IAbilityEstimator;

/// Logistic function.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Newton-Raphson MAP estimator.
#[derive(Debug, Clone, Copy)]
pub struct NewtonRaphsonEstimator {
    max_iterations: u32,
    tolerance: f64,
}

impl NewtonRaphsonEstimator {
    /// Estimator with the default cap (40) and tolerance (1e-8).
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            max_iterations: config.effective_max_iterations(),
            tolerance: config.effective_convergence_tolerance(),
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// MAP estimate of θ. Only the first `min(responses, difficulties)`
    /// pairs are used; an empty overlap returns the prior mean 0.
    pub fn estimate(&self, responses: &[bool], difficulties: &[f64]) -> f64 {
        self.estimate_with_trace(responses, difficulties).theta
    }

    /// Like [`estimate`](Self::estimate), also reporting iteration count
    /// and whether the step fell below tolerance before the cap.
    pub fn estimate_with_trace(&self, responses: &[bool], difficulties: &[f64]) -> EstimationTrace {
        let n = responses.len().min(difficulties.len());
        if n == 0 {
            return EstimationTrace::prior();
        }
        let responses = &responses[..n];
        let difficulties = &difficulties[..n];

        let mut theta = 0.0;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            let mut grad = -theta;
            let mut hess = -1.0;

            for (&answer, &b) in responses.iter().zip(difficulties) {
                let p_yes = sigmoid(theta - b);
                let y = if answer { 1.0 } else { 0.0 };
                grad += y - p_yes;
                hess -= p_yes * (1.0 - p_yes);
            }

            let step = grad / hess;
            theta -= step;
            iterations += 1;

            if step.abs() < self.tolerance {
                converged = true;
                break;
            }
        }

        EstimationTrace {
            theta,
            iterations,
            converged,
        }
    }
}

impl Default for NewtonRaphsonEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl IAbilityEstimator for NewtonRaphsonEstimator {
    fn estimate(&self, responses: &[bool], difficulties: &[f64]) -> EstimationTrace {
        self.estimate_with_trace(responses, difficulties)
    }
}
