use crate::models::EstimationTrace;

/// Latent-ability estimation from binary responses.
pub trait IAbilityEstimator: Send + Sync {
    /// Estimate ability from responses aligned positionally with
    /// `difficulties`. Only the overlapping prefix is used.
    fn estimate(&self, responses: &[bool], difficulties: &[f64]) -> EstimationTrace;
}
