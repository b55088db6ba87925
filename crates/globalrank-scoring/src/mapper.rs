//! Ability → public score.

use globalrank_core::models::ScoreResult;

use crate::normal::norm_cdf;
use crate::tier::classify;

/// "Top X%" score for ability `theta`: `(1 - Φ(θ)) · 100`, within [0, 100].
pub fn map_to_score(theta: f64) -> f64 {
    let top_share = (1.0 - norm_cdf(theta)).clamp(0.0, 1.0);
    (top_share * 100.0).clamp(0.0, 100.0)
}

/// Assemble the result value. `yes_count` and `total_questions` describe
/// the raw answers, not just the part the estimator used.
pub fn score_result(theta: f64, yes_count: usize, total_questions: usize) -> ScoreResult {
    let score = map_to_score(theta);
    ScoreResult {
        score,
        tier: classify(score),
        yes_count,
        total_questions,
    }
}
