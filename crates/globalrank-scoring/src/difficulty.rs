//! Item difficulty on the logit scale.

use globalrank_core::errors::CalibrationError;

/// `ln(p / (1 - p))`.
pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Difficulty `b = -logit(p)` of an item whose base "yes" rate is `p`.
///
/// Items most people answer "yes" to are easy (negative `b`); rare ones are
/// hard. `p` must lie strictly inside (0, 1), otherwise the logit is
/// infinite or undefined and the item is rejected.
pub fn derive_difficulty(item_id: &str, p: f64) -> Result<f64, CalibrationError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(CalibrationError::InvalidProbability {
            item_id: item_id.to_string(),
            probability: p,
        });
    }
    Ok(-logit(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_odds_item_has_zero_difficulty() {
        assert_eq!(derive_difficulty("q", 0.5).unwrap(), 0.0);
    }

    #[test]
    fn rare_yes_means_hard_item() {
        let hard = derive_difficulty("q", 0.1).unwrap();
        let easy = derive_difficulty("q", 0.9).unwrap();
        assert!(hard > 0.0);
        assert!((hard + easy).abs() < 1e-12);
        assert!((hard - 9.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn boundary_and_non_finite_probabilities_rejected() {
        for p in [0.0, 1.0, -0.2, 1.5, f64::NAN, f64::INFINITY] {
            assert!(derive_difficulty("q", p).is_err(), "p = {p} accepted");
        }
    }
}
