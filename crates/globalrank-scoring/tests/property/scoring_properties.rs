use globalrank_core::models::Tier;
use globalrank_scoring::estimator::NewtonRaphsonEstimator;
use globalrank_scoring::mapper::map_to_score;
use globalrank_scoring::normal::{erf, norm_cdf};
use globalrank_scoring::tier::classify;
use proptest::prelude::*;

/// Answer sheets paired with mixed difficulties. Kept to sizes and ranges
/// where Newton-Raphson converges well inside the cap.
fn arb_sheet() -> impl Strategy<Value = (Vec<bool>, Vec<f64>)> {
    (1usize..=20).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(-2.5f64..2.5, n),
        )
    })
}

// ── Monotonicity ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn flipping_a_no_to_yes_never_lowers_theta(
        (answers, difficulties) in arb_sheet(),
        pick in any::<prop::sample::Index>(),
    ) {
        let est = NewtonRaphsonEstimator::new();
        let no_positions: Vec<usize> = (0..answers.len()).filter(|&i| !answers[i]).collect();
        prop_assume!(!no_positions.is_empty());

        let mut better = answers.clone();
        better[no_positions[pick.index(no_positions.len())]] = true;

        let before = est.estimate(&answers, &difficulties);
        let after = est.estimate(&better, &difficulties);
        prop_assert!(after >= before, "{} < {}", after, before);
    }

    #[test]
    fn all_no_negative_all_yes_positive(
        difficulties in prop::collection::vec(-2.5f64..2.5, 1..=20),
    ) {
        let est = NewtonRaphsonEstimator::new();
        let n = difficulties.len();
        prop_assert!(est.estimate(&vec![false; n], &difficulties) < 0.0);
        prop_assert!(est.estimate(&vec![true; n], &difficulties) > 0.0);
    }
}

// ── Termination ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn long_sheets_stay_finite_within_cap(
        answers in prop::collection::vec(any::<bool>(), 0..=1000),
        difficulties in prop::collection::vec(-5.0f64..5.0, 0..=1000),
    ) {
        let trace = NewtonRaphsonEstimator::new().estimate_with_trace(&answers, &difficulties);
        prop_assert!(trace.theta.is_finite());
        prop_assert!(trace.iterations <= 40);
    }
}

// ── Mapping ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn erf_is_odd(x in 1e-6f64..10.0) {
        prop_assert_eq!(erf(-x), -erf(x));
    }

    #[test]
    fn cdf_reflects(x in -8.0f64..8.0) {
        prop_assert!((norm_cdf(-x) - (1.0 - norm_cdf(x))).abs() < 1e-8);
    }

    #[test]
    fn score_in_range_and_tier_consistent(theta in -50.0f64..50.0) {
        let score = map_to_score(theta);
        prop_assert!((0.0..=100.0).contains(&score));

        let tier = classify(score);
        let rank = Tier::ALL.iter().position(|t| *t == tier).unwrap();
        // A strictly better score never lands in a more common tier.
        let better = classify(score / 2.0);
        let better_rank = Tier::ALL.iter().position(|t| *t == better).unwrap();
        prop_assert!(better_rank <= rank);
    }
}
