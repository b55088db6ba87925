//! Score → tier lookup.

use globalrank_core::models::Tier;

/// Exclusive upper score bound per tier, rarest first. Anything at or
/// above the last bound is [`Tier::GlobalCitizen`].
const TIER_THRESHOLDS: [(f64, Tier); 7] = [
    (0.1, Tier::SingularityClass),
    (0.5, Tier::VisionaryElite),
    (1.0, Tier::TopOnePercentElite),
    (5.0, Tier::WorldClass),
    (15.0, Tier::HighAchiever),
    (40.0, Tier::GlobalMiddleClass),
    (70.0, Tier::AspiringGlobal),
];

/// Tier for a "top X%" score. First bound with `score < bound` wins.
pub fn classify(score: f64) -> Tier {
    TIER_THRESHOLDS
        .iter()
        .find(|(bound, _)| score < *bound)
        .map_or(Tier::GlobalCitizen, |&(_, tier)| tier)
}

/// Exclusive upper bound of `tier`, or `None` for the open-ended last tier.
pub fn upper_bound(tier: Tier) -> Option<f64> {
    TIER_THRESHOLDS
        .iter()
        .find(|(_, t)| *t == tier)
        .map(|&(bound, _)| bound)
}
