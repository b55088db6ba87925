//! Seams between the engine and interchangeable implementations.

pub mod estimator;
pub mod scorer;

pub use estimator::IAbilityEstimator;
pub use scorer::IScorer;
