//! # globalrank-scoring
//!
//! Score estimation for the GlobalRank quiz.
//!
//! Pipeline: item probabilities → difficulties (once, at load) →
//! MAP ability estimate → "top X%" score → tier.

pub mod difficulty;
pub mod engine;
pub mod estimator;
pub mod item_bank;
pub mod mapper;
pub mod normal;
pub mod summary;
pub mod tier;

pub use difficulty::derive_difficulty;
pub use engine::ScoringEngine;
pub use estimator::NewtonRaphsonEstimator;
pub use item_bank::{Item, ItemBank};
pub use mapper::map_to_score;
pub use tier::classify;
