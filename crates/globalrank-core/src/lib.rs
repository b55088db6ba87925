//! # globalrank-core
//!
//! Foundation crate for the GlobalRank scoring engine.
//! Defines types, traits, errors, config, tracing setup, and constants.
//! The scoring crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RankConfig;
pub use errors::{RankError, RankResult};
pub use models::{AnsweredItem, EstimationTrace, ScoreResult, SubmissionSummary, Tier};
