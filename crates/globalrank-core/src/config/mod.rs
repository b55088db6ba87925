//! Configuration system for GlobalRank.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod item_bank_config;
pub mod rank_config;
pub mod scoring_config;

pub use item_bank_config::ItemBankConfig;
pub use rank_config::RankConfig;
pub use scoring_config::ScoringConfig;
