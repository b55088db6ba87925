//! Item calibration errors.

use super::error_code::{self, RankErrorCode};

/// Raised when an item's base probability cannot be turned into a
/// finite difficulty. The whole item bank is rejected when this occurs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    #[error("item {item_id}: base probability {probability} is outside (0, 1)")]
    InvalidProbability { item_id: String, probability: f64 },
}

impl RankErrorCode for CalibrationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CALIBRATION
    }
}
