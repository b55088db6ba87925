//! Item bank loading and response alignment errors.

use super::calibration_error::CalibrationError;
use super::error_code::{self, RankErrorCode};

/// Errors raised while loading an item bank or resolving answers against it.
#[derive(Debug, thiserror::Error)]
pub enum ItemBankError {
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    #[error("duplicate item id in bank: {id}")]
    DuplicateItem { id: String },

    #[error("answer references unknown item: {id}")]
    UnknownItem { id: String },

    #[error("item answered more than once: {id}")]
    DuplicateResponse { id: String },

    #[error("Item bank file not found: {path}")]
    FileNotFound { path: String },

    #[error("Item bank parse error in {path}: {message}")]
    ParseError { path: String, message: String },
}

impl RankErrorCode for ItemBankError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Calibration(e) => e.error_code(),
            _ => error_code::ITEM_BANK_ERROR,
        }
    }
}
