//! Error handling for GlobalRank.
//! One error enum per subsystem, `thiserror` only.

pub mod calibration_error;
pub mod config_error;
pub mod error_code;
pub mod item_bank_error;

pub use calibration_error::CalibrationError;
pub use config_error::ConfigError;
pub use error_code::RankErrorCode;
pub use item_bank_error::ItemBankError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("Calibration error: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("Item bank error: {0}")]
    ItemBank(#[from] ItemBankError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl RankErrorCode for RankError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Calibration(e) => e.error_code(),
            Self::ItemBank(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type RankResult<T> = Result<T, RankError>;
