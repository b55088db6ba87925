//! RankErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable error code string
/// for log consumers and foreign-language bindings.
pub trait RankErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_CALIBRATION: &str = "INVALID_CALIBRATION";
pub const ITEM_BANK_ERROR: &str = "ITEM_BANK_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
