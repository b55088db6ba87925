//! Item bank location.

use serde::{Deserialize, Serialize};

/// Where the calibrated question set is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ItemBankConfig {
    /// Path to a `.toml` or `.json` item bank file.
    pub path: Option<String>,
    /// Overrides the `question_set_id` declared in the file.
    pub question_set_id: Option<String>,
}
