use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ItemBankError;

/// One question as it appears in an item bank file, before calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    /// Population share answering "yes", strictly inside (0, 1).
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, probability: f64) -> Self {
        Self {
            id: id.into(),
            probability,
            category: None,
        }
    }
}

/// On-disk item bank: an ordered question set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemBankFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_set_id: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

impl ItemBankFile {
    /// Parse an item bank from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ItemBankError> {
        toml::from_str(toml_str).map_err(|e| ItemBankError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse an item bank from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, ItemBankError> {
        serde_json::from_str(json_str).map_err(|e| ItemBankError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load an item bank file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, ItemBankError> {
        let content = std::fs::read_to_string(path).map_err(|_| ItemBankError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed: Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| ItemBankError::ParseError {
            path: path.display().to_string(),
            message,
        })
    }
}
