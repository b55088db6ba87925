use serde::{Deserialize, Serialize};

use super::Tier;

/// Result shown to the respondent: "you are in the top `score`%".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Top share in percent, within [0, 100]. Smaller is rarer.
    pub score: f64,
    #[serde(rename = "tierKey")]
    pub tier: Tier,
    pub yes_count: usize,
    pub total_questions: usize,
}

impl ScoreResult {
    pub fn tier_key(&self) -> &'static str {
        self.tier.key()
    }
}
