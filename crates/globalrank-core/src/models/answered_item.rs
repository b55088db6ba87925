use serde::{Deserialize, Serialize};

/// A single response bound to the item it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredItem {
    pub item_id: String,
    pub answer: bool,
    /// Time spent on the question, if the presentation layer measured it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl AnsweredItem {
    pub fn new(item_id: impl Into<String>, answer: bool) -> Self {
        Self {
            item_id: item_id.into(),
            answer,
            latency_ms: None,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }
}
