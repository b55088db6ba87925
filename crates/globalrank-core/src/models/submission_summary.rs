use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Tier;

/// Everything a logging collaborator records about one finished quiz.
/// The engine builds it; it never stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub question_set_id: Option<String>,
    pub score_algo_version: String,
    /// Item ids in the order they were answered.
    pub question_ids: Vec<String>,
    pub answers: Vec<bool>,
    pub answers_by_question_id: BTreeMap<String, bool>,
    /// Only items with a measured latency appear here.
    pub times_by_question_id: BTreeMap<String, u64>,
    /// Sum of measured latencies; `None` when nothing was measured.
    pub total_quiz_time_ms: Option<u64>,
    pub score: f64,
    pub tier: Tier,
    pub yes_count: usize,
}
