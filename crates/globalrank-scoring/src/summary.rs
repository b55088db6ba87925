//! Submission summaries for logging collaborators.

use std::collections::BTreeMap;

use globalrank_core::constants::SCORE_ALGO_VERSION;
use globalrank_core::models::{AnsweredItem, ScoreResult, SubmissionSummary};

/// Flatten answered items and their score into a loggable record.
pub fn build(
    question_set_id: Option<&str>,
    answers: &[AnsweredItem],
    result: &ScoreResult,
) -> SubmissionSummary {
    let question_ids = answers.iter().map(|a| a.item_id.clone()).collect();
    let answer_values = answers.iter().map(|a| a.answer).collect();
    let answers_by_question_id = answers
        .iter()
        .map(|a| (a.item_id.clone(), a.answer))
        .collect();

    let times_by_question_id: BTreeMap<String, u64> = answers
        .iter()
        .filter_map(|a| a.latency_ms.map(|ms| (a.item_id.clone(), ms)))
        .collect();
    let total_quiz_time_ms = if times_by_question_id.is_empty() {
        None
    } else {
        Some(times_by_question_id.values().sum())
    };

    SubmissionSummary {
        question_set_id: question_set_id.map(str::to_string),
        score_algo_version: SCORE_ALGO_VERSION.to_string(),
        question_ids,
        answers: answer_values,
        answers_by_question_id,
        times_by_question_id,
        total_quiz_time_ms,
        score: result.score,
        tier: result.tier,
        yes_count: result.yes_count,
    }
}
