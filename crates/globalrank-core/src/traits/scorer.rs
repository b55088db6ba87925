use crate::errors::ItemBankError;
use crate::models::{AnsweredItem, ScoreResult};

/// Turns a respondent's answers into a public score.
pub trait IScorer: Send + Sync {
    /// Score answers aligned positionally with the item bank.
    fn score(&self, answers: &[bool]) -> ScoreResult;

    /// Score answers that carry their item ids.
    fn score_answered(&self, answers: &[AnsweredItem]) -> Result<ScoreResult, ItemBankError>;
}
