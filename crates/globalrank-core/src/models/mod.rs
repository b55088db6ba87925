//! Value types shared between the scoring engine and its collaborators.

pub mod answered_item;
pub mod estimation_trace;
pub mod item_definition;
pub mod score_result;
pub mod submission_summary;
pub mod tier;

pub use answered_item::AnsweredItem;
pub use estimation_trace::EstimationTrace;
pub use item_definition::{ItemBankFile, ItemDefinition};
pub use score_result::ScoreResult;
pub use submission_summary::SubmissionSummary;
pub use tier::Tier;
