//! ScoringEngine: implements IScorer over a calibrated item bank.

use std::collections::HashSet;
use std::path::Path;

use globalrank_core::config::{RankConfig, ScoringConfig};
use globalrank_core::errors::{ConfigError, ItemBankError, RankResult};
use globalrank_core::models::{AnsweredItem, EstimationTrace, ScoreResult, SubmissionSummary};
use globalrank_core::traits::{IAbilityEstimator, IScorer};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::estimator::NewtonRaphsonEstimator;
use crate::item_bank::ItemBank;
use crate::{mapper, summary};

/// Scores quiz answers against one item bank.
///
/// Immutable after construction; share it behind an `Arc` to score from
/// many threads.
pub struct ScoringEngine {
    bank: ItemBank,
    estimator: Box<dyn IAbilityEstimator>,
}

impl ScoringEngine {
    /// Engine with the default Newton-Raphson estimator.
    pub fn new(bank: ItemBank) -> Self {
        Self::with_estimator(bank, Box::new(NewtonRaphsonEstimator::new()))
    }

    /// Engine whose estimator takes its cap and tolerance from `config`.
    pub fn with_config(bank: ItemBank, config: &ScoringConfig) -> Self {
        Self::with_estimator(bank, Box::new(NewtonRaphsonEstimator::from_config(config)))
    }

    pub fn with_estimator(bank: ItemBank, estimator: Box<dyn IAbilityEstimator>) -> Self {
        Self { bank, estimator }
    }

    /// Load the configured item bank and build an engine around it.
    pub fn from_config(config: &RankConfig) -> RankResult<Self> {
        RankConfig::validate(config)?;
        let path = config
            .item_bank
            .path
            .as_deref()
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "item_bank.path".to_string(),
                message: "required to build a scoring engine".to_string(),
            })?;

        let mut bank = ItemBank::load(Path::new(path))?;
        if let Some(ref id) = config.item_bank.question_set_id {
            bank = bank.with_question_set_id(id.clone());
        }

        Ok(Self::with_config(bank, &config.scoring))
    }

    pub fn bank(&self) -> &ItemBank {
        &self.bank
    }

    /// Run the estimator on positionally aligned answers.
    pub fn estimate(&self, answers: &[bool]) -> EstimationTrace {
        self.estimator.estimate(answers, self.bank.difficulties())
    }

    /// Score many answer sheets in parallel. Output order matches input.
    pub fn score_batch(&self, sheets: &[Vec<bool>]) -> Vec<ScoreResult> {
        sheets.par_iter().map(|answers| self.score(answers)).collect()
    }

    /// Score id-tagged answers and build the record a logger would store.
    pub fn summarize(&self, answers: &[AnsweredItem]) -> Result<SubmissionSummary, ItemBankError> {
        let result = self.score_answered(answers)?;
        Ok(summary::build(self.bank.question_set_id(), answers, &result))
    }

    /// Resolve id-tagged answers into parallel answer/difficulty vectors.
    fn align(&self, answers: &[AnsweredItem]) -> Result<(Vec<bool>, Vec<f64>), ItemBankError> {
        let mut seen = HashSet::with_capacity(answers.len());
        let mut responses = Vec::with_capacity(answers.len());
        let mut difficulties = Vec::with_capacity(answers.len());

        for answered in answers {
            let item = self
                .bank
                .get(&answered.item_id)
                .ok_or_else(|| ItemBankError::UnknownItem {
                    id: answered.item_id.clone(),
                })?;
            if !seen.insert(answered.item_id.as_str()) {
                return Err(ItemBankError::DuplicateResponse {
                    id: answered.item_id.clone(),
                });
            }
            responses.push(answered.answer);
            difficulties.push(item.difficulty());
        }

        Ok((responses, difficulties))
    }

    fn finish(&self, trace: EstimationTrace, yes_count: usize, total: usize) -> ScoreResult {
        if !trace.converged {
            warn!(
                theta = trace.theta,
                iterations = trace.iterations,
                "estimator hit iteration cap; using last iterate"
            );
        }
        let result = mapper::score_result(trace.theta, yes_count, total);
        debug!(
            theta = trace.theta,
            iterations = trace.iterations,
            converged = trace.converged,
            score = result.score,
            tier = %result.tier,
            "scored submission"
        );
        result
    }
}

impl IScorer for ScoringEngine {
    fn score(&self, answers: &[bool]) -> ScoreResult {
        if answers.len() != self.bank.len() {
            warn!(
                answers = answers.len(),
                items = self.bank.len(),
                "answer count differs from item bank size; scoring overlapping prefix"
            );
        }
        let trace = self.estimate(answers);
        let yes_count = answers.iter().filter(|&&a| a).count();
        self.finish(trace, yes_count, answers.len())
    }

    fn score_answered(&self, answers: &[AnsweredItem]) -> Result<ScoreResult, ItemBankError> {
        let (responses, difficulties) = self.align(answers)?;
        let trace = self.estimator.estimate(&responses, &difficulties);
        let yes_count = responses.iter().filter(|&&a| a).count();
        Ok(self.finish(trace, yes_count, responses.len()))
    }
}
