//! DISC answer scoring: tally, 1-25 normalization, and profile interpretation.
//!
//! `ProfileScorer` is the single entry point. It owns the token map used to resolve submitted
//! selections and is otherwise stateless, so one instance is shared across request handlers.
//! `AssessmentService` wraps it with a `ResultRepository` when scored results must be kept.

pub mod content;
pub mod domain;
pub mod mapping;
pub mod normalize;
pub mod repository;
pub mod router;
pub mod selection;
pub mod service;
pub mod sheet;
mod tally;

#[cfg(test)]
mod tests;

pub use content::{Intensity, Interpretations, ProfileReport, TraitDescription};
pub use domain::{
    Answer, Diagnostic, Level, PerTrait, ProfileResult, QuestionId, SelectionField, TraitKey,
    TraitScore, TraitTally,
};
pub use mapping::{TokenMap, TokenMapError, TokenMapSource};
pub use normalize::normalize;
pub use repository::{
    AssessmentRecord, InMemoryResultRepository, RepositoryError, Respondent, ResultId,
    ResultRepository,
};
pub use router::scoring_router;
pub use service::{AssessmentError, AssessmentService};
pub use sheet::{AnswerPayload, AnswerSheetError};

use tracing::{debug, warn};

/// Failure to produce any scores at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("no answers submitted")]
    EmptyInput,
}

impl ScoringError {
    pub fn kind(&self) -> &'static str {
        match self {
            ScoringError::EmptyInput => "empty_input",
        }
    }
}

/// Scores finalized answer collections against a fixed token map.
#[derive(Debug, Clone, Default)]
pub struct ProfileScorer {
    tokens: TokenMap,
}

impl ProfileScorer {
    pub fn new(tokens: TokenMap) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    /// Scores one answer collection. Every submitted answer counts toward the normalization
    /// range, including answers excluded from the tally.
    pub fn score(&self, answers: &[Answer]) -> Result<ProfileResult, ScoringError> {
        if answers.is_empty() {
            return Err(ScoringError::EmptyInput);
        }

        let outcome = tally::tally_answers(answers, &self.tokens);
        for diagnostic in &outcome.diagnostics {
            warn!(question_id = %diagnostic.question_id(), "{}", diagnostic.summary());
        }

        let answer_count = answers.len();
        let raw_scores = outcome.tallies.map(|_, tally| tally.raw());
        let mut normalized_scores = PerTrait::<u8>::default();
        for (key, raw) in raw_scores.iter() {
            normalized_scores[key] = normalize(*raw, answer_count)?;
        }

        let levels = normalized_scores.map(|_, score| selection::level_for(*score));
        let (primary, secondary) = selection::primary_and_secondary(&normalized_scores);

        debug!(
            profile = %format!("{primary}{secondary}"),
            answers = answer_count,
            diagnostics = outcome.diagnostics.len(),
            "scored DISC profile"
        );

        Ok(ProfileResult {
            raw_scores,
            normalized_scores,
            strengths: content::strengths(&levels),
            weaknesses: content::weaknesses(&levels),
            recommendations: content::recommendations(primary),
            levels,
            primary,
            secondary,
            profile: format!("{primary}{secondary}"),
            tallies: outcome.tallies,
            answer_count,
            diagnostics: outcome.diagnostics,
        })
    }

    /// Scores and builds the narrative report in one step.
    pub fn score_with_report(
        &self,
        answers: &[Answer],
    ) -> Result<(ProfileResult, ProfileReport), ScoringError> {
        let result = self.score(answers)?;
        let report = ProfileReport::from_result(&result);
        Ok((result, report))
    }
}
