use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{Answer, ProfileResult};
use super::repository::{AssessmentRecord, RepositoryError, Respondent, ResultId, ResultRepository};
use super::{ProfileScorer, ScoringError};

/// Scores submissions and keeps the results retrievable by id.
pub struct AssessmentService<R> {
    scorer: Arc<ProfileScorer>,
    repository: Arc<R>,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_result_id() -> ResultId {
    let id = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResultId(format!("res-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(scorer: Arc<ProfileScorer>, repository: Arc<R>) -> Self {
        Self { scorer, repository }
    }

    pub fn scorer(&self) -> &ProfileScorer {
        &self.scorer
    }

    /// Scores without storing anything.
    pub fn score(&self, answers: &[Answer]) -> Result<ProfileResult, AssessmentError> {
        Ok(self.scorer.score(answers)?)
    }

    /// Scores the answers and stores the outcome under a fresh id.
    pub fn record(
        &self,
        answers: Vec<Answer>,
        respondent: Option<Respondent>,
    ) -> Result<AssessmentRecord, AssessmentError> {
        let result = self.scorer.score(&answers)?;
        let record = AssessmentRecord {
            id: next_result_id(),
            recorded_at: Utc::now(),
            respondent,
            answers,
            result,
        };

        let stored = self.repository.insert(record)?;
        info!(result_id = %stored.id, profile = %stored.result.profile, "stored DISC result");
        Ok(stored)
    }

    pub fn get(&self, id: &ResultId) -> Result<AssessmentRecord, AssessmentError> {
        self.repository
            .fetch(id)?
            .ok_or_else(|| AssessmentError::NotFound(id.clone()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("result {0} not found")]
    NotFound(ResultId),
}

impl AssessmentError {
    pub fn kind(&self) -> &'static str {
        match self {
            AssessmentError::Scoring(err) => err.kind(),
            AssessmentError::Repository(err) => err.kind(),
            AssessmentError::NotFound(_) => "not_found",
        }
    }
}
