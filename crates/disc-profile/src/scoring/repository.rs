use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, ProfileResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional contact details submitted alongside the answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Respondent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A scored submission as kept by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: ResultId,
    pub recorded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<Respondent>,
    pub answers: Vec<Answer>,
    pub result: ProfileResult,
}

/// Storage abstraction for scored results.
pub trait ResultRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &ResultId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    pub fn kind(&self) -> &'static str {
        match self {
            RepositoryError::Conflict => "conflict",
            RepositoryError::Unavailable(_) => "unavailable",
        }
    }
}

/// Process-local repository. Records live as long as the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResultRepository {
    records: Arc<Mutex<HashMap<ResultId, AssessmentRecord>>>,
}

impl InMemoryResultRepository {
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.records()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.records()?.is_empty())
    }

    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ResultId, AssessmentRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))
    }
}

impl ResultRepository for InMemoryResultRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut records = self.records()?;
        if records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }
}
