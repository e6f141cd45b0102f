use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{Answer, PerTrait, TraitKey};
use crate::scoring::mapping::TokenMap;
use crate::scoring::repository::InMemoryResultRepository;
use crate::scoring::service::AssessmentService;
use crate::scoring::ProfileScorer;

pub(super) fn scorer() -> ProfileScorer {
    ProfileScorer::new(TokenMap::trait_keys())
}

pub(super) fn column_scorer() -> ProfileScorer {
    ProfileScorer::new(TokenMap::column_letters())
}

pub(super) fn service(scorer: ProfileScorer) -> Arc<AssessmentService<InMemoryResultRepository>> {
    service_with(scorer, Arc::new(InMemoryResultRepository::default()))
}

pub(super) fn service_with(
    scorer: ProfileScorer,
    repository: Arc<InMemoryResultRepository>,
) -> Arc<AssessmentService<InMemoryResultRepository>> {
    Arc::new(AssessmentService::new(Arc::new(scorer), repository))
}

/// Answers numbered from 1 in the order given.
pub(super) fn answers(picks: &[(&str, &str)]) -> Vec<Answer> {
    picks
        .iter()
        .enumerate()
        .map(|(index, (most, least))| Answer::new((index + 1).to_string().as_str(), *most, *least))
        .collect()
}

/// Four answers that all pick D as most and I as least.
pub(super) fn dominant_answers() -> Vec<Answer> {
    answers(&[("D", "I"), ("D", "I"), ("D", "I"), ("D", "I")])
}

pub(super) fn per_trait<T: Copy>(d: T, i: T, s: T, c: T) -> PerTrait<T> {
    PerTrait::from_fn(|key| match key {
        TraitKey::Dominance => d,
        TraitKey::Influence => i,
        TraitKey::Steadiness => s,
        TraitKey::Conformity => c,
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
