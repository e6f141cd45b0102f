use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{catalog, ProfileReport};
use super::domain::ProfileResult;
use super::repository::{AssessmentRecord, Respondent, ResultId, ResultRepository};
use super::service::AssessmentService;
use super::sheet::AnswerPayload;
use crate::error::AppError;

/// Body accepted by the scoring endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub answers: AnswerPayload,
    #[serde(default)]
    pub include_report: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub scored_at: DateTime<Utc>,
    pub result: ProfileResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ProfileReport>,
}

/// Body accepted when a result should be kept for later retrieval.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    pub answers: AnswerPayload,
    #[serde(default)]
    pub respondent: Option<Respondent>,
    #[serde(default)]
    pub include_report: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub id: ResultId,
    pub recorded_at: DateTime<Utc>,
    pub result: ProfileResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ProfileReport>,
}

/// A stored record together with its freshly built report.
#[derive(Debug, Clone, Serialize)]
pub struct StoredResultView {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    pub report: ProfileReport,
}

/// Router builder exposing the scoring and result endpoints.
pub fn scoring_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route("/api/v1/disc/score", post(score_handler::<R>))
        .route("/api/v1/disc/results", post(record_handler::<R>))
        .route("/api/v1/disc/results/:id", get(result_handler::<R>))
        .route("/api/v1/disc/traits", get(traits_handler))
        .with_state(service)
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    payload: Result<axum::Json<ScoreRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    R: ResultRepository + 'static,
{
    let axum::Json(request) = payload?;
    let result = service.score(&request.answers.into_answers())?;
    let report = request
        .include_report
        .then(|| ProfileReport::from_result(&result));

    let body = ScoreResponse {
        scored_at: Utc::now(),
        result,
        report,
    };
    Ok((StatusCode::OK, axum::Json(body)).into_response())
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    payload: Result<axum::Json<RecordRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    R: ResultRepository + 'static,
{
    let axum::Json(request) = payload?;
    let record = service.record(request.answers.into_answers(), request.respondent)?;
    let report = request
        .include_report
        .then(|| ProfileReport::from_result(&record.result));

    let body = RecordResponse {
        id: record.id,
        recorded_at: record.recorded_at,
        result: record.result,
        report,
    };
    Ok((StatusCode::CREATED, axum::Json(body)).into_response())
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(result_id): Path<String>,
) -> Result<Response, AppError>
where
    R: ResultRepository + 'static,
{
    let record = service.get(&ResultId(result_id))?;
    let report = ProfileReport::from_result(&record.result);
    let view = StoredResultView { record, report };
    Ok((StatusCode::OK, axum::Json(view)).into_response())
}

pub(crate) async fn traits_handler() -> Response {
    (StatusCode::OK, axum::Json(catalog())).into_response()
}
