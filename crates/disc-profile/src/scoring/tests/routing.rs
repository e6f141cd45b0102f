use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::scoring::repository::InMemoryResultRepository;
use crate::scoring::router::{score_handler, scoring_router, ScoreRequest};
use crate::scoring::sheet::AnswerPayload;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn score_request(body: Value) -> Request<Body> {
    post_json("/api/v1/disc/score", body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn score_handler_returns_result_without_report_by_default() {
    let request = ScoreRequest {
        answers: AnswerPayload::List(dominant_answers()),
        include_report: false,
    };

    let response = score_handler(State(service(scorer())), Ok(axum::Json(request)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["profile"], "DS");
    assert_eq!(payload["result"]["normalizedScores"]["I"], 1);
    assert!(payload["scoredAt"].is_string());
    assert!(payload.get("report").is_none());
}

#[tokio::test]
async fn score_handler_rejects_empty_answers() {
    let request = ScoreRequest {
        answers: AnswerPayload::List(Vec::new()),
        include_report: true,
    };

    let response = score_handler(State(service(scorer())), Ok(axum::Json(request)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "empty_input");
    assert_eq!(payload["error"], "scoring error: no answers submitted");
}

#[tokio::test]
async fn score_route_accepts_keyed_answers_with_report() {
    let router = scoring_router(service(column_scorer()));

    let response = router
        .oneshot(score_request(json!({
            "answers": {
                "1": {"most": "A", "least": "B"},
                "2": {"mais": "A", "menos": "B"},
                "3": {"most": "C", "least": "C"}
            },
            "includeReport": true
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["primary"], "D");
    assert_eq!(payload["result"]["answerCount"], 3);
    assert_eq!(
        payload["result"]["diagnostics"][0]["kind"],
        "conflicting_selection"
    );
    assert!(payload["report"]["summary"]
        .as_str()
        .unwrap_or_default()
        .contains("Dominance"));
}

#[tokio::test]
async fn score_route_reports_unknown_tokens() {
    let router = scoring_router(service(scorer()));

    let response = router
        .oneshot(score_request(json!({
            "answers": [
                {"questionId": 1, "most": "Q", "least": "C"},
                {"questionId": 2, "most": "I", "least": "S"}
            ]
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let diagnostic = &payload["result"]["diagnostics"][0];
    assert_eq!(diagnostic["kind"], "unknown_token");
    assert_eq!(diagnostic["questionId"], "1");
    assert_eq!(diagnostic["field"], "most");
    assert_eq!(diagnostic["token"], "Q");
}

#[tokio::test]
async fn traits_route_lists_descriptions() {
    let router = scoring_router(service(scorer()));

    let response = router
        .oneshot(get("/api/v1/disc/traits"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let traits = payload.as_array().expect("array of traits");
    assert_eq!(traits.len(), 4);
    assert_eq!(traits[0]["key"], "D");
    assert_eq!(traits[3]["title"], "Conformity");
    assert!(traits[1]["howToWorkWith"].is_string());
}

#[tokio::test]
async fn malformed_score_body_returns_json_error_kind() {
    let router = scoring_router(service(scorer()));

    let response = router
        .oneshot(score_request(json!({
            "answers": [{"questionId": 1.5, "most": "D", "least": "I"}]
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE),
        Some(&header::HeaderValue::from_static("application/json"))
    );
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "invalid_body");
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("invalid request body"));
}

#[tokio::test]
async fn score_body_without_json_content_type_is_rejected() {
    let router = scoring_router(service(scorer()));

    let response = router
        .oneshot(
            Request::post("/api/v1/disc/score")
                .body(Body::from(r#"{"answers": []}"#))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json_body(response).await["kind"], "invalid_body");
}

#[tokio::test]
async fn recorded_results_can_be_fetched_by_id() {
    let router = scoring_router(service(scorer()));

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/disc/results",
            json!({
                "answers": [
                    {"questionId": 1, "most": "S", "least": "D"},
                    {"questionId": 2, "most": "S", "least": "I"}
                ],
                "respondent": {"name": "Ana", "email": "ana@example.com"}
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json_body(response).await;
    let id = created["id"].as_str().expect("id is a string").to_string();
    assert!(id.starts_with("res-"));
    assert_eq!(created["result"]["primary"], "S");
    assert!(created["recordedAt"].is_string());
    assert!(created.get("report").is_none());

    let response = router
        .oneshot(get(&format!("/api/v1/disc/results/{id}")))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let stored = read_json_body(response).await;
    assert_eq!(stored["id"], id.as_str());
    assert_eq!(stored["recordedAt"], created["recordedAt"]);
    assert_eq!(stored["respondent"]["name"], "Ana");
    assert_eq!(stored["answers"][1]["least"], "I");
    assert_eq!(stored["result"], created["result"]);
    assert_eq!(stored["report"]["interpretations"]["general"]["primary"]["key"], "S");
}

#[tokio::test]
async fn unknown_result_ids_return_not_found() {
    let router = scoring_router(service(scorer()));

    let response = router
        .oneshot(get("/api/v1/disc/results/res-missing"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "not_found");
    assert_eq!(payload["error"], "assessment error: result res-missing not found");
}

#[tokio::test]
async fn empty_submissions_are_not_stored() {
    let repository = Arc::new(InMemoryResultRepository::default());
    let router = scoring_router(service_with(scorer(), repository.clone()));

    let response = router
        .oneshot(post_json(
            "/api/v1/disc/results",
            json!({"answers": [], "includeReport": true}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(read_json_body(response).await["kind"], "empty_input");
    assert!(repository.is_empty().expect("repository readable"));
}
