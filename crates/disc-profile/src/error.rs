use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::config::ConfigError;
use crate::scoring::repository::RepositoryError;
use crate::scoring::service::AssessmentError;
use crate::scoring::{AnswerSheetError, ScoringError, TokenMapError};
use crate::telemetry::TelemetryError;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Scoring(ScoringError),
    TokenMap(TokenMapError),
    Input(AnswerSheetError),
    InvalidBody(JsonRejection),
    Assessment(AssessmentError),
}

impl AppError {
    /// Machine-readable tag carried in error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Telemetry(_) => "telemetry",
            AppError::Io(_) => "io",
            AppError::Scoring(err) => err.kind(),
            AppError::TokenMap(_) => "token_map",
            AppError::Input(_) => "invalid_input",
            AppError::InvalidBody(_) => "invalid_body",
            AppError::Assessment(err) => err.kind(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Scoring(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Input(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Assessment(AssessmentError::Scoring(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Assessment(AssessmentError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Assessment(AssessmentError::Repository(RepositoryError::Conflict)) => {
                StatusCode::CONFLICT
            }
            AppError::Assessment(AssessmentError::Repository(RepositoryError::Unavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::TokenMap(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::TokenMap(err) => write!(f, "token map error: {}", err),
            AppError::Input(err) => write!(f, "input error: {}", err),
            AppError::InvalidBody(err) => write!(f, "invalid request body: {}", err.body_text()),
            AppError::Assessment(err) => write!(f, "assessment error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::TokenMap(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::InvalidBody(err) => Some(err),
            AppError::Assessment(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));
        (self.status(), body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<TokenMapError> for AppError {
    fn from(value: TokenMapError) -> Self {
        Self::TokenMap(value)
    }
}

impl From<AnswerSheetError> for AppError {
    fn from(value: AnswerSheetError) -> Self {
        Self::Input(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        match value {
            AssessmentError::Scoring(err) => Self::Scoring(err),
            other => Self::Assessment(other),
        }
    }
}
