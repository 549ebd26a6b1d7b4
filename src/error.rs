use axum::{extract::rejection::JsonRejection, http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::RecordError;
use crate::orchestrator::GenerationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("page {0} not found")] NotFound(Uuid),
    #[error("page {0} has nothing generated yet")] NothingGenerated(Uuid),
    #[error(transparent)] Body(#[from] JsonRejection),
    #[error(transparent)] Record(#[from] RecordError),
    #[error(transparent)] Generation(#[from] GenerationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::NothingGenerated(_) => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Record(RecordError::LastAdvantage) => StatusCode::CONFLICT,
            ApiError::Record(RecordError::AdvantageOutOfRange { .. }) => StatusCode::NOT_FOUND,
            ApiError::Record(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Generation(GenerationError::Extraction { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Generation(GenerationError::AllProvidersFailed { .. }) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Generation(GenerationError::AllProvidersFailed { attempts }) => {
                json!({ "error": self.to_string(), "attempts": attempts })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
