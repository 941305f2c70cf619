use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flowboard_graph::{ValidationError, Violation};
use flowboard_persist::PersistError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Flow not found")]
    FlowNotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Flow validation failed")]
    Validation(Vec<Violation>),

    #[error("Persistence error: {0}")]
    Persist(PersistError),
}

impl From<PersistError> for ApiError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::NotFound(key) => ApiError::FlowNotFound(key),
            other => ApiError::Persist(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.violations)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::FlowNotFound(ref key) => {
                tracing::debug!(key = %key, "Flow not found");
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
            ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ApiError::Validation(ref violations) => {
                let reasons: Vec<String> = violations.iter().map(Violation::to_string).collect();
                tracing::warn!(reasons = ?reasons, "Rejected invalid flow");
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": self.to_string(),
                        "reasons": reasons,
                        "violations": violations,
                    }),
                )
            }
            ApiError::Persist(ref e) => {
                tracing::error!("Persistence error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Storage error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let cases = [
            (ApiError::FlowNotFound("latest".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::Validation(Vec::new()), StatusCode::BAD_REQUEST),
            (
                ApiError::Persist(PersistError::Internal("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_is_mapped() {
        let err: ApiError = PersistError::NotFound("abc".into()).into();
        assert!(matches!(err, ApiError::FlowNotFound(key) if key == "abc"));
    }
}
