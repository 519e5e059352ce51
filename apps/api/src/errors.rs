use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::jobs::source::JobSourceError;
use crate::matching::MatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] MatchError),

    #[error("File processing error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Job source error: {0}")]
    JobSource(#[from] JobSourceError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::Extraction(ExtractionError::UnsupportedFileType(_)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FILE_TYPE")
            }
            AppError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_FAILED"),
            AppError::JobSource(JobSourceError::NotConfigured) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            AppError::JobSource(_) => (StatusCode::BAD_GATEWAY, "JOB_SOURCE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidInput(e) => e.to_string(),
            AppError::Extraction(e) => format!("Error processing file: {e}"),
            AppError::JobSource(JobSourceError::NotConfigured) => {
                JobSourceError::NotConfigured.to_string()
            }
            AppError::JobSource(e) => {
                tracing::error!("Job source error: {e}");
                "The job listing source could not be reached".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_maps_to_bad_request() {
        let err = AppError::from(MatchError::EmptyJobDescription);
        assert_eq!(
            err.status_and_code(),
            (StatusCode::BAD_REQUEST, "INVALID_INPUT")
        );
    }

    #[test]
    fn test_unsupported_file_maps_to_415() {
        let err = AppError::from(ExtractionError::UnsupportedFileType("png".to_string()));
        assert_eq!(err.status_and_code().0, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_job_source_errors() {
        let missing = AppError::from(JobSourceError::NotConfigured);
        assert_eq!(missing.status_and_code().0, StatusCode::SERVICE_UNAVAILABLE);

        let upstream = AppError::from(JobSourceError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(upstream.status_and_code().0, StatusCode::BAD_GATEWAY);
    }
}
