use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::catalog::CatalogLoadError;

/// Invalid engine setup or a profile that does not fit the taxonomy
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Feature vocabulary is empty: the catalog has no tagged records")]
    EmptyVocabulary,

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Major '{major}' does not belong to department '{department}'")]
    UnknownMajor { department: String, major: String },

    #[error("Field '{field}' does not belong to major '{major}'")]
    UnknownField { major: String, field: String },

    #[error("Grade {0} is outside 1..=4")]
    GradeOutOfRange(u8),

    #[error("Feature matrix does not match catalog and vocabulary: {0}")]
    MatrixMismatch(String),
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog load error: {0}")]
    CatalogLoad(#[from] CatalogLoadError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Configuration(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::CatalogLoad(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
