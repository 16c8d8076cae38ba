use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use thiserror::Error as ThisError;

use crate::config::ConfigError;
use crate::db::StoreError;

/// Failure while serving a visit request.
///
/// `Display` is the store's message verbatim; it becomes the 500 body.
#[derive(Debug, ThisError)]
pub enum VisitError {
    #[error("{0}")]
    Insert(StoreError),

    #[error("{0}")]
    Read(StoreError),
}

impl VisitError {
    pub fn stage(&self) -> &'static str {
        match self {
            VisitError::Insert(_) => "insert",
            VisitError::Read(_) => "read",
        }
    }
}

impl IntoResponse for VisitError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Failure before the server starts listening.
#[derive(Debug, ThisError)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to prepare database schema: {0}")]
    Schema(#[from] StoreError),
}
