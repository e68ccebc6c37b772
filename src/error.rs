#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Error taxonomy for the grading pipeline and its HTTP mapping.
//!
//! Classification failures never appear here: the AI refinement step
//! recovers locally and is invisible to callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

/// A failure surfaced to the caller of the grading pipeline.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The request carried no student work after trimming. Never retried.
    #[error("Student work is required")]
    InvalidInput,

    /// The request body could not be parsed against the grading contract.
    #[error("{0}")]
    MalformedBody(String),

    /// The mandatory grading-generation call failed. Surfaced as an upstream
    /// error; never retried automatically.
    #[error("grading generation failed: {0}")]
    Generation(#[from] ProviderError),

    /// Any other failure during orchestration.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GradeError {
    /// HTTP status this error maps to on the wire.
    pub fn status(&self) -> StatusCode {
        match self {
            GradeError::InvalidInput | GradeError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GradeError::Generation(_) => StatusCode::BAD_GATEWAY,
            GradeError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GradeError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            GradeError::InvalidInput => {
                tracing::info!("rejected grading request with empty student work");
            }
            GradeError::MalformedBody(detail) => {
                tracing::info!(%detail, "rejected grading request with an unparseable body");
            }
            GradeError::Generation(err) => {
                tracing::error!(error = %err, "grading generation call failed");
            }
            GradeError::Other(err) => {
                tracing::error!(error = ?err, "unhandled failure in grading pipeline");
            }
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
