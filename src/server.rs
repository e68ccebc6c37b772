#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! HTTP surface: a single grading endpoint plus a liveness probe. One handler
//! execution per inbound call; the only shared resource is the stateless
//! grader handle.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    error::GradeError,
    grade::{Grader, GradingRequest, GradingResult},
};

/// Builds the service router over a shared grader.
pub fn router(grader: Arc<Grader>) -> Router {
    Router::new()
        .route("/api/grade", post(grade_handler))
        .route("/health", get(health_handler))
        .with_state(grader)
}

/// Binds and serves the grading API until the process is stopped.
pub async fn serve(addr: SocketAddr, grader: Arc<Grader>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind to {addr}"))?;
    tracing::info!(%addr, "grading service listening");

    axum::serve(listener, router(grader))
        .await
        .context("grading service terminated unexpectedly")
}

/// `POST /api/grade`: runs the grading pipeline and returns the report.
///
/// The body extractor's rejection is folded into [`GradeError`] so that every
/// error response, including an unparseable body, keeps the JSON `error`
/// shape.
async fn grade_handler(
    State(grader): State<Arc<Grader>>,
    payload: Result<Json<GradingRequest>, JsonRejection>,
) -> Result<Json<GradingResult>, GradeError> {
    let Json(request) =
        payload.map_err(|rejection| GradeError::MalformedBody(rejection.body_text()))?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        chars = request.student_work.len(),
        has_rubric = request.rubric.is_some(),
        explicit_type = ?request.submission_type,
        "grading request received"
    );

    let result = grader.grade(request).await?;

    tracing::info!(
        %request_id,
        detected = %result.detected_type,
        result_len = result.result.len(),
        "grading request completed"
    );
    Ok(Json(result))
}

/// `GET /health`: liveness probe.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
