#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Grading orchestration: validate the request, resolve the submission type,
//! render the matching template, and invoke the chat backend for the report.
//!
//! The flow is linear with no loops and no retries. The two outbound calls
//! (optional classifier refinement, mandatory grading generation) are awaited
//! sequentially; the grading call depends on the classifier's output.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    classify::{
        self, ClassificationOutcome, Provenance, SubmissionType, agent, heuristic,
    },
    error::GradeError,
    prompts::{self, PromptCatalog},
    provider::ChatProvider,
};

/// Sampling temperature for grading calls; kept low for consistency across
/// resubmissions of the same work.
pub const GRADING_TEMPERATURE: f32 = 0.1;

/// A request to grade one piece of student work.
#[derive(Debug, Clone, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct GradingRequest {
    /// The text to grade. Must be non-empty after trimming.
    #[builder(setter(into))]
    #[serde(default)]
    pub student_work:    String,
    /// Free-text grading criteria; a fixed default rubric applies when
    /// omitted.
    #[builder(default, setter(strip_option, into))]
    #[serde(default)]
    pub rubric:          Option<String>,
    /// Explicit type override. When set, no classification work is done.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub submission_type: Option<SubmissionType>,
}

/// The grading report returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// The model's full textual response.
    pub result:        String,
    /// The submission type the grading prompt was selected for.
    pub detected_type: SubmissionType,
    /// How the type was decided. Not part of the wire contract.
    #[serde(skip)]
    pub provenance:    Provenance,
}

/// Orchestrates one grading request end to end against a shared chat
/// provider. Holds no per-request state.
pub struct Grader {
    /// Embedded prompt templates.
    catalog:            PromptCatalog,
    /// Chat backend used for both classification and grading calls.
    provider:           Arc<dyn ChatProvider>,
    /// Whether the AI classifier second opinion is enabled.
    refinement_enabled: bool,
}

impl Grader {
    /// Builds a grader over the given provider.
    pub fn new<P>(provider: Arc<P>, refinement_enabled: bool) -> Self
    where
        P: ChatProvider + 'static,
    {
        Self {
            catalog: PromptCatalog::load(),
            provider,
            refinement_enabled,
        }
    }

    /// Grades one submission.
    ///
    /// Validation failures surface as [`GradeError::InvalidInput`] before any
    /// outbound call is made. Generation failures surface as
    /// [`GradeError::Generation`] and are not retried. Classifier failures
    /// never surface; that step degrades locally.
    pub async fn grade(&self, request: GradingRequest) -> Result<GradingResult, GradeError> {
        if request.student_work.trim().is_empty() {
            return Err(GradeError::InvalidInput);
        }

        let outcome = self.resolve_type(&request).await;
        tracing::info!(
            detected = %outcome.kind,
            provenance = ?outcome.provenance,
            "resolved submission type"
        );

        let template = self.catalog.grading_template(Some(outcome.kind));
        let prompt =
            prompts::render_grading(template, request.rubric.as_deref(), &request.student_work)
                .map_err(GradeError::Other)?;

        let result = self.provider.complete(&prompt, GRADING_TEMPERATURE).await?;

        Ok(GradingResult {
            result,
            detected_type: outcome.kind,
            provenance: outcome.provenance,
        })
    }

    /// Resolves the submission type: explicit override wins outright, then a
    /// heuristic guess, refined by the AI classifier only when the guess is
    /// ambiguous enough to warrant the cost.
    async fn resolve_type(&self, request: &GradingRequest) -> ClassificationOutcome {
        if let Some(kind) = request.submission_type {
            return ClassificationOutcome {
                kind,
                provenance: Provenance::Explicit,
            };
        }

        let guess = heuristic::detect(&request.student_work);
        if self.refinement_enabled && classify::needs_refinement(guess, &request.student_work) {
            let kind =
                agent::classify(&request.student_work, &self.catalog, self.provider.as_ref())
                    .await;
            return ClassificationOutcome {
                kind,
                provenance: Provenance::Refined,
            };
        }

        ClassificationOutcome {
            kind: guess,
            provenance: Provenance::Heuristic,
        }
    }
}
