#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Immutable prompt catalog and placeholder rendering. One grading template
//! exists per submission type plus a default, all embedded in the binary and
//! loaded once at startup.

use anyhow::{Result, ensure};

use crate::classify::SubmissionType;

/// Rubric substituted whenever the caller supplies none.
pub const DEFAULT_RUBRIC: &str = "Grade on clarity, organization, and accuracy.";

/// Prompt assets used by the grading and classification pipeline.
#[derive(Clone)]
pub struct PromptCatalog {
    /// Grading template for essay submissions.
    essay_grading:   String,
    /// Grading template for code submissions.
    code_grading:    String,
    /// Grading template used when no type is resolved.
    default_grading: String,
    /// One-token CODE/ESSAY classification instruction.
    classification:  String,
}

impl PromptCatalog {
    /// Load prompt templates embedded in the binary.
    pub fn load() -> Self {
        Self {
            essay_grading:   include_str!("prompts/essay_grading.md").to_string(),
            code_grading:    include_str!("prompts/code_grading.md").to_string(),
            default_grading: include_str!("prompts/default_grading.md").to_string(),
            classification:  include_str!("prompts/classification.md").to_string(),
        }
    }

    /// Total mapping from a submission type to its grading template; an
    /// unresolved type falls through to the default template.
    pub fn grading_template(&self, kind: Option<SubmissionType>) -> &str {
        match kind {
            Some(SubmissionType::Code) => &self.code_grading,
            Some(SubmissionType::Essay) => &self.essay_grading,
            None => &self.default_grading,
        }
    }

    /// Returns the classification instruction template.
    pub fn classification_template(&self) -> &str {
        &self.classification
    }
}

/// Renders a grading template by literal placeholder substitution.
///
/// A missing or blank rubric substitutes [`DEFAULT_RUBRIC`]; blank student
/// work is an error, since every grading prompt must carry a submission.
pub fn render_grading(
    template: &str,
    rubric: Option<&str>,
    student_work: &str,
) -> Result<String> {
    ensure!(
        !student_work.trim().is_empty(),
        "cannot render a grading prompt without student work"
    );

    let rubric = match rubric {
        Some(text) if !text.trim().is_empty() => text,
        _ => DEFAULT_RUBRIC,
    };

    Ok(template
        .replace("{rubric}", rubric)
        .replace("{studentWork}", student_work))
}

/// Renders the classification instruction around a submission excerpt.
pub fn render_classification(template: &str, excerpt: &str) -> String {
    template.replace("{content}", excerpt)
}
