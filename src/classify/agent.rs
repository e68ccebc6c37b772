//! AI-backed refinement of the heuristic guess. May talk to the chat
//! backend, but never fails: every error path degrades to a local heuristic
//! so classification always terminates with a [`SubmissionType`].

use std::sync::LazyLock;

use regex::Regex;

use super::{SubmissionType, heuristic};
use crate::{
    prompts::{self, PromptCatalog},
    provider::ChatProvider,
};

/// Sampling temperature for the classification call; zero for determinism.
pub const CLASSIFY_TEMPERATURE: f32 = 0.0;

/// Maximum number of characters of the submission sent to the classifier.
pub const EXCERPT_CHARS: usize = 1500;

/// Inputs shorter than this skip the network entirely; they carry too little
/// signal to justify an external scorer's cost.
const SHORT_INPUT_CHARS: usize = 50;

/// Stricter punctuation-density threshold applied to short inputs.
const SHORT_INPUT_RATIO: f64 = 0.15;

/// Punctuation-density threshold used by the error fallback.
const FALLBACK_RATIO: f64 = 0.05;

/// Keyword regex used by the error fallback alongside the punctuation ratio.
static CODE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)function|const|let|var|if|for|while|class|return|import|export|=>")
        .expect("code keyword pattern must compile")
});

/// Asks the chat backend for a one-token CODE/ESSAY verdict on an excerpt of
/// `text`.
///
/// Short inputs are decided locally with a stricter punctuation ratio. Any
/// backend failure falls back to [`fallback_guess`]; the error is logged and
/// swallowed, never propagated.
pub async fn classify(
    text: &str,
    catalog: &PromptCatalog,
    provider: &dyn ChatProvider,
) -> SubmissionType {
    if text.chars().count() < SHORT_INPUT_CHARS {
        return if heuristic::punctuation_ratio(text) > SHORT_INPUT_RATIO {
            SubmissionType::Code
        } else {
            SubmissionType::Essay
        };
    }

    let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    let prompt = prompts::render_classification(catalog.classification_template(), &excerpt);

    match provider.complete(&prompt, CLASSIFY_TEMPERATURE).await {
        Ok(answer) => parse_label(&answer),
        Err(err) => {
            tracing::warn!(error = %err, "classification call failed, using local fallback");
            fallback_guess(text)
        }
    }
}

/// Parses the classifier's answer. Only an exact `CODE` (any case, with
/// surrounding whitespace) counts as code; anything else, including garbled
/// output, is the safe default of essay.
pub fn parse_label(answer: &str) -> SubmissionType {
    if answer.trim().to_uppercase() == "CODE" {
        SubmissionType::Code
    } else {
        SubmissionType::Essay
    }
}

/// Local guess used when the backend call fails: code only when the
/// punctuation density and a keyword match both agree.
pub fn fallback_guess(text: &str) -> SubmissionType {
    if heuristic::punctuation_ratio(text) > FALLBACK_RATIO && CODE_KEYWORDS.is_match(text) {
        SubmissionType::Code
    } else {
        SubmissionType::Essay
    }
}
