#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Submission-type classification: a fast local heuristic, an optional AI
//! second opinion, and the predicate deciding when the second opinion is
//! worth its cost.

/// The AI refinement step and its local fallbacks.
pub mod agent;
/// The pure, network-free code-vs-prose detector.
pub mod heuristic;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The label a submission resolves to before a grading template is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    /// Primarily program code.
    Code,
    /// Primarily natural-language prose.
    Essay,
}

impl Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionType::Code => write!(f, "code"),
            SubmissionType::Essay => write!(f, "essay"),
        }
    }
}

/// How a submission type was decided, for observability and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// The caller supplied the type explicitly; no detection ran.
    Explicit,
    /// The local heuristic detector decided.
    Heuristic,
    /// The AI classifier (or its local fallback) refined the heuristic guess.
    Refined,
}

/// The resolved submission type plus how it was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationOutcome {
    /// The resolved label.
    pub kind:       SubmissionType,
    /// Which tier of the pipeline produced it.
    pub provenance: Provenance,
}

/// Decides whether a heuristic guess is ambiguous enough to warrant the
/// costlier AI classifier.
///
/// Targets prose that *discusses* code, which over-triggers the pattern-based
/// detector: a `code` guess on a long, wordy submission gets a second
/// opinion, as does any text carrying a backtick fence or the substrings
/// `const ` / `function `. Thresholds are hand-tuned knobs.
pub fn needs_refinement(guess: SubmissionType, text: &str) -> bool {
    let wordy_code_guess = guess == SubmissionType::Code
        && text.len() > 100
        && text.split_whitespace().count() > 30;

    wordy_code_guess
        || text.contains("```")
        || text.contains("const ")
        || text.contains("function ")
}
