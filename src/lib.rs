//! # gradegenius
//!
//! An AI grading service: classifies a student submission as code or essay,
//! selects the matching grading prompt, and asks a chat backend for a
//! rubric-based report.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Submission-type classification: heuristic detector, AI refinement, and the
/// refinement predicate
pub mod classify;
/// Environment-driven process configuration
pub mod config;
/// Error taxonomy and its HTTP mapping
pub mod error;
/// Grading orchestration over a chat provider
pub mod grade;
/// Embedded prompt catalog and placeholder rendering
pub mod prompts;
/// The chat-completion seam and its implementations
pub mod provider;
/// The axum HTTP surface
pub mod server;
