//! Local, network-free detection of code vs. prose based on pattern matches
//! and character ratios. Pure, total, and deterministic; also the universal
//! fallback whenever the AI refinement step is unavailable.

use std::sync::LazyLock;

use regex::Regex;

use super::SubmissionType;

/// Inputs shorter than this are classified as essays outright; they are too
/// short to contain meaningful code structure.
const MIN_CODE_LENGTH: usize = 10;

/// Punctuation-density threshold above which text is treated as code.
const PUNCTUATION_RATIO_THRESHOLD: f64 = 0.05;

/// Fraction of indented lines above which a multi-line text is treated as
/// code.
const INDENTED_LINE_FRACTION: f64 = 0.25;

/// Ordered bank of code-indicative patterns. Any single match classifies the
/// text as code.
static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Function declarations
        r"(?i)function\s+\w+\s*\(",
        r"(?i)def\s+\w+\s*\(",
        r"(?i)\w+\s*=\s*function\s*\(",
        r"(?i)const\s+\w+\s*=\s*\(.*\)\s*=>",
        // Class declarations
        r"(?i)class\s+\w+",
        // Import statements
        r"(?i)import\s+.+\s+from",
        r"(?i)import\s+\{.+\}\s+from",
        r"(?i)require\s*\(",
        r"(?i)use\s+\w+",
        r#"(?i)include\s+[<"']"#,
        // Variable declarations with types
        r"(?i)let\s+\w+:\s*\w+",
        r"(?i)var\s+\w+:\s*\w+",
        r"(?i)const\s+\w+:\s*\w+",
        // Common programming constructs
        r"(?i)if\s*\(.+\)\s*\{",
        r"(?i)for\s*\(.+\)\s*\{",
        r"(?i)while\s*\(.+\)\s*\{",
        r"(?i)switch\s*\(.+\)\s*\{",
        // Multi-line comments
        r"/\*[\s\S]*?\*/",
        // Runs of at least three line comments
        r"//.*\n.*//.*\n.*//.*",
        r"#.*\n.*#.*\n.*#.*",
        // Dense runs of code punctuation
        r"[{}]{3,}",
        r"[();]{5,}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("code pattern must compile"))
    .collect()
});

/// Returns true for characters that show up far more often in code than in
/// prose.
fn is_code_punctuation(c: char) -> bool {
    matches!(
        c,
        '{' | '}'
            | ';'
            | '('
            | ')'
            | '['
            | ']'
            | '='
            | '<'
            | '>'
            | '!'
            | '&'
            | '|'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '^'
    )
}

/// Ratio of code-punctuation characters to total characters.
pub fn punctuation_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let punctuation = text.chars().filter(|c| is_code_punctuation(*c)).count();
    punctuation as f64 / total as f64
}

/// Classifies raw text as code or essay using pattern matches, punctuation
/// density, and indentation consistency.
pub fn detect(text: &str) -> SubmissionType {
    if text.chars().count() < MIN_CODE_LENGTH {
        return SubmissionType::Essay;
    }

    if CODE_PATTERNS.iter().any(|pattern| pattern.is_match(text)) {
        return SubmissionType::Code;
    }

    if punctuation_ratio(text) > PUNCTUATION_RATIO_THRESHOLD {
        return SubmissionType::Code;
    }

    // Consistent indentation is a code signal on multi-line input.
    let lines: Vec<&str> = text.split('\n').collect();
    let indented = lines
        .iter()
        .filter(|line| line.chars().take_while(|c| c.is_whitespace()).count() >= 2)
        .count();
    if lines.len() > 5 && indented as f64 / lines.len() as f64 > INDENTED_LINE_FRACTION {
        return SubmissionType::Code;
    }

    SubmissionType::Essay
}
