//! Line normalization ahead of parsing.
//!
//! Each raw line is trimmed, has its tabs replaced by spaces and its
//! whitespace runs collapsed to a single space. The output is index-aligned
//! with the input so 1-based line numbers stay valid for diagnostics; blank
//! and comment lines are left in place for the parser to skip.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize a single raw line
pub fn normalize_line(line: &str) -> String {
    let trimmed = line.trim().replace('\t', " ");
    WHITESPACE_RUN.replace_all(&trimmed, " ").into_owned()
}

/// Normalize every line, preserving order and count
pub fn preprocess_lines<I, S>(raw_lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_lines
        .into_iter()
        .map(|line| normalize_line(line.as_ref()))
        .collect()
}
