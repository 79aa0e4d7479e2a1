//! Parsing statistics and result structures
//!
//! Counters gathered during a single parse pass, returned next to the
//! record for reporting.

use serde::{Deserialize, Serialize};

use crate::models::Record;
use crate::parser::ParsePhase;

/// Parsing result with the record and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed dataset
    pub record: Record,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of input lines
    pub total_lines: usize,

    /// Lines that were empty after normalization
    pub blank_lines: usize,

    /// Lines starting with the comment marker
    pub comment_lines: usize,

    /// Number of attribute declarations accepted
    pub attributes_declared: usize,

    /// Number of data rows accepted
    pub rows_parsed: usize,

    /// Phase the parser was in when input ended
    pub final_phase: ParsePhase,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            blank_lines: 0,
            comment_lines: 0,
            attributes_declared: 0,
            rows_parsed: 0,
            final_phase: ParsePhase::Header,
        }
    }

    /// Lines that contributed a relation, attribute, marker or row
    pub fn content_lines(&self) -> usize {
        self.total_lines - self.blank_lines - self.comment_lines
    }

    /// True when input reached the data section
    pub fn reached_data(&self) -> bool {
        self.final_phase == ParsePhase::Data
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
