//! Application constants for the ARFF parser
//!
//! Section markers, type keywords and CLI defaults used throughout the crate.

// =============================================================================
// ARFF Syntax
// =============================================================================

/// Section markers, matched by substring containment on the literal text
pub mod markers {
    pub const RELATION: &str = "@RELATION";
    pub const ATTRIBUTE: &str = "@ATTRIBUTE";
    pub const DATA: &str = "@DATA";
}

/// Comment marker; a line starting with it is skipped, anything after it is stripped
pub const COMMENT_MARKER: char = '%';

/// Separator between fields of a data line and between nominal values
pub const FIELD_SEPARATOR: char = ',';

/// Attribute type keywords, compared case-insensitively
pub mod type_keywords {
    pub const NUMERIC: &str = "NUMERIC";
    pub const DATE: &str = "DATE";
    pub const STRING: &str = "STRING";
}

/// Nominal value list delimiters
pub const NOMINAL_OPEN: char = '{';
pub const NOMINAL_CLOSE: char = '}';

// =============================================================================
// Processing Defaults
// =============================================================================

/// File extensions picked up when a directory is given as input
pub const DEFAULT_EXTENSIONS: &[&str] = &["arff"];

/// Crate target used in the default log filter (`arff_parser=<level>`)
pub const LOG_TARGET: &str = "arff_parser";
