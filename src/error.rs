//! Error handling for ARFF parsing operations.
//!
//! Every parse failure carries the source name, the 1-based line number of
//! the offending line and a [`ParseErrorKind`] reason code. Parsing stops at
//! the first failure; no partial record is ever returned.

use std::path::PathBuf;
use thiserror::Error;

/// Reason codes for a failed parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected @relation declaration")]
    ExpectedRelationDeclaration,

    #[error("invalid @relation declaration")]
    InvalidRelationDeclaration,

    #[error("expected @attribute declaration")]
    ExpectedAttributeDeclaration,

    #[error("incomplete attribute declaration")]
    IncompleteAttributeDeclaration,

    #[error(
        "attribute type '{type_name}' does not match any recognized attribute types (NUMERIC, STRING, DATE, or class {{...}})"
    )]
    UnknownAttributeType { type_name: String },

    #[error("unrecognized tokens after attribute declaration")]
    UnrecognizedAttributeTokens,

    #[error("invalid class attribute declaration")]
    InvalidNominalDeclaration,

    #[error(
        "expected {expected} data element{}, {found} {} present",
        plural_suffix(.expected),
        was_or_were(.found)
    )]
    MismatchedDataFieldCount { expected: usize, found: usize },

    #[error("invalid value '{value}' for nominal attribute '{attribute}'")]
    InvalidNominalValue { attribute: String, value: String },

    #[error("invalid value '{value}' for numeric attribute '{attribute}'")]
    InvalidNumericValue { attribute: String, value: String },
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}

fn was_or_were(count: &usize) -> &'static str {
    if *count == 1 { "was" } else { "were" }
}

#[derive(Error, Debug)]
pub enum ArffError {
    #[error("Error parsing {source_name} at line {line_number}: {kind}")]
    Parse {
        source_name: String,
        line_number: usize,
        kind: ParseErrorKind,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Directory traversal error: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Parse task failed: {message}")]
    TaskFailed { message: String },
}

impl ArffError {
    /// Create a parse error at a specific line of a source
    pub fn parse(source_name: impl Into<String>, line_number: usize, kind: ParseErrorKind) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line_number,
            kind,
        }
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a task failure error
    pub fn task_failed(message: impl Into<String>) -> Self {
        Self::TaskFailed {
            message: message.into(),
        }
    }

    /// Reason code, if this is a parse failure
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Self::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// 1-based line number, if this is a parse failure
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Parse { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArffError>;
