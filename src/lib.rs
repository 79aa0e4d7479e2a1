//! ARFF Parser Library
//!
//! Parses ARFF (Attribute-Relation File Format) text into a validated,
//! typed dataset: a relation name, an ordered attribute schema and data
//! rows checked field by field against that schema.
//!
//! This library provides:
//! - Line normalization that keeps 1-based line numbers intact
//! - A three-phase state machine (header, attribute, data) with first-error abort
//! - `@ATTRIBUTE` parsing for NUMERIC, DATE, STRING and nominal `{...}` types
//! - Per-field validation of data rows with positional error reporting
//! - Concurrent batch parsing of many files
//!
//! ## Usage
//!
//! ```rust
//! use arff_parser::{Value, parse_str};
//!
//! let text = "@RELATION cars\n@ATTRIBUTE buying {vhigh,high}\n@ATTRIBUTE price NUMERIC\n@DATA\nvhigh,10000";
//! let record = parse_str("cars.arff", text)?;
//!
//! assert_eq!(record.relation_name(), Some("cars"));
//! assert_eq!(record.rows()[0][1], Value::Number(10000.0));
//! # Ok::<(), arff_parser::ArffError>(())
//! ```

pub mod attribute;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod models;
pub mod parser;
pub mod preprocess;
pub mod processor;
pub mod stats;

// Re-export commonly used types
pub use config::ProcessingConfig;
pub use error::{ArffError, ParseErrorKind, Result};
pub use models::{Attribute, AttributeKind, Record, Row, Value};
pub use parser::{ParsePhase, parse_file, parse_lines, parse_lines_with_stats, parse_str};
pub use processor::{BatchProcessor, BatchReport};
pub use stats::{ParseResult, ParseStats};
