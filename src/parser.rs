//! Line-oriented state machine parser for ARFF files
//!
//! The expected structure is:
//!
//! ```text
//! % optional comments
//! @RELATION <identifier>
//!
//! @ATTRIBUTE <identifier> <type>
//! <more attributes ...>
//!
//! @DATA
//! <data rows ...>
//! ```
//!
//! Processing moves through three phases, one dispatch per phase:
//!
//! | Phase     | Line contains | Action                      | Next phase |
//! |-----------|---------------|-----------------------------|------------|
//! | Header    | `@RELATION`   | set relation name           | Attribute  |
//! | Header    | anything else | fail                        |            |
//! | Attribute | `@ATTRIBUTE`  | append attribute to schema  | Attribute  |
//! | Attribute | `@DATA`       |                             | Data       |
//! | Attribute | anything else | fail                        |            |
//! | Data      | any line      | validate and append row     | Data       |
//!
//! Blank lines and lines starting with `%` are skipped in every phase, and any
//! trailing `%` comment is stripped before a line is interpreted. All parse
//! state lives on the stack of a single call, so independent parses may run
//! concurrently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, trace, warn};

use crate::attribute::parse_attribute;
use crate::constants::{COMMENT_MARKER, markers};
use crate::data::parse_row;
use crate::error::{ArffError, ParseErrorKind, Result};
use crate::models::{Attribute, Record, Row};
use crate::preprocess::preprocess_lines;
use crate::stats::{ParseResult, ParseStats};

/// Parser phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsePhase {
    /// Description comments and the `@RELATION` line
    Header,
    /// `@ATTRIBUTE` lines
    Attribute,
    /// `@DATA` marker and data rows
    Data,
}

impl fmt::Display for ParsePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Attribute => f.write_str("attribute"),
            Self::Data => f.write_str("data"),
        }
    }
}

/// Position of the line being parsed, threaded through every parsing step
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub source_name: &'a str,
    /// 1-based
    pub line_number: usize,
}

impl<'a> LineContext<'a> {
    pub fn new(source_name: &'a str, line_number: usize) -> Self {
        Self {
            source_name,
            line_number,
        }
    }

    /// Build an error located at this line
    pub fn error(&self, kind: ParseErrorKind) -> ArffError {
        ArffError::parse(self.source_name, self.line_number, kind)
    }
}

/// Accumulates the record during a single parse pass
struct RecordBuilder {
    source_name: String,
    relation_name: Option<String>,
    attributes: Vec<Attribute>,
    rows: Vec<Row>,
}

impl RecordBuilder {
    fn new(source_name: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            relation_name: None,
            attributes: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn build(self) -> Record {
        Record::new(
            self.source_name,
            self.relation_name,
            self.attributes,
            self.rows,
        )
    }
}

/// Parse raw lines supplied by the caller into a record
pub fn parse_lines<I, S>(source_name: &str, raw_lines: I) -> Result<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with_stats(source_name, raw_lines).map(|result| result.record)
}

/// Parse raw lines, also returning parse statistics
pub fn parse_lines_with_stats<I, S>(source_name: &str, raw_lines: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = preprocess_lines(raw_lines);

    let mut builder = RecordBuilder::new(source_name);
    let mut stats = ParseStats::new();
    let mut phase = ParsePhase::Header;

    stats.total_lines = lines.len();

    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            stats.blank_lines += 1;
            continue;
        }
        if line.starts_with(COMMENT_MARKER) {
            stats.comment_lines += 1;
            continue;
        }

        let ctx = LineContext::new(source_name, index + 1);
        let content = strip_trailing_comment(line);

        phase = match phase {
            ParsePhase::Header => parse_header_line(content, &ctx, &mut builder)?,
            ParsePhase::Attribute => parse_attribute_line(content, &ctx, &mut builder)?,
            ParsePhase::Data => {
                let row = parse_row(content, &builder.attributes, &ctx)?;
                builder.rows.push(row);
                ParsePhase::Data
            }
        };
    }

    if phase != ParsePhase::Data {
        warn!(
            "{}: input ended in {} section before {} marker",
            source_name,
            phase,
            markers::DATA
        );
    }

    stats.attributes_declared = builder.attributes.len();
    stats.rows_parsed = builder.rows.len();
    stats.final_phase = phase;

    debug!(
        "Parsed {}: {} attributes, {} rows from {} lines",
        source_name, stats.attributes_declared, stats.rows_parsed, stats.total_lines
    );

    Ok(ParseResult {
        record: builder.build(),
        stats,
    })
}

/// Parse in-memory ARFF text
pub fn parse_str(source_name: &str, content: &str) -> Result<Record> {
    parse_lines(source_name, content.lines())
}

/// Read and parse an ARFF file from disk
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    debug!("Parsing ARFF file: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ArffError::io(path, e))?;
    let source_name = path.display().to_string();

    parse_lines_with_stats(&source_name, content.lines())
}

fn parse_header_line(
    line: &str,
    ctx: &LineContext<'_>,
    builder: &mut RecordBuilder,
) -> Result<ParsePhase> {
    if !line.contains(markers::RELATION) {
        return Err(ctx.error(ParseErrorKind::ExpectedRelationDeclaration));
    }

    let relation_name = parse_relation(line, ctx)?;
    debug!(
        "line {}: relation '{}', entering attribute section",
        ctx.line_number, relation_name
    );
    builder.relation_name = Some(relation_name);

    Ok(ParsePhase::Attribute)
}

fn parse_attribute_line(
    line: &str,
    ctx: &LineContext<'_>,
    builder: &mut RecordBuilder,
) -> Result<ParsePhase> {
    if line.contains(markers::ATTRIBUTE) {
        let attribute = parse_attribute(line, ctx)?;
        builder.attributes.push(attribute);
        Ok(ParsePhase::Attribute)
    } else if line.contains(markers::DATA) {
        debug!(
            "line {}: entering data section with {} attributes",
            ctx.line_number,
            builder.attributes.len()
        );
        Ok(ParsePhase::Data)
    } else {
        Err(ctx.error(ParseErrorKind::ExpectedAttributeDeclaration))
    }
}

/// `@RELATION <identifier>`, exactly two tokens
fn parse_relation(line: &str, ctx: &LineContext<'_>) -> Result<String> {
    let tokens: Vec<&str> = line.split(' ').collect();
    match tokens.as_slice() {
        [_, name] => Ok((*name).to_string()),
        _ => Err(ctx.error(ParseErrorKind::InvalidRelationDeclaration)),
    }
}

fn strip_trailing_comment(line: &str) -> &str {
    let content = line
        .split_once(COMMENT_MARKER)
        .map_or(line, |(before, _)| before)
        .trim();
    trace!("content line: '{}'", content);
    content
}
