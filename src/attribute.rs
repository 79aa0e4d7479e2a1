//! `@ATTRIBUTE` declaration parsing.
//!
//! Accepts a normalized, comment-stripped line and produces a typed
//! [`Attribute`]. Supported forms:
//!
//! ```text
//! @ATTRIBUTE <name> NUMERIC | DATE | STRING     (keyword matched ignoring case)
//! @ATTRIBUTE <name> {v1, v2, ...}               (nominal / class attribute)
//! ```

use tracing::trace;

use crate::constants::{FIELD_SEPARATOR, NOMINAL_CLOSE, NOMINAL_OPEN};
use crate::error::{ParseErrorKind, Result};
use crate::models::{Attribute, AttributeKind};
use crate::parser::LineContext;

/// Parse an attribute declaration line
pub fn parse_attribute(line: &str, ctx: &LineContext<'_>) -> Result<Attribute> {
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() < 3 {
        return Err(ctx.error(ParseErrorKind::IncompleteAttributeDeclaration));
    }

    let is_nominal = is_nominal_declaration(line);
    if tokens.len() > 3 && !is_nominal {
        return Err(ctx.error(ParseErrorKind::UnrecognizedAttributeTokens));
    }

    let name = tokens[1];
    let type_token = tokens[2];

    if let Some(kind) = AttributeKind::from_keyword(type_token) {
        trace!("line {}: {} attribute '{}'", ctx.line_number, kind, name);
        return Ok(Attribute::new(name, kind));
    }

    if is_nominal {
        let values = parse_nominal_values(line, ctx)?;
        trace!(
            "line {}: nominal attribute '{}' with {} values",
            ctx.line_number,
            name,
            values.len()
        );
        return Ok(Attribute::nominal(name, values));
    }

    Err(ctx.error(ParseErrorKind::UnknownAttributeType {
        type_name: type_token.to_string(),
    }))
}

/// A nominal declaration is recognized by carrying both braces
fn is_nominal_declaration(line: &str) -> bool {
    line.contains(NOMINAL_OPEN) && line.contains(NOMINAL_CLOSE)
}

/// Extract the value list between the first `{` and the first `}`
fn parse_nominal_values(line: &str, ctx: &LineContext<'_>) -> Result<Vec<String>> {
    if !line.ends_with(NOMINAL_CLOSE) {
        return Err(ctx.error(ParseErrorKind::UnrecognizedAttributeTokens));
    }

    let (start, end) = match (line.find(NOMINAL_OPEN), line.find(NOMINAL_CLOSE)) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(ctx.error(ParseErrorKind::InvalidNominalDeclaration)),
    };

    let inner: String = line[start + NOMINAL_OPEN.len_utf8()..end]
        .chars()
        .filter(|c| !c.is_whitespace() && *c != NOMINAL_OPEN)
        .collect();

    Ok(inner.split(FIELD_SEPARATOR).map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LineContext<'static> {
        LineContext::new("test.arff", 4)
    }

    fn parse_err(line: &str) -> ParseErrorKind {
        parse_attribute(line, &ctx())
            .unwrap_err()
            .parse_kind()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_continuous_attributes() {
        let attr = parse_attribute("@ATTRIBUTE price NUMERIC", &ctx()).unwrap();
        assert_eq!(attr, Attribute::new("price", AttributeKind::Numeric));

        let attr = parse_attribute("@ATTRIBUTE miles numeric", &ctx()).unwrap();
        assert_eq!(attr.kind, AttributeKind::Numeric);

        let attr = parse_attribute("@ATTRIBUTE purchaseDate Date", &ctx()).unwrap();
        assert_eq!(attr.kind, AttributeKind::Date);

        let attr = parse_attribute("@ATTRIBUTE make string", &ctx()).unwrap();
        assert_eq!(attr.kind, AttributeKind::String);
    }

    #[test]
    fn test_nominal_attribute_without_spaces() {
        let attr = parse_attribute("@ATTRIBUTE buying {vhigh,high,med,low}", &ctx()).unwrap();
        assert_eq!(attr.name, "buying");
        assert_eq!(
            attr.allowed_values().unwrap(),
            &["vhigh", "high", "med", "low"]
        );
    }

    #[test]
    fn test_nominal_attribute_strips_whitespace() {
        let attr =
            parse_attribute("@ATTRIBUTE buying { vhigh, high, med, low }", &ctx()).unwrap();
        assert_eq!(
            attr.allowed_values().unwrap(),
            &["vhigh", "high", "med", "low"]
        );
    }

    #[test]
    fn test_nominal_keeps_duplicates_in_order() {
        let attr = parse_attribute("@ATTRIBUTE class {b,a,b}", &ctx()).unwrap();
        assert_eq!(attr.allowed_values().unwrap(), &["b", "a", "b"]);
    }

    #[test]
    fn test_empty_nominal_yields_single_empty_value() {
        let attr = parse_attribute("@ATTRIBUTE class {}", &ctx()).unwrap();
        assert_eq!(attr.allowed_values().unwrap(), &[""]);
    }

    #[test]
    fn test_incomplete_declaration() {
        assert_eq!(
            parse_err("@ATTRIBUTE price"),
            ParseErrorKind::IncompleteAttributeDeclaration
        );
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            parse_err("@ATTRIBUTE price REAL"),
            ParseErrorKind::UnknownAttributeType {
                type_name: "REAL".to_string()
            }
        );
    }

    #[test]
    fn test_extra_tokens_without_braces() {
        assert_eq!(
            parse_err("@ATTRIBUTE price NUMERIC extra"),
            ParseErrorKind::UnrecognizedAttributeTokens
        );
    }

    #[test]
    fn test_trailing_content_after_nominal() {
        assert_eq!(
            parse_err("@ATTRIBUTE buying { vhigh, low } extra"),
            ParseErrorKind::UnrecognizedAttributeTokens
        );
    }

    #[test]
    fn test_malformed_braces() {
        assert_eq!(
            parse_err("@ATTRIBUTE buying } vhigh, low {}"),
            ParseErrorKind::InvalidNominalDeclaration
        );
    }

    #[test]
    fn test_error_carries_position() {
        let err = parse_attribute("@ATTRIBUTE x", &LineContext::new("a.arff", 12)).unwrap_err();
        assert_eq!(err.line_number(), Some(12));
        assert!(err.to_string().starts_with("Error parsing a.arff at line 12"));
    }
}
