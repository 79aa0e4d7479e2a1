//! Data row validation against the attribute schema
//!
//! Splits a data line on commas and checks each field against the
//! attribute at the same position.

use crate::constants::FIELD_SEPARATOR;
use crate::error::{ParseErrorKind, Result};
use crate::models::{Attribute, AttributeKind, Row, Value};
use crate::parser::LineContext;

/// Parse and validate one data line
pub fn parse_row(line: &str, attributes: &[Attribute], ctx: &LineContext<'_>) -> Result<Row> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    if fields.len() != attributes.len() {
        return Err(ctx.error(ParseErrorKind::MismatchedDataFieldCount {
            expected: attributes.len(),
            found: fields.len(),
        }));
    }

    fields
        .iter()
        .zip(attributes)
        .map(|(field, attribute)| parse_field(field, attribute, ctx))
        .collect()
}

fn parse_field(field: &str, attribute: &Attribute, ctx: &LineContext<'_>) -> Result<Value> {
    match &attribute.kind {
        AttributeKind::String | AttributeKind::Date => Ok(Value::Text(field.to_string())),
        AttributeKind::Nominal(values) => {
            if values.iter().any(|allowed| allowed == field) {
                Ok(Value::Text(field.to_string()))
            } else {
                Err(ctx.error(ParseErrorKind::InvalidNominalValue {
                    attribute: attribute.name.clone(),
                    value: field.to_string(),
                }))
            }
        }
        AttributeKind::Numeric => parse_numeric(field).map(Value::Number).ok_or_else(|| {
            ctx.error(ParseErrorKind::InvalidNumericValue {
                attribute: attribute.name.clone(),
                value: field.to_string(),
            })
        }),
    }
}

/// Locale-invariant float parse; NaN and infinities are rejected
fn parse_numeric(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
