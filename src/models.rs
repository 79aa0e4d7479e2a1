//! Core data structures for parsed ARFF datasets.
//!
//! Defines the attribute schema, typed field values and the [`Record`]
//! aggregate returned by the parser.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::type_keywords;

/// Declared type of an attribute column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    Numeric,
    Date,
    String,
    /// Nominal (class) attribute with its allowed values in declaration order
    Nominal(Vec<String>),
}

impl AttributeKind {
    /// Match a continuous type keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let upper = keyword.to_uppercase();
        match upper.as_str() {
            type_keywords::NUMERIC => Some(Self::Numeric),
            type_keywords::DATE => Some(Self::Date),
            type_keywords::STRING => Some(Self::String),
            _ => None,
        }
    }

    /// True for NUMERIC, DATE and STRING
    pub fn is_continuous(&self) -> bool {
        !matches!(self, Self::Nominal(_))
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => f.write_str(type_keywords::NUMERIC),
            Self::Date => f.write_str(type_keywords::DATE),
            Self::String => f.write_str(type_keywords::STRING),
            Self::Nominal(values) => {
                f.write_str("{ ")?;
                for value in values {
                    write!(f, "{} ", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A named, typed column of the relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn nominal(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(name, AttributeKind::Nominal(values))
    }

    /// Allowed values for a nominal attribute, `None` for continuous ones
    pub fn allowed_values(&self) -> Option<&[String]> {
        match &self.kind {
            AttributeKind::Nominal(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attribute {}: {}", self.name, self.kind)
    }
}

/// A single validated field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One data row, positionally aligned with the attribute schema
pub type Row = Vec<Value>;

/// A parsed ARFF dataset
///
/// Only the parser builds records; once returned they are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    source_name: String,
    relation_name: Option<String>,
    attributes: Vec<Attribute>,
    rows: Vec<Row>,
}

impl Record {
    pub(crate) fn new(
        source_name: String,
        relation_name: Option<String>,
        attributes: Vec<Attribute>,
        rows: Vec<Row>,
    ) -> Self {
        Self {
            source_name,
            relation_name,
            attributes,
            rows,
        }
    }

    /// Name of the input the record was parsed from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Relation name; `None` when input ended before any `@RELATION` line
    pub fn relation_name(&self) -> Option<&str> {
        self.relation_name.as_deref()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Position of an attribute in the schema
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name == name)
    }

    /// All values of one column, in row order
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Relation {}: parsed from {}",
            self.relation_name.as_deref().unwrap_or("<undeclared>"),
            self.source_name
        )?;
        for attribute in &self.attributes {
            writeln!(f, "\t{}", attribute)?;
        }
        writeln!(f, "Data: {} items", self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cars() -> Record {
        Record::new(
            "cars.arff".to_string(),
            Some("cars".to_string()),
            vec![
                Attribute::nominal(
                    "buying",
                    vec!["vhigh".to_string(), "high".to_string()],
                ),
                Attribute::new("price", AttributeKind::Numeric),
            ],
            vec![
                vec![Value::Text("vhigh".to_string()), Value::Number(10000.0)],
                vec![Value::Text("high".to_string()), Value::Number(8500.5)],
            ],
        )
    }

    #[test]
    fn test_kind_from_keyword_ignores_case() {
        assert_eq!(AttributeKind::from_keyword("numeric"), Some(AttributeKind::Numeric));
        assert_eq!(AttributeKind::from_keyword("Date"), Some(AttributeKind::Date));
        assert_eq!(AttributeKind::from_keyword("STRING"), Some(AttributeKind::String));
        assert_eq!(AttributeKind::from_keyword("real"), None);
        assert_eq!(AttributeKind::from_keyword("{a,b}"), None);
    }

    #[test]
    fn test_record_lookup() {
        let record = cars();

        assert_eq!(record.relation_name(), Some("cars"));
        assert_eq!(record.attribute_index("price"), Some(1));
        assert!(record.attribute("missing").is_none());
        assert_eq!(
            record.attribute("buying").and_then(Attribute::allowed_values),
            Some(&["vhigh".to_string(), "high".to_string()][..])
        );

        let prices: Vec<f64> = record.column(1).filter_map(Value::as_number).collect();
        assert_eq!(prices, vec![10000.0, 8500.5]);
    }

    #[test]
    fn test_record_display_summary() {
        let summary = cars().to_string();

        assert!(summary.starts_with("Relation cars: parsed from cars.arff\n"));
        assert!(summary.contains("\tAttribute buying: { vhigh high }\n"));
        assert!(summary.contains("\tAttribute price: NUMERIC\n"));
        assert!(summary.ends_with("Data: 2 items\n"));
    }

    #[test]
    fn test_value_serializes_untagged() {
        let row = vec![Value::Text("low".to_string()), Value::Number(2.5)];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"["low",2.5]"#);
    }
}
