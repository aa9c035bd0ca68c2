//! Answer Set
//!
//! Flat map from field identifier to the value the user entered. Values are
//! kept as `serde_json::Value` so the form surface can send text, ISO dates,
//! numbers, single tokens and token lists through one shape.
//!
//! Reads fall back to the declared default from [`fields`] when a key was
//! never stored. A key explicitly stored as JSON `null` counts as cleared
//! and does not fall back.

pub mod choices;
pub mod fields;
pub mod validation;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use choices::{Choice, Token};

pub use choices::Party;
pub use validation::{validate, Severity, ValidationIssue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: HashMap<String, Value>,
}

/// Where a read was answered from.
enum Resolved<'a> {
    Stored(&'a Value),
    Default(&'static str),
    Unset,
}

impl AnswerSet {
    /// Empty answer set. Every read falls back to the declared defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer set with every declared default materialised, as at session start.
    pub fn with_defaults() -> Self {
        let values = fields::FIELDS
            .iter()
            .filter_map(|f| f.default.map(|d| (f.id.to_string(), Value::String(d.to_string()))))
            .collect();
        Self { values }
    }

    pub fn from_map(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    /// Current value, or the declared default when the field was never set.
    pub fn get(&self, field: &str) -> Option<Value> {
        match self.resolve(field) {
            Resolved::Stored(value) => Some(value.clone()),
            Resolved::Default(token) => Some(Value::String(token.to_string())),
            Resolved::Unset => None,
        }
    }

    /// Replace a value. `Value::Null` clears it.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
    }

    /// Apply every entry of `other` on top of this set.
    pub fn merge(&mut self, other: AnswerSet) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn resolve(&self, field: &str) -> Resolved<'_> {
        match self.values.get(field) {
            Some(Value::Null) => Resolved::Unset,
            Some(value) => Resolved::Stored(value),
            None => match fields::default_for(field) {
                Some(token) => Resolved::Default(token),
                None => Resolved::Unset,
            },
        }
    }

    // ========================================================================
    // Typed Reads
    // ========================================================================

    /// Trimmed, whitespace-normalised text. `None` when empty or unset.
    pub fn text(&self, field: &str) -> Option<String> {
        let raw = match self.resolve(field) {
            Resolved::Stored(Value::String(s)) => normalize_text(s),
            Resolved::Stored(Value::Number(n)) => n.as_f64().map(format_number).unwrap_or_default(),
            Resolved::Stored(Value::Array(items)) => {
                let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
                normalize_text(&parts.join(", "))
            }
            Resolved::Stored(_) | Resolved::Unset => String::new(),
            Resolved::Default(token) => normalize_text(token),
        };
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    }

    /// Amount text, present when the value is a non-zero number or any
    /// non-blank string. A typed "0" counts as entered.
    pub fn amount(&self, field: &str) -> Option<String> {
        match self.resolve(field) {
            Resolved::Stored(Value::Number(n)) => match n.as_f64() {
                Some(v) if v != 0.0 => Some(format_number(v)),
                _ => None,
            },
            Resolved::Stored(Value::String(s)) if !s.trim().is_empty() => Some(normalize_text(s)),
            _ => None,
        }
    }

    /// Numeric value of a number field, also accepting numeric strings.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.resolve(field) {
            Resolved::Stored(Value::Number(n)) => n.as_f64(),
            Resolved::Stored(Value::String(s)) => parse_number(s.trim()),
            Resolved::Default(token) => parse_number(token),
            _ => None,
        }
    }

    /// Raw date string, if any.
    pub fn date(&self, field: &str) -> Option<String> {
        match self.resolve(field) {
            Resolved::Stored(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }

    /// Exact token match for scalars, membership for lists.
    pub fn matches(&self, field: &str, token: &str) -> bool {
        match self.resolve(field) {
            Resolved::Stored(Value::String(s)) => s == token,
            Resolved::Stored(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(token)),
            Resolved::Stored(Value::Number(n)) => n.as_f64().map(format_number).as_deref() == Some(token),
            Resolved::Stored(_) | Resolved::Unset => false,
            Resolved::Default(default) => default == token,
        }
    }

    /// `matches(field, "ja")`
    pub fn is_yes(&self, field: &str) -> bool {
        self.matches(field, "ja")
    }

    /// Single-select read. A list or non-string value is never a known token.
    pub fn choice<T: Token>(&self, field: &str) -> Choice<T> {
        match self.resolve(field) {
            Resolved::Stored(Value::String(s)) => Choice::from_raw(Some(s)),
            Resolved::Stored(Value::Array(items)) if items.is_empty() => Choice::Unset,
            Resolved::Stored(other) => Choice::Unrecognized(other.to_string()),
            Resolved::Default(token) => Choice::from_raw(Some(token)),
            Resolved::Unset => Choice::Unset,
        }
    }

    pub fn party(&self, field: &str) -> Choice<Party> {
        self.choice(field)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest decimal form: `1200`, `1200.5`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Collapse whitespace runs within each line, trim lines and drop blank ones.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use choices::{AlimonyRegime, HomeStatus};
    use serde_json::json;

    #[test]
    fn test_get_falls_back_to_default() {
        let answers = AnswerSet::new();
        assert_eq!(answers.get("woningStatus"), Some(json!("geen")));
        assert_eq!(answers.get("manVoornamen"), None);
    }

    #[test]
    fn test_explicit_null_does_not_fall_back() {
        let mut answers = AnswerSet::new();
        answers.set("heeftKinderen", Value::Null);
        assert_eq!(answers.get("heeftKinderen"), None);
        assert!(!answers.matches("heeftKinderen", "nee"));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut answers = AnswerSet::with_defaults();
        answers.set("woningStatus", json!("huur"));
        assert_eq!(answers.choice::<HomeStatus>("woningStatus"), Choice::Known(HomeStatus::Rented));
    }

    #[test]
    fn test_amount_presence() {
        let mut answers = AnswerSet::new();
        answers.set("a", json!(1200));
        answers.set("b", json!(0));
        answers.set("c", json!("0.00"));
        answers.set("d", json!(" 350 "));
        answers.set("e", json!(1200.0));
        assert_eq!(answers.amount("a").as_deref(), Some("1200"));
        assert_eq!(answers.amount("b"), None);
        assert_eq!(answers.amount("c").as_deref(), Some("0.00"));
        assert_eq!(answers.amount("d").as_deref(), Some("350"));
        assert_eq!(answers.amount("e").as_deref(), Some("1200"));
        assert_eq!(answers.amount("missing"), None);

        answers.set("f", json!("   "));
        assert_eq!(answers.amount("f"), None);
    }

    #[test]
    fn test_number_reads() {
        let mut answers = AnswerSet::new();
        answers.set("aantalKinderen", json!("2"));
        answers.set("pensioenAfwijkendPercentage", json!(37.5));
        approx::assert_relative_eq!(answers.number("aantalKinderen").unwrap(), 2.0);
        approx::assert_relative_eq!(answers.number("pensioenAfwijkendPercentage").unwrap(), 37.5);
    }

    #[test]
    fn test_matches_list_membership() {
        let mut answers = AnswerSet::new();
        answers.set("extra", json!(["a", "b"]));
        assert!(answers.matches("extra", "b"));
        assert!(!answers.matches("extra", "c"));
    }

    #[test]
    fn test_list_is_not_a_known_choice() {
        let mut answers = AnswerSet::new();
        answers.set("alimentatieRegeling", json!(["geen"]));
        assert!(matches!(
            answers.choice::<AlimonyRegime>("alimentatieRegeling"),
            Choice::Unrecognized(_)
        ));
    }

    #[test]
    fn test_text_normalisation() {
        let mut answers = AnswerSet::new();
        answers.set("kinderenDetails", json!("  Anna   Jansen \n\n  Piet Jansen  "));
        assert_eq!(answers.text("kinderenDetails").as_deref(), Some("Anna Jansen\nPiet Jansen"));
        answers.set("manVoornamen", json!("   "));
        assert_eq!(answers.text("manVoornamen"), None);
    }

    #[test]
    fn test_deserialises_from_json_object() {
        let answers: AnswerSet =
            serde_json::from_value(json!({"manAchternaam": "Jansen", "aantalKinderen": 2})).unwrap();
        assert_eq!(answers.text("manAchternaam").as_deref(), Some("Jansen"));
        assert_eq!(answers.text("aantalKinderen").as_deref(), Some("2"));
    }
}
