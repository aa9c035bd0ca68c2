//! Fail-soft interpolation of answers into clause text.
//!
//! Every helper returns displayable text: a missing answer becomes a visible
//! placeholder, never an empty string and never an error.

use chrono::{Datelike, NaiveDate};

use crate::answers::{AnswerSet, Party};

// ============================================================================
// Placeholders
// ============================================================================

pub const PLACEHOLDER: &str = "[...]";
pub const DATE_PLACEHOLDER: &str = "[datum]";
pub const AMOUNT_PLACEHOLDER: &str = "[bedrag]";

const MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Text answer or `[...]`.
pub fn value(answers: &AnswerSet, field: &str) -> String {
    value_or(answers, field, PLACEHOLDER)
}

pub fn value_or(answers: &AnswerSet, field: &str, fallback: &str) -> String {
    answers.text(field).unwrap_or_else(|| fallback.to_string())
}

/// Uppercased text answer; the placeholder is uppercased too.
pub fn upper(answers: &AnswerSet, field: &str) -> String {
    value(answers, field).to_uppercase()
}

/// "€ 1200", or "€ [...]" when the amount is absent.
pub fn euro(answers: &AnswerSet, field: &str) -> String {
    euro_or(answers, field, PLACEHOLDER)
}

pub fn euro_or(answers: &AnswerSet, field: &str, fallback: &str) -> String {
    format!("€ {}", answers.amount(field).unwrap_or_else(|| fallback.to_string()))
}

/// Dutch long date ("15 maart 2010"), or `[datum]`.
pub fn date(answers: &AnswerSet, field: &str) -> String {
    match answers.date(field) {
        Some(raw) => format_dutch_date(&raw),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// Formats `YYYY-MM-DD` (a time suffix is ignored). Anything unparseable is
/// shown as entered.
pub fn format_dutch_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DATE_PLACEHOLDER.to_string();
    }

    let parsed = trimmed
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok());

    match parsed {
        Some(date) => format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year()),
        None => trimmed.to_string(),
    }
}

/// Singular wording applies only when exactly one child is recorded.
pub fn single_child(answers: &AnswerSet) -> bool {
    answers.number("aantalKinderen") == Some(1.0)
}

// ============================================================================
// Party Direction
// ============================================================================

/// Payer/assignee direction read from a man/vrouw field. An unknown or unset
/// direction renders placeholders for both parties and every pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction(Option<Party>);

impl Direction {
    pub fn from_field(answers: &AnswerSet, field: &str) -> Self {
        Self(answers.party(field).known())
    }

    pub fn party(self) -> &'static str {
        self.0.map_or(PLACEHOLDER, Party::label)
    }

    pub fn other(self) -> &'static str {
        self.0.map_or(PLACEHOLDER, |p| p.other().label())
    }

    /// hij / zij of the party itself.
    pub fn subject(self) -> &'static str {
        self.0.map_or(PLACEHOLDER, Party::subject_pronoun)
    }

    /// hem / haar of the other party.
    pub fn other_object(self) -> &'static str {
        self.0.map_or(PLACEHOLDER, |p| p.other().object_pronoun())
    }

    /// zijn / haar of the party itself.
    pub fn possessive(self) -> &'static str {
        self.0.map_or(PLACEHOLDER, Party::possessive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dutch_long_date() {
        assert_eq!(format_dutch_date("2010-03-15"), "15 maart 2010");
        assert_eq!(format_dutch_date("2024-12-01T00:00:00Z"), "1 december 2024");
        assert_eq!(format_dutch_date("volgende week"), "volgende week");
        assert_eq!(format_dutch_date(""), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_placeholders() {
        let answers = AnswerSet::new();
        assert_eq!(value(&answers, "manAdres"), "[...]");
        assert_eq!(date(&answers, "huwelijksdatum"), "[datum]");
        assert_eq!(euro(&answers, "afkoopBedrag"), "€ [...]");
        assert_eq!(euro_or(&answers, "kinderalimentatieBedrag", AMOUNT_PLACEHOLDER), "€ [bedrag]");
    }

    #[test]
    fn test_upper_and_values() {
        let mut answers = AnswerSet::new();
        answers.set("manAchternaam", json!("van der Berg"));
        answers.set("afkoopBedrag", json!(50000));
        assert_eq!(upper(&answers, "manAchternaam"), "VAN DER BERG");
        assert_eq!(euro(&answers, "afkoopBedrag"), "€ 50000");
    }

    #[test]
    fn test_direction_words() {
        let mut answers = AnswerSet::new();
        answers.set("alimentatieplichtige", json!("man"));
        let dir = Direction::from_field(&answers, "alimentatieplichtige");
        assert_eq!((dir.party(), dir.other(), dir.other_object()), ("man", "vrouw", "haar"));

        answers.set("alimentatieplichtige", json!("beiden"));
        let unknown = Direction::from_field(&answers, "alimentatieplichtige");
        assert_eq!(unknown.party(), PLACEHOLDER);
        assert_eq!(unknown.other_object(), PLACEHOLDER);
    }

    #[test]
    fn test_single_child() {
        let mut answers = AnswerSet::new();
        assert!(!single_child(&answers));
        answers.set("aantalKinderen", json!(1));
        assert!(single_child(&answers));
        answers.set("aantalKinderen", json!(2));
        assert!(!single_child(&answers));
    }
}
