//! Answer validation
//!
//! Checks an answer set against the field registry and reports issues for
//! the user. Assembly never depends on the outcome: a covenant with open
//! issues still renders, with placeholders where answers are missing.

use serde::Serialize;
use serde_json::Value;

use super::fields::{self, FieldKind, FieldSpec};
use super::{format_number, AnswerSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into(), severity: Severity::Error }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into(), severity: Severity::Warning }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Prompt shown when a required choice is left open.
fn choice_prompt(id: &str) -> Option<&'static str> {
    Some(match id {
        "heeftKinderen" => "Geef aan of er kinderen zijn",
        "alimentatieRegeling" => "Kies een alimentatieregeling",
        "woningStatus" => "Kies een woning status",
        "heeftPrivevermogen" => "Geef aan of er privévermogen is",
        "heeftBankrekeningen" => "Geef aan of er bankrekeningen zijn",
        "heeftAutos" => "Geef aan of er auto's zijn",
        "inboedelRegeling" => "Kies een inboedelregeling",
        "heeftSchulden" => "Geef aan of er schulden zijn",
        "pensioenRegeling" => "Kies een pensioenregeling",
        _ => return None,
    })
}

/// Inclusive bounds for number fields that are not euro amounts.
fn number_bounds(id: &str) -> Option<(f64, Option<f64>)> {
    match id {
        "aantalKinderen" => Some((0.0, None)),
        "pensioenAfwijkendPercentage" => Some((0.0, Some(100.0))),
        "alimentatieDuurJaren" => Some((1.0, Some(12.0))),
        _ => None,
    }
}

/// All issues for the answer set, errors and warnings, in registry order.
pub fn validate(answers: &AnswerSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for spec in fields::FIELDS {
        check_field(spec, answers, &mut issues);
    }

    if let Some(issue) = surplus_divergence(answers) {
        issues.push(issue);
    }

    if !issues.is_empty() {
        tracing::debug!("Validation found {} issue(s)", issues.len());
    }
    issues
}

/// Flat list of messages, as shown to the user before export.
pub fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(|i| i.message.clone()).collect()
}

pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(ValidationIssue::is_error)
}

fn check_field(spec: &'static FieldSpec, answers: &AnswerSet, issues: &mut Vec<ValidationIssue>) {
    let value = answers.get(spec.id);

    if spec.is_choice() {
        match &value {
            Some(Value::String(token)) if !token.is_empty() => {
                if !spec.accepts(token) {
                    issues.push(ValidationIssue::error(
                        spec.id,
                        format!("Ongeldige keuze voor {}", spec.label),
                    ));
                }
            }
            Some(Value::Array(tokens)) if spec.kind == FieldKind::Checkbox => {
                let invalid = tokens.iter().any(|t| !t.as_str().is_some_and(|t| spec.accepts(t)));
                if invalid {
                    issues.push(ValidationIssue::error(
                        spec.id,
                        format!("Ongeldige keuze voor {}", spec.label),
                    ));
                }
            }
            Some(Value::String(_)) | None if spec.required => {
                let message = choice_prompt(spec.id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} is verplicht", spec.label));
                issues.push(ValidationIssue::error(spec.id, message));
            }
            Some(Value::String(_)) | None => {}
            Some(_) => issues.push(ValidationIssue::error(
                spec.id,
                format!("Ongeldige keuze voor {}", spec.label),
            )),
        }
        return;
    }

    match spec.kind {
        FieldKind::Number => check_number(spec, answers, value.as_ref(), issues),
        FieldKind::Date if spec.required && answers.date(spec.id).is_none() => {
            issues.push(ValidationIssue::error(spec.id, "Datum is verplicht"));
        }
        FieldKind::Text | FieldKind::Textarea if spec.required && answers.text(spec.id).is_none() => {
            issues.push(ValidationIssue::error(spec.id, format!("{} is verplicht", spec.label)));
        }
        _ => {}
    }
}

fn check_number(
    spec: &'static FieldSpec,
    answers: &AnswerSet,
    value: Option<&Value>,
    issues: &mut Vec<ValidationIssue>,
) {
    let blank = match value {
        None => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    };
    if blank {
        return;
    }

    let Some(number) = answers.number(spec.id) else {
        issues.push(ValidationIssue::error(spec.id, format!("{} moet een getal zijn", spec.label)));
        return;
    };

    match number_bounds(spec.id) {
        Some((min, max)) => {
            let above = max.is_some_and(|max| number > max);
            if number < min || above {
                let message = match max {
                    Some(max) => format!(
                        "{} moet tussen {} en {} liggen",
                        spec.label,
                        format_number(min),
                        format_number(max)
                    ),
                    None => format!("{} mag niet negatief zijn", spec.label),
                };
                issues.push(ValidationIssue::error(spec.id, message));
            }
        }
        None if number < 0.0 => {
            issues.push(ValidationIssue::error(spec.id, "Bedrag moet positief zijn"));
        }
        None => {}
    }
}

// ============================================================================
// Derived Figures
// ============================================================================

/// Property value minus mortgage, for display next to the surplus field.
/// Never written back into the answer set.
pub fn suggested_surplus(answers: &AnswerSet) -> Option<f64> {
    let value = answers.number("woningWaarde")?;
    let mortgage = answers.number("hypotheekBedrag").unwrap_or(0.0);
    Some(value - mortgage)
}

/// Warn when the entered surplus disagrees with value minus mortgage.
fn surplus_divergence(answers: &AnswerSet) -> Option<ValidationIssue> {
    let entered = answers.number("woningOverwaarde")?;
    let value = answers.number("woningWaarde")?;
    let mortgage = answers.number("hypotheekBedrag")?;
    let derived = value - mortgage;

    if (entered - derived).abs() < 0.005 {
        return None;
    }
    Some(ValidationIssue::warning(
        "woningOverwaarde",
        format!(
            "Overwaarde (€ {}) wijkt af van waarde minus hypotheek (€ {})",
            format_number(entered),
            format_number(derived)
        ),
    ))
}
