//! Clause descriptors and the assembled document.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseKind {
    Title,
    Heading,
    NumberedParagraph,
    PlainParagraph,
    SignatureBlock,
}

/// One resolved unit of covenant text.
///
/// `number` is the literal numeral the emitting rule assigns ("2.4"), never
/// a running counter. `caption` is the short clause title printed next to it.
/// `rule` names the branch that produced the clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub kind: ClauseKind,
    pub number: Option<String>,
    pub caption: Option<String>,
    pub text: String,
    pub rule: &'static str,
}

impl Clause {
    pub fn title(rule: &'static str, text: impl Into<String>) -> Self {
        Self { kind: ClauseKind::Title, number: None, caption: None, text: text.into(), rule }
    }

    pub fn heading(rule: &'static str, text: impl Into<String>) -> Self {
        Self { kind: ClauseKind::Heading, number: None, caption: None, text: text.into(), rule }
    }

    pub fn paragraph(rule: &'static str, text: impl Into<String>) -> Self {
        Self { kind: ClauseKind::PlainParagraph, number: None, caption: None, text: text.into(), rule }
    }

    pub fn numbered(
        rule: &'static str,
        number: impl Into<String>,
        caption: Option<&str>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: ClauseKind::NumberedParagraph,
            number: Some(number.into()),
            caption: caption.map(str::to_string),
            text: text.into(),
            rule,
        }
    }

    pub fn signature(rule: &'static str, caption: &str, text: impl Into<String>) -> Self {
        Self {
            kind: ClauseKind::SignatureBlock,
            number: None,
            caption: Some(caption.to_string()),
            text: text.into(),
            rule,
        }
    }

    /// "2.4 Hoogte partneralimentatie" for numbered clauses, the caption alone
    /// for signature blocks, `None` otherwise.
    pub fn label(&self) -> Option<String> {
        match (&self.number, &self.caption) {
            (Some(number), Some(caption)) => Some(format!("{} {}", number, caption)),
            (Some(number), None) => Some(number.clone()),
            (None, Some(caption)) => Some(caption.clone()),
            (None, None) => None,
        }
    }

    /// Unstyled content: label line, then text.
    pub fn text_block(&self) -> String {
        match self.label() {
            Some(label) if self.text.is_empty() => label,
            Some(label) => format!("{}\n{}", label, self.text),
            None => self.text.clone(),
        }
    }
}

/// Ordered clause sequence, rebuilt from scratch for every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub clauses: Vec<Clause>,
}

impl Document {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn text_blocks(&self) -> Vec<String> {
        self.clauses.iter().map(Clause::text_block).collect()
    }

    /// Blocks separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.text_blocks().join("\n\n")
    }

    pub fn by_rule(&self, rule: &str) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.rule == rule)
    }

    pub fn has_rule(&self, rule: &str) -> bool {
        self.by_rule(rule).is_some()
    }

    pub fn by_number(&self, number: &str) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.number.as_deref() == Some(number))
    }

    pub fn rules(&self) -> Vec<&'static str> {
        self.clauses.iter().map(|c| c.rule).collect()
    }
}
