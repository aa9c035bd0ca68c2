//! View Models for the live preview
//!
//! Structured, serialisable projection of a clause document. The form
//! surface renders these blocks; the JSON and HTML formatters consume them.

use serde::Serialize;

use crate::convenant::ClauseKind;

/// Visual weight of a block in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockStyle {
    Title,
    Subtitle,
    Heading,
    Numbered,
    #[default]
    Body,
    Signature,
}

impl BlockStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            BlockStyle::Title => "convenant-title",
            BlockStyle::Subtitle => "convenant-subtitle",
            BlockStyle::Heading => "convenant-heading",
            BlockStyle::Numbered => "convenant-clause",
            BlockStyle::Body => "convenant-body",
            BlockStyle::Signature => "convenant-signature",
        }
    }
}

/// One preview block, one per clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewBlock {
    pub kind: ClauseKind,
    pub style: BlockStyle,
    /// "2.4 Hoogte partneralimentatie", "De man,"
    pub label: Option<String>,
    pub number: Option<String>,
    pub caption: Option<String>,
    pub lines: Vec<String>,
    pub rule: String,
}

impl PreviewBlock {
    /// Unstyled content of the block: label line, then text lines.
    pub fn text_block(&self) -> String {
        self.label
            .iter()
            .cloned()
            .chain(self.lines.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Complete preview of the covenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct PreviewDocument {
    pub title: String,
    pub blocks: Vec<PreviewBlock>,
    pub clause_count: usize,
}
