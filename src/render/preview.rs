//! Preview renderer: clause document to on-screen blocks.

use crate::answers::AnswerSet;
use crate::convenant::{assemble, Clause, ClauseKind, Document};
use crate::render::formatters::{HtmlFormatter, JsonFormatter};
use crate::render::view_models::{BlockStyle, PreviewBlock, PreviewDocument};

pub struct PreviewRenderer;

impl PreviewRenderer {
    pub fn render(document: &Document) -> PreviewDocument {
        let blocks: Vec<PreviewBlock> = document.clauses.iter().map(Self::block).collect();
        let title = document
            .clauses
            .iter()
            .find(|c| c.kind == ClauseKind::Title)
            .map(|c| c.text.clone())
            .unwrap_or_default();

        PreviewDocument {
            title,
            clause_count: blocks.len(),
            blocks,
        }
    }

    /// Assemble and render in one step. Called on every answer change.
    pub fn render_answers(answers: &AnswerSet) -> PreviewDocument {
        Self::render(&assemble(answers))
    }

    pub fn to_json(preview: &PreviewDocument) -> Result<String, serde_json::Error> {
        JsonFormatter::format(preview)
    }

    /// Standalone HTML page for the preview pane.
    pub fn render_html(document: &Document) -> String {
        HtmlFormatter::format(&Self::render(document))
    }

    fn block(clause: &Clause) -> PreviewBlock {
        let style = match clause.kind {
            ClauseKind::Title if clause.rule == "title.sub" => BlockStyle::Subtitle,
            ClauseKind::Title => BlockStyle::Title,
            ClauseKind::Heading => BlockStyle::Heading,
            ClauseKind::NumberedParagraph => BlockStyle::Numbered,
            ClauseKind::PlainParagraph => BlockStyle::Body,
            ClauseKind::SignatureBlock => BlockStyle::Signature,
        };

        let lines = if clause.text.is_empty() {
            Vec::new()
        } else {
            clause.text.split('\n').map(str::to_string).collect()
        };

        PreviewBlock {
            kind: clause.kind,
            style,
            label: clause.label(),
            number: clause.number.clone(),
            caption: clause.caption.clone(),
            lines,
            rule: clause.rule.to_string(),
        }
    }
}
