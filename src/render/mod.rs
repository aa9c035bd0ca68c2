//! Renderers
//!
//! Two views of one clause document:
//! - Preview: structured blocks for the form surface (`PreviewRenderer`),
//!   also available as JSON and a standalone HTML page
//! - Export: a Markdown artifact (`ExportRenderer`)
//!
//! Both must carry the same text. [`TextContent`] strips styling so the
//! document, the preview and the parsed export can be compared block by block.

pub mod export;
pub mod formatters;
pub mod plain_text;
pub mod preview;
pub mod view_models;

pub use export::{export_filename, ExportArtifact, ExportError, ExportFormat, ExportRenderer};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
pub use plain_text::MarkdownText;
pub use preview::PreviewRenderer;
pub use view_models::{BlockStyle, PreviewBlock, PreviewDocument};

use crate::convenant::{Clause, Document};

/// Unstyled text of a rendering, one string per clause.
pub trait TextContent {
    fn text_blocks(&self) -> Vec<String>;
}

impl TextContent for Document {
    fn text_blocks(&self) -> Vec<String> {
        self.clauses.iter().map(Clause::text_block).collect()
    }
}

impl TextContent for PreviewDocument {
    fn text_blocks(&self) -> Vec<String> {
        self.blocks.iter().map(PreviewBlock::text_block).collect()
    }
}
