//! Plain-text projection of exported Markdown.
//!
//! Parses the export with `pulldown-cmark` and keeps only the text: every
//! paragraph or heading becomes one block, line breaks become `\n`, and
//! emphasis and rules are dropped.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::render::TextContent;

/// Exported Markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownText(pub String);

impl MarkdownText {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TextContent for MarkdownText {
    fn text_blocks(&self) -> Vec<String> {
        let mut blocks = Vec::new();
        let mut current: Option<String> = None;

        for event in Parser::new_ext(&self.0, Options::empty()) {
            match event {
                Event::Start(Tag::Paragraph | Tag::Heading { .. }) => current = Some(String::new()),
                Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => blocks.extend(current.take()),
                Event::Text(text) | Event::Code(text) => {
                    if let Some(block) = current.as_mut() {
                        block.push_str(&text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(block) = current.as_mut() {
                        block.push('\n');
                    }
                }
                _ => {}
            }
        }

        blocks
    }
}
