//! Markdown export format.
//!
//! Every piece of covenant text is backslash-escaped, so the only Markdown
//! structure in the output is the structure written here. Parsing the result
//! with a CommonMark parser gives back the canonical clause text exactly.

use std::fmt::{self, Write};

use crate::convenant::{Clause, ClauseKind, Document};

/// Markdown formatter for the export artifact
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format document as Markdown
    pub fn format(document: &Document) -> Result<String, fmt::Error> {
        let mut md = String::with_capacity(32768);
        for (i, clause) in document.clauses.iter().enumerate() {
            if i > 0 {
                md.push('\n');
            }
            Self::write_clause(&mut md, clause)?;
        }
        Ok(md)
    }

    fn write_clause(md: &mut String, clause: &Clause) -> fmt::Result {
        match clause.kind {
            ClauseKind::Title => writeln!(md, "# {}", escape_markdown(&clause.text)),
            ClauseKind::Heading => writeln!(md, "## {}", escape_markdown(&clause.text)),
            ClauseKind::NumberedParagraph | ClauseKind::PlainParagraph => {
                let mut lines = Vec::new();
                if let Some(label) = clause.label() {
                    lines.push(format!("**{}**", escape_markdown(&label)));
                }
                lines.extend(body_lines(&clause.text));
                writeln!(md, "{}", lines.join("\\\n"))
            }
            ClauseKind::SignatureBlock => {
                writeln!(md, "___")?;
                writeln!(md)?;
                let mut lines = Vec::new();
                if let Some(caption) = &clause.caption {
                    lines.push(format!("**{}**", escape_markdown(caption)));
                }
                lines.extend(body_lines(&clause.text));
                writeln!(md, "{}", lines.join("\\\n"))
            }
        }
    }
}

fn body_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(escape_markdown).collect()
}

/// Backslash-escape every ASCII punctuation character.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if c.is_ascii_punctuation() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
