//! Export renderer: the downloadable covenant artifact.
//!
//! The artifact is built from one Answer Set snapshot. Any failure is
//! reported as an [`ExportError`] and no artifact is produced.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::answers::{AnswerSet, ValidationIssue};
use crate::config::GeneratorConfig;
use crate::convenant::{assemble, Document};
use crate::render::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use crate::render::PreviewRenderer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to format export document")]
    Format(#[from] std::fmt::Error),

    #[error("failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{} validation issue(s) must be resolved or confirmed before export", .0.len())]
    ValidationPending(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Html,
    Json,
}

impl ExportFormat {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(ExportFormat::Markdown),
            "html" => Some(ExportFormat::Html),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Markdown takes the configured extension.
    pub fn extension<'a>(&self, config: &'a GeneratorConfig) -> &'a str {
        match self {
            ExportFormat::Markdown => &config.export_extension,
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

/// Finished export, ready to be written or sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub struct ExportRenderer;

impl ExportRenderer {
    /// Markdown export of a document.
    pub fn render(document: &Document) -> Result<String, ExportError> {
        Ok(MarkdownFormatter::format(document)?)
    }

    pub fn render_as(document: &Document, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Markdown => Self::render(document),
            ExportFormat::Html => Ok(HtmlFormatter::format(&PreviewRenderer::render(document))),
            ExportFormat::Json => Ok(JsonFormatter::format(&PreviewRenderer::render(document))?),
        }
    }

    /// Assemble, render and name the artifact for one snapshot.
    pub fn artifact(
        answers: &AnswerSet,
        format: ExportFormat,
        today: NaiveDate,
        config: &GeneratorConfig,
    ) -> Result<ExportArtifact, ExportError> {
        let document = assemble(answers);
        let content = Self::render_as(&document, format)?;
        Ok(ExportArtifact {
            filename: export_filename(answers, format, today, config),
            content_type: format.content_type(),
            bytes: content.into_bytes(),
        })
    }
}

/// `<type>_<man surname>_<woman surname>_<YYYY-MM-DD>.<ext>`
pub fn export_filename(
    answers: &AnswerSet,
    format: ExportFormat,
    today: NaiveDate,
    config: &GeneratorConfig,
) -> String {
    let [first_fallback, second_fallback] = &config.fallback_surnames;
    let man = answers.text("manAchternaam").unwrap_or_else(|| first_fallback.clone());
    let woman = answers.text("vrouwAchternaam").unwrap_or_else(|| second_fallback.clone());

    let filename = format!(
        "{}_{}_{}_{}.{}",
        config.document_type,
        man,
        woman,
        today.format("%Y-%m-%d"),
        format.extension(config)
    );
    sanitize_filename(&filename)
}

/// Replace characters that cannot appear in a file name on common platforms.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
