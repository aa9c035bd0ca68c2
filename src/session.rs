//! Editing session
//!
//! Owns the live Answer Set. Every read of the document or preview rebuilds
//! it from the current answers. Exports work on a snapshot taken when the
//! export begins, so edits made while an export is being built only affect
//! the live session.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::answers::{validate, AnswerSet, ValidationIssue};
use crate::config::GeneratorConfig;
use crate::convenant::{assemble, Document};
use crate::render::{ExportArtifact, ExportError, ExportFormat, ExportRenderer, PreviewDocument, PreviewRenderer};

#[derive(Debug, Clone)]
pub struct Session {
    answers: AnswerSet,
    config: GeneratorConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Session {
    /// Session seeded with the registry defaults.
    pub fn with_defaults() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            answers: AnswerSet::with_defaults(),
            config,
        }
    }

    pub fn from_answers(answers: AnswerSet, config: GeneratorConfig) -> Self {
        Self { answers, config }
    }

    pub fn get(&self, field: &str) -> Option<Value> {
        self.answers.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.answers.set(field, value);
    }

    /// Replace the whole Answer Set.
    pub fn replace(&mut self, answers: AnswerSet) {
        self.answers = answers;
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn document(&self) -> Document {
        assemble(&self.answers)
    }

    pub fn preview(&self) -> PreviewDocument {
        PreviewRenderer::render(&self.document())
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(&self.answers)
    }

    /// Snapshot the answers for an export.
    pub fn begin_export(&self, today: NaiveDate) -> ExportJob {
        ExportJob {
            answers: self.answers.clone(),
            config: self.config.clone(),
            format: ExportFormat::Markdown,
            today,
        }
    }

    /// Validate first. Error-level issues stop the export unless `confirm`
    /// is set; a confirmed export keeps its placeholders.
    pub fn export_with_confirmation(&self, today: NaiveDate, confirm: bool) -> Result<ExportArtifact, ExportError> {
        let issues = self.validate();
        let errors: Vec<ValidationIssue> = issues.into_iter().filter(ValidationIssue::is_error).collect();

        if !errors.is_empty() {
            if !confirm {
                info!(issues = errors.len(), "Export held back for confirmation");
                return Err(ExportError::ValidationPending(errors));
            }
            warn!(issues = errors.len(), "Exporting despite validation errors");
        }

        self.begin_export(today).build()
    }
}

/// One-shot export over an Answer Set snapshot.
#[derive(Debug, Clone)]
pub struct ExportJob {
    answers: AnswerSet,
    config: GeneratorConfig,
    format: ExportFormat,
    today: NaiveDate,
}

impl ExportJob {
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn build(self) -> Result<ExportArtifact, ExportError> {
        match ExportRenderer::artifact(&self.answers, self.format, self.today, &self.config) {
            Ok(artifact) => {
                info!(filename = %artifact.filename, bytes = artifact.len(), "Export built");
                Ok(artifact)
            }
            Err(e) => {
                error!("Export failed: {}", e);
                Err(e)
            }
        }
    }
}
