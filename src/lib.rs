//! Convenant Generator
//!
//! Conditional clause assembly for Dutch divorce covenants under the regime
//! of full community of property (algehele gemeenschap van goederen).
//!
//! Structure:
//! - `answers/`: Answer Set, field registry, choice tokens and validation
//! - `convenant/`: Clause Rule Set, one section module per article
//! - `render/`: Preview and Export renderers over the assembled document
//! - `session`: live editing session and snapshot exports
//! - `config`: generator configuration
//! - `api_server`: HTTP surface (feature `api`)
//!
//! The document is a pure function of the Answer Set: every render rebuilds
//! it from scratch, so the preview and the export always agree.

pub mod answers;
pub mod config;
pub mod convenant;
pub mod render;
pub mod session;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use answers::{validate, AnswerSet, Party, Severity, ValidationIssue};
pub use config::{ConfigError, GeneratorConfig};
pub use convenant::{assemble, Clause, ClauseKind, ConvenantGenerator, Document};
pub use render::{
    ExportArtifact, ExportError, ExportFormat, ExportRenderer, MarkdownText, PreviewDocument, PreviewRenderer,
    TextContent,
};
pub use session::{ExportJob, Session};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
