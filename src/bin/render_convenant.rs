// Render a covenant from an answers file
//
// Prints validation issues, then writes the requested artifacts. Without
// --confirm, error-level issues stop the export.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use convenant_generator::answers::validation;
use convenant_generator::{AnswerSet, ExportFormat, GeneratorConfig, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "render_convenant",
    version,
    about = "Render a divorce covenant from an answers file"
)]
struct Args {
    /// Answers file (JSON object keyed by field id)
    #[arg(value_name = "ANSWERS")]
    answers: PathBuf,

    /// Directory the artifacts are written to
    #[arg(long = "out", value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Artifact format
    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    format: OutputFormat,

    /// Export even when validation reports errors
    #[arg(long)]
    confirm: bool,

    /// Signing date used in file names (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Md,
    Html,
    Json,
    All,
}

impl OutputFormat {
    fn export_formats(self) -> Vec<ExportFormat> {
        match self {
            OutputFormat::Md => vec![ExportFormat::Markdown],
            OutputFormat::Html => vec![ExportFormat::Html],
            OutputFormat::Json => vec![ExportFormat::Json],
            OutputFormat::All => vec![ExportFormat::Markdown, ExportFormat::Html, ExportFormat::Json],
        }
    }
}

/// Write to a temporary sibling, then rename into place.
fn write_atomically(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes).with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("failed to move {} into place", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "convenant_generator=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = GeneratorConfig::from_env()?;
    let date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let raw = std::fs::read_to_string(&args.answers)
        .with_context(|| format!("failed to read {}", args.answers.display()))?;
    let mut answers = AnswerSet::with_defaults();
    answers.merge(serde_json::from_str(&raw).context("answers file must be a JSON object")?);

    let session = Session::from_answers(answers, config);

    let issues = session.validate();
    for issue in &issues {
        println!("[{:?}] {}: {}", issue.severity, issue.field, issue.message);
    }
    if validation::has_errors(&issues) && !args.confirm {
        bail!("{} validation issue(s); fix them or pass --confirm", issues.len());
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    for format in args.format.export_formats() {
        let artifact = session.begin_export(date).with_format(format).build()?;
        let path = args.out_dir.join(&artifact.filename);
        write_atomically(&path, &artifact.bytes)?;
        println!("Wrote {} ({} bytes)", path.display(), artifact.len());
    }

    Ok(())
}
