//! CLI entry-point for journal text analysis.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::{load_assessor, print_json},
    config::Settings,
    data::history::HistoryStore,
};

/// Args for the `journal` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Journal text to analyze.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,
    /// Read the journal text from a file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Persist the result to this user's history.
    #[arg(long)]
    pub user: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => anyhow::bail!("provide --text or --file"),
    };

    let assessor = load_assessor(&settings);
    let result = assessor.analyze_text(&text)?;
    info!(severity = %result.severity, method = ?result.method, "analyzed journal");

    if let Some(user) = args.user.as_deref() {
        HistoryStore::open(&settings)?.record(user, None, &result)?;
    }
    print_json(&result.without_embedding())
}
