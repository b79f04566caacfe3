//! CLI entry-point for inspecting and exporting assessment history.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::{Args as ClapArgs, Subcommand};
use tracing::{info, instrument};

use crate::{
    assessment::AnalysisKind,
    cli::print_json,
    config::Settings,
    data::{export, history::HistoryStore},
};

/// Args for the `history` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Print PHQ-9 and journal sentiment series for recent days.
    Chart {
        #[arg(long)]
        user: String,
        /// Look-back window; defaults to HISTORY_DAYS.
        #[arg(long)]
        days: Option<i64>,
    },
    /// List records newest first, without embeddings.
    List {
        #[arg(long)]
        user: String,
        /// Only `phq9` or `journal` records.
        #[arg(long)]
        kind: Option<AnalysisKind>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Counts per kind, the latest PHQ-9 and the most recent entries.
    Summary {
        #[arg(long)]
        user: String,
    },
    /// Write phq9.csv and journal.csv for a user.
    Export {
        #[arg(long)]
        user: String,
        #[arg(long)]
        out: PathBuf,
    },
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let store = HistoryStore::open(&settings)?;
    match args.action {
        Action::Chart { user, days } => {
            let days = days.unwrap_or(settings.history_days).clamp(0, 36_500);
            let chart = store.chart_data(&user, Utc::now() - Duration::days(days))?;
            print_json(&chart)
        }
        Action::List { user, kind, limit } => {
            print_json(&store.recent(&user, kind, limit)?)
        }
        Action::Summary { user } => print_json(&store.summary(&user)?),
        Action::Export { user, out } => {
            let records = store.records(&user)?;
            let paths = export::export_csv(&records, &out)?;
            info!(phq9 = %paths.phq9.display(), journal = %paths.journal.display(), "history exported");
            Ok(())
        }
    }
}
