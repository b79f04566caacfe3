//! CSV export of a user's assessment history.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::{
    assessment::{AnalysisKind, Method, Severity},
    data::history::HistoryRecord,
};

#[derive(Debug, Serialize)]
struct Phq9Row {
    recorded_at: String,
    total_score: u8,
    severity: Severity,
    urgent: bool,
}

#[derive(Debug, Serialize)]
struct JournalRow {
    recorded_at: String,
    severity: Severity,
    method: Method,
    confidence: f64,
    positive: f64,
    negative: f64,
    neutral: f64,
    compound: f64,
    word_count: usize,
}

/// Paths written by [`export_csv`].
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub phq9: PathBuf,
    pub journal: PathBuf,
}

/// Write `phq9.csv` and `journal.csv` into `out_dir`.
pub fn export_csv(records: &[HistoryRecord], out_dir: &Path) -> Result<ExportPaths> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let paths = ExportPaths {
        phq9: out_dir.join("phq9.csv"),
        journal: out_dir.join("journal.csv"),
    };

    let mut phq9 = csv::Writer::from_path(&paths.phq9)
        .with_context(|| format!("creating {}", paths.phq9.display()))?;
    let mut journal = csv::Writer::from_path(&paths.journal)
        .with_context(|| format!("creating {}", paths.journal.display()))?;
    let (mut phq9_rows, mut journal_rows) = (0usize, 0usize);

    for record in records {
        let recorded_at = record.recorded_at.to_rfc3339();
        let result = &record.result;
        match result.analysis_type {
            AnalysisKind::Questionnaire => {
                phq9.serialize(Phq9Row {
                    recorded_at,
                    total_score: result.total_score.unwrap_or_default(),
                    severity: result.severity,
                    urgent: result.urgent,
                })?;
                phq9_rows += 1;
            }
            AnalysisKind::Journal => {
                let Some(details) = &result.journal else {
                    continue;
                };
                journal.serialize(JournalRow {
                    recorded_at,
                    severity: result.severity,
                    method: result.method,
                    confidence: result.confidence.unwrap_or_default(),
                    positive: details.sentiment.positive,
                    negative: details.sentiment.negative,
                    neutral: details.sentiment.neutral,
                    compound: details.sentiment.compound,
                    word_count: details.word_count,
                })?;
                journal_rows += 1;
            }
        }
    }
    phq9.flush()?;
    journal.flush()?;

    info!(phq9 = phq9_rows, journal = journal_rows, dir = %out_dir.display(), "exported history");
    Ok(paths)
}
