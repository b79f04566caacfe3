//! JSON-lines history store standing in for the persistence collaborator.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{ensure, Context, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    assessment::{AnalysisKind, QuestionnaireResponse, Severity, SeverityResult},
    config::Settings,
};

static USER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid regex"));

/// Whether `user_id` is safe to use as a history file name.
pub fn is_valid_user_id(user_id: &str) -> bool {
    USER_ID.is_match(user_id)
}

/// One persisted assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub user_id: String,
    pub recorded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<QuestionnaireResponse>,
    pub result: SeverityResult,
}

impl HistoryRecord {
    /// Copy with the journal embedding dropped, for listings.
    pub fn without_embedding(self) -> Self {
        Self {
            result: self.result.without_embedding(),
            ..self
        }
    }

    pub fn kind(&self) -> AnalysisKind {
        self.result.analysis_type
    }
}

/// Records shown per kind in a [`HistorySummary`].
pub const RECENT_PER_KIND: usize = 5;

/// Overview of a user's history: counts, latest questionnaire, recent entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_assessments: usize,
    pub total_journal_entries: usize,
    pub latest_phq9: Option<HistoryRecord>,
    pub recent_phq9: Vec<HistoryRecord>,
    pub recent_journal: Vec<HistoryRecord>,
}

/// PHQ-9 total on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phq9Point {
    pub date: String,
    pub score: u8,
    pub severity: Severity,
}

/// Journal sentiment on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: String,
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
}

/// Time series for trend charts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub phq9_scores: Vec<Phq9Point>,
    pub journal_sentiment: Vec<SentimentPoint>,
}

/// Append-only per-user history under `<data_dir>/history`.
#[derive(Debug)]
pub struct HistoryStore {
    root: PathBuf,
    writer: Mutex<()>,
}

impl HistoryStore {
    /// Open the store rooted in the configured data directory.
    pub fn open(settings: &Settings) -> Result<Self> {
        Self::new(settings.join_data("history"))
    }

    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("creating history dir {}", root.display()))?;
        Ok(Self {
            root,
            writer: Mutex::new(()),
        })
    }

    fn user_path(&self, user_id: &str) -> Result<PathBuf> {
        ensure!(is_valid_user_id(user_id), "invalid user id {user_id:?}");
        Ok(self.root.join(format!("{user_id}.jsonl")))
    }

    /// Persist a completed result stamped with the current time.
    pub fn record(
        &self,
        user_id: &str,
        responses: Option<QuestionnaireResponse>,
        result: &SeverityResult,
    ) -> Result<HistoryRecord> {
        let record = HistoryRecord {
            user_id: user_id.to_string(),
            recorded_at: Utc::now(),
            responses,
            result: result.clone(),
        };
        self.append(&record)?;
        Ok(record)
    }

    /// Append a fully formed record.
    pub fn append(&self, record: &HistoryRecord) -> Result<()> {
        let path = self.user_path(&record.user_id)?;
        let mut line = serde_json::to_string(record).context("serialising history record")?;
        line.push('\n');

        let _guard = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("history writer lock poisoned"))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;
        info!(user = %record.user_id, kind = ?record.result.analysis_type, "recorded assessment");
        Ok(())
    }

    /// All records for `user_id`, in file order. Unknown users have none.
    pub fn records(&self, user_id: &str) -> Result<Vec<HistoryRecord>> {
        let path = self.user_path(user_id)?;
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut records = Vec::new();
        for (line_no, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryRecord>(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(path = %path.display(), line = line_no + 1, error = %err, "skipping unreadable history line")
                }
            }
        }
        Ok(records)
    }

    /// Records newest first, optionally of one kind and capped at `limit`.
    ///
    /// Embeddings are stripped; ties keep the later-appended record first.
    pub fn recent(
        &self,
        user_id: &str,
        kind: Option<AnalysisKind>,
        limit: Option<usize>,
    ) -> Result<Vec<HistoryRecord>> {
        let records = self.records(user_id)?;
        Ok(newest_first(records, kind, limit))
    }

    /// Counts per kind plus the most recent entries of each.
    pub fn summary(&self, user_id: &str) -> Result<HistorySummary> {
        Ok(summarize(self.records(user_id)?))
    }

    /// Chart series for records at or after `since`.
    pub fn chart_data(&self, user_id: &str, since: DateTime<Utc>) -> Result<ChartData> {
        let mut records = self.records(user_id)?;
        records.retain(|record| record.recorded_at >= since);
        records.sort_by_key(|record| record.recorded_at);
        Ok(chart_from_records(&records))
    }
}

/// Split records into questionnaire and journal series.
pub fn chart_from_records(records: &[HistoryRecord]) -> ChartData {
    let mut chart = ChartData::default();
    for record in records {
        let date = record.recorded_at.format("%Y-%m-%d").to_string();
        match record.result.analysis_type {
            AnalysisKind::Questionnaire => {
                if let Some(score) = record.result.total_score {
                    chart.phq9_scores.push(Phq9Point {
                        date,
                        score,
                        severity: record.result.severity,
                    });
                }
            }
            AnalysisKind::Journal => {
                if let Some(details) = &record.result.journal {
                    chart.journal_sentiment.push(SentimentPoint {
                        date,
                        compound: details.sentiment.compound,
                        positive: details.sentiment.positive,
                        negative: details.sentiment.negative,
                    });
                }
            }
        }
    }
    chart
}

fn newest_first(
    mut records: Vec<HistoryRecord>,
    kind: Option<AnalysisKind>,
    limit: Option<usize>,
) -> Vec<HistoryRecord> {
    if let Some(kind) = kind {
        records.retain(|record| record.kind() == kind);
    }
    records.reverse();
    records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    records
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(HistoryRecord::without_embedding)
        .collect()
}

/// Build the overview from records in file order.
pub fn summarize(records: Vec<HistoryRecord>) -> HistorySummary {
    let (phq9, journal): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.kind() == AnalysisKind::Questionnaire);
    let total_assessments = phq9.len();
    let total_journal_entries = journal.len();
    let recent_phq9 = newest_first(phq9, None, Some(RECENT_PER_KIND));
    HistorySummary {
        total_assessments,
        total_journal_entries,
        latest_phq9: recent_phq9.first().cloned(),
        recent_journal: newest_first(journal, None, Some(RECENT_PER_KIND)),
        recent_phq9,
    }
}
