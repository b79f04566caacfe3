//! Assessment entry points: questionnaire scoring and journal analysis.

pub mod journal;
pub mod phq9;
pub mod recommend;
pub mod rules;
pub mod severity;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    bundle::{Capabilities, ModelBundle},
    error::AssessmentError,
    nlp::{normalize::word_count, sentiment::SentimentScores},
};

pub use journal::{Estimate, Method};
pub use phq9::QuestionnaireResponse;
pub use severity::Severity;

/// Default minimum trimmed journal length, in characters.
pub const DEFAULT_MIN_JOURNAL_CHARS: usize = 10;

/// Which instrument produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisKind {
    #[serde(rename = "PHQ-9")]
    Questionnaire,
    Journal,
}

impl std::str::FromStr for AnalysisKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "phq9" | "phq-9" | "questionnaire" => Ok(Self::Questionnaire),
            "journal" => Ok(Self::Journal),
            other => Err(format!("unknown analysis kind {other:?}, expected phq9 or journal")),
        }
    }
}

/// Journal-specific signals kept alongside the severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalDetails {
    pub text_length: usize,
    pub word_count: usize,
    pub sentiment: SentimentScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_class: Option<usize>,
    /// Raw encoder output, kept for persistence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml_error: Option<String>,
}

/// Completed assessment handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityResult {
    pub analysis_type: AnalysisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u8>,
    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<JournalDetails>,
}

impl SeverityResult {
    /// Copy suitable for responses, with the raw embedding dropped.
    pub fn without_embedding(mut self) -> Self {
        if let Some(details) = self.journal.as_mut() {
            details.embedding = None;
        }
        self
    }
}

/// Score nine PHQ-9 answers. Needs no model artefact.
pub fn score_questionnaire(responses: &[i64]) -> Result<SeverityResult, AssessmentError> {
    let response = QuestionnaireResponse::new(responses)?;
    let score = phq9::score(&response);
    Ok(SeverityResult {
        analysis_type: AnalysisKind::Questionnaire,
        total_score: Some(score.total),
        max_score: Some(phq9::MAX_SCORE),
        severity: score.severity,
        description: score.severity.phq9_description().to_string(),
        recommendations: recommend::questionnaire_recommendations(score.severity, score.total),
        method: Method::RuleBased,
        confidence: None,
        urgent: score.urgent,
        journal: None,
    })
}

/// Inference front door holding the shared, read-only model bundle.
#[derive(Clone)]
pub struct Assessor {
    bundle: Arc<ModelBundle>,
    min_journal_chars: usize,
}

impl Assessor {
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self {
            bundle,
            min_journal_chars: DEFAULT_MIN_JOURNAL_CHARS,
        }
    }

    pub fn with_min_journal_chars(mut self, min_journal_chars: usize) -> Self {
        self.min_journal_chars = min_journal_chars;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.bundle.capabilities()
    }

    pub fn min_journal_chars(&self) -> usize {
        self.min_journal_chars
    }

    pub fn score_questionnaire(&self, responses: &[i64]) -> Result<SeverityResult, AssessmentError> {
        score_questionnaire(responses)
    }

    /// Analyze journal text; rejects short input before any extraction.
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub fn analyze_text(&self, text: &str) -> Result<SeverityResult, AssessmentError> {
        let length = text.trim().chars().count();
        if length < self.min_journal_chars {
            return Err(AssessmentError::TextTooShort {
                length,
                minimum: self.min_journal_chars,
            });
        }

        let outcome = journal::run(&self.bundle, text);
        let severity = outcome.estimate.severity();
        debug!(%severity, method = ?outcome.estimate.method(), "journal analyzed");

        Ok(SeverityResult {
            analysis_type: AnalysisKind::Journal,
            total_score: None,
            max_score: None,
            severity,
            description: severity.journal_description().to_string(),
            recommendations: recommend::journal_recommendations(severity, &outcome.sentiment),
            method: outcome.estimate.method(),
            confidence: Some(outcome.estimate.confidence()),
            urgent: false,
            journal: Some(JournalDetails {
                text_length: text.chars().count(),
                word_count: word_count(text),
                sentiment: outcome.sentiment,
                predicted_class: outcome.estimate.class_code(),
                embedding: outcome.embedding,
                ml_error: outcome.ml_error,
            }),
        })
    }
}
