//! Journal pipeline: sentiment, then either the model path or the rule-based estimate.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{
    assessment::{
        rules::{self, RULE_BASED_CONFIDENCE},
        severity::Severity,
    },
    bundle::ModelBundle,
    nlp::{
        embeddings::extract_embedding,
        features,
        normalize::normalize_text,
        sentiment::{score_sentiment, SentimentScores},
    },
};

/// How a severity estimate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    ModelBased,
    RuleBased,
}

/// Outcome of the two-path decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    ModelBased { class: usize, confidence: f64 },
    RuleBased { severity: Severity },
}

impl Estimate {
    pub fn severity(&self) -> Severity {
        match self {
            Self::ModelBased { class, .. } => Severity::from_class_code(*class),
            Self::RuleBased { severity } => *severity,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::ModelBased { confidence, .. } => *confidence,
            Self::RuleBased { .. } => RULE_BASED_CONFIDENCE,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::ModelBased { .. } => Method::ModelBased,
            Self::RuleBased { .. } => Method::RuleBased,
        }
    }

    /// Raw classifier code, if the model produced this estimate.
    pub fn class_code(&self) -> Option<usize> {
        match self {
            Self::ModelBased { class, .. } => Some(*class),
            Self::RuleBased { .. } => None,
        }
    }
}

/// Everything the journal pipeline learned about one text.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalOutcome {
    pub sentiment: SentimentScores,
    pub estimate: Estimate,
    pub embedding: Option<Vec<f32>>,
    /// Diagnostic note set when the model path failed and fell back.
    pub ml_error: Option<String>,
}

impl JournalOutcome {
    fn rule_based(sentiment: SentimentScores, ml_error: Option<String>) -> Self {
        Self {
            sentiment,
            estimate: Estimate::RuleBased {
                severity: rules::estimate_from_sentiment(&sentiment),
            },
            embedding: None,
            ml_error,
        }
    }
}

/// Run the journal pipeline over already length-checked text.
pub fn run(bundle: &ModelBundle, text: &str) -> JournalOutcome {
    let normalized = normalize_text(text);
    let sentiment = score_sentiment(bundle.sentiment(), &normalized);

    let Some(path) = bundle.model_path() else {
        debug!("model path unavailable; using rule-based estimate");
        return JournalOutcome::rule_based(sentiment, None);
    };

    let Some(embedding) = extract_embedding(Some(path.encoder), text) else {
        return JournalOutcome::rule_based(
            sentiment,
            Some("embedding extraction failed".to_string()),
        );
    };

    let row = match features::fuse(&embedding, &sentiment, path.scaler) {
        Ok(row) => row,
        Err(err) => {
            warn!(error = %err, "feature fusion failed; falling back to rules");
            return JournalOutcome::rule_based(sentiment, Some(err.to_string()));
        }
    };

    match path.classifier.predict_row(&row) {
        Ok(prediction) => JournalOutcome {
            sentiment,
            estimate: Estimate::ModelBased {
                class: prediction.class,
                confidence: prediction.confidence,
            },
            embedding: Some(embedding),
            ml_error: None,
        },
        Err(err) => {
            error!(error = %err, "severity prediction failed; falling back to rules");
            JournalOutcome::rule_based(sentiment, Some(err.to_string()))
        }
    }
}
