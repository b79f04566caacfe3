//! Deterministic sentiment-threshold estimator used when the model path is unavailable.

use crate::{assessment::severity::Severity, nlp::sentiment::SentimentScores};

/// Confidence attached to every rule-based estimate.
pub const RULE_BASED_CONFIDENCE: f64 = 0.7;

/// Map sentiment scores to a severity band; first matching rule wins.
pub fn estimate_from_sentiment(scores: &SentimentScores) -> Severity {
    if scores.compound <= -0.5 || scores.negative >= 0.4 {
        Severity::Moderate
    } else if scores.compound <= -0.2 || scores.negative >= 0.2 {
        Severity::Mild
    } else {
        Severity::Minimal
    }
}
