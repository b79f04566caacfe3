//! Advisory text for questionnaire and journal results.
//!
//! Each analysis kind has its own table; they are never mixed.

use crate::{
    assessment::{phq9::URGENT_THRESHOLD, severity::Severity},
    nlp::sentiment::SentimentScores,
};

/// Prepended to questionnaire advice when the total reaches the urgent threshold.
pub const URGENT_ADVISORY: &str = "URGENT: Consider immediate professional support";
/// Appended to journal advice when negative sentiment dominates.
pub const NEGATIVE_THOUGHTS_ADVISORY: &str = "Consider challenging negative thought patterns";
/// Appended to journal advice when positive sentiment is nearly absent.
pub const PLEASANT_ACTIVITIES_ADVISORY: &str = "Try to identify and engage in pleasant activities";

const PHQ9_MINIMAL: &[&str] = &[
    "Continue maintaining good mental health habits",
    "Practice regular self-care activities",
    "Stay connected with supportive people",
    "Consider journaling to track your mood",
];

const PHQ9_MILD: &[&str] = &[
    "Consider talking to a counselor or therapist",
    "Engage in regular physical activity",
    "Practice stress management techniques",
    "Maintain a regular sleep schedule",
    "Connect with friends and family",
];

const PHQ9_MODERATE: &[&str] = &[
    "Strongly consider professional counseling",
    "Discuss your symptoms with a healthcare provider",
    "Consider mindfulness or meditation practices",
    "Maintain social connections",
    "Avoid alcohol and substance use",
];

const PHQ9_SEVERE: &[&str] = &[
    "Seek immediate professional help",
    "Contact your healthcare provider",
    "Consider medication evaluation",
    "Inform trusted friends or family about your situation",
    "Remove access to means of self-harm",
];

const JOURNAL_MINIMAL: &[&str] = &[
    "Continue expressing your thoughts through writing",
    "Practice gratitude journaling",
    "Celebrate small victories",
    "Maintain healthy routines",
];

const JOURNAL_MILD: &[&str] = &[
    "Continue regular journaling",
    "Focus on positive coping strategies",
    "Consider talking to someone you trust",
    "Practice self-compassion",
];

const JOURNAL_MODERATE: &[&str] = &[
    "Consider professional support",
    "Use journaling to identify patterns",
    "Practice mindfulness techniques",
    "Maintain social connections",
];

const JOURNAL_SEVERE: &[&str] = &[
    "Seek professional help immediately",
    "Share your concerns with trusted people",
    "Use journaling as a tool with professional guidance",
    "Focus on safety and self-care",
];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Ordered advice for a questionnaire band and total.
pub fn questionnaire_recommendations(severity: Severity, total: u8) -> Vec<String> {
    let base = match severity {
        Severity::Minimal => PHQ9_MINIMAL,
        Severity::Mild => PHQ9_MILD,
        Severity::Moderate => PHQ9_MODERATE,
        Severity::ModeratelySevere | Severity::Severe | Severity::Unknown => PHQ9_SEVERE,
    };
    let mut recommendations = Vec::with_capacity(base.len() + 1);
    if total >= URGENT_THRESHOLD {
        recommendations.push(URGENT_ADVISORY.to_string());
    }
    recommendations.extend(owned(base));
    recommendations
}

/// Ordered advice for a journal band, extended by sentiment cues.
pub fn journal_recommendations(severity: Severity, sentiment: &SentimentScores) -> Vec<String> {
    let base = match severity {
        Severity::Minimal => JOURNAL_MINIMAL,
        Severity::Mild => JOURNAL_MILD,
        Severity::Moderate => JOURNAL_MODERATE,
        Severity::ModeratelySevere | Severity::Severe | Severity::Unknown => JOURNAL_SEVERE,
    };
    let mut recommendations = owned(base);
    if sentiment.negative > 0.3 {
        recommendations.push(NEGATIVE_THOUGHTS_ADVISORY.to_string());
    }
    if sentiment.positive < 0.1 {
        recommendations.push(PLEASANT_ACTIVITIES_ADVISORY.to_string());
    }
    recommendations
}
