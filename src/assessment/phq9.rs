//! PHQ-9 questionnaire validation and scoring.

use serde::{Deserialize, Serialize};

use crate::{assessment::severity::Severity, error::AssessmentError};

/// Number of PHQ-9 items.
pub const QUESTION_COUNT: usize = 9;
/// Highest answer value for a single item.
pub const MAX_ANSWER: u8 = 3;
/// Highest attainable total.
pub const MAX_SCORE: u8 = 27;
/// Totals at or above this prepend an urgent advisory.
pub const URGENT_THRESHOLD: u8 = 15;

/// Prompts in questionnaire order.
pub const QUESTIONS: [&str; QUESTION_COUNT] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading the newspaper or watching television",
    "Moving or speaking so slowly that other people could have noticed, or the opposite being so fidgety or restless that you have been moving around a lot more than usual",
    "Thoughts that you would be better off dead, or of hurting yourself",
];

/// A validated set of nine answers, each in `[0, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct QuestionnaireResponse([u8; QUESTION_COUNT]);

impl QuestionnaireResponse {
    /// Validate raw answers; no value is clamped or corrected.
    pub fn new(raw: &[i64]) -> Result<Self, AssessmentError> {
        if raw.len() != QUESTION_COUNT {
            return Err(AssessmentError::ResponseCount(raw.len()));
        }
        let mut answers = [0u8; QUESTION_COUNT];
        for (index, (&value, slot)) in raw.iter().zip(answers.iter_mut()).enumerate() {
            if !(0..=MAX_ANSWER as i64).contains(&value) {
                return Err(AssessmentError::ResponseOutOfRange { index, value });
            }
            *slot = value as u8;
        }
        Ok(Self(answers))
    }

    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }
}

impl TryFrom<Vec<i64>> for QuestionnaireResponse {
    type Error = AssessmentError;

    fn try_from(raw: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<QuestionnaireResponse> for Vec<i64> {
    fn from(value: QuestionnaireResponse) -> Self {
        value.0.iter().map(|&v| v as i64).collect()
    }
}

/// Total score and band of a validated questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phq9Score {
    pub total: u8,
    pub severity: Severity,
    pub urgent: bool,
}

/// Score a validated questionnaire.
pub fn score(response: &QuestionnaireResponse) -> Phq9Score {
    let total = response.total();
    Phq9Score {
        total,
        severity: Severity::from_phq9_total(total),
        urgent: total >= URGENT_THRESHOLD,
    }
}
