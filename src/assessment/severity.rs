//! Severity taxonomy shared by questionnaire and journal analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Depression severity label.
///
/// Questionnaire results use the five PHQ-9 bands; journal results use the
/// four-band scale plus `Unknown` for classifier codes without a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
    Unknown,
}

impl Severity {
    /// PHQ-9 band for a total score in `[0, 27]`.
    pub fn from_phq9_total(total: u8) -> Self {
        match total {
            0..=4 => Self::Minimal,
            5..=9 => Self::Mild,
            10..=14 => Self::Moderate,
            15..=19 => Self::ModeratelySevere,
            _ => Self::Severe,
        }
    }

    /// Journal band for a classifier class code.
    pub fn from_class_code(code: usize) -> Self {
        match code {
            0 => Self::Minimal,
            1 => Self::Mild,
            2 => Self::Moderate,
            3 => Self::Severe,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately Severe",
            Self::Severe => "Severe",
            Self::Unknown => "Unknown",
        }
    }

    /// Human-readable description for a questionnaire band.
    pub fn phq9_description(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal or no depression",
            Self::Mild => "Mild depression",
            Self::Moderate => "Moderate depression",
            Self::ModeratelySevere => "Moderately severe depression",
            Self::Severe => "Severe depression",
            Self::Unknown => "Severity could not be determined",
        }
    }

    /// Human-readable description for a journal band.
    pub fn journal_description(&self) -> &'static str {
        match self {
            Self::Minimal => "Journal shows minimal signs of depressive mood",
            Self::Mild => "Journal shows mild signs of depressive mood",
            Self::Moderate | Self::ModeratelySevere => {
                "Journal shows moderate signs of depressive mood"
            }
            Self::Severe => "Journal shows severe signs of depressive mood",
            Self::Unknown => "Severity could not be determined from the journal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
