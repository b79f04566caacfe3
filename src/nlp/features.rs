//! Feature fusion: embedding plus sentiment scores, standardised for the classifier.

use std::path::Path;

use ndarray::{Array1, Array2, Axis};
use serde::Deserialize;
use thiserror::Error;

use crate::{error::ArtifactError, nlp::sentiment::SentimentScores};

/// File name of the standardisation transform inside the models folder.
pub const SCALER_FILE: &str = "scaler.json";

/// Raised when a fused row does not match the fitted transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feature width {actual} does not match the fitted transform width {expected}")]
pub struct FusionError {
    pub expected: usize,
    pub actual: usize,
}

/// Per-column z-score transform fitted offline, `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawStandardizer")]
pub struct Standardizer {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

#[derive(Deserialize)]
struct RawStandardizer {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl TryFrom<RawStandardizer> for Standardizer {
    type Error = ArtifactError;

    fn try_from(raw: RawStandardizer) -> Result<Self, Self::Error> {
        Self::new(raw.mean, raw.scale)
    }
}

impl Standardizer {
    /// Build a transform; zero scales are treated as one.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        if mean.is_empty() || mean.len() != scale.len() {
            return Err(ArtifactError::Invalid(format!(
                "scaler mean/scale lengths {}/{} must match and be non-zero",
                mean.len(),
                scale.len()
            )));
        }
        if mean.iter().chain(&scale).any(|v| !v.is_finite()) {
            return Err(ArtifactError::Invalid(
                "scaler contains non-finite values".to_string(),
            ));
        }
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok(Self {
            mean: Array1::from(mean),
            scale: Array1::from_vec(scale),
        })
    }

    /// Read a JSON transform `{"mean": [...], "scale": [...]}` from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        crate::nlp::read_json_artifact(path)
    }

    /// Width of rows this transform accepts.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardise one sample into a single-row matrix.
    pub fn transform(&self, row: &[f64]) -> Result<Array2<f64>, FusionError> {
        if row.len() != self.n_features() {
            return Err(FusionError {
                expected: self.n_features(),
                actual: row.len(),
            });
        }
        let standardised = (&Array1::from(row.to_vec()) - &self.mean) / &self.scale;
        Ok(standardised.insert_axis(Axis(0)))
    }
}

/// Concatenate embedding and sentiment scores, in that order.
pub fn feature_vector(embedding: &[f32], sentiment: &SentimentScores) -> Vec<f64> {
    embedding
        .iter()
        .map(|&v| v as f64)
        .chain(sentiment.as_features())
        .collect()
}

/// Fuse both signals and standardise them into one classifier-ready row.
pub fn fuse(
    embedding: &[f32],
    sentiment: &SentimentScores,
    scaler: &Standardizer,
) -> Result<Array2<f64>, FusionError> {
    scaler.transform(&feature_vector(embedding, sentiment))
}
