//! Trained severity classifier over fused, standardised features.

use std::path::Path;

use linfa_logistic::MultiFittedLogisticRegression;
use ndarray::Array2;
use thiserror::Error;

use crate::error::ArtifactError;

/// File name of the serialized classifier inside the models folder.
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// Raw classifier output: class code plus the max class probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: usize,
    pub confidence: f64,
}

/// Runtime failure while predicting a single sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("classifier expects {expected} features, got {actual}")]
    FeatureWidth { expected: usize, actual: usize },
    #[error("classifier expects exactly one sample, got {0}")]
    BatchSize(usize),
    #[error("classifier produced non-finite probabilities")]
    NonFinite,
    #[error("probability column {0} has no class label")]
    UnknownColumn(usize),
}

/// Trait for multi-class severity models.
pub trait SeverityModel: Send + Sync {
    /// Width of the feature rows the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predict the class code of one standardised row.
    fn predict_row(&self, features: &Array2<f64>) -> Result<Prediction, PredictionError>;
}

/// Multinomial logistic regression fitted with linfa and stored as JSON.
#[derive(Debug, Clone)]
pub struct LogisticSeverityModel {
    inner: MultiFittedLogisticRegression<f64, usize>,
}

impl LogisticSeverityModel {
    /// Wrap a fitted model after checking its coefficient shapes agree.
    pub fn new(inner: MultiFittedLogisticRegression<f64, usize>) -> Result<Self, ArtifactError> {
        let (n_features, n_classes) = inner.params().dim();
        if n_features == 0 {
            return Err(ArtifactError::Invalid(
                "classifier has no coefficients".to_string(),
            ));
        }
        if n_classes < 2 {
            return Err(ArtifactError::Invalid(format!(
                "classifier needs at least 2 classes, has {n_classes}"
            )));
        }
        if inner.intercept().len() != n_classes || inner.classes().len() != n_classes {
            return Err(ArtifactError::Invalid(format!(
                "classifier shapes disagree: {n_classes} coefficient columns, {} intercepts, {} class labels",
                inner.intercept().len(),
                inner.classes().len()
            )));
        }
        Ok(Self { inner })
    }

    /// Deserialize a fitted model from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let inner: MultiFittedLogisticRegression<f64, usize> =
            crate::nlp::read_json_artifact(path)?;
        Self::new(inner)
    }
}

impl SeverityModel for LogisticSeverityModel {
    fn n_features(&self) -> usize {
        self.inner.params().nrows()
    }

    fn predict_row(&self, features: &Array2<f64>) -> Result<Prediction, PredictionError> {
        if features.nrows() != 1 {
            return Err(PredictionError::BatchSize(features.nrows()));
        }
        if features.ncols() != self.n_features() {
            return Err(PredictionError::FeatureWidth {
                expected: self.n_features(),
                actual: features.ncols(),
            });
        }

        let probabilities = self.inner.predict_probabilities(features);
        let mut best: Option<(usize, f64)> = None;
        for (column, &p) in probabilities.row(0).iter().enumerate() {
            if !p.is_finite() {
                return Err(PredictionError::NonFinite);
            }
            if best.map_or(true, |(_, top)| p > top) {
                best = Some((column, p));
            }
        }
        let (column, confidence) = best.ok_or(PredictionError::NonFinite)?;
        let class = *self
            .inner
            .classes()
            .get(column)
            .ok_or(PredictionError::UnknownColumn(column))?;
        Ok(Prediction {
            class,
            confidence: confidence.clamp(0.0, 1.0),
        })
    }
}
