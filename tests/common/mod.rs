#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use anyhow::{bail, Result};
use mood_screen::nlp::{
    classifier::{Prediction, PredictionError, SeverityModel},
    embeddings::Encoder,
    features::Standardizer,
};
use ndarray::Array2;

/// Encoder returning a constant vector and counting calls.
#[derive(Clone)]
pub struct StubEncoder {
    pub dim: usize,
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl StubEncoder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(dim: usize) -> Self {
        Self {
            fail: true,
            ..Self::new(dim)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Encoder for StubEncoder {
    fn encode(&self, _normalized: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("malformed tensor");
        }
        Ok(vec![0.25; self.dim])
    }
}

/// Classifier returning a fixed prediction, or an error.
#[derive(Clone)]
pub struct StubModel {
    pub n_features: usize,
    pub outcome: Result<Prediction, PredictionError>,
    pub calls: Arc<AtomicUsize>,
}

impl StubModel {
    pub fn predicting(n_features: usize, class: usize, confidence: f64) -> Self {
        Self {
            n_features,
            outcome: Ok(Prediction { class, confidence }),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(n_features: usize) -> Self {
        Self {
            n_features,
            outcome: Err(PredictionError::NonFinite),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SeverityModel for StubModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_row(&self, features: &Array2<f64>) -> Result<Prediction, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if features.ncols() != self.n_features {
            return Err(PredictionError::FeatureWidth {
                expected: self.n_features,
                actual: features.ncols(),
            });
        }
        self.outcome.clone()
    }
}

/// Identity transform for `width` features.
pub fn identity_scaler(width: usize) -> Standardizer {
    Standardizer::new(vec![0.0; width], vec![1.0; width]).expect("valid scaler")
}
