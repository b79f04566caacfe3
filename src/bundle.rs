//! Load-once model bundle and the capability descriptor derived from it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{
    error::ArtifactError,
    nlp::{
        classifier::{LogisticSeverityModel, SeverityModel, CLASSIFIER_FILE},
        embeddings::{self, Encoder},
        features::{Standardizer, SCALER_FILE},
        sentiment::SentimentAnalyzer,
    },
};

/// Which parts of the bundle were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub encoder: bool,
    pub sentiment: bool,
    pub scaler: bool,
    pub classifier: bool,
    /// True only when all four components are present.
    pub fully_loaded: bool,
}

/// Encoder, sentiment analyzer, scaler and classifier; each independently optional.
///
/// Immutable once built. Share it behind an `Arc`; there is no reload path.
#[derive(Default)]
pub struct ModelBundle {
    encoder: Option<Box<dyn Encoder>>,
    sentiment: Option<SentimentAnalyzer>,
    scaler: Option<Standardizer>,
    classifier: Option<Box<dyn SeverityModel>>,
}

/// Borrowed view of the components needed by the model-based path.
pub struct ModelPath<'a> {
    pub encoder: &'a dyn Encoder,
    pub sentiment: &'a SentimentAnalyzer,
    pub scaler: &'a Standardizer,
    pub classifier: &'a dyn SeverityModel,
}

impl ModelBundle {
    /// Bundle with nothing loaded; journal sentiment degrades to zeros.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bundle with only the compiled-in sentiment lexicon.
    pub fn sentiment_only() -> Self {
        Self::empty().with_sentiment(SentimentAnalyzer::new())
    }

    /// Attempt to load every artefact from `models_dir`.
    ///
    /// Missing or broken artefacts are logged and left out; this never fails.
    pub fn load(models_dir: &Path) -> Self {
        info!(dir = %models_dir.display(), "loading model artefacts");
        let encoder = loaded("encoder", embeddings::load_encoder(models_dir));
        let scaler = loaded("scaler", Standardizer::load(&models_dir.join(SCALER_FILE)));
        let classifier = loaded(
            "classifier",
            LogisticSeverityModel::load(&models_dir.join(CLASSIFIER_FILE)),
        );

        let mut bundle = Self::sentiment_only();
        bundle.encoder = encoder;
        bundle.scaler = scaler;
        bundle.classifier =
            classifier.map(|model| Box::new(model) as Box<dyn SeverityModel>);

        let capabilities = bundle.capabilities();
        if capabilities.fully_loaded {
            info!("all model artefacts loaded");
        } else {
            warn!(?capabilities, "some model artefacts are missing; journal analysis will use the rule-based fallback");
        }
        bundle
    }

    pub fn with_encoder(mut self, encoder: impl Encoder + 'static) -> Self {
        self.encoder = Some(Box::new(encoder));
        self
    }

    pub fn with_sentiment(mut self, analyzer: SentimentAnalyzer) -> Self {
        self.sentiment = Some(analyzer);
        self
    }

    pub fn with_scaler(mut self, scaler: Standardizer) -> Self {
        self.scaler = Some(scaler);
        self
    }

    pub fn with_classifier(mut self, classifier: impl SeverityModel + 'static) -> Self {
        self.classifier = Some(Box::new(classifier));
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            encoder: self.encoder.is_some(),
            sentiment: self.sentiment.is_some(),
            scaler: self.scaler.is_some(),
            classifier: self.classifier.is_some(),
            fully_loaded: self.model_path().is_some(),
        }
    }

    pub fn sentiment(&self) -> Option<&SentimentAnalyzer> {
        self.sentiment.as_ref()
    }

    /// Components for the model-based path, present only when fully loaded.
    pub fn model_path(&self) -> Option<ModelPath<'_>> {
        Some(ModelPath {
            encoder: self.encoder.as_deref()?,
            sentiment: self.sentiment.as_ref()?,
            scaler: self.scaler.as_ref()?,
            classifier: self.classifier.as_deref()?,
        })
    }
}

fn loaded<T>(name: &str, result: Result<T, ArtifactError>) -> Option<T> {
    match result {
        Ok(artifact) => {
            info!(artifact = name, "artefact loaded");
            Some(artifact)
        }
        Err(ArtifactError::Missing { path }) => {
            warn!(artifact = name, path = %path.display(), "artefact not found");
            None
        }
        Err(err) => {
            error!(artifact = name, error = %err, "artefact failed to load");
            None
        }
    }
}
