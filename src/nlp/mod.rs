//! Natural language processing building blocks for journal analysis.

pub mod classifier;
pub mod embeddings;
pub mod features;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ArtifactError;

/// Read and decode a JSON artefact, distinguishing absence from corruption.
pub fn read_json_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
