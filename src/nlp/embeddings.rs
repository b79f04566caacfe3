//! Contextual text embeddings from a pretrained encoder exported to ONNX.

use std::path::Path;

use anyhow::Result;
use tracing::{error, warn};

use crate::{error::ArtifactError, nlp::normalize::normalize_text};

/// Maximum encoder sequence length; longer inputs keep their prefix.
pub const MAX_SEQUENCE_LEN: usize = 512;

/// Sub-directory of the models folder holding the encoder export.
pub const ENCODER_DIR: &str = "fine_tuned_bert";

/// Trait for sentence encoders producing a pooled sequence-start vector.
pub trait Encoder: Send + Sync {
    /// Encode already normalised text.
    fn encode(&self, normalized: &str) -> Result<Vec<f32>>;
}

/// Tokenizer output feeding one encoder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderInput {
    InputIds,
    AttentionMask,
    TokenTypeIds,
}

/// Map the input names an export declares, in order, to tokenizer outputs.
pub fn bind_inputs<'a, I>(declared: I) -> Result<Vec<EncoderInput>>
where
    I: IntoIterator<Item = &'a str>,
{
    declared
        .into_iter()
        .map(|name| match name {
            "input_ids" => Ok(EncoderInput::InputIds),
            "attention_mask" => Ok(EncoderInput::AttentionMask),
            "token_type_ids" => Ok(EncoderInput::TokenTypeIds),
            other => Err(anyhow::anyhow!("encoder declares unsupported input {other:?}")),
        })
        .collect()
}

/// Produce the embedding for raw `text`, or `None` when unavailable.
///
/// Extraction failures are logged here and never reach the caller.
pub fn extract_embedding(encoder: Option<&dyn Encoder>, text: &str) -> Option<Vec<f32>> {
    let encoder = encoder?;
    let normalized = normalize_text(text);
    match encoder.encode(&normalized) {
        Ok(vector) if vector.is_empty() => {
            warn!("encoder returned an empty vector");
            None
        }
        Ok(vector) if vector.iter().any(|v| !v.is_finite()) => {
            warn!(dim = vector.len(), "encoder returned non-finite values");
            None
        }
        Ok(vector) => Some(vector),
        Err(err) => {
            error!(error = %err, "embedding extraction failed");
            None
        }
    }
}

/// Load the ONNX encoder and tokenizer from `models_dir`.
#[cfg(feature = "onx")]
pub fn load_encoder(models_dir: &Path) -> Result<Box<dyn Encoder>, ArtifactError> {
    let dir = models_dir.join(ENCODER_DIR);
    if !dir.exists() {
        return Err(ArtifactError::Missing { path: dir });
    }
    let encoder = onnx::OnnxEncoder::load(&dir)?;
    Ok(Box::new(encoder))
}

/// Encoder fallback when ONNX Runtime support is not compiled in.
#[cfg(not(feature = "onx"))]
pub fn load_encoder(models_dir: &Path) -> Result<Box<dyn Encoder>, ArtifactError> {
    let dir = models_dir.join(ENCODER_DIR);
    if !dir.exists() {
        return Err(ArtifactError::Missing { path: dir });
    }
    Err(ArtifactError::Runtime(
        "built without the `onx` feature".to_string(),
    ))
}

#[cfg(feature = "onx")]
mod onnx {
    use std::path::Path;

    use anyhow::{anyhow, ensure, Context, Result};
    use ndarray::{Array2, Axis, CowArray};
    use ort::{tensor::OrtOwnedTensor, Environment, GraphOptimizationLevel, Session, SessionBuilder, Value};
    use tokenizers::{Tokenizer, TruncationDirection, TruncationParams};
    use tracing::info;

    use super::{bind_inputs, Encoder, EncoderInput, MAX_SEQUENCE_LEN};
    use crate::error::ArtifactError;

    pub struct OnnxEncoder {
        session: Session,
        tokenizer: Tokenizer,
    }

    impl OnnxEncoder {
        pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
            let model_path = dir.join("model.onnx");
            let tokenizer_path = dir.join("tokenizer.json");
            for path in [&model_path, &tokenizer_path] {
                if !path.exists() {
                    return Err(ArtifactError::Missing { path: path.clone() });
                }
            }

            let runtime = |err: ort::OrtError| ArtifactError::Runtime(err.to_string());
            let environment = Environment::builder()
                .with_name("mood-screen-encoder")
                .build()
                .map_err(runtime)?
                .into_arc();
            let session = SessionBuilder::new(&environment)
                .map_err(runtime)?
                .with_optimization_level(GraphOptimizationLevel::Level1)
                .map_err(runtime)?
                .with_model_from_file(&model_path)
                .map_err(runtime)?;

            let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|err| ArtifactError::Invalid(err.to_string()))?;
            tokenizer
                .with_truncation(Some(TruncationParams {
                    max_length: MAX_SEQUENCE_LEN,
                    direction: TruncationDirection::Right,
                    ..Default::default()
                }))
                .map_err(|err| ArtifactError::Invalid(err.to_string()))?;
            tokenizer.with_padding(None);

            info!(path = %model_path.display(), "loaded onnx encoder");
            Ok(Self { session, tokenizer })
        }
    }

    fn as_input(values: &[u32]) -> Result<CowArray<'static, i64, ndarray::IxDyn>> {
        let row: Vec<i64> = values.iter().map(|&v| v as i64).collect();
        let array = Array2::from_shape_vec((1, row.len()), row)?.into_dyn();
        Ok(CowArray::from(array))
    }

    impl Encoder for OnnxEncoder {
        fn encode(&self, normalized: &str) -> Result<Vec<f32>> {
            let encoding = self
                .tokenizer
                .encode(normalized, true)
                .map_err(|err| anyhow!(err))?;
            let ids = as_input(encoding.get_ids())?;
            let mask = as_input(encoding.get_attention_mask())?;
            let type_ids = as_input(encoding.get_type_ids())?;

            let allocator = self.session.allocator();
            let slots = bind_inputs(self.session.inputs.iter().map(|input| input.name.as_str()))?;
            let mut inputs = Vec::with_capacity(slots.len());
            for slot in slots {
                let tensor = match slot {
                    EncoderInput::InputIds => &ids,
                    EncoderInput::AttentionMask => &mask,
                    EncoderInput::TokenTypeIds => &type_ids,
                };
                inputs.push(Value::from_array(allocator, tensor)?);
            }
            let outputs = self.session.run(inputs)?;
            let hidden: OrtOwnedTensor<f32, _> = outputs
                .first()
                .context("encoder produced no outputs")?
                .try_extract()?;
            let hidden = hidden.view();
            ensure!(
                hidden.ndim() == 3,
                "expected [batch, seq, hidden] output, got {:?}",
                hidden.shape()
            );
            // Final-layer state of the sequence-start token.
            let first_token = hidden.index_axis(Axis(0), 0);
            let first_token = first_token.index_axis(Axis(0), 0);
            Ok(first_token.iter().copied().collect())
        }
    }
}
