mod common;

use common::StubEncoder;
use mood_screen::{
    error::ArtifactError,
    nlp::embeddings::{
        bind_inputs, extract_embedding, load_encoder, Encoder, EncoderInput, ENCODER_DIR,
    },
};

struct Fixed(Vec<f32>);

impl Encoder for Fixed {
    fn encode(&self, _normalized: &str) -> anyhow::Result<Vec<f32>> {
        Ok(self.0.clone())
    }
}

struct Echo;

impl Encoder for Echo {
    fn encode(&self, normalized: &str) -> anyhow::Result<Vec<f32>> {
        Ok(normalized.bytes().map(f32::from).collect())
    }
}

#[test]
fn missing_encoder_yields_nothing() {
    assert_eq!(extract_embedding(None, "a quiet evening"), None);
}

#[test]
fn encoder_sees_normalized_text() {
    let embedding = extract_embedding(Some(&Echo as &dyn Encoder), "  A   Quiet\tDAY ").unwrap();
    let expected: Vec<f32> = "a quiet day".bytes().map(f32::from).collect();
    assert_eq!(embedding, expected);
}

#[test]
fn encoder_errors_are_absorbed() {
    let encoder = StubEncoder::failing(4);
    assert_eq!(extract_embedding(Some(&encoder as &dyn Encoder), "a quiet evening"), None);
    assert_eq!(encoder.call_count(), 1);
}

#[test]
fn degenerate_vectors_are_rejected() {
    assert_eq!(extract_embedding(Some(&Fixed(vec![]) as &dyn Encoder), "a quiet evening"), None);
    assert_eq!(
        extract_embedding(Some(&Fixed(vec![0.1, f32::NAN]) as &dyn Encoder), "a quiet evening"),
        None
    );
    assert_eq!(
        extract_embedding(Some(&Fixed(vec![0.1, 0.2]) as &dyn Encoder), "a quiet evening"),
        Some(vec![0.1, 0.2])
    );
}

#[test]
fn absent_encoder_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_encoder(dir.path()).err().unwrap();
    assert!(
        matches!(&err, ArtifactError::Missing { path } if path.ends_with(ENCODER_DIR)),
        "{err:?}"
    );
}

#[cfg(not(feature = "onx"))]
#[test]
fn encoder_without_runtime_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(ENCODER_DIR)).unwrap();
    let err = load_encoder(dir.path()).err().unwrap();
    assert!(matches!(err, ArtifactError::Runtime(_)), "{err:?}");
}

#[cfg(feature = "onx")]
#[test]
fn encoder_directory_without_files_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(ENCODER_DIR)).unwrap();
    let err = load_encoder(dir.path()).err().unwrap();
    assert!(matches!(err, ArtifactError::Missing { .. }), "{err:?}");
}

#[test]
fn inputs_bind_by_declared_name() {
    assert_eq!(
        bind_inputs(["input_ids", "token_type_ids", "attention_mask"]).unwrap(),
        vec![
            EncoderInput::InputIds,
            EncoderInput::TokenTypeIds,
            EncoderInput::AttentionMask
        ]
    );
    assert_eq!(
        bind_inputs(["attention_mask", "input_ids"]).unwrap(),
        vec![EncoderInput::AttentionMask, EncoderInput::InputIds]
    );
    let err = bind_inputs(["input_ids", "pixel_values"]).unwrap_err();
    assert!(err.to_string().contains("pixel_values"));
}
