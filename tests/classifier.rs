use linfa::prelude::*;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use mood_screen::{
    assessment::Severity,
    error::ArtifactError,
    nlp::classifier::{LogisticSeverityModel, PredictionError, SeverityModel},
};
use ndarray::{Array1, Array2};

const FEATURES: usize = 6;
const CLASSES: usize = 4;

/// Four well separated clusters, one hot feature per class.
fn training_set() -> Dataset<f64, usize, ndarray::Ix1> {
    let mut records = Vec::new();
    let mut targets = Vec::new();
    for class in 0..CLASSES {
        for i in 0..12 {
            let jitter = (i as f64 - 6.0) * 0.02;
            let mut row = vec![jitter; FEATURES];
            row[class] = 3.0 + jitter;
            records.extend(row);
            targets.push(class);
        }
    }
    let records = Array2::from_shape_vec((targets.len(), FEATURES), records).unwrap();
    Dataset::new(records, Array1::from(targets))
}

fn fitted() -> MultiFittedLogisticRegression<f64, usize> {
    MultiLogisticRegression::default()
        .max_iterations(200)
        .fit(&training_set())
        .unwrap()
}

fn row(hot: usize) -> Array2<f64> {
    let mut row = Array2::zeros((1, FEATURES));
    row[[0, hot]] = 3.0;
    row
}

#[test]
fn predicts_cluster_with_probability() {
    let model = LogisticSeverityModel::new(fitted()).unwrap();
    assert_eq!(model.n_features(), FEATURES);
    for class in 0..CLASSES {
        let prediction = model.predict_row(&row(class)).unwrap();
        assert_eq!(prediction.class, class);
        assert!(prediction.confidence > 1.0 / CLASSES as f64);
        assert!(prediction.confidence <= 1.0);
    }
    assert_eq!(
        Severity::from_class_code(model.predict_row(&row(3)).unwrap().class),
        Severity::Severe
    );
}

#[test]
fn rejects_rows_of_the_wrong_shape() {
    let model = LogisticSeverityModel::new(fitted()).unwrap();
    assert_eq!(
        model.predict_row(&Array2::zeros((1, FEATURES + 2))),
        Err(PredictionError::FeatureWidth {
            expected: FEATURES,
            actual: FEATURES + 2
        })
    );
    assert_eq!(
        model.predict_row(&Array2::zeros((2, FEATURES))),
        Err(PredictionError::BatchSize(2))
    );
}

#[test]
fn round_trips_through_json_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classifier.json");
    std::fs::write(&path, serde_json::to_string(&fitted()).unwrap()).unwrap();

    let model = LogisticSeverityModel::load(&path).unwrap();
    assert_eq!(model.predict_row(&row(1)).unwrap().class, 1);
}

#[test]
fn corrupt_artifact_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classifier.json");
    std::fs::write(&path, r#"{"threshold": 0.5}"#).unwrap();
    assert!(matches!(
        LogisticSeverityModel::load(&path),
        Err(ArtifactError::Decode { .. })
    ));
}

#[test]
fn mismatched_class_labels_are_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classifier.json");
    let mut artifact = serde_json::to_value(fitted()).unwrap();
    artifact["classes"].as_array_mut().unwrap().pop();
    std::fs::write(&path, artifact.to_string()).unwrap();

    let err = LogisticSeverityModel::load(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Invalid(_)), "{err:?}");
    assert!(err.to_string().contains("3 class labels"), "{err}");
}

#[test]
fn extra_class_labels_are_rejected() {
    let mut artifact = serde_json::to_value(fitted()).unwrap();
    artifact["classes"] = serde_json::json!([0, 1, 2, 3, 4]);
    let tampered: MultiFittedLogisticRegression<f64, usize> =
        serde_json::from_value(artifact).unwrap();
    assert!(matches!(
        LogisticSeverityModel::new(tampered),
        Err(ArtifactError::Invalid(_))
    ));
}
