use mood_screen::{
    assessment::rules::{estimate_from_sentiment, RULE_BASED_CONFIDENCE},
    assessment::{Estimate, Method, Severity},
    nlp::sentiment::SentimentScores,
};
use proptest::prelude::*;

fn scores(compound: f64, negative: f64) -> SentimentScores {
    SentimentScores {
        positive: 0.0,
        negative,
        neutral: 1.0 - negative,
        compound,
    }
}

#[test]
fn thresholds_match_in_order() {
    assert_eq!(estimate_from_sentiment(&scores(-0.5, 0.0)), Severity::Moderate);
    assert_eq!(estimate_from_sentiment(&scores(0.0, 0.4)), Severity::Moderate);
    assert_eq!(estimate_from_sentiment(&scores(-0.2, 0.0)), Severity::Mild);
    assert_eq!(estimate_from_sentiment(&scores(0.3, 0.2)), Severity::Mild);
    assert_eq!(estimate_from_sentiment(&scores(-0.19, 0.19)), Severity::Minimal);
    assert_eq!(estimate_from_sentiment(&SentimentScores::zero()), Severity::Minimal);
}

#[test]
fn rule_estimates_carry_fixed_confidence() {
    let estimate = Estimate::RuleBased {
        severity: Severity::Mild,
    };
    assert_eq!(estimate.confidence(), RULE_BASED_CONFIDENCE);
    assert_eq!(estimate.method(), Method::RuleBased);
    assert_eq!(estimate.class_code(), None);
}

proptest! {
    #[test]
    fn estimator_is_deterministic(compound in -1.0f64..=1.0, negative in 0.0f64..=1.0) {
        let s = scores(compound, negative);
        prop_assert_eq!(estimate_from_sentiment(&s), estimate_from_sentiment(&s));
        prop_assert_ne!(estimate_from_sentiment(&s), Severity::Severe);
    }
}
