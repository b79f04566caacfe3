use mood_screen::nlp::sentiment::{score_sentiment, SentimentAnalyzer, SentimentScores};
use proptest::prelude::*;

fn scores(text: &str) -> SentimentScores {
    SentimentAnalyzer::new().polarity_scores(text)
}

#[test]
fn sad_text_scores_negative() {
    let s = scores("i feel sad");
    assert!((s.compound - -0.4767).abs() < 5e-4, "{s:?}");
    assert_eq!(s.positive, 0.0);
    assert!((s.negative - 0.608).abs() < 1e-3);
    assert!((s.neutral - 0.392).abs() < 1e-3);
}

#[test]
fn positive_text_scores_positive() {
    let s = scores("today was a great day");
    assert!(s.compound > 0.5, "{s:?}");
    assert!(s.positive > s.negative);
}

#[test]
fn negation_flips_polarity() {
    assert!(scores("i am happy").compound > 0.0);
    assert!(scores("i am not happy").compound < 0.0);
    assert!(scores("i don't feel good").compound < 0.0);
}

#[test]
fn boosters_and_exclamations_intensify() {
    let plain = scores("good").compound;
    assert!(scores("very good").compound > plain);
    assert!(scores("good!!!").compound > plain);
}

#[test]
fn clause_after_but_dominates() {
    assert!(scores("i was happy but now i am sad").compound < 0.0);
}

#[test]
fn unscorable_text_is_fully_neutral() {
    let s = scores(&".".repeat(500));
    assert_eq!(
        s,
        SentimentScores {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    );
}

#[test]
fn empty_text_scores_zero() {
    assert_eq!(scores(""), SentimentScores::zero());
}

#[test]
fn missing_analyzer_degrades_to_zero() {
    assert_eq!(
        score_sentiment(None, "i feel hopeless and alone"),
        SentimentScores::zero()
    );
}

proptest! {
    #[test]
    fn proportions_sum_to_one(text in "[a-z!?.]{1,12}( [a-z']{1,12}){0,30}") {
        let s = scores(&text);
        let total = s.positive + s.negative + s.neutral;
        prop_assert!((total - 1.0).abs() < 0.01, "{s:?} for {text:?}");
        prop_assert!(s.positive >= 0.0 && s.negative >= 0.0 && s.neutral >= 0.0);
        prop_assert!((-1.0..=1.0).contains(&s.compound));
    }

    #[test]
    fn lexicon_words_stay_bounded(
        words in proptest::collection::vec(
            prop::sample::select(vec![
                "very", "not", "sad", "happy", "hopeless", "but", "no", "great", "least", "tired", "!!!",
            ]),
            1..40,
        )
    ) {
        let s = scores(&words.join(" "));
        prop_assert!((s.positive + s.negative + s.neutral - 1.0).abs() < 0.01);
        prop_assert!((-1.0..=1.0).contains(&s.compound));
    }
}
