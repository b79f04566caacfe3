//! Lexicon-based sentiment scoring with VADER semantics.

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::{self, N_SCALAR};

/// Normalisation constant approximating the max expected valence sum.
const ALPHA: f64 = 15.0;
/// Per-`!` emphasis, capped at four marks.
const EXCLAIM_INCR: f64 = 0.292;
/// Per-`?` emphasis for two or three marks.
const QUESTION_INCR: f64 = 0.18;
/// Flat emphasis once more than three `?` appear.
const QUESTION_MAX: f64 = 0.96;

/// Four bounded polarity scores for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Degenerate all-zero signal returned when no analyzer is loaded.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Feature order appended after the embedding during fusion.
    pub fn as_features(&self) -> [f64; 4] {
        [self.positive, self.negative, self.neutral, self.compound]
    }
}

/// Self-contained lexicon analyzer. Holds no state; the lexicon is compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text`, expected to be normalised already.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::zero();
        }

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|idx| token_valence(&tokens, idx))
            .collect();
        apply_but_check(&tokens, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let compound = compound_score(&sentiments, emphasis);
        let (positive, negative, neutral) = sift_scores(&sentiments, emphasis);

        SentimentScores {
            positive: round_to(positive, 3),
            negative: round_to(negative, 3),
            neutral: round_to(neutral, 3),
            compound: round_to(compound, 4),
        }
    }
}

/// Score text with an optional analyzer, degrading to zeros when it is absent.
pub fn score_sentiment(analyzer: Option<&SentimentAnalyzer>, text: &str) -> SentimentScores {
    match analyzer {
        Some(analyzer) => analyzer.polarity_scores(text),
        None => SentimentScores::zero(),
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            // Short tokens keep their punctuation so emoticons survive.
            if stripped.chars().count() <= 2 {
                raw.to_lowercase()
            } else {
                stripped.to_lowercase()
            }
        })
        .collect()
}

fn token_valence(tokens: &[String], idx: usize) -> f64 {
    let item = tokens[idx].as_str();
    let next = tokens.get(idx + 1).map(String::as_str);
    if lexicon::booster(item).is_some() || (item == "kind" && next == Some("of")) {
        return 0.0;
    }
    let Some(mut valence) = lexicon::valence(item) else {
        return 0.0;
    };

    if item == "no" && next.is_some_and(|word| lexicon::valence(word).is_some()) {
        // "no" used as a determiner carries no sentiment of its own.
        return 0.0;
    }
    let word_at = |back: usize| idx.checked_sub(back).map(|pos| tokens[pos].as_str());
    if word_at(1) == Some("no")
        || word_at(2) == Some("no")
        || (word_at(3) == Some("no") && matches!(word_at(1), Some("or") | Some("nor")))
    {
        valence *= N_SCALAR;
    }

    for start in 0..3 {
        let Some(prev) = word_at(start + 1) else {
            break;
        };
        if lexicon::valence(prev).is_some() {
            continue;
        }
        let mut scalar = scalar_inc_dec(prev, valence);
        if start == 1 {
            scalar *= 0.95;
        } else if start == 2 {
            scalar *= 0.9;
        }
        valence += scalar;

        let doubtless = prev == "without" && start > 0 && word_at(start) == Some("doubt");
        if lexicon::is_negation(prev) && !doubtless {
            valence *= N_SCALAR;
        }
    }

    least_check(tokens, idx, valence)
}

fn scalar_inc_dec(word: &str, valence: f64) -> f64 {
    match lexicon::booster(word) {
        Some(scalar) if valence < 0.0 => -scalar,
        Some(scalar) => scalar,
        None => 0.0,
    }
}

fn least_check(tokens: &[String], idx: usize, valence: f64) -> f64 {
    if idx == 0 || tokens[idx - 1] != "least" {
        return valence;
    }
    if idx > 1 && matches!(tokens[idx - 2].as_str(), "at" | "very") {
        valence
    } else {
        valence * N_SCALAR
    }
}

fn apply_but_check(tokens: &[String], sentiments: &mut [f64]) {
    let Some(but_idx) = tokens.iter().position(|token| token == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_idx {
            *sentiment *= 0.5;
        } else if idx > but_idx {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };
    exclaims * EXCLAIM_INCR + question_amp
}

fn compound_score(sentiments: &[f64], emphasis: f64) -> f64 {
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let normalised = sum / (sum * sum + ALPHA).sqrt();
    normalised.clamp(-1.0, 1.0)
}

fn sift_scores(sentiments: &[f64], emphasis: f64) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > f64::abs(neg_sum) {
        pos_sum += emphasis;
    } else if pos_sum < f64::abs(neg_sum) {
        neg_sum -= emphasis;
    }

    let total = pos_sum + f64::abs(neg_sum) + neu_count;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (
        f64::abs(pos_sum / total),
        f64::abs(neg_sum / total),
        f64::abs(neu_count / total),
    )
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
