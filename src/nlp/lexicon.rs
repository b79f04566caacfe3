//! Compiled-in valence lexicon for the sentiment scorer.
//!
//! Valences follow the VADER convention: mean human rating on a [-4, 4] scale.
//! The word list is biased towards mood, energy, sleep and self-worth vocabulary
//! that shows up in journal writing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Intensity increment applied by booster words.
pub const B_INCR: f64 = 0.293;
/// Intensity decrement applied by dampener words.
pub const B_DECR: f64 = -0.293;
/// Scalar applied to a valence under negation.
pub const N_SCALAR: f64 = -0.74;

const VALENCES: &[(&str, f64)] = &[
    // positive affect
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("happy", 2.7),
    ("happier", 2.4),
    ("happiness", 2.6),
    ("glad", 2.0),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("loving", 2.9),
    ("like", 1.5),
    ("liked", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("fun", 2.3),
    ("nice", 1.8),
    ("best", 3.2),
    ("better", 1.9),
    ("beautiful", 2.9),
    ("calm", 1.3),
    ("relaxed", 2.2),
    ("relaxing", 2.2),
    ("peaceful", 2.2),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("optimistic", 1.3),
    ("grateful", 2.0),
    ("thankful", 2.7),
    ("proud", 2.1),
    ("confident", 2.2),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("energetic", 1.6),
    ("motivated", 1.9),
    ("productive", 1.8),
    ("rested", 1.3),
    ("refreshed", 1.6),
    ("healthy", 1.7),
    ("strong", 2.3),
    ("safe", 1.9),
    ("support", 1.7),
    ("supported", 1.6),
    ("supportive", 1.8),
    ("friend", 2.2),
    ("friends", 2.1),
    ("laugh", 2.6),
    ("laughed", 2.0),
    ("smile", 1.5),
    ("smiled", 2.5),
    ("success", 2.7),
    ("successful", 2.8),
    ("accomplished", 1.8),
    ("win", 2.8),
    ("progress", 1.4),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improving", 1.8),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("content", 1.5),
    ("satisfied", 1.8),
    ("cheerful", 2.5),
    ("delighted", 2.8),
    ("blessed", 2.9),
    ("comfort", 1.5),
    ("comfortable", 1.6),
    ("kind", 2.4),
    ("care", 2.2),
    ("cared", 1.8),
    ("fine", 0.8),
    ("okay", 0.9),
    ("ok", 1.2),
    ("well", 1.1),
    ("alive", 1.6),
    ("free", 2.3),
    ("brave", 2.4),
    ("inspired", 2.2),
    ("creative", 1.9),
    ("lucky", 2.3),
    ("yes", 1.7),
    ("thanks", 1.9),
    ("celebrate", 2.7),
    ("celebrated", 2.7),
    ("heal", 1.4),
    ("healing", 1.4),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("wow", 2.8),
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.9),
    // negative affect
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("sad", -2.1),
    ("sadness", -1.9),
    ("unhappy", -1.8),
    ("depressed", -2.3),
    ("depression", -2.7),
    ("depressing", -1.6),
    ("hopeless", -2.0),
    ("hopelessness", -2.4),
    ("helpless", -2.0),
    ("worthless", -1.9),
    ("useless", -1.8),
    ("empty", -0.8),
    ("numb", -1.4),
    ("lonely", -1.5),
    ("alone", -1.0),
    ("isolated", -1.3),
    ("miserable", -2.2),
    ("misery", -2.7),
    ("cry", -2.1),
    ("cried", -1.6),
    ("crying", -2.1),
    ("tears", -0.9),
    ("tired", -1.9),
    ("exhausted", -1.5),
    ("fatigue", -1.5),
    ("drained", -1.5),
    ("sleepless", -1.6),
    ("insomnia", -1.6),
    ("anxious", -1.0),
    ("anxiety", -0.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("overwhelmed", -1.5),
    ("panic", -2.3),
    ("scared", -1.9),
    ("afraid", -2.0),
    ("fear", -2.2),
    ("angry", -2.3),
    ("anger", -2.7),
    ("mad", -2.2),
    ("hate", -2.7),
    ("hated", -3.2),
    ("guilty", -1.8),
    ("guilt", -1.1),
    ("ashamed", -2.1),
    ("shame", -2.1),
    ("failure", -2.3),
    ("failed", -2.3),
    ("fail", -2.5),
    ("loser", -2.4),
    ("pain", -2.3),
    ("painful", -1.9),
    ("hurt", -2.4),
    ("hurting", -2.4),
    ("suffer", -2.5),
    ("suffering", -2.1),
    ("broken", -2.1),
    ("lost", -1.3),
    ("lose", -1.6),
    ("grief", -2.2),
    ("sorrow", -2.4),
    ("dead", -3.3),
    ("death", -2.9),
    ("die", -2.9),
    ("dying", -2.7),
    ("kill", -3.7),
    ("suicide", -3.5),
    ("suicidal", -3.6),
    ("harm", -2.5),
    ("struggle", -1.3),
    ("struggling", -1.6),
    ("difficult", -1.5),
    ("hard", -0.4),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("bored", -1.1),
    ("boring", -1.3),
    ("sick", -2.3),
    ("ill", -1.8),
    ("weak", -1.9),
    ("upset", -1.6),
    ("frustrated", -1.5),
    ("frustrating", -1.9),
    ("annoyed", -1.6),
    ("irritable", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("regret", -1.8),
    ("nervous", -1.1),
    ("restless", -1.1),
    ("gloomy", -1.8),
    ("dark", -0.7),
    ("bleak", -1.7),
    ("despair", -2.9),
    ("desperate", -1.3),
    ("pointless", -1.7),
    ("meaningless", -1.7),
    ("rejected", -2.0),
    ("abandoned", -2.1),
    ("unloved", -2.2),
    ("ugly", -2.3),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("no", -1.2),
    ("trapped", -2.4),
    ("burden", -1.9),
    ("lethargic", -1.2),
    ("sluggish", -1.0),
    (":(", -1.9),
    (":-(", -1.5),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("extremely", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("so", B_INCR),
    ("such", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("truly", B_INCR),
    ("unbelievably", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

static VALENCE_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| VALENCES.iter().copied().collect());

static BOOSTER_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| BOOSTERS.iter().copied().collect());

/// Lexicon valence of a lower-cased token, if rated.
pub fn valence(token: &str) -> Option<f64> {
    VALENCE_MAP.get(token).copied()
}

/// Booster increment of a lower-cased token, if it is an intensity modifier.
pub fn booster(token: &str) -> Option<f64> {
    BOOSTER_MAP.get(token).copied()
}

/// Whether `token` negates the sentiment of nearby words.
pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}
