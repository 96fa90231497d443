// Rule-based valence scorer (VADER-style).
//
// Each whitespace-separated word gets the valence listed in the lexicon, then
// the heuristics adjust it:
//
//   - ALL-CAPS emphasis when the text mixes caps and non-caps words
//   - booster/dampener words up to three positions before
//   - negation up to three positions before ("not", "never", "isn't", ...)
//   - "least" as a negator unless in "at least" / "very least"
//   - "but" shifts weight onto the clause after it
//   - trailing "!" and "??" amplify the aggregate
//
// The per-word valences are summed into a compound score normalized to
// [-1, 1] and sifted into positive, negative and neutral proportions.

use std::sync::Arc;

use super::lexicon::ValenceLexicon;
use super::traits::{SentimentResult, SentimentScorer};

const BOOST_INCREMENT: f64 = 0.293;
const BOOST_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

/// Scalar applied by an intensity-modifying word, if `word` is one.
fn booster(word: &str) -> Option<f64> {
    match word {
        "absolutely" | "amazingly" | "awfully" | "completely" | "considerably" | "decidedly"
        | "deeply" | "effing" | "enormously" | "entirely" | "especially" | "exceptionally"
        | "extremely" | "fabulously" | "flipping" | "fully" | "greatly" | "hella" | "highly"
        | "hugely" | "incredibly" | "intensely" | "majorly" | "more" | "most" | "particularly"
        | "purely" | "quite" | "really" | "remarkably" | "so" | "substantially"
        | "thoroughly" | "totally" | "tremendously" | "uber" | "unbelievably" | "unusually"
        | "utterly" | "very" => Some(BOOST_INCREMENT),
        "almost" | "barely" | "hardly" | "kinda" | "less" | "little" | "marginally"
        | "occasionally" | "partly" | "scarcely" | "slightly" | "somewhat" | "sorta" => {
            Some(BOOST_DECREMENT)
        }
        _ => None,
    }
}

fn is_negated(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

/// At least one cased character and no lower-case ones.
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Strip surrounding punctuation unless that would leave two characters or
/// fewer, which keeps emoticons like ":)" intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// Emphasis added by exclamation and question marks.
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations * 0.292 + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Lexicon-backed valence scorer.
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Arc<ValenceLexicon>,
}

impl VaderScorer {
    pub fn new(lexicon: Arc<ValenceLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &ValenceLexicon {
        &self.lexicon
    }

    /// Score a text into pos/neg/neu/compound.
    pub fn polarity_scores(&self, text: &str) -> SentimentResult {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        if tokens.is_empty() {
            return SentimentResult::neutral();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_count = tokens.iter().filter(|t| is_all_caps(t)).count();
        let cap_differential = caps_count > 0 && caps_count < tokens.len();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lowered[i].as_str();
            let kind_of = word == "kind" && lowered.get(i + 1).is_some_and(|w| w == "of");
            if booster(word).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.word_valence(&tokens, &lowered, i, cap_differential));
        }

        apply_but_rule(&lowered, &mut sentiments);
        sift_scores(&sentiments, punctuation_emphasis(text))
    }

    fn word_valence(
        &self,
        tokens: &[&str],
        lowered: &[String],
        i: usize,
        cap_differential: bool,
    ) -> f64 {
        let word = lowered[i].as_str();
        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };

        // "no" in front of another sentiment word acts as a determiner
        if word == "no" && lowered.get(i + 1).is_some_and(|next| self.lexicon.contains(next)) {
            valence = 0.0;
        }

        if cap_differential && is_all_caps(tokens[i]) {
            valence += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
        }

        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let j = i - (distance + 1);
            if self.lexicon.contains(&lowered[j]) {
                continue;
            }
            let mut scalar = booster_scalar(tokens[j], &lowered[j], valence, cap_differential);
            if distance == 1 {
                scalar *= 0.95;
            } else if distance == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowered, distance, i);
        }

        least_check(valence, lowered, i, &self.lexicon)
    }
}

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &'static str {
        "vader"
    }

    fn score_text(&self, text: &str) -> SentimentResult {
        self.polarity_scores(text)
    }
}

fn booster_scalar(raw: &str, word: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = booster(word) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_all_caps(raw) {
        scalar += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], distance: usize, i: usize) -> f64 {
    let at = |back: usize| lowered[i - back].as_str();
    let so_or_this = |w: &str| w == "so" || w == "this";
    match distance {
        0 => {
            if is_negated(at(1)) || at(1) == "no" {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        1 => {
            if at(2) == "never" && so_or_this(at(1)) {
                valence * 1.25
            } else if at(2) == "without" && at(1) == "doubt" {
                valence
            } else if is_negated(at(2)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        _ => {
            if at(3) == "never" && (so_or_this(at(2)) || so_or_this(at(1))) {
                valence * 1.25
            } else if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") {
                valence
            } else if is_negated(at(3)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
    }
}

fn least_check(valence: f64, lowered: &[String], i: usize, lexicon: &ValenceLexicon) -> f64 {
    if i == 0 || lowered[i - 1] != "least" || lexicon.contains("least") {
        return valence;
    }
    if i > 1 && (lowered[i - 2] == "at" || lowered[i - 2] == "very") {
        valence
    } else {
        valence * NEGATION_SCALAR
    }
}

/// Halve sentiment before "but", boost it by half after.
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (j, s) in sentiments.iter_mut().enumerate() {
        if j < but {
            *s *= 0.5;
        } else if j > but {
            *s *= 1.5;
        }
    }
}

fn sift_scores(sentiments: &[f64], emphasis: f64) -> SentimentResult {
    let total: f64 = sentiments.iter().sum();
    let compound = if total > 0.0 {
        normalize(total + emphasis)
    } else if total < 0.0 {
        normalize(total - emphasis)
    } else {
        0.0
    };

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let denom = pos_sum + neg_sum.abs() + neu_count as f64;
    if denom <= 0.0 {
        return SentimentResult::neutral();
    }

    SentimentResult {
        pos: (pos_sum / denom).abs(),
        neg: (neg_sum / denom).abs(),
        neu: neu_count as f64 / denom,
        compound,
        opinion: None,
    }
}
