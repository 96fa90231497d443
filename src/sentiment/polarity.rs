// Polarity/subjectivity scorer over the opinion lexicon.
//
// Opinion words contribute their (polarity, subjectivity) pair. A preceding
// modifier ("very", "slightly") scales the pair by its intensity, and a
// preceding negation flips polarity and halves it. Negation lasts until the
// next opinion word or the end of the sentence. The document's result is the
// mean over all contributing words.

use std::sync::Arc;

use super::lexicon::OpinionLexicon;
use super::traits::Opinion;

const NEGATION_FACTOR: f64 = -0.5;

fn is_negation(word: &str) -> bool {
    matches!(word, "not" | "never" | "no" | "without" | "cannot") || word.ends_with("n't")
}

#[derive(Debug, Clone)]
pub struct PolarityScorer {
    lexicon: Arc<OpinionLexicon>,
}

impl PolarityScorer {
    pub fn new(lexicon: Arc<OpinionLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &OpinionLexicon {
        &self.lexicon
    }

    /// Polarity and subjectivity of a text. No opinion words gives (0, 0).
    pub fn opinion(&self, text: &str) -> Opinion {
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut negated = false;

        for raw in text.split_whitespace() {
            let word = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();

            if is_negation(&word) {
                negated = true;
            } else if let Some(entry) = self.lexicon.get(&word) {
                if entry.is_modifier() {
                    intensity = Some(intensity.unwrap_or(1.0) * entry.intensity);
                } else {
                    let scale = intensity.take().unwrap_or(1.0);
                    let mut polarity = entry.polarity * scale;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                        negated = false;
                    }
                    assessments.push((
                        polarity.clamp(-1.0, 1.0),
                        (entry.subjectivity * scale).clamp(0.0, 1.0),
                    ));
                }
            } else {
                intensity = None;
            }

            if raw.ends_with(['.', '!', '?']) {
                negated = false;
                intensity = None;
            }
        }

        if assessments.is_empty() {
            return Opinion::default();
        }
        let n = assessments.len() as f64;
        Opinion {
            polarity: (assessments.iter().map(|a| a.0).sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (assessments.iter().map(|a| a.1).sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}
