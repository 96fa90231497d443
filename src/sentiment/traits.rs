// Sentiment scorer trait and the fixed-shape result it produces.
//
// Every scorer yields the valence form (pos/neg/neu/compound). Scorers backed
// by an opinion lexicon also fill in the polarity/subjectivity pair.

use serde::{Deserialize, Serialize};

/// Sentiment of a single document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Proportion of positive signal (0.0 to 1.0)
    pub pos: f64,
    /// Proportion of negative signal (0.0 to 1.0)
    pub neg: f64,
    /// Proportion of neutral tokens (0.0 to 1.0); pos + neg + neu == 1
    pub neu: f64,
    /// Normalized aggregate from -1.0 (most negative) to 1.0 (most positive)
    pub compound: f64,
    /// Polarity/subjectivity pair, present when the opinion lexicon is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opinion: Option<Opinion>,
}

/// Polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Opinion {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    /// The result for a document with no sentiment-bearing content.
    pub fn neutral() -> Self {
        Self {
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
            compound: 0.0,
            opinion: None,
        }
    }

    /// Exactly the neutral valence shape; the opinion pair is not compared.
    pub fn is_neutral(&self) -> bool {
        self.pos == 0.0 && self.neg == 0.0 && self.neu == 1.0 && self.compound == 0.0
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Scores one document, independent of any other document.
///
/// Implementations hold only read-only lexicon data, so one instance can be
/// shared across threads and requests.
pub trait SentimentScorer: Send + Sync {
    /// Short backend name for logs and status output.
    fn name(&self) -> &'static str;

    /// Score a text. Must not fail: empty text scores as neutral.
    fn score_text(&self, text: &str) -> SentimentResult;
}
