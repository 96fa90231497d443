// Sentiment scoring: lexicon-based, one document at a time.
//
// The valence scorer always runs. The opinion scorer is layered on top when
// the polarity backend is selected. Lexicons load once and are shared
// read-only behind Arc.

pub mod lexicon;
pub mod polarity;
pub mod traits;
pub mod vader;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::AnalysisError;
use self::lexicon::{OpinionLexicon, ValenceLexicon};
use self::polarity::PolarityScorer;
use self::traits::{SentimentResult, SentimentScorer};
use self::vader::VaderScorer;

/// Which lexicon set the analyzer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentBackend {
    /// Valence only: pos/neg/neu/compound (default)
    #[default]
    Vader,
    /// Valence plus the polarity/subjectivity pair
    Polarity,
}

impl SentimentBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBackend::Vader => "vader",
            SentimentBackend::Polarity => "polarity",
        }
    }
}

/// The configured scorer shared by every comparison.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    valence: VaderScorer,
    opinion: Option<PolarityScorer>,
}

impl SentimentAnalyzer {
    pub fn new(valence: VaderScorer, opinion: Option<PolarityScorer>) -> Self {
        Self { valence, opinion }
    }

    /// Load the lexicons for `backend`. `valence_path` replaces the embedded
    /// valence lexicon. Any failure here is fatal to the caller.
    pub fn load(
        backend: SentimentBackend,
        valence_path: Option<&Path>,
    ) -> Result<Self, AnalysisError> {
        let valence = match valence_path {
            Some(path) => ValenceLexicon::from_file(path)?,
            None => ValenceLexicon::embedded()?,
        };
        let opinion = match backend {
            SentimentBackend::Vader => None,
            SentimentBackend::Polarity => {
                Some(PolarityScorer::new(Arc::new(OpinionLexicon::embedded()?)))
            }
        };
        info!(backend = backend.as_str(), "Sentiment analyzer ready");
        Ok(Self::new(VaderScorer::new(Arc::new(valence)), opinion))
    }

    pub fn backend(&self) -> SentimentBackend {
        if self.opinion.is_some() {
            SentimentBackend::Polarity
        } else {
            SentimentBackend::Vader
        }
    }

    pub fn valence_lexicon(&self) -> &ValenceLexicon {
        self.valence.lexicon()
    }

    pub fn opinion_lexicon(&self) -> Option<&OpinionLexicon> {
        self.opinion.as_ref().map(|o| o.lexicon())
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn name(&self) -> &'static str {
        match self.backend() {
            SentimentBackend::Vader => "vader",
            SentimentBackend::Polarity => "vader+polarity",
        }
    }

    fn score_text(&self, text: &str) -> SentimentResult {
        let mut result = self.valence.score_text(text);
        result.opinion = self.opinion.as_ref().map(|scorer| scorer.opinion(text));
        result
    }
}
