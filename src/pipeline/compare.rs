// Compare pipeline: vectorize -> similarity -> grade, sentiment per document,
// word diff, then compose.
//
// The analyzer owns nothing but the shared read-only sentiment scorer, so one
// instance serves any number of concurrent comparisons. Every intermediate
// value is built fresh per call.

use std::sync::Arc;

use tracing::debug;

use crate::diff::DiffReport;
use crate::error::AnalysisError;
use crate::report::ComparisonResult;
use crate::scoring::grade::Grade;
use crate::sentiment::traits::SentimentScorer;
use crate::similarity::cosine::SimilarityScore;
use crate::similarity::tfidf::TermSpace;

#[derive(Clone)]
pub struct DocumentAnalyzer {
    scorer: Arc<dyn SentimentScorer>,
}

impl DocumentAnalyzer {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    /// Compare two documents. Total over any input: empty strings give a
    /// zero similarity, neutral sentiment and an empty diff.
    pub fn compare(&self, text1: &str, text2: &str) -> ComparisonResult {
        let space = TermSpace::build(text1, text2);
        let similarity = SimilarityScore::of(&space);
        let grade = Grade::from_score(similarity.percent());
        debug!(
            vocabulary = space.vocabulary.len(),
            similarity = similarity.rounded_percent(),
            grade = grade.as_str(),
            "Scored similarity"
        );

        let sentiment1 = self.scorer.score_text(text1);
        let sentiment2 = self.scorer.score_text(text2);
        debug!(
            scorer = self.scorer.name(),
            compound1 = sentiment1.compound,
            compound2 = sentiment2.compound,
            "Scored sentiment"
        );

        let diff = DiffReport::between(text1, text2);
        debug!(
            added = diff.added().count(),
            removed = diff.removed().count(),
            "Computed word diff"
        );

        ComparisonResult {
            similarity,
            grade,
            sentiment1,
            sentiment2,
            diff,
        }
    }
}

/// Request-boundary check for a pair of documents.
///
/// Rejects a missing or blank document and any document over `max_bytes`.
/// The engine itself accepts empty strings; this is for user-facing callers.
pub fn validate_documents<'a>(
    text1: Option<&'a str>,
    text2: Option<&'a str>,
    max_bytes: usize,
) -> Result<(&'a str, &'a str), AnalysisError> {
    let (text1, text2) = match (text1, text2) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => (a, b),
        _ => {
            return Err(AnalysisError::InvalidInput(
                "please provide both documents".to_string(),
            ))
        }
    };
    for (n, text) in [(1, text1), (2, text2)] {
        if text.len() > max_bytes {
            return Err(AnalysisError::InvalidInput(format!(
                "document {n} is {} bytes, the limit is {max_bytes}",
                text.len()
            )));
        }
    }
    Ok((text1, text2))
}
