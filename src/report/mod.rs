// Comparison result and the plain-text report composed from it.
//
// The text report is what gets displayed, saved and exported:
//
//   Similarity Score: 55.86%
//
//   Grade for Document 2: D
//
//   Sentiment Analysis:
//    - Document 1: Pos 0.516, Neg 0.000, Neu 0.484, Compound 0.8625
//    - Document 2: ...
//
//   Feedback (Differences):
//   --- document 1
//   +++ document 2
//   @@ -1,7 +1,7 @@
//   ...

use serde::Serialize;

use crate::diff::DiffReport;
use crate::scoring::grade::Grade;
use crate::sentiment::traits::SentimentResult;
use crate::similarity::cosine::SimilarityScore;

/// Everything one comparison produces. Owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Serialized as the two-decimal percentage
    pub similarity: SimilarityScore,
    pub grade: Grade,
    pub sentiment1: SentimentResult,
    pub sentiment2: SentimentResult,
    pub diff: DiffReport,
}

impl ComparisonResult {
    /// The report as lines, without trailing newlines.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Similarity Score: {:.2}%", self.similarity.rounded_percent()),
            String::new(),
            format!("Grade for Document 2: {}", self.grade),
            String::new(),
            "Sentiment Analysis:".to_string(),
        ];
        for (n, sentiment) in [(1, &self.sentiment1), (2, &self.sentiment2)] {
            lines.push(format!(" - Document {n}: {}", sentiment_summary(sentiment)));
            if let Some(opinion) = sentiment.opinion {
                lines.push(format!(
                    "   Polarity {:.3}, Subjectivity {:.3}",
                    opinion.polarity, opinion.subjectivity
                ));
            }
        }
        lines.push(String::new());
        lines.push("Feedback (Differences):".to_string());
        lines.extend(self.diff.unified_lines().iter().cloned());
        lines
    }

    /// The full text report, newline separated.
    pub fn render_text(&self) -> String {
        let mut text = self.report_lines().join("\n");
        text.push('\n');
        text
    }
}

fn sentiment_summary(s: &SentimentResult) -> String {
    format!(
        "Pos {:.3}, Neg {:.3}, Neu {:.3}, Compound {:.4}",
        s.pos, s.neg, s.neu, s.compound
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::traits::Opinion;

    fn result(text1: &str, text2: &str, ratio: f64) -> ComparisonResult {
        ComparisonResult {
            similarity: SimilarityScore::from_ratio(ratio),
            grade: Grade::from_score(ratio * 100.0),
            sentiment1: SentimentResult::neutral(),
            sentiment2: SentimentResult::neutral(),
            diff: DiffReport::between(text1, text2),
        }
    }

    #[test]
    fn test_report_header_lines() {
        let lines = result("a b", "a c", 0.55867).report_lines();
        assert_eq!(lines[0], "Similarity Score: 55.87%");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Grade for Document 2: D");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Sentiment Analysis:");
        assert_eq!(
            lines[5],
            " - Document 1: Pos 0.000, Neg 0.000, Neu 1.000, Compound 0.0000"
        );
        assert!(lines.contains(&"Feedback (Differences):".to_string()));
        assert!(lines.contains(&"-b".to_string()));
        assert!(lines.contains(&"+c".to_string()));
    }

    #[test]
    fn test_identical_report_has_empty_feedback() {
        let text = result("same words", "same words", 1.0).render_text();
        assert!(text.ends_with("Feedback (Differences):\n"));
    }

    #[test]
    fn test_opinion_line_included_when_present() {
        let mut r = result("x", "x", 1.0);
        r.sentiment2.opinion = Some(Opinion {
            polarity: 0.5,
            subjectivity: 0.25,
        });
        let lines = r.report_lines();
        assert!(lines.contains(&"   Polarity 0.500, Subjectivity 0.250".to_string()));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(result("a", "a", 1.0)).unwrap();
        assert_eq!(json["similarity"], 100.0);
        assert_eq!(json["grade"], "A");
        assert_eq!(json["sentiment1"]["neu"], 1.0);
        assert!(json["sentiment1"].get("opinion").is_none());
        assert!(json["diff"]["lines"].is_array());
    }
}
