// Vector-space similarity: tokenizer, joint TF-IDF space, cosine score.

pub mod cosine;
pub mod tfidf;
pub mod tokenize;

use self::cosine::SimilarityScore;
use self::tfidf::TermSpace;

/// Similarity of two raw documents. Symmetric in its arguments.
pub fn document_similarity(text1: &str, text2: &str) -> SimilarityScore {
    SimilarityScore::of(&TermSpace::build(text1, text2))
}
