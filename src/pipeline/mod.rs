// Comparison pipeline: two documents in, one ComparisonResult out.

pub mod compare;

pub use compare::{validate_documents, DocumentAnalyzer};
