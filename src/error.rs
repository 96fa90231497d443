// Error taxonomy for the comparison engine.
//
// The computational paths (tokenize, score, grade, diff, compose, paginate)
// are total and never produce these. Only input validation at the request
// boundary, lexicon loading at startup and report export can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A document was missing, blank or over the configured size limit.
    /// Surfaced to the user as a validation message and never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The export destination could not be written. No partial file is left
    /// at the destination when this is returned.
    #[error("Failed to export report to {}: {reason}", path.display())]
    ExportFailure { path: PathBuf, reason: String },

    /// A sentiment lexicon failed to load. Fatal at startup.
    #[error("Failed to load sentiment lexicon ({source_name}): {reason}")]
    ResourceInitFailure { source_name: String, reason: String },
}

impl AnalysisError {
    pub(crate) fn export(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AnalysisError::ExportFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn resource(source_name: impl Into<String>, reason: impl ToString) -> Self {
        AnalysisError::ResourceInitFailure {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
