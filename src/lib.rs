// docanalyzer: two-document comparison engine.
//
// This is the library root. Each module corresponds to one stage of the
// comparison pipeline or to the layers around it (config, output, export).

pub mod config;
pub mod diff;
pub mod error;
pub mod export;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod sentiment;
pub mod similarity;
pub mod status;

#[cfg(feature = "web")]
pub mod web;

pub use error::AnalysisError;
