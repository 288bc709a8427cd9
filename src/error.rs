use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no roots configured")]
    NoRoots,
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("no .{0} documents found under the configured roots")]
    NoDocuments(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to write output: {0}")]
    Output(String),
}
