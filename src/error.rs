use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiftError>;

/// Errors at the process boundary: input/output files and client setup.
///
/// Per-URL fetch failures are never errors; they are carried in
/// [`crate::types::FetchOutcome`] and end up in the rejection table.
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("could not read URL list {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
