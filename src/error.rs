use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading capture results.
///
/// Querying, highlighting and sorting never fail; only the boundary where a
/// capture result enters the crate does.
#[derive(Error, Debug)]
pub enum CapsiftError {
    // Loading
    #[error("failed to read capture result from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed capture result")]
    Json(#[from] serde_json::Error),

    // Lookup
    #[error("unknown table `{0}`")]
    UnknownTable(String),
}

impl CapsiftError {
    /// The file this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
