use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all artset operations.
///
/// `Clone` so that a broken artifact set can report the same failure on
/// every read and visitors can keep the failures they were handed.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ArtsetError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// A component or variant could not be resolved.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// A resolved artifact has no file available.
    #[error("Could not find artifact {artifact}")]
    #[diagnostic(help("Check that the artifact was published and the repository is reachable"))]
    ArtifactNotFound { artifact: String },

    /// Invalid or unreadable artifact view configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the [view] table of your configuration file"))]
    Config { message: String },

    /// Several failures were reported while visiting an artifact set.
    #[error("{} failures occurred while visiting artifacts", .failures.len())]
    Multiple {
        #[related]
        failures: Vec<ArtsetError>,
    },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl From<std::io::Error> for ArtsetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl ArtsetError {
    /// Collapse a list of failures into one error.
    ///
    /// Returns `None` for an empty list and the failure itself for a single one.
    pub fn from_failures(mut failures: Vec<ArtsetError>) -> Option<Self> {
        match failures.len() {
            0 => None,
            1 => failures.pop(),
            _ => Some(Self::Multiple { failures }),
        }
    }
}

/// Convenience alias used across the artset crates.
pub type ArtsetResult<T> = Result<T, ArtsetError>;
