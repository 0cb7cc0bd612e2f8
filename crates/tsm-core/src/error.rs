//! Error type shared by the loader, the generator and the solvers.

use thiserror::Error;

/// Everything that can go wrong between reading a matrix and reporting a tour.
///
/// The search itself is pure computation over validated data; the only failure it can
/// raise on its own is [`Error::Allocation`] (or [`Error::WorkerFailed`] /
/// [`Error::SpawnFailed`] if a worker thread dies or never starts). All other variants
/// are detected before any search begins.
#[derive(Debug, Error)]
pub enum Error {
    /// City count is zero or disagrees with the supplied matrix.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Thread count of zero.
    #[error("invalid thread count {0}: at least one worker is required")]
    InvalidThreadCount(usize),

    /// A buffer could not be reserved.
    #[error("cannot allocate {what} ({len} entries)")]
    Allocation { what: &'static str, len: usize },

    /// A matrix token that is not a non-negative integer.
    #[error("malformed matrix at row {row}, column {column}: {reason}")]
    Malformed {
        row: usize,
        column: usize,
        reason: String,
    },

    /// A worker thread stopped without finishing its branches.
    #[error("worker {0} failed before completing its branches")]
    WorkerFailed(usize),

    /// The OS refused to start a worker thread.
    #[error("cannot spawn worker {worker}: {source}")]
    SpawnFailed {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by the caller's input rather than by resources.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimension(_) | Error::InvalidThreadCount(_)
        )
    }
}

/// Convenience result type for the workspace.
pub type Result<T> = std::result::Result<T, Error>;
