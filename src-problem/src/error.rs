//! Error types for problem construction and evaluation.
//!
//! Structured error handling using `thiserror` for library error types,
//! with variants carrying the offending values so callers can report or
//! recover without re-deriving context.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while constructing or evaluating a problem.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// The function id has no registered constructor.
    #[error("unknown problem id {id}")]
    UnknownProblem {
        /// The unregistered function id
        id: u16,
    },

    /// The requested dimension is zero or outside the problem's supported set.
    #[error("invalid dimension {dimension} for problem {id} (supported: {supported})")]
    InvalidDimension {
        /// Function id of the problem class
        id: u16,
        /// The rejected dimension
        dimension: usize,
        /// Human-readable description of the supported dimensions
        supported: String,
    },

    /// A candidate vector does not match the problem dimension.
    #[error("candidate length {got} does not match problem dimension {expected}")]
    DimensionMismatch {
        /// The problem dimension
        expected: usize,
        /// The candidate length
        got: usize,
    },

    /// A static transformation-parameter table could not be used.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Errors raised by the static-table loader.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file is missing or unreadable.
    #[error("cannot open data file {path}: {source}")]
    Unavailable {
        /// Path of the file that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file parsed but held fewer values than the table requires.
    #[error("data file {path} is truncated: expected {expected} values, got {got}")]
    Truncated {
        /// Path of the short file
        path: PathBuf,
        /// Number of values the table requires
        expected: usize,
        /// Number of values actually present
        got: usize,
    },

    /// A token in the file is not a number.
    #[error("unparseable token '{token}' in data file {path}")]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// The offending token
        token: String,
    },
}
