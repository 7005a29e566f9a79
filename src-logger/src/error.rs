//! Error types for scales and histogram logging.

use thiserror::Error;

/// Errors raised by scale construction and logger lifecycle misuse.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The scale parameters cannot describe a valid binning.
    #[error("invalid scale: {reason}")]
    InvalidScale {
        /// What was wrong with the parameters
        reason: String,
    },

    /// An observation arrived while no run was active.
    #[error("observation received outside a run (call start_run first)")]
    NotLogging,

    /// Writing a grid out failed.
    #[error("failed to write histogram: {0}")]
    Io(#[from] std::io::Error),
}
