//! Error types for the command-line tool.

use std::path::PathBuf;

use sqlfront_core::lexer::SourceError;
use sqlfront_highlight::ColorError;

/// Errors that stop the tool before or while writing output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path of the input, `-` for stdin.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not UTF-8.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An unknown theme or color.
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Result type for command-line operations.
pub type Result<T> = std::result::Result<T, CliError>;
