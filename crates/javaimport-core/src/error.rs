//! Error types for javaimport.

use thiserror::Error;

/// javaimport error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The regex engine rejected a synthesized pattern.
    #[error("Pattern compilation failed for `{pattern}`: {reason}")]
    CompilationFailed { pattern: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for javaimport operations.
pub type Result<T> = std::result::Result<T, Error>;
