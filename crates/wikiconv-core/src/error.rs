//! Error types for wikiconv

use thiserror::Error;

/// Main error type for wikiconv operations
#[derive(Error, Debug)]
pub enum WikiconvError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse error during wiki-markup processing
    #[error("Parse error: {0}")]
    Parse(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for wikiconv operations
pub type Result<T> = std::result::Result<T, WikiconvError>;
