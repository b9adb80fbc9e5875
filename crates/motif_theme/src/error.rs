//! Theme error types

use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Consumption API used with no enclosing theme scope
    #[error("no theme scope is active; create a scope and enter it before reading the theme")]
    MissingScope,

    /// Update patch failed validation
    #[error("malformed theme delta: {0}")]
    MalformedDelta(String),

    /// Document failed validation
    #[error("invalid theme document: {0}")]
    InvalidDocument(String),

    /// Color string is not a supported hex form
    #[error("invalid color format: {0:?}")]
    InvalidColor(String),

    /// Theme file could not be parsed
    #[error("failed to parse theme config: {0}")]
    Config(#[from] toml::de::Error),

    /// Theme could not be written out
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
