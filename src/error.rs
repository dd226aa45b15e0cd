//! # Error Types
//!
//! This module defines error types used throughout the tp library.
//!
//! Only two kinds ever come out of the rendering and printing core:
//! [`TpError::MissingPlaceholder`] from a render, and [`TpError::Transport`]
//! from a printer handle. The rest belong to the settings file and adapters.

use thiserror::Error;

/// Main error type for tp operations
#[derive(Debug, Error)]
pub enum TpError {
    /// A `{name}` placeholder had no value in the render context
    #[error("Missing placeholder: {0}")]
    MissingPlaceholder(String),

    /// Printer handle errors (connection, I/O, device)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Settings file or setting value problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type for tp operations
pub type Result<T> = std::result::Result<T, TpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_placeholder_names_key() {
        let err = TpError::MissingPlaceholder("name".to_string());
        assert_eq!(err.to_string(), "Missing placeholder: name");
    }

    #[test]
    fn test_transport_display() {
        let err = TpError::Transport("Printer error".to_string());
        assert_eq!(err.to_string(), "Transport error: Printer error");
    }

    #[test]
    fn test_io_from() {
        let err: TpError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, TpError::Io(_)));
    }
}
