//! Error types for syltone.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyltoneError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    // Input errors
    #[error("Failed to parse pitch readings: {message}")]
    InputParse { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SyltoneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_invalid_value_display() {
        let error = SyltoneError::ConfigInvalidValue {
            key: "segment.jump_pitch_hz".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for segment.jump_pitch_hz: must be positive"
        );
    }

    #[test]
    fn test_input_parse_display() {
        let error = SyltoneError::InputParse {
            message: "expected an array".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse pitch readings: expected an array"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: SyltoneError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_error = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let error: SyltoneError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<SyltoneError>();
        assert_sync::<SyltoneError>();
    }
}
