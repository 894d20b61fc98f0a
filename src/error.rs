use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("SMS too long! ({length} characters, limit is {limit})")]
    SmsTooLong { length: usize, limit: usize },

    #[error("{0}")]
    NotSupported(&'static str),

    #[error("Shape not supported")]
    UnsupportedShape,

    #[error("Missing required field: '{field}'")]
    MissingField { field: &'static str },

    #[error("Failed to load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Errors that a violation demo raises on purpose, as opposed to real failures.
    pub fn is_didactic(&self) -> bool {
        matches!(
            self,
            Self::SmsTooLong { .. } | Self::NotSupported(_) | Self::UnsupportedShape
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_too_long_display() {
        let error = DemoError::SmsTooLong { length: 52, limit: 20 };
        assert_eq!(error.to_string(), "SMS too long! (52 characters, limit is 20)");
    }

    #[test]
    fn test_not_supported_is_bare_message() {
        let error = DemoError::NotSupported("Robots don't eat!");
        assert_eq!(error.to_string(), "Robots don't eat!");
    }

    #[test]
    fn test_config_error_mentions_path() {
        let error = DemoError::config("demo.toml", "expected a table");
        let display = error.to_string();
        assert!(display.contains("demo.toml"));
        assert!(display.contains("expected a table"));
    }

    #[test]
    fn test_didactic_classification() {
        assert!(DemoError::SmsTooLong { length: 30, limit: 20 }.is_didactic());
        assert!(DemoError::UnsupportedShape.is_didactic());
        assert!(!DemoError::MissingField { field: "make" }.is_didactic());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!DemoError::from(io).is_didactic());
    }
}
