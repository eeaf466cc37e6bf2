//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Abbreviation table could not be loaded
    AbbreviationError(String),
    /// Two inputs map to the same file under `--output-dir`
    OutputConflict {
        /// File both inputs would be written to
        target: PathBuf,
        /// Input that claimed the target first
        first: PathBuf,
        /// Input that collided with it
        second: PathBuf,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AbbreviationError(msg) => write!(f, "Abbreviation table error: {msg}"),
            CliError::OutputConflict {
                target,
                first,
                second,
            } => write!(
                f,
                "Output conflict: {} and {} would both be written to {}",
                first.display(),
                second.display(),
                target.display()
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("threads must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: threads must be greater than 0"
        );
    }

    #[test]
    fn test_abbreviation_error_display() {
        let error = CliError::AbbreviationError("entry 2 has no tokens".to_string());
        assert_eq!(
            error.to_string(),
            "Abbreviation table error: entry 2 has no tokens"
        );
    }

    #[test]
    fn test_output_conflict_display_names_both_inputs() {
        let error = CliError::OutputConflict {
            target: PathBuf::from("out/brev.tok"),
            first: PathBuf::from("2023/brev.txt"),
            second: PathBuf::from("2024/brev.txt"),
        };
        assert_eq!(
            error.to_string(),
            "Output conflict: 2023/brev.txt and 2024/brev.txt would both be written to out/brev.tok"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("a.txt".into()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("a.txt"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("mapp/fil med å.txt".to_string());
        assert_eq!(error.to_string(), "File not found: mapp/fil med å.txt");
    }
}
