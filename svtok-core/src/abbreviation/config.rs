//! TOML schema and loading for abbreviation tables

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::AbbreviationTable;
use crate::error::{CoreError, Result};

/// Swedish abbreviations shipped with the crate
const SWEDISH: &str = include_str!("../../configs/abbreviations/swedish.toml");

/// Root of an abbreviation table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// The `[abbreviations]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One abbreviation: the lexer's token sequence and its replacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub tokens: Vec<String>,
    pub canonical: String,
}

impl AbbreviationTable {
    /// Build a validated table from a parsed configuration
    pub fn from_config(config: &AbbreviationConfig) -> Result<Self> {
        if config.metadata.code.trim().is_empty() {
            return Err(CoreError::Metadata("code must not be empty".into()));
        }

        let mut table = AbbreviationTable::new();
        table.set_metadata(&config.metadata.code, &config.metadata.name);
        for (index, entry) in config.abbreviations.entries.iter().enumerate() {
            table.insert_checked(index, &entry.tokens, entry.canonical.clone())?;
        }

        debug!(
            code = %table.code(),
            entries = table.len(),
            max_key_len = table.max_key_len(),
            "loaded abbreviation table"
        );
        Ok(table)
    }

    /// Parse and validate a table from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: AbbreviationConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Read, parse and validate a table file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading abbreviation table");
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The embedded Swedish table
    pub fn swedish() -> Result<Self> {
        Self::from_toml_str(SWEDISH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_swedish_table_loads() {
        let table = AbbreviationTable::swedish().unwrap();
        assert_eq!(table.code(), "sv");
        assert_eq!(table.name(), "Swedish");
        assert_eq!(table.len(), 59);
        assert_eq!(table.max_key_len(), 6);
        assert_eq!(table.get(&["t", ".", "ex", "."]), Some("t.ex."));
        assert_eq!(table.get(&["bl", "a"]), Some("bl_a"));
        assert_eq!(table.get(&["f", "ö"]), Some("f_ö"));
    }

    #[test]
    fn test_minimal_config() {
        let table = AbbreviationTable::from_toml_str(
            r#"
[metadata]
code = "test"
name = "Test"
"#,
        )
        .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let result = AbbreviationTable::from_toml_str(
            r#"
[metadata]
code = ""
name = "Test"
"#,
        );
        assert!(matches!(result, Err(CoreError::Metadata(_))));
    }

    #[test]
    fn test_schema_errors_are_reported() {
        let result = AbbreviationTable::from_toml_str(
            r#"
[metadata]
code = "x"
name = "X"

[abbreviations]
entries = [ { tokens = "Dr", canonical = "Dr." } ]
"#,
        );
        assert!(matches!(result, Err(CoreError::Toml(_))));
    }

    #[test]
    fn test_duplicate_entry_in_file() {
        let result = AbbreviationTable::from_toml_str(
            r#"
[metadata]
code = "x"
name = "X"

[abbreviations]
entries = [
    { tokens = ["Dr", "."], canonical = "Dr." },
    { tokens = ["Dr", "."], canonical = "dr." },
]
"#,
        );
        match result {
            Err(CoreError::DuplicateEntry { index, tokens }) => {
                assert_eq!(index, 1);
                assert_eq!(tokens, vec!["Dr", "."]);
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "en"
name = "English"

[abbreviations]
entries = [ {{ tokens = ["Dr", "."], canonical = "Dr." }} ]
"#
        )
        .unwrap();

        let table = AbbreviationTable::from_file(file.path()).unwrap();
        assert_eq!(table.code(), "en");
        assert_eq!(table.get(&["Dr", "."]), Some("Dr."));
    }

    #[test]
    fn test_missing_file() {
        let result = AbbreviationTable::from_file("/nonexistent/table.toml");
        assert!(matches!(result, Err(CoreError::Io { .. })));
    }
}
