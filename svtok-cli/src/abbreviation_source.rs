//! Abbreviation table source management for CLI

use crate::config::ProcessingConfig;
use crate::error::CliError;
use anyhow::Result;
use std::path::PathBuf;
use svtok_core::AbbreviationTable;

/// Where the abbreviation table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbbreviationSource {
    /// Embedded Swedish table
    BuiltIn,
    /// External TOML table
    External(PathBuf),
    /// No abbreviation folding
    Disabled,
}

impl AbbreviationSource {
    /// Pick the source from command-line flags, falling back to the config file
    pub fn select(disabled: bool, path: Option<&PathBuf>, config: &ProcessingConfig) -> Self {
        if disabled {
            AbbreviationSource::Disabled
        } else if let Some(path) = path {
            AbbreviationSource::External(path.clone())
        } else if !config.use_abbreviations {
            AbbreviationSource::Disabled
        } else if let Some(path) = &config.abbreviations {
            AbbreviationSource::External(path.clone())
        } else {
            AbbreviationSource::BuiltIn
        }
    }

    /// Get the display name for the abbreviation source
    pub fn display_name(&self) -> String {
        match self {
            AbbreviationSource::BuiltIn => "Built-in: Swedish".to_string(),
            AbbreviationSource::External(path) => format!("External: {}", path.display()),
            AbbreviationSource::Disabled => "Disabled".to_string(),
        }
    }

    /// Load the table this source names
    pub fn load(&self) -> Result<AbbreviationTable> {
        let table = match self {
            AbbreviationSource::BuiltIn => AbbreviationTable::swedish(),
            AbbreviationSource::External(path) => AbbreviationTable::from_file(path),
            AbbreviationSource::Disabled => return Ok(AbbreviationTable::new()),
        };
        table.map_err(|e| CliError::AbbreviationError(e.to_string()).into())
    }
}
