//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use svtok_core::AbbreviationTable;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the abbreviation table to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub abbreviations: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating abbreviation table: {}",
            self.abbreviations.display()
        );

        match AbbreviationTable::from_file(&self.abbreviations) {
            Ok(table) => {
                println!("✓ Abbreviation table is valid!");
                println!("  Code: {}", table.code());
                println!("  Name: {}", table.name());
                println!("  Entries: {}", table.len());
                println!("  Longest key: {} token(s)", table.max_key_len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Abbreviation table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
