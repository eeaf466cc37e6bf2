//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new table
    #[arg(short = 'l', long, value_name = "CODE", default_value = "sv")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating abbreviation table template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Abbreviation table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the entries to match your abbreviations");
        println!("2. Validate your table:");
        println!("   svtok validate --abbreviations {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   svtok process -i input.txt --abbreviations {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template table content
    fn generate_template(&self) -> String {
        format!(
            r#"# Abbreviation table for {code}
#
# Each entry maps the token sequence the tokenizer produces for an
# abbreviation to the single token it is folded into. "t. ex." lexes as
# ["t", ".", "ex", "."], while "d.v.s" stays one token.

[metadata]
code = "{code}"
name = "Custom Abbreviations"

[abbreviations]
entries = [
    {{ tokens = ["t", ".", "ex", "."], canonical = "t.ex." }},
    {{ tokens = ["bl.a", "."], canonical = "bl.a." }},
    {{ tokens = ["bl", "a"], canonical = "bl_a" }},
    {{ tokens = ["Dr", "."], canonical = "Dr." }},
]
"#,
            code = self.code
        )
    }
}
