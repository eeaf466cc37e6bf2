//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use std::io::{self, Write};
use svtok_core::AbbreviationTable;

/// Execute a list subcommand, printing to stdout
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match subcommand {
        ListCommands::Abbreviations => {
            let table = AbbreviationTable::swedish()?;
            write_abbreviations(&mut out, &table)
        }
        ListCommands::Formats => write_formats(&mut out),
    }
}

fn write_abbreviations<W: Write>(out: &mut W, table: &AbbreviationTable) -> Result<()> {
    writeln!(out, "{} ({}): {} entries", table.name(), table.code(), table.len())?;
    writeln!(out)?;
    for (tokens, canonical) in table.entries() {
        writeln!(out, "  {:<20} -> {}", tokens.join(" "), canonical)?;
    }
    Ok(())
}

fn write_formats<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(out, "  {:<10} {}", format.name(), format.description())?;
    }
    Ok(())
}
