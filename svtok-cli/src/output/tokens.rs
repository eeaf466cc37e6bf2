//! Token-per-line output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Tokens formatter - one token per line, a blank line closes each sentence
pub struct TokensFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TokensFormatter<W> {
    /// Create a new tokens formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TokensFormatter<W> {
    fn format_sentence(&mut self, tokens: &[String]) -> Result<()> {
        for token in tokens {
            writeln!(self.writer, "{token}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
