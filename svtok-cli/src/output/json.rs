//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: Option<String>,
    next_index: usize,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceData {
    /// Input file the sentence came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Position of the sentence within its document
    pub index: usize,
    /// The sentence tokens
    pub tokens: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            source: None,
            next_index: 0,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.source = Some(name.to_string());
        self.next_index = 0;
        Ok(())
    }

    fn format_sentence(&mut self, tokens: &[String]) -> Result<()> {
        self.sentences.push(SentenceData {
            source: self.source.clone(),
            index: self.next_index,
            tokens: tokens.to_vec(),
        });
        self.next_index += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
