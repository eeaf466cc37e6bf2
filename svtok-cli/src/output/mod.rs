//! Output formatting module

use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the sentences of a new input document
    fn begin_document(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single sentence
    fn format_sentence(&mut self, tokens: &[String]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;
pub mod tokens;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
pub use tokens::TokensFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line, blank line between sentences
    Tokens,
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with their tokens
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Tokens,
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tokens => "tokens",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// File extension used with `--output-dir`
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tokens => "tok",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Tokens => "One token per line, blank line after each sentence",
            OutputFormat::Text => "One sentence per line, tokens separated by spaces",
            OutputFormat::Json => "JSON array of sentences with their tokens",
            OutputFormat::Markdown => "Numbered markdown list of sentences",
        }
    }

    /// Build a formatter for this format around `writer`
    pub fn formatter<W>(&self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Tokens => Box::new(TokensFormatter::new(writer)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Sentences segmented from one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedDocument {
    /// Display name of the source
    pub name: String,
    /// Sentences in source order
    pub sentences: Vec<Vec<String>>,
}

impl SegmentedDocument {
    /// Write every sentence of the document through `formatter`
    pub fn write_to(&self, formatter: &mut dyn OutputFormatter) -> Result<()> {
        formatter.begin_document(&self.name)?;
        for sentence in &self.sentences {
            formatter.format_sentence(sentence)?;
        }
        Ok(())
    }

    /// Total number of tokens over all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter takes ownership
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn sentence(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }
}
