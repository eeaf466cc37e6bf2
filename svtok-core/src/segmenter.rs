//! Complete lexer → resolver → grouper pipeline

use std::sync::Arc;

use tracing::{debug, trace};

use crate::abbreviation::AbbreviationTable;
use crate::error::Result;
use crate::grouper::Sentences;
use crate::lexer::Lexer;
use crate::resolver::Resolver;
use crate::token::Sentence;

/// Sentence segmenter bound to one abbreviation table
///
/// Cloning is cheap: the table is shared. Each call to [`sentences`] builds a
/// fresh pipeline, so one segmenter can serve any number of documents, from
/// any number of threads.
///
/// [`sentences`]: Segmenter::sentences
#[derive(Debug, Clone)]
pub struct Segmenter {
    table: Arc<AbbreviationTable>,
}

impl Segmenter {
    /// Create a segmenter using `table`
    pub fn new(table: Arc<AbbreviationTable>) -> Self {
        debug!(
            code = %table.code(),
            entries = table.len(),
            "creating segmenter"
        );
        Self { table }
    }

    /// Segmenter with the embedded Swedish abbreviations
    pub fn swedish() -> Result<Self> {
        Ok(Self::new(Arc::new(AbbreviationTable::swedish()?)))
    }

    /// Segmenter that folds nothing and only applies the boundary heuristic
    pub fn without_abbreviations() -> Self {
        Self::new(Arc::new(AbbreviationTable::new()))
    }

    /// The abbreviation table in use
    pub fn table(&self) -> &AbbreviationTable {
        &self.table
    }

    /// Resolved tokens and markers for `text`
    ///
    /// Leading and trailing whitespace is ignored.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Resolver<'a, Lexer<'a>> {
        let text = text.trim();
        trace!(bytes = text.len(), "segmenting document");
        Resolver::new(&self.table, Lexer::new(text))
    }

    /// Lazy sentences of `text`
    pub fn sentences<'a>(&'a self, text: &'a str) -> Sentences<Resolver<'a, Lexer<'a>>> {
        Sentences::new(self.tokens(text))
    }

    /// All sentences of `text`, collected
    pub fn segment<'a>(&'a self, text: &'a str) -> Vec<Sentence<'a>> {
        self.sentences(text).collect()
    }
}
