//! Tokenization and sentence segmentation for Swedish text
//!
//! Raw text flows through three lazy stages:
//!
//! - [`Lexer`] splits text into tokens and paragraph-break markers
//! - [`Resolver`] folds multi-token abbreviations (`t. ex.` → `t.ex.`) and
//!   inserts sentence breaks where a terminator is followed by an uppercase
//!   token, except right after an abbreviation
//! - [`Sentences`] groups the marked stream into sentences
//!
//! Nothing is computed until the caller pulls from the final iterator. The
//! [`AbbreviationTable`] is built once and shared read-only between
//! pipelines.
//!
//! # Example
//!
//! ```rust
//! use svtok_core::Segmenter;
//!
//! let segmenter = Segmenter::swedish().unwrap();
//! let sentences = segmenter.segment("Han kom bl.a. hit. Sedan gick han.");
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0], vec!["Han", "kom", "bl.a.", "hit", "."]);
//! ```

pub mod abbreviation;
pub mod error;
pub mod grouper;
pub mod lexer;
pub mod lookahead;
pub mod resolver;
pub mod segmenter;
pub mod token;

pub use abbreviation::{AbbreviationConfig, AbbreviationTable};
pub use error::{CoreError, Result};
pub use grouper::Sentences;
pub use lexer::Lexer;
pub use lookahead::Lookahead;
pub use resolver::Resolver;
pub use segmenter::Segmenter;
pub use token::{BreakKind, Item, Sentence};

/// Split `text` into tokens and paragraph markers
pub fn tokenize(text: &str) -> Lexer<'_> {
    Lexer::new(text)
}
