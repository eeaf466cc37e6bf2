//! Abbreviation tables
//!
//! A table maps token sequences, exactly as the lexer produces them, to one
//! canonical token. Tables are read from TOML (an embedded Swedish table ships
//! with the crate) and are immutable once built.

mod config;
mod table;

pub use config::{AbbreviationConfig, Abbreviations, Entry, Metadata};
pub use table::{AbbreviationTable, NodeId};
