//! svtok CLI library
//!
//! This library provides the command-line interface for the svtok Swedish
//! tokenizer and sentence segmenter.

pub mod abbreviation_source;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
