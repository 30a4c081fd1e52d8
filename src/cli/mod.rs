//! CLI support for sift-lang
//!
//! Provides programmatic access to sift CLI functionality for embedding
//! in other tools.

mod convert;
mod parse;

pub use convert::{argument_to_json, function_to_json};
pub use parse::{execute_parse, OutputFormat, ParseOptions, ParseResult};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Pass the filter as an argument or pipe it to stdin.")]
    NoInput,
}
