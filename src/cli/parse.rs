//! Parse filter expressions for the command line

use super::{function_to_json, CliError};
use crate::{config::ParserConfig, OutputParser, StructuredQueryParser};

/// How a parsed filter is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON tree
    #[default]
    Json,
    /// Canonical filter text
    Dsl,
}

/// Options for the parse command
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// The filter expression
    pub text: String,
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Only validate syntax, print nothing on success
    pub syntax_only: bool,
    /// Parser settings
    pub config: ParserConfig,
}

/// Result of a parse operation
#[derive(Debug)]
pub enum ParseResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Rendered filter
    Rendered(String),
}

/// Execute a parse operation
pub fn execute_parse(options: &ParseOptions) -> Result<ParseResult, CliError> {
    let parser = StructuredQueryParser::with_config(options.config.clone());
    let function = parser.parse(&options.text)?;

    if options.syntax_only {
        return Ok(ParseResult::SyntaxValid);
    }

    let rendered = match options.format {
        OutputFormat::Dsl => function.to_string(),
        OutputFormat::Json => {
            let json = function_to_json(&function);
            if options.pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            }
        }
    };

    Ok(ParseResult::Rendered(rendered))
}
