//! Uniform "interpret LLM text" contract and the filter parser behind it.
//!
//! Chains that post-process model output hold their parsers as
//! [`OutputParser`]s; [`StructuredQueryParser`] is the one that turns a
//! filter expression into a [`Function`] tree.
//!
//! # Examples
//!
//! ```
//! use sift_lang::{OutputParser, StructuredQueryParser};
//!
//! let parser = StructuredQueryParser::new();
//! let filter = parser.parse(r#"and(eq("genre", "pop"), lt("length", 180))"#).unwrap();
//! assert_eq!(filter.name, "and");
//! assert_eq!(filter.args.len(), 2);
//! ```

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::{
    ast::{Comparator, Function, Operator},
    config::ParserConfig,
    lexer::Position,
    parser::{self, ParseError},
};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```(?:[A-Za-z0-9_-]*[ \t]*\r?\n)?(.*?)\s*```\s*$")
        .expect("valid fence pattern")
});

/// Parses raw model output into a typed value.
pub trait OutputParser {
    type Output;
    type Error: std::error::Error;

    fn parse(&self, text: &str) -> Result<Self::Output, Self::Error>;

    /// Parse with the prompt that produced `text`. The prompt is not consulted
    /// unless an implementation overrides this.
    fn parse_with_prompt(&self, text: &str, _prompt: &str) -> Result<Self::Output, Self::Error> {
        self.parse(text)
    }

    /// Instructions appended to a prompt describing the expected output.
    fn format_instructions(&self) -> String;

    /// Stable identifier for this parser kind.
    fn type_name(&self) -> &'static str;
}

/// Parser for the function-call filter language.
///
/// Holds no state between calls; share one instance freely across threads.
#[derive(Debug, Clone, Default)]
pub struct StructuredQueryParser {
    config: ParserConfig,
}

impl StructuredQueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        StructuredQueryParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

/// Body of a markdown code fence wrapping the whole text, if there is one.
pub fn strip_code_fence(text: &str) -> Option<&str> {
    fence_body(text).map(|(_, body)| body)
}

/// Fence body together with the byte index it starts at.
fn fence_body(text: &str) -> Option<(usize, &str)> {
    CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| (body.start(), body.as_str()))
}

impl OutputParser for StructuredQueryParser {
    type Output = Function;
    type Error = ParseError;

    fn parse(&self, text: &str) -> Result<Function, ParseError> {
        trace!("parsing filter expression: {:?}", text);

        let mut source = text;
        let mut origin = Position::start();
        if self.config.strip_code_fences {
            if let Some((start, body)) = fence_body(text) {
                debug!("stripped markdown code fence from filter expression");
                source = body;
                origin = Position::of_byte(text, start);
            }
        }

        match parser::parse_with_config(source, &self.config) {
            Ok(function) => {
                debug!(
                    "parsed filter '{}' with {} argument(s), depth {}",
                    function.name,
                    function.args.len(),
                    function.depth()
                );
                Ok(function)
            }
            Err(mut e) => {
                // Report against the caller's text, not the fence body
                if let Some(position) = e.position_mut() {
                    *position = position.relative_to(origin);
                }
                debug!("rejected filter expression: {}", e);
                Err(e)
            }
        }
    }

    fn format_instructions(&self) -> String {
        let operators: Vec<&str> = Operator::ALL.iter().map(Operator::as_str).collect();
        let comparators: Vec<&str> = Comparator::ALL.iter().map(Comparator::as_str).collect();

        format!(
            r#"Respond with a single filter expression written as nested function calls:

  call    := name "(" [arg {{"," arg}}] ")"
  arg     := call | "string" | integer | float | true | false

Logical operators: {operators}
Comparators: {comparators}
A comparator takes the attribute name first and the value second, e.g. eq("genre", "pop").

Example: and(or(eq("artist", "Taylor Swift"), eq("artist", "Katy Perry")), lt("length", 180))"#,
            operators = operators.join(", "),
            comparators = comparators.join(", "),
        )
    }

    fn type_name(&self) -> &'static str {
        "structured_query_parser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```\neq(\"a\", 1)\n```"), Some("eq(\"a\", 1)"));
        assert_eq!(
            strip_code_fence("  ```text\nnot(eq(\"a\", 1))\n```  "),
            Some("not(eq(\"a\", 1))")
        );
        assert_eq!(strip_code_fence("```eq(\"a\", 1)```"), Some("eq(\"a\", 1)"));
        assert_eq!(strip_code_fence("eq(\"a\", 1)"), None);
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StructuredQueryParser>();
    }
}
