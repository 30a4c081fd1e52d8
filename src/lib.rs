pub mod ast;
pub mod cli;
pub mod config;
pub mod lexer;
pub mod output_parser;
pub mod parser;

pub use ast::{Argument, Comparator, Function, FunctionKind, Operator, Token};
pub use config::ParserConfig;
pub use lexer::{tokenize, LexError, Lexer, Position};
pub use output_parser::{OutputParser, StructuredQueryParser};
pub use parser::{parse, parse_with_config, ParseError, Parser};
