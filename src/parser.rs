use crate::{
    ast::{Argument, Function, Token},
    config::ParserConfig,
    lexer::{LexError, Lexer, Position},
};
use std::mem;

/// Errors raised while turning text into a [`Function`] tree.
///
/// Parsing stops at the first error; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Expected {expected}, got {found} at {position}")]
    Syntax {
        expected: &'static str,
        found: Token,
        position: Position,
    },

    #[error("Empty input: no filter call found")]
    EmptyInput,

    #[error("Unexpected {found} at {position} after the end of the filter call")]
    TrailingInput { found: Token, position: Position },

    #[error("Calls nested deeper than {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    /// Where in the input the error was detected, if anywhere.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Lex(e) => Some(e.position()),
            ParseError::Syntax { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::NestingTooDeep { position, .. } => Some(*position),
            ParseError::EmptyInput => None,
        }
    }

    pub fn position_mut(&mut self) -> Option<&mut Position> {
        match self {
            ParseError::Lex(e) => Some(e.position_mut()),
            ParseError::Syntax { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::NestingTooDeep { position, .. } => Some(position),
            ParseError::EmptyInput => None,
        }
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Result<Self, ParseError> {
        Self::with_config(lexer, &ParserConfig::default())
    }

    pub fn with_config(mut lexer: Lexer, config: &ParserConfig) -> Result<Self, ParseError> {
        let (current_token, current_position) = lexer.next_spanned()?;
        Ok(Parser {
            lexer,
            current_token,
            current_position,
            depth: 0,
            max_depth: config.max_depth,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        let (token, position) = self.lexer.next_spanned()?;
        self.current_token = token;
        self.current_position = position;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(description));
        }
        self.advance()
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Syntax {
            expected,
            found: self.current_token.clone(),
            position: self.current_position,
        }
    }

    /// call := IDENT "(" arglist? ")"
    fn parse_call(&mut self) -> Result<Function, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: self.current_position,
            });
        }

        let name = match &self.current_token {
            Token::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected("a function name")),
        };
        self.advance()?;
        self.expect(Token::LParen, "'(' after function name")?;

        self.depth += 1;
        let args = if self.check(&Token::RParen) {
            vec![]
        } else {
            self.parse_arguments()?
        };
        self.depth -= 1;

        self.expect(Token::RParen, "',' or ')'")?;

        Ok(Function { name, args })
    }

    /// arglist := arg ("," arg)*
    fn parse_arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        let mut args = vec![self.parse_argument()?];

        while self.check(&Token::Comma) {
            self.advance()?;
            args.push(self.parse_argument()?);
        }

        Ok(args)
    }

    /// arg := call | STRING | INT | FLOAT | BOOL
    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        if self.check(&Token::Identifier(String::new())) {
            return self.parse_call().map(Argument::Function);
        }

        let arg = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::String(s) => Argument::String(s),
            Token::Integer(n) => Argument::Integer(n),
            Token::Float(n) => Argument::Float(n),
            Token::Boolean(b) => Argument::Boolean(b),
            token => {
                self.current_token = token;
                return Err(self.unexpected("an argument"));
            }
        };
        self.advance()?;
        Ok(arg)
    }

    /// Parse exactly one call. Anything but end of input after it is rejected.
    pub fn parse(&mut self) -> Result<Function, ParseError> {
        if self.check(&Token::Eof) {
            return Err(ParseError::EmptyInput);
        }

        let function = self.parse_call()?;

        if !self.check(&Token::Eof) {
            return Err(ParseError::TrailingInput {
                found: self.current_token.clone(),
                position: self.current_position,
            });
        }

        Ok(function)
    }
}

/// Parse `input` with the default configuration.
pub fn parse(input: &str) -> Result<Function, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}

/// Parse `input` with an explicit configuration.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> Result<Function, ParseError> {
    Parser::with_config(Lexer::new(input), config)?.parse()
}
