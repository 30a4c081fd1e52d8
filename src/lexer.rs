use std::fmt;

use crate::ast::Token;

/// Location of a character in the source text.
///
/// `offset` counts characters from the start (0-based); `line` and `column`
/// are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Position of the character starting at byte index `byte` of `text`.
    pub fn of_byte(text: &str, byte: usize) -> Self {
        let mut position = Position::start();
        for ch in text[..byte].chars() {
            position.offset += 1;
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }
        position
    }

    /// Translate a position measured inside a slice that begins at `origin`
    /// into the enclosing text.
    pub fn relative_to(self, origin: Position) -> Self {
        Position {
            offset: origin.offset + self.offset,
            line: origin.line + self.line - 1,
            column: if self.line == 1 {
                origin.column + self.column - 1
            } else {
                self.column
            },
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors raised while scanning text into tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedCharacter { ch: char, position: Position },

    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },

    #[error("Unexpected end of input after '\\' in string starting at {position}")]
    UnexpectedEof { position: Position },

    #[error("Invalid escape sequence '\\{ch}' at {position}")]
    InvalidEscape { ch: char, position: Position },

    #[error("Invalid number '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::UnexpectedEof { position }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidNumber { position, .. } => *position,
        }
    }

    pub fn position_mut(&mut self) -> &mut Position {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::UnexpectedEof { position }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidNumber { position, .. } => position,
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if self.current_char() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn here(&self) -> Position {
        Position {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.here();
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    let escape_at = self.here();
                    self.advance(); // Consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some(ch) => {
                            return Err(LexError::InvalidEscape {
                                ch,
                                position: escape_at,
                            });
                        }
                        None => return Err(LexError::UnexpectedEof { position: start }),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_digits(&mut self, number: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch) = self.current_char().filter(char::is_ascii_digit) {
            number.push(ch);
            self.advance();
            count += 1;
        }
        count
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.here();
        let mut number = String::new();
        let mut is_float = false;

        if let Some(sign @ ('-' | '+')) = self.current_char() {
            number.push(sign);
            self.advance();
        }

        self.read_digits(&mut number);

        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            number.push('.');
            self.advance();
            self.read_digits(&mut number);
        }

        if let Some(e @ ('e' | 'E')) = self.current_char() {
            is_float = true;
            number.push(e);
            self.advance();
            if let Some(sign @ ('-' | '+')) = self.current_char() {
                number.push(sign);
                self.advance();
            }
            if self.read_digits(&mut number) == 0 {
                return Err(LexError::InvalidNumber {
                    text: number,
                    position: start,
                });
            }
        }

        if is_float {
            match number.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Token::Float(n)),
                _ => Err(LexError::InvalidNumber {
                    text: number,
                    position: start,
                }),
            }
        } else {
            number
                .parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| LexError::InvalidNumber {
                    text: number,
                    position: start,
                })
        }
    }

    /// Next token together with the position of its first character.
    pub fn next_spanned(&mut self) -> Result<(Token, Position), LexError> {
        self.skip_whitespace();
        let start = self.here();

        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('"') => Token::String(self.read_string('"')?),
            Some('\'') => Token::String(self.read_string('\'')?),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                if ident.eq_ignore_ascii_case("true") {
                    Token::Boolean(true)
                } else if ident.eq_ignore_ascii_case("false") {
                    Token::Boolean(false)
                } else {
                    Token::Identifier(ident)
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number()?,
            Some('-' | '+') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number()?
            }
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    position: start,
                });
            }
        };

        Ok((token, start))
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.next_spanned().map(|(token, _)| token)
    }
}

/// Scan the whole input. The last token is always `Token::Eof`.
pub fn tokenize(input: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let (token, position) = lexer.next_spanned()?;
        let done = token == Token::Eof;
        tokens.push((token, position));
        if done {
            return Ok(tokens);
        }
    }
}

#[test]
fn test_booleans() {
    let mut lexer = Lexer::new("true false TRUE False");
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(false));
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(false));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_call() {
    let mut lexer = Lexer::new(r#"lt("length", 180)"#);
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("lt".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(lexer.next_token().unwrap(), Token::String("length".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Comma);
    assert_eq!(lexer.next_token().unwrap(), Token::Integer(180));
    assert_eq!(lexer.next_token().unwrap(), Token::RParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
