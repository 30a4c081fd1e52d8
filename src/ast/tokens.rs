use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Floating-point number (decimal point or exponent present)
    ///
    /// # Examples
    /// ```text
    /// 3.5
    /// -0.25
    /// 1e6
    /// ```
    Float(f64),

    /// Integer
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 180
    /// -10
    /// ```
    Integer(i64),

    /// String literal with the quotes stripped and escapes decoded
    ///
    /// # Examples
    /// ```text
    /// "artist"
    /// "Katy Perry"
    /// ```
    String(String),

    /// Boolean values, matched case-insensitively
    ///
    /// # Examples
    /// ```text
    /// true
    /// False
    /// ```
    Boolean(bool),

    // Names
    /// Call name
    ///
    /// Must start with letter or underscore, followed by letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// and
    /// eq
    /// _custom_op
    /// ```
    Identifier(String),

    // Delimiters
    /// Opens an argument list
    LParen,

    /// Closes an argument list
    RParen,

    /// Separates arguments
    Comma,

    /// End of input
    Eof,
}

impl Token {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Float(n) => format!("float {:?}", n),
            Token::Integer(n) => format!("integer {}", n),
            Token::String(s) => format!("string {:?}", s),
            Token::Boolean(b) => format!("boolean {}", b),
            Token::Identifier(name) => format!("identifier '{}'", name),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
