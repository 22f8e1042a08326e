use std::fmt;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenType {
    // A run of decimal digits
    Digits,
    Comma,
    // '\n' ends a line; '\r' is accepted but never produces a token
    Newline,
    #[default]
    Eof,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub r#type: TokenType,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(r#type: TokenType, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            r#type,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.r#type {
            TokenType::Digits => write!(f, "{}", self.lexeme),
            TokenType::Comma => write!(f, ","),
            TokenType::Newline => write!(f, "\\n"),
            TokenType::Eof => write!(f, "<eof>"),
        }
    }
}
