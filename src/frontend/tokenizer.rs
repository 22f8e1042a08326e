use crate::error::{Error, Result};
use crate::frontend::token::{Token, TokenType};

pub struct Tokenizer;

impl Tokenizer {
    /// Splits an adjacency list into digit runs, commas and line ends.
    ///
    /// The whole input is scanned before anything is returned, so a single
    /// stray character anywhere rejects the file. Lines and columns are
    /// 1-based; columns count characters, not bytes.
    pub fn tokenize(input: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();
        let mut line = 1;
        let mut column = 1;

        while let Some(c) = chars.next() {
            match c {
                '0'..='9' => {
                    let start = column;
                    let mut digits = String::from(c);
                    while let Some(&next) = chars.peek() {
                        if !next.is_ascii_digit() {
                            break;
                        }
                        digits.push(next);
                        chars.next();
                        column += 1;
                    }
                    tokens.push(Token::new(TokenType::Digits, digits, line, start));
                }
                ',' => tokens.push(Token::new(TokenType::Comma, ",", line, column)),
                '\n' => {
                    tokens.push(Token::new(TokenType::Newline, "\n", line, column));
                    line += 1;
                    column = 0;
                }
                '\r' => {}
                _ => {
                    return Err(Error::InvalidCharacter {
                        character: c,
                        line,
                        column,
                    });
                }
            }
            column += 1;
        }

        tokens.push(Token::new(TokenType::Eof, "", line, column));
        Ok(tokens)
    }
}
