use std::fmt;

use self::Token::*;


#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LeftParen,
    RightParen,
    /// Raw quoted literal, surrounding double quotes included.
    Str(String),
    /// Bare word; the parser decides whether it is a number or symbol.
    Word(String),
}

impl Token {
    /// Source text of the token.
    pub fn text(&self) -> &str {
        match self {
            LeftParen => "(",
            RightParen => ")",
            Str(s) | Word(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
