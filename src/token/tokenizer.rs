//! Module for breaking minilisp text into tokens.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::VecDeque;

use super::token::Token;


pub type Tokens = VecDeque<Token>;

lazy_static! {
    static ref STRING: Regex = Regex::new(r#"^"[^"]*""#).unwrap();
}

/// Splits source text into tokens.
///
/// Parens are padded with whitespace before scanning, so they always stand
/// alone. A double quote starts a string token that runs through the next
/// double quote with no escape processing; a missing closing quote swallows
/// the rest of the input. Comments must already be stripped.
pub fn tokenize<S: AsRef<str>>(source: S) -> Tokens {
    let expanded = source.as_ref().replace('(', " ( ").replace(')', " ) ");

    let mut tokens = VecDeque::new();
    let mut rest = expanded.trim_start();
    while !rest.is_empty() {
        let (token, remainder) = if rest.starts_with('"') {
            match STRING.find(rest) {
                Some(m) => (Token::Str(m.as_str().to_string()), &rest[m.end()..]),
                None => (Token::Str(rest.trim_end().to_string()), ""),
            }
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or_else(|| rest.len());
            let word = &rest[..end];
            let token = match word {
                "(" => Token::LeftParen,
                ")" => Token::RightParen,
                _ => Token::Word(word.to_string()),
            };
            (token, &rest[end..])
        };

        tokens.push_back(token);
        rest = remainder.trim_start();
    }
    tokens
}

/// Drops each `;` and the remainder of its line, unless the `;` sits inside
/// a quoted literal. Literals may span lines.
pub fn strip_comments<S: AsRef<str>>(source: S) -> String {
    let mut stripped = String::new();
    let mut in_string = false;
    let mut in_comment = false;
    for c in source.as_ref().chars() {
        match c {
            '\n' => in_comment = false,
            _ if in_comment => continue,
            '"' => in_string = !in_string,
            ';' if !in_string => {
                in_comment = true;
                continue;
            }
            _ => {}
        }
        stripped.push(c);
    }
    stripped
}

/// Count of open parens minus close parens outside quoted literals.
pub fn depth<S: AsRef<str>>(source: S) -> isize {
    let mut depth: isize = 0;
    let mut in_string = false;
    for c in source.as_ref().chars() {
        match c {
            '"' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => depth -= 1,
            _ => {}
        }
    }
    depth
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
