//! Module for parsing minilisp tokens into an AST.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::lang_err::LangErr;
use crate::number::{Number, ParseNumberError};
use crate::sexp::{Atom, Sexp};
use crate::token::{Token, Tokens};
use crate::err;


lazy_static! {
    static ref STRING: Regex = Regex::new(r#"^"([^"]*)"$"#).unwrap();
    static ref INTEGER: Regex = Regex::new(r"^-?\d+$").unwrap();
    static ref FLOAT: Regex = Regex::new(r"^-?\d+(\.\d+)?$").unwrap();
}

/// Parses a single expression off the front of `tokens`.
///
/// Returns None when no tokens remain. Tokens belonging to later expressions
/// are left in place.
pub fn parse(tokens: &mut Tokens) -> Result<Option<Sexp>, LangErr> {
    let token = match tokens.pop_front() {
        Some(token) => token,
        None => return Ok(None),
    };

    match token {
        Token::LeftParen => {
            let mut list = Vec::new();
            loop {
                match tokens.front() {
                    Some(Token::RightParen) => {
                        tokens.pop_front();
                        break;
                    }
                    Some(_) => {
                        if let Some(sexp) = parse(tokens)? {
                            list.push(sexp);
                        }
                    }
                    None => return err!(UnmatchedOpen),
                }
            }
            Ok(Some(Sexp::List(list)))
        }
        Token::RightParen => err!(UnmatchedClose),
        Token::Str(text) | Token::Word(text) => Ok(Some(parse_atom(text)?.into())),
    }
}

/// Parses every expression in `tokens`.
pub fn parse_all(tokens: &mut Tokens) -> Result<Vec<Sexp>, LangErr> {
    let mut sexps = Vec::new();
    while let Some(sexp) = parse(tokens)? {
        debug!("Parsed: {}", sexp);
        sexps.push(sexp);
    }
    Ok(sexps)
}

// Classification is by shape alone; Number::from_str tries integers first.
fn parse_atom(text: String) -> Result<Atom, LangErr> {
    if let Some(cap) = STRING.captures(&text) {
        let content = cap.get(1).map_or("", |m| m.as_str());
        return Ok(Atom::Str(content.to_string()));
    }
    if INTEGER.is_match(&text) || FLOAT.is_match(&text) {
        return match text.parse::<Number>() {
            Ok(num) => Ok(Atom::Number(num)),
            Err(ParseNumberError(text)) => err!(InvalidNumber(text)),
        };
    }
    Ok(Atom::Symbol(text))
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
