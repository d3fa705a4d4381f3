//! A small interpreter for a parenthesized expression language.
//!
//! Source text flows through [`tokenize`], [`parse`] and [`eval`]; the
//! [`Environment`] backing evaluation comes from
//! [`make_global_environment`] and lives for a whole session.
//!
//! Note that this crate does *not* setup logging, clients should take care
//! of that. See: https://github.com/rust-lang/log#in-executables.

use log::debug;

pub mod builtin;
pub mod builtins;
pub mod environment;
pub mod interpreter;
pub mod lang_err;
pub mod number;
pub mod parser;
pub mod sexp;
pub mod token;
pub mod value;

pub use crate::builtins::{make_global_environment, make_global_environment_with_output};
pub use crate::environment::Environment;
pub use crate::interpreter::eval;
pub use crate::lang_err::{ErrKind, LangErr};
pub use crate::parser::{parse, parse_all};
pub use crate::sexp::Sexp;
pub use crate::token::{strip_comments, tokenize};
pub use crate::value::Value;

pub type Ret = Result<Value, LangErr>;

/// Evaluates the first expression of a logical unit of input, as the shell
/// does for each submission. Returns None for input with no expression.
pub fn eval_str<S: AsRef<str>>(source: S, env: &mut Environment) -> Result<Option<Value>, LangErr> {
    let mut tokens = tokenize(strip_comments(source));
    match parse(&mut tokens)? {
        Some(sexp) => Ok(Some(eval(&sexp, env)?)),
        None => Ok(None),
    }
}

/// Evaluates every expression in `source` in order, stopping at the first
/// error. Nothing is evaluated if the source fails to parse.
pub fn run_str<S: AsRef<str>>(source: S, env: &mut Environment) -> Result<Vec<Value>, LangErr> {
    let sexps = parse_all(&mut tokenize(strip_comments(source)))?;
    debug!("Running {} top-level expressions", sexps.len());
    sexps.iter().map(|sexp| eval(sexp, env)).collect()
}
