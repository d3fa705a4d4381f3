//! Module for representing S-exps.

use std::fmt;

use crate::number::Number;


/// Creates a Sexp::List from anything convertible into Sexp.
#[macro_export]
macro_rules! list {
    () => {
        $crate::sexp::Sexp::List(::std::vec::Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::sexp::Sexp::List(vec![$($crate::sexp::Sexp::from($x)),+])
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum Sexp {
    Atom(Atom),
    List(Vec<Sexp>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Atom {
    Number(Number),
    Str(String),
    Symbol(String),
}


impl Sexp {
    pub fn symbol<S: Into<String>>(name: S) -> Sexp {
        Sexp::Atom(Atom::Symbol(name.into()))
    }

    pub fn string<S: Into<String>>(content: S) -> Sexp {
        Sexp::Atom(Atom::Str(content.into()))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexp::Atom(Atom::Symbol(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<Number> for Sexp {
    fn from(num: Number) -> Self {
        Sexp::Atom(Atom::Number(num))
    }
}

impl From<i64> for Sexp {
    fn from(i: i64) -> Self {
        Number::Integer(i).into()
    }
}

// Untyped integer literals fall back to i32.
impl From<i32> for Sexp {
    fn from(i: i32) -> Self {
        Number::Integer(i.into()).into()
    }
}

impl From<f64> for Sexp {
    fn from(f: f64) -> Self {
        Number::Float(f).into()
    }
}

impl From<Atom> for Sexp {
    fn from(atom: Atom) -> Self {
        Sexp::Atom(atom)
    }
}


impl fmt::Display for Sexp {
    /// Writes source text that parses back into an equal Sexp.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Atom(atom) => write!(f, "{}", atom),
            Sexp::List(list) => {
                write!(f, "(")?;
                for (i, elem) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Number(num) => write!(f, "{}", num),
            Atom::Str(s) => write!(f, "\"{}\"", s),
            Atom::Symbol(s) => write!(f, "{}", s),
        }
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
