//! Runtime values produced by evaluation.

use std::fmt;

use crate::builtin::BuiltIn;
use crate::number::Number;


#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    Str(String),
    Boolean(bool),
    BuiltIn(BuiltIn),
    /// Absence of a result, e.g. from a loop whose body never ran.
    Nil,
}

impl Value {
    /// Only false and Nil are falsy; numeric zero is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Nil)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl From<Number> for Value {
    fn from(num: Number) -> Self {
        Value::Number(num)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i.into()))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    /// Alternate formatting quotes strings, for echoing results.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{}", num),
            Value::Str(s) => {
                if f.alternate() {
                    write!(f, "\"{}\"", s)
                } else {
                    write!(f, "{}", s)
                }
            }
            Value::Boolean(b) => write!(f, "{}", b),
            Value::BuiltIn(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
        }
    }
}
