//! Errors raised while parsing or evaluating minilisp.

use std::borrow::Cow;
use std::fmt;

use self::ErrKind::*;
use self::ExpectedCount::*;
use crate::sexp::Sexp;
use crate::value::Value;


/// Creates a LangErr wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::lang_err::LangErr::new(
            $crate::lang_err::ErrKind::$($kind)+,
        ))
    };
}


#[derive(Debug, PartialEq)]
pub struct LangErr {
    pub kind: ErrKind,
    // Forms being evaluated when the error was raised, innermost first.
    frames: Vec<Sexp>,
}

#[derive(Debug, PartialEq)]
pub enum ErrKind {
    // Syntax errors.
    UnmatchedClose,
    UnmatchedOpen,
    InvalidNumber(String),

    // Evaluation errors.
    UnboundSymbol(String),
    NotCallable(Value),
    InvalidArgument {
        given: Value,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Sexp),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    Arithmetic(Cow<'static, str>),
    Io(String),
}

#[derive(Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}


impl LangErr {
    /// Prefer using err! for convenience.
    pub fn new(kind: ErrKind) -> Self {
        Self {
            kind,
            frames: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    pub fn frames(&self) -> &[Sexp] {
        &self.frames
    }

    /// Records an enclosing form on the way out of the evaluator.
    pub fn push_frame(mut self, form: &Sexp) -> Self {
        self.frames.push(form.clone());
        self
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, UnmatchedClose | UnmatchedOpen | InvalidNumber(_))
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_syntax() {
            write!(f, "[Syntax Error] ")?;
        } else {
            write!(f, "[Lang Error] ")?;
        }
        match &self.kind {
            UnmatchedClose => write!(f, "Unexpected \")\""),
            UnmatchedOpen => write!(f, "Unterminated list: expected \")\""),
            InvalidNumber(text) => write!(f, "Invalid number literal: {}", text),
            UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
            NotCallable(val) => write!(f, "Not callable: {:#}", val),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {:#}, expected {}",
                given, expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            Arithmetic(msg) => write!(f, "Arithmetic error: {}", msg),
            Io(msg) => write!(f, "I/O error: {}", msg),
        }?;

        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "\n{})  {}", i, frame)?;
        }
        Ok(())
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
            Between(minimum, maximum) => write!(f, "{} to {}", minimum, maximum),
        }
    }
}

impl std::error::Error for LangErr {}
