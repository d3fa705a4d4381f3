//! Native procedures callable from minilisp.

use std::fmt;
use std::io::Write;

use crate::builtins;
use crate::value::Value;
use crate::Ret;


pub type Args = Vec<Value>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltIn {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Print,
}

impl BuiltIn {
    pub const ALL: [BuiltIn; 7] = [
        BuiltIn::Add,
        BuiltIn::Sub,
        BuiltIn::Mul,
        BuiltIn::Div,
        BuiltIn::Lt,
        BuiltIn::Gt,
        BuiltIn::Print,
    ];

    /// Symbol the builtin is bound to in a global environment.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltIn::Add => "+",
            BuiltIn::Sub => "-",
            BuiltIn::Mul => "*",
            BuiltIn::Div => "/",
            BuiltIn::Lt => "<",
            BuiltIn::Gt => ">",
            BuiltIn::Print => "print",
        }
    }

    /// `out` is only touched by print.
    pub fn call(&self, args: Args, out: &mut dyn Write) -> Ret {
        match self {
            BuiltIn::Add => builtins::add(args),
            BuiltIn::Sub => builtins::sub(args),
            BuiltIn::Mul => builtins::mul(args),
            BuiltIn::Div => builtins::div(args),
            BuiltIn::Lt => builtins::lt(args),
            BuiltIn::Gt => builtins::gt(args),
            BuiltIn::Print => builtins::print(args, out),
        }
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name())
    }
}
