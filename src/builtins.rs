//! Implementations of the builtin procedures and the global environment.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::builtin::{Args, BuiltIn};
use crate::environment::Environment;
use crate::lang_err::ExpectedCount;
use crate::number::Number;
use crate::value::Value;
use crate::{err, Ret};


/// Symbol rebound to the iteration counter by loop and repeat.
pub const COUNTER: &str = "_";

/// Fresh session environment writing print output to stdout.
pub fn make_global_environment() -> Environment {
    make_global_environment_with_output(Box::new(io::stdout()))
}

pub fn make_global_environment_with_output(out: Box<dyn Write>) -> Environment {
    let mut env = Environment::new(out);
    for builtin in BuiltIn::ALL.iter() {
        env.insert(builtin.name(), Value::BuiltIn(*builtin));
    }
    env.insert(COUNTER, 0.into());
    env
}


fn number(arg: Value) -> Result<Number, crate::lang_err::LangErr> {
    match arg {
        Value::Number(num) => Ok(num),
        _ => err!(InvalidArgument {
            given: arg,
            expected: Cow::Borrowed("a Number"),
        }),
    }
}

fn fold<F>(args: Args, op: F) -> Ret
where
    F: Fn(Number, Number) -> Result<Number, Cow<'static, str>>,
{
    let mut iter = args.into_iter();
    let mut curr = match iter.next() {
        Some(first) => number(first)?,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            })
        }
    };
    for arg in iter {
        curr = match op(curr, number(arg)?) {
            Ok(num) => num,
            Err(msg) => return err!(Arithmetic(msg)),
        };
    }

    Ok(curr.into())
}

pub fn add(args: Args) -> Ret {
    let all_strings = !args.is_empty() && args.iter().all(|a| matches!(a, Value::Str(_)));
    if all_strings {
        let mut curr = String::new();
        for arg in args {
            if let Value::Str(s) = arg {
                curr.push_str(&s);
            }
        }
        return Ok(curr.into());
    }

    fold(args, Number::add)
}

pub fn sub(args: Args) -> Ret {
    fold(args, Number::sub)
}

pub fn mul(args: Args) -> Ret {
    fold(args, Number::mul)
}

pub fn div(args: Args) -> Ret {
    fold(args, Number::div)
}


fn compare(args: Args, less: bool) -> Ret {
    let given = args.len();
    let mut iter = args.into_iter();
    let (a, b) = match (iter.next(), iter.next(), iter.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => {
            return err!(WrongArgumentCount {
                given,
                expected: ExpectedCount::Exactly(2),
            })
        }
    };
    let result = match (&a, &b) {
        (Value::Number(x), Value::Number(y)) => Some(if less { x < y } else { x > y }),
        (Value::Str(x), Value::Str(y)) => Some(if less { x < y } else { x > y }),
        _ => None,
    };

    match result {
        Some(result) => Ok(result.into()),
        None => {
            // Blame the second argument if the first one was comparable.
            let given = if matches!(a, Value::Number(_) | Value::Str(_)) {
                b
            } else {
                a
            };
            err!(InvalidArgument {
                given,
                expected: Cow::Borrowed("two Numbers or two Strings"),
            })
        }
    }
}

pub fn lt(args: Args) -> Ret {
    compare(args, true)
}

pub fn gt(args: Args) -> Ret {
    compare(args, false)
}


pub fn print(args: Args, out: &mut dyn Write) -> Ret {
    let line = args
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let trimmed = chomp(&line);

    if let Err(e) = writeln!(out, "{}", trimmed).and_then(|_| out.flush()) {
        return err!(Io(e.to_string()));
    }

    Ok(trimmed.into())
}

/// Drops one trailing line ending: "\r\n", "\n" or a lone "\r".
fn chomp(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(s) => s.strip_suffix('\r').unwrap_or(s),
        None => line.strip_suffix('\r').unwrap_or(line),
    }
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
