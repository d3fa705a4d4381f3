//! Tree-walking evaluation of Sexps against an Environment.

use log::debug;
use std::borrow::Cow;

use crate::builtins::COUNTER;
use crate::environment::Environment;
use crate::lang_err::ExpectedCount;
use crate::number::Number;
use crate::sexp::{Atom, Sexp};
use crate::value::Value;
use crate::{err, Ret};


pub fn eval(form: &Sexp, env: &mut Environment) -> Ret {
    match form {
        Sexp::Atom(atom) => eval_atom(atom, env),
        Sexp::List(list) => {
            debug!("Evaluating: {}", form);
            eval_list(form, list, env).map_err(|e| e.push_frame(form))
        }
    }
}

fn eval_atom(atom: &Atom, env: &Environment) -> Ret {
    match atom {
        Atom::Symbol(symbol) => match env.lookup(symbol.as_str()) {
            Some(value) => Ok(value.clone()),
            None => err!(UnboundSymbol(symbol.clone())),
        },
        Atom::Number(num) => Ok(Value::Number(*num)),
        Atom::Str(s) => Ok(Value::Str(s.clone())),
    }
}

fn eval_list(form: &Sexp, list: &[Sexp], env: &mut Environment) -> Ret {
    let (first, rest) = match list.split_first() {
        Some(split) => split,
        None => return err!(InvalidSexp(form.clone())),
    };

    if let Some(keyword) = first.as_symbol() {
        match keyword {
            "if" => return eval_if(rest, env),
            "loop" => return eval_loop(form, rest, env),
            "repeat" => return eval_repeat(form, rest, env),
            "let" => return eval_let(form, rest, env),
            _ => { /* Fallthrough */ }
        }
    }

    let func = eval(first, env)?;
    let args = evlis(rest, env)?;
    match func {
        Value::BuiltIn(builtin) => builtin.call(args, env.out()),
        _ => err!(NotCallable(func)),
    }
}

fn evlis(args: &[Sexp], env: &mut Environment) -> Result<Vec<Value>, crate::LangErr> {
    let mut res = Vec::<Value>::with_capacity(args.len());
    for arg in args {
        res.push(eval(arg, env)?);
    }
    Ok(res)
}

// Evaluates each body form in order, returning the last value.
fn eval_body(body: &[Sexp], env: &mut Environment) -> Result<Option<Value>, crate::LangErr> {
    let mut last = None;
    for sexp in body {
        last = Some(eval(sexp, env)?);
    }
    Ok(last)
}


fn eval_if(args: &[Sexp], env: &mut Environment) -> Ret {
    if args.len() < 2 || args.len() > 3 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Between(2, 3),
        });
    }

    let test = eval(&args[0], env)?;
    debug!("if test: {:#}", test);
    if test.is_truthy() {
        eval(&args[1], env)
    } else if let Some(alt) = args.get(2) {
        eval(alt, env)
    } else {
        Ok(Value::Nil)
    }
}

fn eval_loop(form: &Sexp, args: &[Sexp], env: &mut Environment) -> Ret {
    let (test, body) = match args.split_first() {
        Some(split) => split,
        None => return err!(InvalidSexp(form.clone())),
    };

    let mut result = Value::Nil;
    let mut counter: i64 = 0;
    loop {
        env.insert(COUNTER, counter.into());
        if !eval(test, env)?.is_truthy() {
            break;
        }
        if let Some(last) = eval_body(body, env)? {
            result = last;
        }
        counter += 1;
    }
    debug!("loop finished after {} iterations", counter);
    Ok(result)
}

fn eval_repeat(form: &Sexp, args: &[Sexp], env: &mut Environment) -> Ret {
    let (count, body) = match args.split_first() {
        Some(split) => split,
        None => return err!(InvalidSexp(form.clone())),
    };

    let count = match eval(count, env)? {
        Value::Number(Number::Integer(i)) => i,
        given => {
            return err!(InvalidArgument {
                given,
                expected: Cow::Borrowed("an Integer repeat count"),
            })
        }
    };

    let mut result = Value::Nil;
    for i in 1..=count {
        env.insert(COUNTER, i.into());
        if let Some(last) = eval_body(body, env)? {
            result = last;
        }
    }
    Ok(result)
}

// Bindings go straight into the shared environment and outlive the form.
fn eval_let(form: &Sexp, args: &[Sexp], env: &mut Environment) -> Ret {
    let (bindings, body) = match args.split_first() {
        Some((Sexp::List(bindings), body)) => (bindings, body),
        _ => return err!(InvalidSexp(form.clone())),
    };
    if bindings.len() % 2 != 0 {
        return err!(InvalidSexp(Sexp::List(bindings.clone())));
    }

    for pair in bindings.chunks(2) {
        let name = match pair[0].as_symbol() {
            Some(name) => name,
            None => return err!(InvalidSexp(pair[0].clone())),
        };
        let value = eval(&pair[1], env)?;
        env.insert(name, value);
    }

    Ok(eval_body(body, env)?.unwrap_or(Value::Nil))
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
