//! Interactive minilisp REPL.
//!
//! Run interactively as:   `RUST_LOG=info cargo run --example repl`.
//! Run a source file as:   `cargo run --example repl -- demos/sample.lisp`.

use clap::{Arg, Command};
use colored::*;
use log::{info, LevelFilter};
use std::fs;

use minilisp::sexp::Sexp;
use minilisp::token::cli_stream::CliStream;
use minilisp::{eval, eval_str, parse_all, strip_comments, tokenize};
use minilisp::{make_global_environment, Environment, LangErr, Value};


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("minilisp REPL")
        .version("0.1")
        .about("Single-session minilisp interpreter")
        .arg(Arg::new("file").help("Source file to run instead of reading input"))
        .arg(
            Arg::new("prompt")
                .short('p')
                .long("prompt")
                .takes_value(true)
                .default_value("> ")
                .help("Prompt shown before each expression"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output"),
        )
        .get_matches();

    if matches.is_present("no-color") {
        colored::control::set_override(false);
    }

    let mut env = make_global_environment();
    match matches.value_of("file") {
        Some(path) => file_repl(path, &mut env),
        None => {
            let prompt = matches.value_of("prompt").unwrap_or("> ");
            interactive_repl(prompt, &mut env);
            Ok(())
        }
    }
}

fn interactive_repl(prompt: &str, env: &mut Environment) {
    info!("Starting interactive session");
    let mut stream = CliStream::new(prompt);
    stream.set_symbols(env.symbols());

    while let Some(unit) = stream.next() {
        match eval_str(&unit, env) {
            Ok(Some(val)) => print_result(&val),
            Ok(None) => {}
            Err(err) => print_error(&err),
        }
        stream.set_symbols(env.symbols());
    }
}

fn file_repl(path: &str, env: &mut Environment) -> Result<(), String> {
    info!("Running {}", path);
    let source = fs::read_to_string(path).map_err(|err| format!("{}: {}", path, err))?;
    let sexps = match parse_all(&mut tokenize(strip_comments(source))) {
        Ok(parsed) => parsed,
        Err(err) => return Err(err.to_string()),
    };

    for sexp in &sexps {
        println!("{} {}", ">".bold(), paren_colored(sexp, 0));
        match eval(sexp, env) {
            Ok(val) => print_result(&val),
            Err(err) => print_error(&err),
        }
        println!();
    }

    Ok(())
}


fn print_result(val: &Value) {
    if !val.is_nil() {
        println!("-> {:#}", val);
    }
}

fn print_error(err: &LangErr) {
    println!(" {}", err.to_string().red());
}

fn paren_colored(sexp: &Sexp, depth: usize) -> String {
    fn paren_color(depth: usize) -> (u8, u8, u8) {
        match depth % 6 {
            0 => (0, 255, 204),
            1 => (204, 51, 0),
            2 => (153, 255, 102),
            3 => (153, 102, 255),
            4 => (255, 255, 102),
            _ => (255, 179, 179),
        }
    }

    match sexp {
        Sexp::Atom(atom) => atom.to_string(),
        Sexp::List(list) => {
            let (r, g, b) = paren_color(depth);
            let inner = list
                .iter()
                .map(|elem| paren_colored(elem, depth + 1))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{}{}", "(".truecolor(r, g, b), inner, ")".truecolor(r, g, b))
        }
    }
}
