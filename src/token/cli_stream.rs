use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use super::tokenizer::{depth, strip_comments};


/// Reads logical units of source from the terminal.
///
/// Lines are comment-stripped and joined until their parens balance, so a
/// single unit may span several physical lines.
pub struct CliStream {
    editor: Editor<CliHelper>,
    prompt: String,

    curr_expr: String,
}

impl CliStream {
    pub fn new<S: Into<String>>(prompt: S) -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        CliStream {
            editor,
            prompt: prompt.into(),

            curr_expr: String::default(),
        }
    }

    /// Updates the symbols offered for tab completion.
    pub fn set_symbols(&self, symbols: Vec<String>) {
        if let Some(helper) = self.editor.helper() {
            helper.set_symbols(symbols);
        }
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let open = depth(&self.curr_expr);
            let line = if self.curr_expr.is_empty() {
                self.editor.readline(&self.prompt)
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(open.max(0) as usize)))
            };

            match line {
                Ok(line) => {
                    let line = strip_comments(&line);
                    if self.curr_expr.is_empty() {
                        match line.trim() {
                            "" => continue,
                            "exit" => {
                                println!("Exiting REPL...");
                                return None;
                            }
                            _ => {}
                        }
                    } else {
                        self.curr_expr.push(' ');
                    }
                    self.curr_expr += &line;

                    if depth(&self.curr_expr) > 0 {
                        continue;
                    }
                    let unit = std::mem::take(&mut self.curr_expr);
                    self.editor.add_history_entry(unit.as_str());
                    debug!("Submitting: {}", unit);
                    return Some(unit);
                }
                Err(ReadlineError::Interrupted) => {
                    // Abandon any partial expression but keep the session.
                    println!("^C");
                    println!("Interrupted! Type 'exit' to quit the REPL.");
                    self.curr_expr.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    println!("Exiting REPL...");
                    self.curr_expr.clear();
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.curr_expr.clear();
                    continue;
                }
            }
        }
    }
}
