use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::cell::RefCell;


// Rustyline Helper for CliStream.
#[derive(Default)]
pub struct CliHelper {
    symbols: RefCell<Vec<String>>,
}

pub struct CliCandidate {
    symbol: String,
}

impl CliHelper {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the completion candidates; `symbols` should be sorted.
    pub fn set_symbols(&self, symbols: Vec<String>) {
        *self.symbols.borrow_mut() = symbols;
    }

    fn prefixed(&self, prefix: &str) -> Vec<String> {
        self.symbols
            .borrow()
            .iter()
            .filter(|s| s.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if c.is_whitespace() || c == '(' || c == ')' || c == '"' {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let symbols = self.prefixed(&line[start..end]);
        Ok((
            start,
            symbols
                .into_iter()
                .map(|symbol| CliCandidate { symbol })
                .collect(),
        ))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.symbol.as_str()
    }

    fn replacement(&self) -> &str {
        self.symbol.as_str()
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.symbol.as_str()
    }

    fn completion(&self) -> Option<&str> {
        Some(self.symbol.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_bounds() {
        let helper = CliHelper::new();
        assert_eq!(helper.word_bounds("(pr", 3), (1, 3));
        assert_eq!(helper.word_bounds("(+ 1 pri 2)", 6), (5, 8));
        assert_eq!(helper.word_bounds("", 0), (0, 0));
    }

    #[test]
    fn candidates() {
        let helper = CliHelper::new();
        helper.set_symbols(vec!["plus".into(), "print".into(), "x".into()]);
        assert_eq!(helper.prefixed("pr"), vec!["print".to_string()]);
        assert_eq!(helper.prefixed("p").len(), 2);
        assert_eq!(helper.prefixed("").len(), 3);
    }
}
