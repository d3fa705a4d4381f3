use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use minilisp::{make_global_environment_with_output, run_str, Environment, LangErr, Value};


/// In-memory sink for capturing print output.
#[derive(Clone, Default)]
pub struct Output(Rc<RefCell<Vec<u8>>>);

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Output {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.borrow())
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}

pub fn setup() -> (Environment, Output) {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    let output = Output::default();
    let env = make_global_environment_with_output(Box::new(output.clone()));
    (env, output)
}

pub fn results<S: AsRef<str>>(env: &mut Environment, s: S) -> Vec<Value> {
    run_str(s, env).unwrap()
}

pub fn result_err<S: AsRef<str>>(env: &mut Environment, s: S) -> LangErr {
    run_str(s, env).unwrap_err()
}
