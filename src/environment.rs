//! Module for representing environments.

use log::trace;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::io::Write;

use crate::value::Value;


/// Flat mapping from symbols to values, shared by every evaluation in a
/// session. There is no scoping: a binding lives until it is overwritten.
pub struct Environment {
    map: HashMap<String, Value>,
    out: Box<dyn Write>,
}

impl Environment {
    /// Empty environment; see builtins::make_global_environment for a seeded one.
    pub fn new(out: Box<dyn Write>) -> Environment {
        Environment {
            map: HashMap::new(),
            out,
        }
    }

    pub fn lookup<K>(&self, k: &K) -> Option<&Value>
    where
        String: Borrow<K>,
        K: Hash + Eq + fmt::Display + ?Sized,
    {
        trace!("Env lookup: {}", k);
        self.map.get(k)
    }

    pub fn insert<S: Into<String>>(&mut self, k: S, v: Value) -> Option<Value> {
        let k = k.into();
        trace!("Env insert: {} = {:#}", k, v);
        self.map.insert(k, v)
    }

    /// Bound symbols in sorted order.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols = self.map.keys().cloned().collect::<Vec<_>>();
        symbols.sort();
        symbols
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("symbols", &self.symbols())
            .finish()
    }
}
