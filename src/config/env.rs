//! Environment variable sources.

use crate::outcome::{NoValue, Outcome};
use std::collections::HashMap;

/// Something that can look up environment variables.
pub trait EnvSource {
    fn var(&self, name: &str) -> Outcome<NoValue, String>;
}

/// Reads the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Outcome<NoValue, String> {
        Outcome::from_value(std::env::var(name).ok())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Outcome<NoValue, String> {
        Outcome::from_value(self.get(name).cloned())
    }
}

/// Look up `name` in the process environment.
pub fn system_var(name: &str) -> Outcome<NoValue, String> {
    ProcessEnv.var(name)
}
