//! Scripted [`CommandRunner`] for unit tests.

use crate::effects::{CommandRunner, Invocation, Outcome};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Succeed,
    Fail(i32),
    Missing,
}

/// Answers each invocation with the first rule whose key equals the program
/// or one of its arguments. Unmatched programs are reported as missing.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(String, Behavior)>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(self, key: &str) -> Self {
        self.rule(key, Behavior::Succeed)
    }

    pub fn fail(self, key: &str, code: i32) -> Self {
        self.rule(key, Behavior::Fail(code))
    }

    pub fn missing(self, key: &str) -> Self {
        self.rule(key, Behavior::Missing)
    }

    fn rule(mut self, key: &str, behavior: Behavior) -> Self {
        self.rules.push((key.to_string(), behavior));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.program.to_string_lossy().into_owned())
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> duo_platform::Result<Outcome> {
        self.calls.borrow_mut().push(invocation.clone());
        let behavior = self
            .rules
            .iter()
            .find(|(key, _)| {
                invocation.program == key.as_str() || invocation.args.iter().any(|a| a == key.as_str())
            })
            .map(|(_, b)| *b)
            .unwrap_or(Behavior::Missing);
        match behavior {
            Behavior::Succeed => Ok(Outcome::Success),
            Behavior::Fail(code) => Ok(Outcome::Failed(Some(code))),
            Behavior::Missing => Err(duo_platform::Error::CommandNotFound {
                cmd: invocation.program.to_string_lossy().into_owned(),
            }),
        }
    }
}
