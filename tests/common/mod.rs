//! Test helpers for E2E tests.
//!
//! Provides TestSession, which drives a dispatcher the way the REPL does
//! and captures both output channels.

#![allow(dead_code)]

use vfs_registry::config::{DisplayConfig, RegistryConfig};
use vfs_registry::{Dispatcher, Outcome, Registry};

/// Captured output of one command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Text written to the output channel.
    pub out: String,
    /// Text written to the error channel.
    pub err: String,
}

impl Captured {
    /// Non-empty output lines.
    pub fn out_lines(&self) -> Vec<&str> {
        self.out.lines().filter(|l| !l.is_empty()).collect()
    }
}

/// A dispatcher plus rendered output, one command at a time.
pub struct TestSession {
    dispatcher: Dispatcher,
}

impl TestSession {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a session with a custom registry configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(Registry::new(config), DisplayConfig::default()),
        }
    }

    /// Run one line and capture what the REPL would print.
    pub fn run(&mut self, line: &str) -> Captured {
        let outcome = self.dispatcher.execute(line);
        let mut out = Vec::new();
        let mut err = Vec::new();
        outcome.render(&mut out, &mut err).unwrap();
        Captured {
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    /// Run one line and return the raw outcome.
    pub fn outcome(&mut self, line: &str) -> Outcome {
        self.dispatcher.execute(line)
    }

    /// Run several setup lines, asserting none of them fails.
    pub fn setup(&mut self, lines: &[&str]) {
        for line in lines {
            let captured = self.run(line);
            assert!(captured.err.is_empty(), "setup `{line}` failed: {}", captured.err);
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        self.dispatcher.registry()
    }

    /// Clear every user.
    pub fn reset(&mut self) {
        self.dispatcher.registry_mut().reset();
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
