//! CommandRunner port
//!
//! Runs a command line to completion with the caller's standard streams.

use std::io;
use std::path::Path;

/// How a finished child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `command` through the platform shell from `cwd` and wait for it.
    ///
    /// Errors are reserved for failing to launch or wait on the process; a
    /// non-zero exit is reported through `ExitOutcome`.
    fn run(&self, command: &str, cwd: &Path) -> io::Result<ExitOutcome>;
}
