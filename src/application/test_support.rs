//! Test doubles for the process ports.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::{CommandRunner, ExitOutcome, WorkingDirectory};

/// In-memory working directory that records every change.
pub struct FakeWorkingDirectory {
    current: RefCell<PathBuf>,
    history: RefCell<Vec<PathBuf>>,
}

impl FakeWorkingDirectory {
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            current: RefCell::new(path.as_ref().to_path_buf()),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<PathBuf> {
        self.history.borrow().clone()
    }
}

impl WorkingDirectory for FakeWorkingDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.current.borrow().clone())
    }

    fn change_to(&self, path: &Path) -> io::Result<()> {
        *self.current.borrow_mut() = path.to_path_buf();
        self.history.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Runner that records commands instead of spawning them.
pub struct RecordingRunner {
    code: Option<i32>,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl RecordingRunner {
    pub fn exiting(code: i32) -> Self {
        Self {
            code: Some(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_to_spawn() -> Self {
        Self {
            code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, cwd: &Path) -> io::Result<ExitOutcome> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), cwd.to_path_buf()));
        match self.code {
            Some(code) => Ok(ExitOutcome::from_code(code)),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "sh: not found")),
        }
    }
}
