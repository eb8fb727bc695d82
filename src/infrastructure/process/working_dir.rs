//! Process working directory
//!
//! `WorkingDirectory` backed by the real process-wide current directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::WorkingDirectory;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl ProcessWorkingDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn change_to(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}
