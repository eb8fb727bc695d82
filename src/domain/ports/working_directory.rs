//! WorkingDirectory port
//!
//! The process-wide current directory, behind a trait so the executor's
//! save/restore discipline can be tested without moving the real cursor.

use std::io;
use std::path::{Path, PathBuf};

pub trait WorkingDirectory {
    fn current(&self) -> io::Result<PathBuf>;

    fn change_to(&self, path: &Path) -> io::Result<()>;
}
