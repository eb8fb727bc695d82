//! Process Implementations
//!
//! Concrete implementations of the process-related ports.

mod shell;
mod working_dir;

pub use shell::{ChildOutput, ShellCommandRunner};
pub use working_dir::ProcessWorkingDirectory;
