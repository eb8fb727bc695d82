//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic file writes
//! - `process/` - Shell runner and process working directory
//! - `repositories/` - JSON registry repository

pub mod fs;
pub mod process;
pub mod repositories;

// Re-export for convenience
pub use process::{ChildOutput, ProcessWorkingDirectory, ShellCommandRunner};
pub use repositories::JsonRegistryRepository;
