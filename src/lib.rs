//! mddbl - deploy helper for the Moddable SDK command-line tools
//!
//! mddbl keeps a small JSON registry (`mddbl.json`) of modules (source
//! projects) and targets (device profiles), turns a (module, target) pair into
//! an `mcconfig`/`mcrun` command line and runs it from the module's folder.
//! Targets can also carry a wipe command that erases the device.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{Module, Registry, Target};
pub use domain::services::synthesize;
pub use domain::value_objects::{RootCommand, Rotation};
pub use error::{MddblError, MddblResult};
