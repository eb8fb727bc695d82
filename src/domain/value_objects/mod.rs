//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod rotation;
mod root_command;

pub use config_warning::{ConfigWarning, ConfigWarningKind};
pub use root_command::RootCommand;
pub use rotation::Rotation;
