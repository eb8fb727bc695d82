//! Domain Entities
//!
//! - `Module` - A deployable source project
//! - `Target` - A device or simulator profile
//! - `Registry` - The persisted collection of modules and targets

mod module;
mod registry;
mod target;

pub use module::Module;
pub use registry::{DuplicateName, Registry};
pub use target::Target;
