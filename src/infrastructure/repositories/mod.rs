//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod registry;

pub use registry::{JsonRegistryRepository, CONFIG_FILE_NAME, CONFIG_PATH_VAR};
