//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod registry_repository;
pub mod working_directory;

pub use command_runner::{CommandRunner, ExitOutcome};
pub use registry_repository::{LoadedRegistry, RegistryError, RegistryRepository};
pub use working_directory::WorkingDirectory;
