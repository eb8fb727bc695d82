//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Resolve, validate, synthesize and run a deploy
//! - `WipeUseCase` - Run a target's erase command
//! - `RegistryUseCase` - Init and edit `mddbl.json`
//!
//! ## Services
//!
//! - `DirectoryScopedExecutor` - Run a command from a folder and always return

pub mod deploy;
pub mod executor;
pub mod registry;
pub mod wipe;

#[cfg(test)]
pub(crate) mod test_support;

pub use deploy::{DeployOptions, DeployPlan, DeployUseCase};
pub use executor::{DirectoryGuard, DirectoryScopedExecutor};
pub use registry::RegistryUseCase;
pub use wipe::WipeUseCase;
