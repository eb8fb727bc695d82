//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use mddbl::presentation::factory;
//!
//! let registry = factory::create_registry_use_case(&cwd);
//! let use_case = factory::create_deploy_use_case(registry.config_path());
//! let plan = use_case.execute(&loaded.registry, &options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ConfigAction, EntityAction, ListKind};
pub use factory::{create_deploy_use_case, create_registry_use_case, create_wipe_use_case};
