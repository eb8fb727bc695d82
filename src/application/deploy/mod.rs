//! Deploy Module
//!
//! Deploys a registry module, optionally to a target.
//!
//! ## Structure
//!
//! - `options` - What to deploy (`DeployOptions`)
//! - `plan` - Validated, ready-to-run command (`DeployPlan`)
//! - `use_case` - Validation and execution (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use mddbl::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(executor, config_path);
//! let plan = use_case.plan(&registry, &DeployOptions::new("blink").with_target("esp32"))?;
//! use_case.run(&plan)?;
//! ```

mod options;
mod plan;
mod use_case;

pub use options::DeployOptions;
pub use plan::DeployPlan;
pub use use_case::DeployUseCase;
