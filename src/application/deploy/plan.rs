//! Deploy Plan
//!
//! Everything needed to run a deploy, computed before anything is spawned.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::RootCommand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployPlan {
    pub module: String,
    pub target: Option<String>,
    pub root: RootCommand,
    /// Full command line, including the trailing space
    pub command: String,
    /// Module folder, as written in the registry
    pub folder: PathBuf,
}

impl DeployPlan {
    /// "blink to esp32", or just "blink" without a target.
    pub fn describe(&self) -> String {
        match &self.target {
            Some(target) => format!("{} to {}", self.module, target),
            None => self.module.clone(),
        }
    }
}
