//! Root command value object - which SDK tool a deploy invokes.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::Module;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RootCommand {
    /// `mcconfig`: configure, build and run (host modules)
    #[serde(rename = "mcconfig")]
    Configure,
    /// `mcrun`: build and run a mod on an existing host
    #[serde(rename = "mcrun")]
    Run,
}

impl RootCommand {
    pub fn for_module(module: &Module) -> Self {
        if module.is_host {
            RootCommand::Configure
        } else {
            RootCommand::Run
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RootCommand::Configure => "mcconfig",
            RootCommand::Run => "mcrun",
        }
    }
}

impl fmt::Display for RootCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
