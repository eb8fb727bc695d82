//! Deploy Options

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Module name as written in the registry
    pub module: String,
    /// Target name; `None` deploys without platform flags
    pub target: Option<String>,
}

impl DeployOptions {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_optional_target(mut self, target: Option<String>) -> Self {
        self.target = target;
        self
    }
}
