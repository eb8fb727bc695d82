//! Deploy Use Case
//!
//! Orchestrates the deploy flow:
//! 1. Resolve the module and check it has a folder
//! 2. Resolve the target (if any) and check platform and rotation
//! 3. Pick the root command and synthesize the command line
//! 4. Run it from the module folder
//!
//! Steps 1-3 form the plan; nothing is spawned until the plan is complete.

use std::path::PathBuf;

use crate::application::executor::DirectoryScopedExecutor;
use crate::domain::entities::{Registry, Target};
use crate::domain::ports::{CommandRunner, WorkingDirectory};
use crate::domain::services::{synthesize, EntityResolver};
use crate::domain::value_objects::RootCommand;
use crate::error::{MddblError, MddblResult};

use super::options::DeployOptions;
use super::plan::DeployPlan;

pub struct DeployUseCase<W, R> {
    executor: DirectoryScopedExecutor<W, R>,
    config_path: PathBuf,
}

impl<W: WorkingDirectory, R: CommandRunner> DeployUseCase<W, R> {
    pub fn new(executor: DirectoryScopedExecutor<W, R>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            config_path: config_path.into(),
        }
    }

    pub fn executor(&self) -> &DirectoryScopedExecutor<W, R> {
        &self.executor
    }

    /// Validate the request against the registry and build the command line.
    pub fn plan(&self, registry: &Registry, options: &DeployOptions) -> MddblResult<DeployPlan> {
        let resolver = EntityResolver::new(registry, &self.config_path);

        let module = resolver.find_module(&options.module)?;
        if !module.has_folder() {
            return Err(MddblError::ModulePathMissing {
                name: module.name.clone(),
                config: self.config_path.clone(),
            });
        }

        let target = match options.target.as_deref() {
            Some(name) => Some(self.check_target(resolver.find_target(name)?)?),
            None => None,
        };

        let root = RootCommand::for_module(module);
        let command = synthesize(root.as_str(), module, target);
        tracing::debug!(module = %module.name, %command, "deploy planned");

        Ok(DeployPlan {
            module: module.name.clone(),
            target: target.map(|t| t.name.clone()),
            root,
            command,
            folder: PathBuf::from(&module.folder_path),
        })
    }

    /// Run a plan from its module folder.
    pub fn run(&self, plan: &DeployPlan) -> MddblResult<()> {
        self.executor.execute(&plan.command, Some(&plan.folder))
    }

    /// Resolve and run in one step.
    #[cfg(test)]
    pub(crate) fn execute(&self, registry: &Registry, options: &DeployOptions) -> MddblResult<DeployPlan> {
        let plan = self.plan(registry, options)?;
        self.run(&plan)?;
        Ok(plan)
    }

    fn check_target<'t>(&self, target: &'t Target) -> MddblResult<&'t Target> {
        if !target.has_platform() {
            return Err(MddblError::TargetPlatformMissing {
                name: target.name.clone(),
                config: self.config_path.clone(),
            });
        }
        target
            .rotation()
            .map_err(|value| MddblError::InvalidRotation {
                name: target.name.clone(),
                value,
            })?;
        Ok(target)
    }
}
