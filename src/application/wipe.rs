//! Wipe Use Case
//!
//! Runs a target's erase command from the current directory.

use std::path::PathBuf;

use crate::application::executor::DirectoryScopedExecutor;
use crate::domain::entities::Registry;
use crate::domain::ports::{CommandRunner, WorkingDirectory};
use crate::domain::services::EntityResolver;
use crate::error::{MddblError, MddblResult};

pub struct WipeUseCase<W, R> {
    executor: DirectoryScopedExecutor<W, R>,
    config_path: PathBuf,
}

impl<W: WorkingDirectory, R: CommandRunner> WipeUseCase<W, R> {
    pub fn new(executor: DirectoryScopedExecutor<W, R>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            config_path: config_path.into(),
        }
    }

    pub fn executor(&self) -> &DirectoryScopedExecutor<W, R> {
        &self.executor
    }

    /// Resolve the target's wipe command without running it.
    pub fn command(&self, registry: &Registry, target: &str) -> MddblResult<String> {
        let resolver = EntityResolver::new(registry, &self.config_path);
        let target = resolver.find_target(target)?;
        if !target.has_wipe_command() {
            return Err(MddblError::WipeCommandMissing {
                name: target.name.clone(),
                config: self.config_path.clone(),
            });
        }
        Ok(target.wipe_command.clone())
    }

    /// Run a wipe command from the current directory.
    pub fn run(&self, command: &str) -> MddblResult<()> {
        self.executor.execute(command, None)
    }

    /// Resolve and run in one step.
    #[cfg(test)]
    pub(crate) fn execute(&self, registry: &Registry, target: &str) -> MddblResult<String> {
        let command = self.command(registry, target)?;
        self.run(&command)?;
        Ok(command)
    }
}
