//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{DeployUseCase, DirectoryScopedExecutor, RegistryUseCase, WipeUseCase};
use crate::infrastructure::{
    ChildOutput, JsonRegistryRepository, ProcessWorkingDirectory, ShellCommandRunner,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<ProcessWorkingDirectory, ShellCommandRunner>;

/// Type alias for the concrete WipeUseCase with all dependencies
pub type ConcreteWipeUseCase = WipeUseCase<ProcessWorkingDirectory, ShellCommandRunner>;

/// Registry use case for the configuration file belonging to `cwd`.
pub fn create_registry_use_case(cwd: &Path) -> RegistryUseCase {
    RegistryUseCase::new(Arc::new(JsonRegistryRepository::new(cwd)))
}

fn create_executor(
    output: ChildOutput,
) -> DirectoryScopedExecutor<ProcessWorkingDirectory, ShellCommandRunner> {
    DirectoryScopedExecutor::new(
        ProcessWorkingDirectory::new(),
        ShellCommandRunner::new().with_output(output),
    )
}

/// `config_path` is only used in error messages.
pub fn create_deploy_use_case(config_path: &Path, output: ChildOutput) -> ConcreteDeployUseCase {
    DeployUseCase::new(create_executor(output), config_path)
}

pub fn create_wipe_use_case(config_path: &Path, output: ChildOutput) -> ConcreteWipeUseCase {
    WipeUseCase::new(create_executor(output), config_path)
}
