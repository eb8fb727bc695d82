//! Registry Use Case
//!
//! Application-layer orchestration for editing `mddbl.json`. Every mutation
//! persists immediately through the repository, which also re-sorts.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{Module, Registry, Target};
use crate::domain::ports::{LoadedRegistry, RegistryRepository};
use crate::error::{MddblError, MddblResult};

pub struct RegistryUseCase {
    repository: Arc<dyn RegistryRepository>,
}

impl RegistryUseCase {
    pub fn new(repository: Arc<dyn RegistryRepository>) -> Self {
        Self { repository }
    }

    pub fn config_path(&self) -> &Path {
        self.repository.path()
    }

    /// Write an empty registry. Refuses to replace an existing file unless
    /// `force` is set.
    pub fn init(&self, force: bool) -> MddblResult<Registry> {
        if self.repository.exists() && !force {
            return Err(MddblError::ConfigExists {
                path: self.config_path().to_path_buf(),
            });
        }
        let mut registry = Registry::new();
        self.repository.save(&mut registry)?;
        tracing::info!(path = %self.config_path().display(), "configuration initialised");
        Ok(registry)
    }

    pub fn load(&self) -> MddblResult<LoadedRegistry> {
        Ok(self.repository.load()?)
    }

    pub fn add_module(&self, registry: &mut Registry, name: &str) -> MddblResult<()> {
        registry
            .add_module(Module::named(name))
            .map_err(|dup| MddblError::ModuleExists {
                name: dup.0,
                config: self.config_path().to_path_buf(),
            })?;
        self.save(registry)
    }

    pub fn add_target(&self, registry: &mut Registry, name: &str) -> MddblResult<()> {
        registry
            .add_target(Target::named(name))
            .map_err(|dup| MddblError::TargetExists {
                name: dup.0,
                config: self.config_path().to_path_buf(),
            })?;
        self.save(registry)
    }

    pub fn remove_module(&self, registry: &mut Registry, name: &str) -> MddblResult<Module> {
        let removed =
            registry
                .remove_module(name)
                .ok_or_else(|| MddblError::ModuleNotDefined {
                    name: name.to_string(),
                    config: self.config_path().to_path_buf(),
                })?;
        self.save(registry)?;
        Ok(removed)
    }

    pub fn remove_target(&self, registry: &mut Registry, name: &str) -> MddblResult<Target> {
        let removed =
            registry
                .remove_target(name)
                .ok_or_else(|| MddblError::TargetNotDefined {
                    name: name.to_string(),
                    config: self.config_path().to_path_buf(),
                })?;
        self.save(registry)?;
        Ok(removed)
    }

    /// Persist as-is; saving sorts both collections.
    pub fn sort(&self, registry: &mut Registry) -> MddblResult<()> {
        self.save(registry)
    }

    /// Flip the debug flag, persist, and return the new value.
    pub fn toggle_debug(&self, registry: &mut Registry) -> MddblResult<bool> {
        let debug = registry.toggle_debug();
        self.save(registry)?;
        Ok(debug)
    }

    fn save(&self, registry: &mut Registry) -> MddblResult<()> {
        self.repository.save(registry)?;
        tracing::debug!(path = %self.config_path().display(), "configuration saved");
        Ok(())
    }
}
