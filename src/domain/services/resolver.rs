//! Entity resolution
//!
//! Name-keyed lookup of modules and targets. The index is built once per
//! registry; with duplicate names the entry that appears first wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Module, Registry, Target};
use crate::error::{MddblError, MddblResult};

pub struct EntityResolver<'a> {
    modules: HashMap<&'a str, &'a Module>,
    targets: HashMap<&'a str, &'a Target>,
    config_path: PathBuf,
}

impl<'a> EntityResolver<'a> {
    /// `config_path` is only used to point the user at the file in errors.
    pub fn new(registry: &'a Registry, config_path: impl Into<PathBuf>) -> Self {
        let mut modules = HashMap::with_capacity(registry.modules.len());
        for m in &registry.modules {
            modules.entry(m.name.as_str()).or_insert(m);
        }

        let mut targets = HashMap::with_capacity(registry.targets.len());
        for t in &registry.targets {
            targets.entry(t.name.as_str()).or_insert(t);
        }

        Self {
            modules,
            targets,
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn find_module(&self, name: &str) -> MddblResult<&'a Module> {
        self.modules
            .get(name)
            .copied()
            .ok_or_else(|| MddblError::ModuleNotDefined {
                name: name.to_string(),
                config: self.config_path.clone(),
            })
    }

    pub fn find_target(&self, name: &str) -> MddblResult<&'a Target> {
        self.targets
            .get(name)
            .copied()
            .ok_or_else(|| MddblError::TargetNotDefined {
                name: name.to_string(),
                config: self.config_path.clone(),
            })
    }
}
