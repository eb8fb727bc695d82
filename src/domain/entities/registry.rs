//! Registry entity
//!
//! The aggregate root persisted in `mddbl.json`: the global debug flag, the
//! preferred editor command and the module/target collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Module, Target};

/// A name that is already taken in its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName(pub String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registry {
    pub debug: bool,
    /// Editor used by `config edit`; empty falls back to $VISUAL/$EDITOR
    pub edit_command: String,
    pub modules: Vec<Module>,
    pub targets: Vec<Target>,
    /// Top-level keys this version does not know; written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, module: Module) -> Result<(), DuplicateName> {
        if self.modules.iter().any(|m| m.name == module.name) {
            return Err(DuplicateName(module.name));
        }
        self.modules.push(module);
        Ok(())
    }

    pub fn add_target(&mut self, target: Target) -> Result<(), DuplicateName> {
        if self.targets.iter().any(|t| t.name == target.name) {
            return Err(DuplicateName(target.name));
        }
        self.targets.push(target);
        Ok(())
    }

    /// Removes the first module named `name`.
    pub fn remove_module(&mut self, name: &str) -> Option<Module> {
        let idx = self.modules.iter().position(|m| m.name == name)?;
        Some(self.modules.remove(idx))
    }

    /// Removes the first target named `name`.
    pub fn remove_target(&mut self, name: &str) -> Option<Target> {
        let idx = self.targets.iter().position(|t| t.name == name)?;
        Some(self.targets.remove(idx))
    }

    /// Sorts both collections by name (ordinal, case-sensitive).
    ///
    /// The sort is stable, so duplicate names keep their relative order and
    /// first-match resolution is unaffected.
    pub fn sort_by_name(&mut self) {
        self.modules.sort_by(|a, b| a.name.cmp(&b.name));
        self.targets.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Flips the debug flag and returns the new value.
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    /// Dotted paths (`targets.0.wipeComand`) of every key kept in `extra`.
    pub fn unknown_keys(&self) -> Vec<String> {
        let mut out: Vec<String> = self.extra.keys().cloned().collect();
        for (idx, module) in self.modules.iter().enumerate() {
            out.extend(module.extra.keys().map(|k| format!("modules.{}.{}", idx, k)));
        }
        for (idx, target) in self.targets.iter().enumerate() {
            out.extend(target.extra.keys().map(|k| format!("targets.{}.{}", idx, k)));
        }
        out
    }

    /// Names that occur more than once, modules first then targets.
    pub fn duplicate_names(&self) -> Vec<String> {
        fn dups<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
            let mut sorted: Vec<&str> = names.collect();
            sorted.sort_unstable();
            let mut out: Vec<String> = sorted
                .windows(2)
                .filter(|w| w[0] == w[1])
                .map(|w| w[0].to_string())
                .collect();
            out.dedup();
            out
        }

        let mut out = dups(self.modules.iter().map(|m| m.name.as_str()));
        out.extend(dups(self.targets.iter().map(|t| t.name.as_str())));
        out
    }
}

#[cfg(test)]
mod tests;
