//! Module entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A deployable source project.
///
/// Field names follow the camelCase keys of `mddbl.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    pub name: String,
    pub description: String,
    /// Host modules are built with `mcconfig`, others with `mcrun`
    pub is_host: bool,
    pub debug_flag: bool,
    pub make_flag: bool,
    pub folder_path: String,
    /// Keys this version does not know; written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Module {
    /// Zero-valued module with only the name set (used by `module add`).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_folder(&self) -> bool {
        !self.folder_path.trim().is_empty()
    }
}
