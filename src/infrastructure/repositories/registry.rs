//! JSON Registry Repository
//!
//! Persists the registry at `./mddbl.json` (pretty-printed, 2-space indent,
//! both collections sorted by name).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::entities::Registry;
use crate::domain::ports::{LoadedRegistry, RegistryError, RegistryRepository};
use crate::domain::value_objects::{ConfigWarning, ConfigWarningKind};
use crate::infrastructure::fs::atomic_write;

pub const CONFIG_FILE_NAME: &str = "mddbl.json";

/// Environment override for the configuration path.
pub const CONFIG_PATH_VAR: &str = "MDDBL_CONFIG";

pub struct JsonRegistryRepository {
    path: PathBuf,
}

impl JsonRegistryRepository {
    /// Repository for `mddbl.json` in `cwd` (or `$MDDBL_CONFIG` when set).
    pub fn new(cwd: &Path) -> Self {
        Self {
            path: default_config_path(cwd),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_from_disk(&self) -> Result<LoadedRegistry, RegistryError> {
        if !self.path.exists() {
            return Err(RegistryError::NotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| RegistryError::AccessError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let mut value: Value =
            serde_json::from_str(&content).map_err(|e| RegistryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let mut warnings = migrate_legacy_keys(&mut value, &self.path);

        let registry: Registry =
            serde_json::from_value(value).map_err(|e| RegistryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        warnings.extend(registry.unknown_keys().into_iter().map(|key| ConfigWarning {
            key,
            file: self.path.clone(),
            kind: ConfigWarningKind::UnknownKey,
        }));
        warnings.extend(
            registry
                .duplicate_names()
                .into_iter()
                .map(|name| ConfigWarning {
                    key: name,
                    file: self.path.clone(),
                    kind: ConfigWarningKind::DuplicateName,
                }),
        );

        tracing::debug!(
            path = %self.path.display(),
            modules = registry.modules.len(),
            targets = registry.targets.len(),
            "loaded configuration"
        );

        Ok(LoadedRegistry { registry, warnings })
    }

    fn save_to_disk(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        registry.sort_by_name();

        let mut content =
            serde_json::to_string_pretty(registry).map_err(|e| RegistryError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        content.push('\n');

        atomic_write(&self.path, content.as_bytes()).map_err(|e| RegistryError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %self.path.display(), "wrote configuration");
        Ok(())
    }
}

impl RegistryRepository for JsonRegistryRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<LoadedRegistry, RegistryError> {
        self.load_from_disk()
    }

    fn save(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        self.save_to_disk(registry)
    }
}

fn default_config_path(cwd: &Path) -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    cwd.join(CONFIG_FILE_NAME)
}

/// Rewrite keys from older file layouts in place.
///
/// - modules: `debugBuild` → `debugFlag`, `runMake` → `makeFlag`
/// - targets: `format` → `formatFlag` + `formatStr`,
///   `rotation` → `rotationFlag` + `rotationValue` (0 meant "no rotation")
fn migrate_legacy_keys(value: &mut Value, file: &Path) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let mut note = |key: String, replacement: &str| {
        warnings.push(ConfigWarning {
            key,
            file: file.to_path_buf(),
            kind: ConfigWarningKind::LegacyKey {
                replacement: replacement.to_string(),
            },
        })
    };

    if let Some(modules) = value.get_mut("modules").and_then(Value::as_array_mut) {
        for (idx, module) in modules.iter_mut().enumerate() {
            let Some(obj) = module.as_object_mut() else {
                continue;
            };
            if rename_key(obj, "debugBuild", "debugFlag") {
                note(format!("modules.{}.debugBuild", idx), "debugFlag");
            }
            if rename_key(obj, "runMake", "makeFlag") {
                note(format!("modules.{}.runMake", idx), "makeFlag");
            }
        }
    }

    if let Some(targets) = value.get_mut("targets").and_then(Value::as_array_mut) {
        for (idx, target) in targets.iter_mut().enumerate() {
            let Some(obj) = target.as_object_mut() else {
                continue;
            };

            if !obj.contains_key("formatStr") {
                if let Some(format) = obj.remove("format") {
                    let format = format.as_str().unwrap_or_default().to_string();
                    if !format.is_empty() {
                        obj.insert("formatFlag".to_string(), Value::Bool(true));
                        obj.insert("formatStr".to_string(), Value::String(format));
                    }
                    note(format!("targets.{}.format", idx), "formatFlag/formatStr");
                }
            }

            if !obj.contains_key("rotationValue") {
                if let Some(rotation) = obj.remove("rotation") {
                    let rotation = rotation.as_i64().unwrap_or_default();
                    if rotation != 0 {
                        obj.insert("rotationFlag".to_string(), Value::Bool(true));
                        obj.insert("rotationValue".to_string(), Value::from(rotation));
                    }
                    note(
                        format!("targets.{}.rotation", idx),
                        "rotationFlag/rotationValue",
                    );
                }
            }
        }
    }

    warnings
}

fn rename_key(obj: &mut Map<String, Value>, from: &str, to: &str) -> bool {
    if obj.contains_key(to) {
        return false;
    }
    match obj.remove(from) {
        Some(v) => {
            obj.insert(to.to_string(), v);
            true
        }
        None => false,
    }
}
