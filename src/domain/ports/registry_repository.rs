//! RegistryRepository port
//!
//! Persists the registry at `./mddbl.json`.

use std::path::{Path, PathBuf};

use crate::domain::entities::Registry;
use crate::domain::value_objects::ConfigWarning;
use crate::error::MddblError;

pub trait RegistryRepository: Send + Sync {
    /// Location of the backing file.
    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    /// Load the registry. A missing file is `RegistryError::NotFound`, never
    /// an empty registry.
    fn load(&self) -> Result<LoadedRegistry, RegistryError>;

    /// Sort both collections by name and persist atomically.
    fn save(&self, registry: &mut Registry) -> Result<(), RegistryError>;
}

/// A registry together with the non-fatal warnings found while loading it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRegistry {
    pub registry: Registry,
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("configuration file corrupted: {path}: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("Failed to write configuration {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

impl From<RegistryError> for MddblError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { path } => MddblError::ConfigMissing { path },
            RegistryError::AccessError { path, message } => {
                MddblError::ConfigReadError { path, message }
            }
            RegistryError::Corrupted { path, message } => {
                MddblError::ConfigParseError { path, message }
            }
            RegistryError::WriteFailed { path, message } => {
                MddblError::ConfigWriteError { path, message }
            }
        }
    }
}
