//! Error types for mddbl
//!
//! Every fallible library operation returns `MddblResult`. Only the binary
//! decides how an error is rendered and which exit code it maps to.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mddbl operations
pub type MddblResult<T> = Result<T, MddblError>;

/// Main error type for mddbl operations
#[derive(Error, Debug)]
pub enum MddblError {
    /// No configuration file in the working directory
    #[error("configuration file not found: {path}")]
    ConfigMissing { path: PathBuf },

    /// `init` would overwrite an existing configuration file
    #[error("configuration file already exists: {path}")]
    ConfigExists { path: PathBuf },

    /// Configuration file exists but cannot be read (permissions, not a file)
    #[error("unable to read configuration file {path}: {message}")]
    ConfigReadError { path: PathBuf, message: String },

    /// Configuration file exists but is not valid JSON for the registry schema
    #[error("invalid configuration file {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration file could not be written
    #[error("unable to write configuration file {path}: {message}")]
    ConfigWriteError { path: PathBuf, message: String },

    #[error("module '{name}' not defined, please check the module configuration ({config})")]
    ModuleNotDefined { name: String, config: PathBuf },

    #[error("target '{name}' not defined, please check the module configuration ({config})")]
    TargetNotDefined { name: String, config: PathBuf },

    #[error("module '{name}' already exists in {config}")]
    ModuleExists { name: String, config: PathBuf },

    #[error("target '{name}' already exists in {config}")]
    TargetExists { name: String, config: PathBuf },

    #[error("module '{name}' has no folderPath, please check the module configuration ({config})")]
    ModulePathMissing { name: String, config: PathBuf },

    #[error("target '{name}' has no platform, please check the module configuration ({config})")]
    TargetPlatformMissing { name: String, config: PathBuf },

    #[error("target '{name}' has invalid rotation value {value} (expected 0, 90, 180 or 270)")]
    InvalidRotation { name: String, value: i32 },

    #[error("target '{name}' has no wipeCommand, please check the module configuration ({config})")]
    WipeCommandMissing { name: String, config: PathBuf },

    /// Module folder missing or not a directory
    #[error("module folder does not exist: {path}")]
    FolderNotFound { path: PathBuf },

    /// External command exited unsuccessfully
    #[error("command failed ({}): {command}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error (spawning the shell, changing directories)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl MddblError {
    /// Stable identifier used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            MddblError::ConfigMissing { .. } => "ConfigMissing",
            MddblError::ConfigExists { .. } => "ConfigExists",
            MddblError::ConfigReadError { .. } => "ConfigReadError",
            MddblError::ConfigParseError { .. } => "ConfigParseError",
            MddblError::ConfigWriteError { .. } => "ConfigWriteError",
            MddblError::ModuleNotDefined { .. } => "ModuleNotDefined",
            MddblError::TargetNotDefined { .. } => "TargetNotDefined",
            MddblError::ModuleExists { .. } => "ModuleExists",
            MddblError::TargetExists { .. } => "TargetExists",
            MddblError::ModulePathMissing { .. } => "ModulePathMissing",
            MddblError::TargetPlatformMissing { .. } => "TargetPlatformMissing",
            MddblError::InvalidRotation { .. } => "InvalidRotation",
            MddblError::WipeCommandMissing { .. } => "WipeCommandMissing",
            MddblError::FolderNotFound { .. } => "FolderNotFound",
            MddblError::CommandFailed { .. } => "CommandFailed",
            MddblError::Io(_) => "Io",
        }
    }

    /// Configuration file the error points the user at, if any.
    pub fn config_path(&self) -> Option<&std::path::Path> {
        match self {
            MddblError::ConfigMissing { path }
            | MddblError::ConfigExists { path }
            | MddblError::ConfigReadError { path, .. }
            | MddblError::ConfigParseError { path, .. }
            | MddblError::ConfigWriteError { path, .. } => Some(path.as_path()),
            MddblError::ModuleNotDefined { config, .. }
            | MddblError::TargetNotDefined { config, .. }
            | MddblError::ModuleExists { config, .. }
            | MddblError::TargetExists { config, .. }
            | MddblError::ModulePathMissing { config, .. }
            | MddblError::TargetPlatformMissing { config, .. }
            | MddblError::WipeCommandMissing { config, .. } => Some(config.as_path()),
            _ => None,
        }
    }
}
