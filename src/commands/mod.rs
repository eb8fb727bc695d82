//! Command handlers for the `mddbl` binary.
//!
//! Each handler loads what it needs, calls into the library and renders the
//! outcome. Errors bubble up to `main`, which prints them and exits with 1.

pub mod config;
pub mod debug;
pub mod deploy;
pub mod entity;
pub mod init;
pub mod list;
pub mod wipe;

use std::path::{Path, PathBuf};

use anyhow::Result;
use mddbl::application::RegistryUseCase;
use mddbl::domain::value_objects::ConfigWarning;
use mddbl::infrastructure::ChildOutput;
use mddbl::presentation::factory;
use mddbl::Registry;

use crate::ui::context::UiContext;
use crate::ui::views::warnings::{describe_warning, render_config_warnings};

/// Per-invocation state shared by all handlers.
pub struct CommandContext {
    pub ui: UiContext,
    pub cwd: PathBuf,
}

/// The configuration's `debug` flag, read before logging is set up.
///
/// Any problem with the file is reported later by the command itself.
pub fn configured_debug(cwd: &Path) -> bool {
    factory::create_registry_use_case(cwd)
        .load()
        .map(|loaded| loaded.registry.debug)
        .unwrap_or(false)
}

impl CommandContext {
    pub fn registry_use_case(&self) -> RegistryUseCase {
        factory::create_registry_use_case(&self.cwd)
    }

    /// Load the registry and report load warnings.
    pub fn load(&self, use_case: &RegistryUseCase) -> Result<Registry> {
        let loaded = use_case.load()?;
        tracing::debug!(path = %use_case.config_path().display(), "configuration loaded");
        self.report_warnings(&loaded.warnings);
        Ok(loaded.registry)
    }

    fn report_warnings(&self, warnings: &[ConfigWarning]) {
        if self.ui.json {
            for warning in warnings {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "warning",
                    "file": warning.file.display().to_string(),
                    "key": warning.key,
                    "message": describe_warning(warning),
                }));
            }
            return;
        }
        eprint!(
            "{}",
            render_config_warnings(warnings, self.ui.color, self.ui.unicode)
        );
    }

    /// SDK tool output must not mix with JSON events on stdout.
    pub fn child_output(&self) -> ChildOutput {
        if self.ui.json {
            ChildOutput::Stderr
        } else {
            ChildOutput::Inherit
        }
    }

    /// Print a one-line success message (text mode only).
    pub fn done(&self, message: &str) {
        if !self.ui.json {
            print!(
                "{}",
                crate::ui::views::deploy::render_done(message, self.ui.color, self.ui.unicode)
            );
        }
    }
}
