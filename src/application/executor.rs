//! Directory-Scoped Executor
//!
//! Runs one command line, optionally from a module folder. The working
//! directory change is held by a `DirectoryGuard`, which restores the origin
//! on drop, so every exit path (success, non-zero exit, spawn error) leaves
//! the process where it started.

use std::path::{Path, PathBuf};

use crate::domain::ports::{CommandRunner, WorkingDirectory};
use crate::error::{MddblError, MddblResult};

/// Scoped working-directory change; restores the origin when dropped.
pub struct DirectoryGuard<'a, W: WorkingDirectory + ?Sized> {
    working_dir: &'a W,
    origin: PathBuf,
}

impl<'a, W: WorkingDirectory + ?Sized> DirectoryGuard<'a, W> {
    pub fn acquire(working_dir: &'a W, target: &Path) -> std::io::Result<Self> {
        let origin = working_dir.current()?;
        working_dir.change_to(target)?;
        tracing::debug!(
            from = %origin.display(),
            to = %target.display(),
            "changed working directory"
        );
        Ok(Self {
            working_dir,
            origin,
        })
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl<W: WorkingDirectory + ?Sized> Drop for DirectoryGuard<'_, W> {
    fn drop(&mut self) {
        match self.working_dir.change_to(&self.origin) {
            Ok(()) => tracing::debug!(to = %self.origin.display(), "restored working directory"),
            Err(e) => tracing::warn!(
                "unable to restore working directory {}: {}",
                self.origin.display(),
                e
            ),
        }
    }
}

pub struct DirectoryScopedExecutor<W, R> {
    working_dir: W,
    runner: R,
}

impl<W: WorkingDirectory, R: CommandRunner> DirectoryScopedExecutor<W, R> {
    pub fn new(working_dir: W, runner: R) -> Self {
        Self {
            working_dir,
            runner,
        }
    }

    pub fn working_dir(&self) -> &W {
        &self.working_dir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `command`, from `folder` when one is given.
    ///
    /// A relative `folder` is resolved against the current working directory.
    /// It must be an existing directory, otherwise nothing is run.
    pub fn execute(&self, command: &str, folder: Option<&Path>) -> MddblResult<()> {
        let folder = folder.filter(|f| !f.as_os_str().is_empty());

        let Some(folder) = folder else {
            let cwd = self.working_dir.current()?;
            return self.run(command, &cwd);
        };

        let resolved = self.working_dir.current()?.join(folder);
        if !resolved.is_dir() {
            return Err(MddblError::FolderNotFound {
                path: folder.to_path_buf(),
            });
        }

        let _guard = DirectoryGuard::acquire(&self.working_dir, &resolved)?;
        self.run(command, &resolved)
    }

    fn run(&self, command: &str, cwd: &Path) -> MddblResult<()> {
        tracing::debug!(command, cwd = %cwd.display(), "executing");
        let outcome = self.runner.run(command, cwd)?;
        if outcome.success() {
            Ok(())
        } else {
            Err(MddblError::CommandFailed {
                command: command.to_string(),
                code: outcome.code,
            })
        }
    }
}
