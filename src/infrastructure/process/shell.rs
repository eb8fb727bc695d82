//! Shell command runner
//!
//! Runs a command line through the platform shell with stdin and stderr
//! inherited, so the SDK tools' live output and prompts reach the user. The
//! child's stdout is either inherited or folded into stderr, which keeps
//! mddbl's own stdout machine-readable under `--json`.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use crate::domain::ports::{CommandRunner, ExitOutcome};

/// Where the child's standard output goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildOutput {
    #[default]
    Inherit,
    /// Child stdout is written to our stderr
    Stderr,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner {
    output: ChildOutput,
}

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: ChildOutput) -> Self {
        self.output = output;
        self
    }

    pub fn output(&self) -> ChildOutput {
        self.output
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> io::Result<ExitOutcome> {
        pass_interrupts_to_children();

        let stdout = match self.output {
            ChildOutput::Inherit => Stdio::inherit(),
            ChildOutput::Stderr => Stdio::from(io::stderr()),
        };

        let mut cmd = shell_command(command);
        let status = cmd
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()?;

        tracing::debug!(command, status = ?status.code(), "command finished");
        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}

/// cmd.exe does its own parsing, so the command line is passed verbatim.
#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

/// Ctrl+C reaches the whole foreground process group. The child handles it;
/// this process keeps running so the working directory gets restored.
fn pass_interrupts_to_children() {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        if let Err(e) = ctrlc::set_handler(|| {
            tracing::debug!("interrupt received, waiting for child to exit");
        }) {
            tracing::debug!("could not install Ctrl+C handler: {}", e);
        }
    });
}
