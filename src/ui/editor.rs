//! Opening `mddbl.json` in an editor.
//!
//! Preference order: the registry's `editCommand`, `$VISUAL`, `$EDITOR`, then
//! the platform's default opener. Failing to launch is only ever a warning.

use std::path::Path;
use std::process::Command;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Program and leading arguments for the editor to use.
///
/// The configured command is split on whitespace with no quoting rules, so a
/// program whose path contains spaces has to be reached through `PATH` or a
/// wrapper script.
fn editor_command(edit_command: &str, get_env: impl Fn(&str) -> Option<String>) -> Vec<String> {
    let configured = Some(edit_command.to_string())
        .filter(|c| !c.trim().is_empty())
        .or_else(|| get_env("VISUAL").filter(|v| !v.trim().is_empty()))
        .or_else(|| get_env("EDITOR").filter(|v| !v.trim().is_empty()));

    match configured {
        Some(cmd) => cmd.split_whitespace().map(str::to_string).collect(),
        None => platform_opener(),
    }
}

#[cfg(windows)]
fn platform_opener() -> Vec<String> {
    vec!["cmd".into(), "/C".into(), "start".into(), "".into()]
}

#[cfg(target_os = "macos")]
fn platform_opener() -> Vec<String> {
    vec!["open".into(), "-e".into()]
}

#[cfg(not(any(windows, target_os = "macos")))]
fn platform_opener() -> Vec<String> {
    vec!["xdg-open".into()]
}

fn launch(parts: &[String], file: &Path) -> std::io::Result<()> {
    let Some((program, args)) = parts.split_first() else {
        return Ok(());
    };
    tracing::debug!(program = %program, "opening editor");
    let status = Command::new(program).args(args).arg(file).status()?;
    if !status.success() {
        return Err(std::io::Error::other(format!("{} exited with {}", program, status)));
    }
    Ok(())
}

/// Open `file` for editing, waiting for terminal editors to exit.
///
/// Without a terminal to hand over, only tell the user where the file is.
pub fn open_config(ui: &UiContext, edit_command: &str, file: &Path) {
    if !ui.can_prompt() {
        tracing::info!(file = %file.display(), "not a terminal, skipping editor");
        if !ui.json {
            eprintln!("Edit {} to configure it", file.display());
        }
        return;
    }

    let parts = editor_command(edit_command, |k| std::env::var(k).ok());
    if let Err(e) = launch(&parts, file) {
        tracing::warn!("unable to open editor: {}", e);
        eprintln!(
            "{} Unable to open an editor ({}); edit {} by hand",
            Icon::Warning.colored(ui.color, ui.unicode),
            e,
            file.display()
        );
    }
}
