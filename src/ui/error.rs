use mddbl::MddblError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Suggested next step for an error, if there is an obvious one.
pub fn fix_hint(err: &MddblError) -> Option<String> {
    let hint = match err {
        MddblError::ConfigMissing { .. } => "Run: mddbl init".to_string(),
        MddblError::ConfigExists { .. } => "Run: mddbl init --force to start over".to_string(),
        MddblError::ConfigReadError { .. } => {
            "Check that it is a regular file you are allowed to read".to_string()
        }
        MddblError::ConfigParseError { .. } => {
            "Fix the JSON by hand or run: mddbl config edit".to_string()
        }
        MddblError::ConfigWriteError { .. } => {
            "Check that the folder is writable and the disk is not full".to_string()
        }
        MddblError::ModuleNotDefined { name, .. } => format!(
            "Run: mddbl list modules\nor add it: mddbl module add {}",
            name
        ),
        MddblError::TargetNotDefined { name, .. } => format!(
            "Run: mddbl list targets\nor add it: mddbl target add {}",
            name
        ),
        MddblError::ModuleExists { name, .. } => {
            format!("Pick another name or run: mddbl module rm {}", name)
        }
        MddblError::TargetExists { name, .. } => {
            format!("Pick another name or run: mddbl target rm {}", name)
        }
        MddblError::ModulePathMissing { .. } => {
            "Set \"folderPath\" for the module: mddbl config edit".to_string()
        }
        MddblError::TargetPlatformMissing { .. } => {
            "Set \"platform\" for the target: mddbl config edit".to_string()
        }
        MddblError::InvalidRotation { .. } => {
            "Set \"rotationValue\" to 0, 90, 180 or 270, or turn \"rotationFlag\" off".to_string()
        }
        MddblError::WipeCommandMissing { .. } => {
            "Set \"wipeCommand\" for the target: mddbl config edit".to_string()
        }
        MddblError::FolderNotFound { .. } => {
            "Check the module's \"folderPath\"; relative paths start from the current folder"
                .to_string()
        }
        MddblError::CommandFailed { .. } | MddblError::Io(_) => return None,
    };
    Some(hint)
}

pub fn format_mddbl_error(err: &MddblError, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let Some(path) = err.config_path() {
        block = block.with_file(path);
    }
    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    if let Some(mddbl) = err.downcast_ref::<MddblError>() {
        return format_mddbl_error(mddbl, ui.color, ui.unicode);
    }
    ErrorBlock::new(format!("{:#}", err)).render(ui.color, ui.unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let kind = err
            .downcast_ref::<MddblError>()
            .map(MddblError::kind)
            .unwrap_or("Other");
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui));
}
