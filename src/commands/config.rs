//! Config command - show, sort or edit `mddbl.json`

use anyhow::Result;
use mddbl::presentation::ConfigAction;

use super::CommandContext;
use crate::ui::editor;

pub fn cmd_config(ctx: &CommandContext, action: ConfigAction) -> Result<()> {
    let use_case = ctx.registry_use_case();
    let mut registry = ctx.load(&use_case)?;

    match action {
        ConfigAction::Show => crate::ui::json::print_pretty(&registry)?,
        ConfigAction::Sort => {
            use_case.sort(&mut registry)?;
            if ctx.ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "sorted",
                    "path": use_case.config_path().display().to_string(),
                }))?;
            } else {
                ctx.done(&format!(
                    "Sorted modules and targets in {}",
                    use_case.config_path().display()
                ));
            }
        }
        ConfigAction::Edit => {
            editor::open_config(&ctx.ui, &registry.edit_command, use_case.config_path())
        }
    }
    Ok(())
}
