//! Init command - create `mddbl.json` in the current folder

use anyhow::Result;

use super::CommandContext;

pub fn cmd_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let use_case = ctx.registry_use_case();
    use_case.init(force)?;

    let path = use_case.config_path().display().to_string();
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "init",
            "path": path,
        }))?;
    } else {
        ctx.done(&format!("Created {}", path));
    }
    Ok(())
}
