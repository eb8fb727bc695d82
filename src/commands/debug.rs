//! Debug command - toggle the configuration's `debug` flag

use anyhow::Result;

use super::CommandContext;

pub fn cmd_debug(ctx: &CommandContext) -> Result<()> {
    let use_case = ctx.registry_use_case();
    let mut registry = ctx.load(&use_case)?;

    let enabled = use_case.toggle_debug(&mut registry)?;
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "debug",
            "enabled": enabled,
        }))?;
    } else {
        ctx.done(if enabled {
            "Debug mode enabled"
        } else {
            "Debug mode disabled"
        });
    }
    Ok(())
}
