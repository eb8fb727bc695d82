//! Wipe command - erase a target device

use anyhow::Result;
use mddbl::presentation::factory;

use super::CommandContext;
use crate::ui::views::deploy::render_wipe_header;

pub fn cmd_wipe(ctx: &CommandContext, target: &str) -> Result<()> {
    let registry_use_case = ctx.registry_use_case();
    let registry = ctx.load(&registry_use_case)?;

    let use_case = factory::create_wipe_use_case(registry_use_case.config_path(), ctx.child_output());
    let command = use_case.command(&registry, target)?;

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "wipe",
            "target": target,
            "command": command,
        }))?;
    } else {
        print!(
            "{}",
            render_wipe_header(target, &command, ctx.ui.color, ctx.ui.unicode)
        );
    }

    use_case.run(&command)?;

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "target": target,
        }))?;
    }
    Ok(())
}
