//! List command - print modules or targets

use anyhow::Result;
use mddbl::presentation::ListKind;

use super::CommandContext;
use crate::ui::views::list::{render_modules, render_targets};

pub fn cmd_list(ctx: &CommandContext, kind: ListKind) -> Result<()> {
    let use_case = ctx.registry_use_case();
    let registry = ctx.load(&use_case)?;

    if ctx.ui.json {
        let items = match kind {
            ListKind::Modules => serde_json::to_value(&registry.modules)?,
            ListKind::Targets => serde_json::to_value(&registry.targets)?,
        };
        crate::ui::json::emit(items)?;
        return Ok(());
    }

    let out = match kind {
        ListKind::Modules => render_modules(&registry.modules, ctx.ui.color),
        ListKind::Targets => render_targets(&registry.targets, ctx.ui.color),
    };
    print!("{}", out);
    Ok(())
}
