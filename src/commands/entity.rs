//! Module and target commands - add, remove and show registry entries

use anyhow::Result;
use mddbl::domain::services::EntityResolver;
use mddbl::presentation::EntityAction;

use super::CommandContext;
use crate::ui::editor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Module,
    Target,
}

impl EntityKind {
    fn as_str(self) -> &'static str {
        match self {
            EntityKind::Module => "module",
            EntityKind::Target => "target",
        }
    }
}

pub fn cmd_entity(ctx: &CommandContext, kind: EntityKind, action: EntityAction) -> Result<()> {
    let use_case = ctx.registry_use_case();
    let mut registry = ctx.load(&use_case)?;

    match action {
        EntityAction::Add { name, no_edit } => {
            match kind {
                EntityKind::Module => use_case.add_module(&mut registry, &name)?,
                EntityKind::Target => use_case.add_target(&mut registry, &name)?,
            }
            report(ctx, "added", kind, &name)?;
            if !no_edit {
                editor::open_config(&ctx.ui, &registry.edit_command, use_case.config_path());
            }
        }
        EntityAction::Rm { name } => {
            match kind {
                EntityKind::Module => {
                    use_case.remove_module(&mut registry, &name)?;
                }
                EntityKind::Target => {
                    use_case.remove_target(&mut registry, &name)?;
                }
            }
            report(ctx, "removed", kind, &name)?;
        }
        EntityAction::Show { name } => {
            let resolver = EntityResolver::new(&registry, use_case.config_path());
            match kind {
                EntityKind::Module => crate::ui::json::print_pretty(resolver.find_module(&name)?)?,
                EntityKind::Target => crate::ui::json::print_pretty(resolver.find_target(&name)?)?,
            }
        }
    }
    Ok(())
}

fn report(ctx: &CommandContext, event: &str, kind: EntityKind, name: &str) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": event,
            "kind": kind.as_str(),
            "name": name,
        }))?;
    } else {
        let verb = if event == "added" { "Added" } else { "Removed" };
        ctx.done(&format!("{} {} '{}'", verb, kind.as_str(), name));
    }
    Ok(())
}
