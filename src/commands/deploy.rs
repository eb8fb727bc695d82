//! Deploy command - build and run a module, optionally on a target

use anyhow::Result;
use mddbl::application::DeployOptions;
use mddbl::presentation::factory;

use super::CommandContext;
use crate::ui::views::deploy::render_deploy_header;

pub fn cmd_deploy(ctx: &CommandContext, module: &str, target: Option<String>) -> Result<()> {
    let registry_use_case = ctx.registry_use_case();
    let registry = ctx.load(&registry_use_case)?;

    let target = match target {
        Some(target) => Some(target),
        None if ctx.ui.can_prompt() && !registry.targets.is_empty() => {
            crate::ui::select::select_target(&ctx.ui, module, &registry.targets)?
        }
        None => None,
    };

    let use_case = factory::create_deploy_use_case(registry_use_case.config_path(), ctx.child_output());
    let options = DeployOptions::new(module).with_optional_target(target);
    let plan = use_case.plan(&registry, &options)?;

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "deploy",
            "plan": plan,
        }))?;
    } else {
        print!(
            "{}",
            render_deploy_header(&plan, ctx.ui.color, ctx.ui.unicode)
        );
    }

    use_case.run(&plan)?;

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "module": plan.module,
            "target": plan.target,
        }))?;
    }
    Ok(())
}
