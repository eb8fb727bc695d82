use dialoguer::Select;
use mddbl::Target;

use crate::ui::context::UiContext;
use crate::ui::theme;

const NO_TARGET: &str = "(no target)";

/// Ask which target to deploy to. `Ok(None)` means "deploy without a target".
pub fn select_target(ui: &UiContext, module: &str, targets: &[Target]) -> anyhow::Result<Option<String>> {
    let mut items = vec![NO_TARGET.to_string()];
    items.extend(targets.iter().map(target_label));

    let theme = theme::prompt_theme(ui.color);
    let choice = Select::with_theme(theme.as_ref())
        .with_prompt(format!("Deploy {} to", module))
        .items(&items)
        .default(0)
        .interact()?;

    Ok(choice
        .checked_sub(1)
        .and_then(|i| targets.get(i))
        .map(|t| t.name.clone()))
}

fn target_label(target: &Target) -> String {
    if target.description.is_empty() {
        target.name.clone()
    } else {
        format!("{} - {}", target.name, target.description)
    }
}
