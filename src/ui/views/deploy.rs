use mddbl::application::DeployPlan;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// "Deploying blink to esp32" followed by the command about to run.
pub fn render_deploy_header(plan: &DeployPlan, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Deploying {}\n{}\n",
        Icon::Deploy.colored(supports_color, supports_unicode),
        ColoredText::info(plan.describe()).bold().render(supports_color),
        render_executing(&plan.command, supports_color, supports_unicode)
    )
}

pub fn render_wipe_header(
    target: &str,
    command: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Wiping {}\n{}\n",
        Icon::Wipe.colored(supports_color, supports_unicode),
        ColoredText::warning(target).bold().render(supports_color),
        render_executing(command, supports_color, supports_unicode)
    )
}

fn render_executing(command: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} Executing: {}",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(command.trim_end()).render(supports_color)
    )
}

pub fn render_done(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(message).render(supports_color)
    )
}
