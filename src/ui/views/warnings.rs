use mddbl::domain::value_objects::{ConfigWarning, ConfigWarningKind};

use crate::ui::blocks::warning::WarningBlock;

pub fn describe_warning(warning: &ConfigWarning) -> String {
    match &warning.kind {
        ConfigWarningKind::UnknownKey => format!("unknown key '{}' is not used (kept in the file)", warning.key),
        ConfigWarningKind::LegacyKey { replacement } => format!(
            "legacy key '{}' read as '{}'; run 'mddbl config sort' to rewrite the file",
            warning.key, replacement
        ),
        ConfigWarningKind::DuplicateName => format!(
            "name '{}' is used more than once; the first entry wins",
            warning.key
        ),
    }
}

/// Empty string when there is nothing to report.
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let Some(first) = warnings.first() else {
        return String::new();
    };

    let mut block = WarningBlock::new(first.file.display().to_string());
    for warning in warnings {
        block.add_line(describe_warning(warning));
    }
    block.render(supports_color, supports_unicode)
}
