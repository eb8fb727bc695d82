use crossterm::style::Color;

/// Design tokens for the mddbl CLI.
///
/// Only 5 semantic colors; icons come from `icons`/`icons_ascii`.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "📦";
    pub const WIPE: &str = "🧹";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const WIPE: &str = "[WIPE]";
}

/// Prompt theme: colorful when colors are on, plain otherwise.
pub fn prompt_theme(color: bool) -> Box<dyn dialoguer::theme::Theme> {
    if color {
        Box::new(dialoguer::theme::ColorfulTheme::default())
    } else {
        Box::new(dialoguer::theme::SimpleTheme)
    }
}
