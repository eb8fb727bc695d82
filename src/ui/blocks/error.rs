use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Error rendering: headline, optional file, message and a `FIX:` hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        if let Some(file) = &self.file {
            out.push_str(&format!(
                "  {}",
                ColoredText::dim(file.display().to_string()).render(supports_color)
            ));
        }
        out.push('\n');
        out.push_str(&format!("  {}\n", self.message));

        if let Some(fix) = &self.fix {
            out.push('\n');
            for (i, line) in fix.lines().enumerate() {
                let prefix = if i == 0 { "FIX: " } else { "     " };
                out.push_str(&format!(
                    "  {}{}\n",
                    ColoredText::info(prefix).render(supports_color),
                    line
                ));
            }
        }
        out
    }
}
