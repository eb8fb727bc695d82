use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Deploy,
    Wipe,
}

impl Icon {
    /// (unicode, ascii) spellings.
    fn glyphs(self) -> (&'static str, &'static str) {
        use theme::{icons, icons_ascii};
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Deploy => (icons::DEPLOY, icons_ascii::DEPLOY),
            Icon::Wipe => (icons::WIPE, icons_ascii::WIPE),
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Wipe => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Deploy => theme::colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
