use mddbl::{Module, Target};

use crate::ui::primitives::text::ColoredText;

/// One `- name: description` line per entry.
fn render_entries<'a>(
    kind: &str,
    entries: impl ExactSizeIterator<Item = (&'a str, &'a str)>,
    supports_color: bool,
) -> String {
    if entries.len() == 0 {
        return format!("No {} configured\n", kind);
    }

    let mut out = String::new();
    for (name, description) in entries {
        let name = ColoredText::info(name).bold().render(supports_color);
        if description.is_empty() {
            out.push_str(&format!("- {}\n", name));
        } else {
            out.push_str(&format!("- {}: {}\n", name, description));
        }
    }
    out
}

pub fn render_modules(modules: &[Module], supports_color: bool) -> String {
    render_entries(
        "modules",
        modules
            .iter()
            .map(|m| (m.name.as_str(), m.description.as_str())),
        supports_color,
    )
}

pub fn render_targets(targets: &[Target], supports_color: bool) -> String {
    render_entries(
        "targets",
        targets
            .iter()
            .map(|t| (t.name.as_str(), t.description.as_str())),
        supports_color,
    )
}
