//! Styled terminal helpers.

use console::style;

use caccalc_core::LtvCacHealth;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A `=== title ===` header line.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    let line = format!("=== {text} ===");
    if color {
        style(line).bold().cyan().to_string()
    } else {
        line
    }
}

/// Color the LTV:CAC guidance by health band.
#[must_use]
pub fn health_tag(text: &str, health: LtvCacHealth, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match health {
        LtvCacHealth::Healthy => style(text).green().to_string(),
        LtvCacHealth::Tight => style(text).yellow().to_string(),
        LtvCacHealth::Danger => style(text).red().bold().to_string(),
        LtvCacHealth::Unknown => style(text).dim().to_string(),
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
