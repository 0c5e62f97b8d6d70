//! Mint-on-charcoal theme tokens for the Vitrine TUI.
//!
//! Mirrors the site palette: near-black surfaces, mint primary accent,
//! coral secondary accent, warm off-white text.

use ratatui::style::{Color, Modifier, Style};

/// Mint green, the primary accent.
pub const ACCENT: Color = Color::Rgb(120, 189, 149);
/// Coral, the secondary accent.
pub const CORAL: Color = Color::Rgb(235, 110, 85);
/// Near-black surface.
pub const BACKGROUND: Color = Color::Rgb(17, 17, 19);
/// Warm off-white primary text.
pub const TEXT: Color = Color::Rgb(235, 230, 220);
/// Desaturated gray for secondary text.
pub const MUTED: Color = Color::Rgb(130, 130, 135);
/// Amber for warnings and pending validation.
pub const WARNING: Color = Color::Rgb(230, 180, 80);
/// Red for invalid input and errors.
pub const NEGATIVE: Color = Color::Rgb(225, 85, 85);

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn coral() -> Style {
    Style::default().fg(CORAL)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

/// Opacity-graded text: full, dim, or hidden, for fade animations the
/// terminal cannot express continuously.
pub fn faded(opacity: f64) -> Style {
    if opacity >= 0.75 {
        text()
    } else if opacity >= 0.25 {
        muted()
    } else {
        Style::default().fg(BACKGROUND)
    }
}
