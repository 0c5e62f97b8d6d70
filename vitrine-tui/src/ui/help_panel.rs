//! Panel 6 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (keys, action) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<18}"), theme::accent()),
            Span::styled(action, theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  State is saved on exit and restored next launch.",
        theme::muted(),
    )));
    f.render_widget(Paragraph::new(lines), area);
}
