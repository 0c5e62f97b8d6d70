//! Panel 4 — Numbers: animated stat counters.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, now_ms: u64) {
    let mut lines = vec![Line::from("")];

    if !app.counters.is_armed() {
        lines.push(Line::from(Span::styled(
            "  Scroll this section into view to run the numbers.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    for (i, stat) in app.content.stats.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>10} ", app.counters.display(now_ms, i)),
                theme::accent_bold(),
            ),
            Span::styled(stat.label.as_str(), theme::text()),
        ]));
        lines.push(Line::from(""));
    }

    if app.counters.settled(now_ms) {
        lines.push(Line::from(Span::styled(
            "  And counting.",
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
