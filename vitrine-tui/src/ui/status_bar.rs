//! Bottom status bar — panel hints, read progress, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Hero 2:Work 3:Showcase 4:Numbers 5:Contact 6:Help",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{:>3.0}%", app.scroll.progress_pct()),
        if app.scroll.scrolled() {
            theme::accent()
        } else {
            theme::muted()
        },
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
