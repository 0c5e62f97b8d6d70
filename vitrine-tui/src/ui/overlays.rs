//! Modal overlays rendered above the active panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Vitrine ")
        .title_style(theme::panel_title(true));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A portfolio, rendered in your terminal.",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Scroll with j/k, jump with 1-6, swipe the showcase",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "with the mouse or arrow keys.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to begin.", theme::accent())),
    ];

    f.render_widget(Paragraph::new(lines).block(block).centered(), popup);
}
