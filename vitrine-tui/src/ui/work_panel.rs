//! Panel 2 — Work: category tabs and the filtered card grid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use vitrine_core::filter::{CardSize, Tab};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, now_ms: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    render_tabs(f, chunks[0], app);
    render_cards(f, chunks[1], app, now_ms);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for i in 0..app.filter.tab_count() {
        let tab = app.filter.tab_at(i).unwrap_or(Tab::All);
        let label = app.filter.tab_label(tab);
        let style = if tab == app.filter.active() {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(h/l to switch)", theme::muted()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &AppState, now_ms: u64) {
    let visuals = app.filter.visual_state(now_ms);
    let mut lines = vec![Line::from("")];

    for (card, visual) in app.content.cards.iter().zip(visuals.iter()) {
        if !visual.visible {
            continue;
        }
        // The slide-in renders as leading indent that shrinks to zero.
        let indent = " ".repeat((visual.rise / 4.0).round() as usize);
        let marker = match visual.size {
            CardSize::Large if visual.span >= 12 => "██",
            CardSize::Large => "█▌",
            CardSize::Small => "▌",
        };
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(format!(" {marker} "), theme::accent()),
            Span::styled(card.title.as_str(), theme::faded(visual.opacity)),
            Span::styled(format!("  [{}]", card.category), theme::muted()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(card.blurb.as_str(), theme::faded(visual.opacity * 0.8)),
        ]));
        lines.push(Line::from(""));
    }

    if lines.len() == 1 {
        lines.push(Line::from(Span::styled(
            "  No work in this category yet.",
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
