//! Panel 5 — Contact: the validated form.
//!
//! Field borders track validation state: neutral until first touched,
//! mint when valid, red when invalid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use vitrine_core::form::{Field, FieldState, FIELDS};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.form.is_sent() {
        render_sent(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, &field) in FIELDS.iter().enumerate() {
        render_field(f, chunks[i], app, field);
    }

    let hint = if app.form_editing {
        "Tab next field, Enter send, Esc stop editing"
    } else {
        "Press Enter to edit"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {hint}"),
            theme::muted(),
        ))),
        chunks[3],
    );
}

fn border_style(state: FieldState, focused: bool) -> ratatui::style::Style {
    match state {
        FieldState::Invalid => theme::negative(),
        FieldState::Valid => theme::accent(),
        FieldState::Neutral => theme::panel_border(focused),
    }
}

fn render_field(f: &mut Frame, area: Rect, app: &AppState, field: Field) {
    let focused = app.form_editing && app.form_focus == field;
    let state = app.form.field_state(field);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state, focused))
        .title(format!(" {} ", field.label()))
        .title_style(theme::panel_title(focused));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::styled(app.form.value(field), theme::text())];
    if focused {
        spans.push(Span::styled("▌", theme::accent()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_sent(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Message sent. Thank you!", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "The form resets in a moment.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}
