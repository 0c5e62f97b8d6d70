//! Top-level UI layout — one section panel at a time plus a status bar,
//! mirroring a viewport scrolling over a single-page site.

pub mod contact_panel;
pub mod help_panel;
pub mod hero_panel;
pub mod numbers_panel;
pub mod overlays;
pub mod showcase_panel;
pub mod status_bar;
pub mod work_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState, now_ms: u64) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app, now_ms);
    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Welcome {
        overlays::render_welcome(f, main_area);
    }
}

/// Draw the active panel with its border. Section panels fade their
/// border in over the first 400 ms after the section scrolls into view.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState, now_ms: u64) {
    let panel = app.active_panel;
    let settled = if panel.is_section() {
        app.section_revealed_since(panel, now_ms)
            .is_some_and(|ms| ms >= 400)
    } else {
        true
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(settled))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(settled));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Hero => hero_panel::render(f, inner, app, now_ms),
        Panel::Work => work_panel::render(f, inner, app, now_ms),
        Panel::Showcase => showcase_panel::render(f, inner, app, now_ms),
        Panel::Numbers => numbers_panel::render(f, inner, app, now_ms),
        Panel::Contact => contact_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
