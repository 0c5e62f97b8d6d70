//! Panel 1 — Hero: preloader gauge, typewriter headline, particle canvas.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use vitrine_core::typewriter::FontStyle;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, _now_ms: u64) {
    if !app.preloader.is_hidden() {
        render_preloader(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(4),
        ])
        .split(area);

    render_headline(f, chunks[1], app);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.content.hero.tagline.as_str(),
            theme::muted(),
        )))
        .centered(),
        chunks[2],
    );

    render_particles(f, chunks[3], app);
}

fn render_preloader(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let gauge = Gauge::default()
        .ratio((app.preloader.pct() / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", app.preloader.pct()))
        .gauge_style(theme::accent());
    f.render_widget(gauge, chunks[1]);
}

/// Approximate the highlight word's font cycle with terminal emphasis:
/// heavy weights go bold, italics stay italic, wide tracking is rendered
/// by the coral accent.
fn word_style(style: FontStyle) -> Style {
    let mut out = Style::default().fg(if style.spacing_hundredths_em != 0 {
        theme::CORAL
    } else {
        theme::ACCENT
    });
    if style.weight >= 700 {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    out
}

fn render_headline(f: &mut Frame, area: Rect, app: &AppState) {
    let visual = app.typewriter.visual_state();
    let mut spans = vec![Span::styled(visual.prefix.clone(), theme::text())];
    if !visual.word.is_empty() {
        spans.push(Span::styled(
            visual.word.clone(),
            word_style(app.typewriter.current_style()),
        ));
    }
    if !visual.suffix.is_empty() {
        spans.push(Span::styled(visual.suffix.clone(), theme::text()));
    }
    if visual.cursor {
        spans.push(Span::styled("▌", theme::accent()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

fn render_particles(f: &mut Frame, area: Rect, app: &AppState) {
    let field = &app.particles;
    let points: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
    let links = field.links();

    let canvas = Canvas::default()
        .x_bounds([0.0, field.width()])
        .y_bounds([0.0, field.height()])
        .paint(move |ctx| {
            for &(i, j, opacity) in &links {
                let a = &points[i];
                let b = &points[j];
                ctx.draw(&CanvasLine {
                    x1: a.0,
                    y1: a.1,
                    x2: b.0,
                    y2: b.1,
                    color: if opacity > 0.2 {
                        theme::ACCENT
                    } else {
                        theme::MUTED
                    },
                });
            }
            ctx.draw(&Points {
                coords: &points,
                color: theme::TEXT,
            });
        });
    f.render_widget(canvas, area);
}
