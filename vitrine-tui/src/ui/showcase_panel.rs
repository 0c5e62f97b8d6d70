//! Panel 3 — Showcase: the slide carousel.
//!
//! The track's height follows the controller's measured height (16
//! document units per terminal row), slides shift horizontally by their
//! offset fraction during transitions, and the dot row marks the active
//! index.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, UNITS_PER_ROW};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, now_ms: u64) {
    let Some(carousel) = app.carousel.as_ref() else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  No slides configured.",
                theme::muted(),
            ))),
            area,
        );
        return;
    };

    let visual = carousel.visual_state(now_ms);
    let track_rows = ((visual.track_height / UNITS_PER_ROW).ceil() as u16)
        .clamp(5, area.height.saturating_sub(2).max(5));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(track_rows),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, slide_visual) in visual.slides.iter().enumerate() {
        if !slide_visual.visible {
            continue;
        }
        let Some(slide) = app.content.slides.get(index) else {
            continue;
        };
        let shift = (slide_visual.offset * f64::from(area.width)) as i32;
        let slide_area = shifted(chunks[0], shift);
        if slide_area.width == 0 {
            continue;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {}", slide.kicker.to_uppercase()),
                theme::coral(),
            )),
            Line::from(Span::styled(
                format!("  {}", slide.title),
                if slide_visual.opacity >= 0.75 {
                    theme::accent_bold()
                } else {
                    theme::muted()
                },
            )),
            Line::from(""),
        ];
        for chunk in wrap(&slide.body, slide_area.width.saturating_sub(4) as usize) {
            lines.push(Line::from(Span::styled(
                format!("  {chunk}"),
                theme::faded(slide_visual.opacity),
            )));
        }
        f.render_widget(Paragraph::new(lines), slide_area);
    }

    render_dots(f, chunks[1], visual.active, visual.slides.len());
}

/// Shift a rect horizontally, clipping at the parent's edges.
fn shifted(area: Rect, shift: i32) -> Rect {
    if shift == 0 {
        return area;
    }
    let magnitude = (shift.unsigned_abs().min(u32::from(area.width))) as u16;
    if shift > 0 {
        Rect {
            x: area.x + magnitude,
            width: area.width - magnitude,
            ..area
        }
    } else {
        Rect {
            width: area.width - magnitude,
            ..area
        }
    }
}

fn render_dots(f: &mut Frame, area: Rect, active: usize, count: usize) {
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for i in 0..count {
        if i == active {
            spans.push(Span::styled("●", theme::accent()));
        } else {
            spans.push(Span::styled("○", theme::muted()));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("←/→ or drag", theme::muted()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_clips_at_edges() {
        let area = Rect::new(2, 0, 40, 10);
        let right = shifted(area, 10);
        assert_eq!(right.x, 12);
        assert_eq!(right.width, 30);

        let left = shifted(area, -10);
        assert_eq!(left.x, 2);
        assert_eq!(left.width, 30);

        let gone = shifted(area, 100);
        assert_eq!(gone.width, 0);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert!(lines.iter().all(|l| l.len() <= 9));
        assert_eq!(lines.concat().replace(' ', ""), "onetwothreefourfive");
    }
}
