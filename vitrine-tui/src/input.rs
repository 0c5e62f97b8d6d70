//! Input dispatch — overlays first, then form editing, then global keys,
//! then panel-specific handlers.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use vitrine_core::form::Field;

use crate::app::{AppState, Overlay, Panel, PAGE_UNITS, UNITS_PER_COL, UNITS_PER_ROW};

/// Scroll step for a single j/k press, in document units.
const SCROLL_STEP: f64 = 64.0;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now_ms: u64) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Form editing swallows almost everything.
    if app.form_editing {
        handle_form_key(app, key, now_ms);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(panel) = Panel::from_index(c as usize - '1' as usize) {
                app.select_panel(panel);
            }
            return;
        }
        KeyCode::Tab => {
            app.select_panel(app.active_panel.next());
            return;
        }
        KeyCode::BackTab => {
            app.select_panel(app.active_panel.prev());
            return;
        }
        // Document scrolling works from any section panel.
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_by(SCROLL_STEP);
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_by(-SCROLL_STEP);
            return;
        }
        KeyCode::PageDown => {
            app.scroll_by(PAGE_UNITS);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_by(-PAGE_UNITS);
            return;
        }
        KeyCode::Char('g') => {
            app.select_panel(Panel::Hero);
            return;
        }
        KeyCode::Char('G') => {
            app.select_panel(Panel::Contact);
            return;
        }
        // Arrow keys reach the carousel only while it is on screen.
        KeyCode::Left => {
            let visible = app.showcase_visible();
            if let Some(carousel) = app.carousel.as_mut() {
                carousel.key_left(now_ms, visible);
            }
            return;
        }
        KeyCode::Right => {
            let visible = app.showcase_visible();
            if let Some(carousel) = app.carousel.as_mut() {
                carousel.key_right(now_ms, visible);
            }
            return;
        }
        _ => {}
    }

    // 4. Panel-specific keys.
    match app.active_panel {
        Panel::Work => handle_work_key(app, key, now_ms),
        Panel::Showcase => handle_showcase_key(app, key, now_ms),
        Panel::Contact => handle_contact_key(app, key),
        Panel::Hero | Panel::Numbers | Panel::Help => {}
    }
}

fn handle_work_key(app: &mut AppState, key: KeyEvent, now_ms: u64) {
    match key.code {
        KeyCode::Char('h') => {
            let current = tab_index(app);
            let count = app.filter.tab_count();
            app.filter.select_index(now_ms, (current + count - 1) % count);
        }
        KeyCode::Char('l') => {
            let current = tab_index(app);
            app.filter
                .select_index(now_ms, (current + 1) % app.filter.tab_count());
        }
        _ => {}
    }
}

fn tab_index(app: &AppState) -> usize {
    match app.filter.active() {
        vitrine_core::filter::Tab::All => 0,
        vitrine_core::filter::Tab::Category(i) => i + 1,
    }
}

fn handle_showcase_key(app: &mut AppState, key: KeyEvent, now_ms: u64) {
    let Some(carousel) = app.carousel.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('h') => {
            carousel.prev(now_ms);
        }
        KeyCode::Char('l') | KeyCode::Char(' ') => {
            carousel.next(now_ms);
        }
        // Jump straight to a dot.
        KeyCode::Char(c @ 'a'..='e') => {
            carousel.select(now_ms, c as usize - 'a' as usize);
        }
        _ => {}
    }
}

fn handle_contact_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
            app.form_editing = true;
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent, now_ms: u64) {
    match key.code {
        KeyCode::Esc => {
            app.form.blur(app.form_focus);
            app.form_editing = false;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.blur(app.form_focus);
            app.form_focus = next_field(app.form_focus);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.blur(app.form_focus);
            app.form_focus = prev_field(app.form_focus);
        }
        KeyCode::Enter => {
            if app.form.submit(now_ms) {
                app.set_status("Message sent");
                app.form_editing = false;
            } else {
                app.set_error("Fix the highlighted fields");
            }
        }
        KeyCode::Backspace => {
            app.form.pop_char(app.form_focus);
        }
        KeyCode::Char(c) => {
            app.form.push_char(app.form_focus, c);
        }
        _ => {}
    }
}

fn next_field(field: Field) -> Field {
    match field {
        Field::Name => Field::Email,
        Field::Email => Field::Message,
        Field::Message => Field::Name,
    }
}

fn prev_field(field: Field) -> Field {
    match field {
        Field::Name => Field::Message,
        Field::Email => Field::Name,
        Field::Message => Field::Email,
    }
}

/// Handle a mouse event: drags drive the carousel, movement drives the
/// particle pointer, the wheel scrolls the document.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now_ms: u64) {
    let x_units = f64::from(mouse.column) * UNITS_PER_COL;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.active_panel == Panel::Showcase {
                if let Some(carousel) = app.carousel.as_mut() {
                    carousel.drag_start(x_units);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(carousel) = app.carousel.as_mut() {
                carousel.drag_move(x_units);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(carousel) = app.carousel.as_mut() {
                carousel.drag_end(now_ms);
            }
        }
        MouseEventKind::Moved => {
            app.particles.set_pointer(Some((
                x_units,
                f64::from(mouse.row) * UNITS_PER_ROW,
            )));
        }
        MouseEventKind::ScrollDown => app.scroll_by(SCROLL_STEP),
        MouseEventKind::ScrollUp => app.scroll_by(-SCROLL_STEP),
        _ => {}
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1-6", "Jump to panel"),
        ("Tab / Shift+Tab", "Next / previous panel"),
        ("j/k, wheel", "Scroll the page"),
        ("PgUp/PgDn", "Scroll a full section"),
        ("g / G", "Top / contact"),
        ("←/→", "Slide prev/next (showcase on screen)"),
        ("h/l, Space", "Slides and tabs"),
        ("a-e", "Jump to slide"),
        ("drag", "Swipe the showcase"),
        ("Enter / e", "Edit the contact form"),
        ("Esc", "Leave form editing"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vitrine_core::content::default_site;
    use vitrine_core::preloader::HIDE_DELAY_MS;

    fn ready_app() -> (AppState, u64) {
        let mut app = AppState::new(
            0,
            default_site(),
            9,
            PathBuf::from("/tmp/vitrine-input-test.json"),
        );
        app.overlay = Overlay::None;
        app.mark_loaded(0);
        app.tick(HIDE_DELAY_MS);
        (app, HIDE_DELAY_MS)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn any_key_dismisses_welcome() {
        let (mut app, now) = ready_app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('x')), now);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running, "the dismissing key does nothing else");
    }

    #[test]
    fn number_keys_jump_panels() {
        let (mut app, now) = ready_app();
        handle_key(&mut app, press(KeyCode::Char('3')), now);
        assert_eq!(app.active_panel, Panel::Showcase);
        handle_key(&mut app, press(KeyCode::Char('6')), now);
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn arrows_ignored_while_showcase_off_screen() {
        let (mut app, now) = ready_app();
        assert!(!app.showcase_visible());
        handle_key(&mut app, press(KeyCode::Right), now);
        assert!(!app.carousel.as_ref().unwrap().is_animating());

        app.select_panel(Panel::Showcase);
        handle_key(&mut app, press(KeyCode::Right), now);
        assert!(app.carousel.as_ref().unwrap().is_animating());
    }

    #[test]
    fn arrows_reach_a_partially_visible_showcase() {
        let (mut app, now) = ready_app();
        // Stop short of the showcase section so only its top edge shows.
        app.scroll_by(1.5 * PAGE_UNITS - 100.0);
        handle_key(&mut app, press(KeyCode::Right), now);
        assert!(app.carousel.as_ref().unwrap().is_animating());
    }

    #[test]
    fn form_editing_swallows_global_keys() {
        let (mut app, now) = ready_app();
        app.select_panel(Panel::Contact);
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert!(app.form_editing);

        handle_key(&mut app, press(KeyCode::Char('q')), now);
        assert!(app.running, "q types into the field instead of quitting");
        assert_eq!(app.form.value(Field::Name), "q");

        handle_key(&mut app, press(KeyCode::Esc), now);
        assert!(!app.form_editing);
        handle_key(&mut app, press(KeyCode::Char('q')), now);
        assert!(!app.running);
    }

    #[test]
    fn tab_cycles_form_fields_and_validates() {
        let (mut app, now) = ready_app();
        app.select_panel(Panel::Contact);
        handle_key(&mut app, press(KeyCode::Enter), now);
        handle_key(&mut app, press(KeyCode::Tab), now);
        assert_eq!(app.form_focus, Field::Email);
        // Leaving the empty name field marked it invalid.
        assert_eq!(
            app.form.field_state(Field::Name),
            vitrine_core::form::FieldState::Invalid
        );
    }

    #[test]
    fn work_panel_cycles_tabs() {
        let (mut app, now) = ready_app();
        app.select_panel(Panel::Work);
        handle_key(&mut app, press(KeyCode::Char('l')), now);
        assert_eq!(
            app.filter.active(),
            vitrine_core::filter::Tab::Category(0)
        );
        handle_key(&mut app, press(KeyCode::Char('h')), now);
        assert_eq!(app.filter.active(), vitrine_core::filter::Tab::All);
    }

    #[test]
    fn mouse_drag_swipes_the_showcase() {
        let (mut app, now) = ready_app();
        app.select_panel(Panel::Showcase);

        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 33,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        let up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 33,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, down, now);
        handle_mouse(&mut app, drag, now);
        handle_mouse(&mut app, up, now);
        // 7 columns leftward = 70 units, past the swipe threshold.
        assert!(app.carousel.as_ref().unwrap().is_animating());
    }

    #[test]
    fn every_binding_has_help_text() {
        assert!(key_bindings_help().len() >= 10);
    }
}
