//! Vitrine TUI — a portfolio site reimagined as six terminal panels.
//!
//! Panels:
//! 1. Hero — preloader, typewriter headline, particle canvas
//! 2. Work — category tabs over the filtered card grid
//! 3. Showcase — the slide carousel
//! 4. Numbers — animated stat counters
//! 5. Contact — validated contact form
//! 6. Help — keyboard shortcuts

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use vitrine_core::content::{default_site, SiteContent};

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Content: an explicit TOML path, or the built-in demo site.
    let content = match std::env::args().nth(1) {
        Some(path) => SiteContent::from_path(PathBuf::from(&path).as_path())
            .with_context(|| format!("loading site content from {path}"))?,
        None => default_site(),
    };

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitrine")
        .join("state.json");

    let persisted = persistence::load(&state_path);

    let clock = Instant::now();
    let seed = rand::random();
    let mut app = AppState::new(0, content, seed, state_path);
    persistence::apply(&mut app, persisted);
    if app.carousel.is_none() {
        app.set_warning("Content has no slides; the showcase panel is disabled");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, clock);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&app.state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    clock: Instant,
) -> Result<()> {
    loop {
        let now_ms = clock.elapsed().as_millis() as u64;

        // 1. Render
        terminal.draw(|f| ui::draw(f, app, now_ms))?;

        // 2. The first completed frame counts as the content load.
        app.mark_loaded(now_ms);

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            let now_ms = clock.elapsed().as_millis() as u64;
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key, now_ms),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, now_ms),
                Event::Resize(cols, rows) => app.on_resize(cols, rows),
                _ => {}
            }
        }

        // 4. Advance every controller to the current instant.
        app.tick(clock.elapsed().as_millis() as u64);

        if !app.running {
            break;
        }
    }
    Ok(())
}
