//! Application state — single-owner, main-thread only.
//!
//! The controllers in vitrine-core are pure and tick-driven; this module
//! owns them, maps the six panels onto a scrolling "document" of
//! sections, and feeds every controller the same monotonic clock.

use std::path::PathBuf;

use vitrine_core::carousel::{Carousel, CarouselEvent};
use vitrine_core::content::SiteContent;
use vitrine_core::counter::{CounterBank, ARM_THRESHOLD};
use vitrine_core::form::{ContactForm, Field};
use vitrine_core::geometry::{Rect as DocRect, Viewport};
use vitrine_core::particles::ParticleField;
use vitrine_core::preloader::Preloader;
use vitrine_core::reveal::{RevealEngine, RevealTarget};
use vitrine_core::scrollstate::{ScrollState, Section};
use vitrine_core::typewriter::Typewriter;

/// Height of one section page, in document units.
pub const PAGE_UNITS: f64 = 800.0;
/// Document units per terminal row.
pub const UNITS_PER_ROW: f64 = 16.0;
/// Document units per terminal column, used for drag distances.
pub const UNITS_PER_COL: f64 = 10.0;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Panel {
    Hero,
    Work,
    Showcase,
    Numbers,
    Contact,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Hero => 0,
            Panel::Work => 1,
            Panel::Showcase => 2,
            Panel::Numbers => 3,
            Panel::Contact => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Hero),
            1 => Some(Panel::Work),
            2 => Some(Panel::Showcase),
            3 => Some(Panel::Numbers),
            4 => Some(Panel::Contact),
            5 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Hero => "Hero",
            Panel::Work => "Work",
            Panel::Showcase => "Showcase",
            Panel::Numbers => "Numbers",
            Panel::Contact => "Contact",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap()
    }

    /// Help floats outside the scrolling document.
    pub fn is_section(self) -> bool {
        self != Panel::Help
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Modal overlay on top of the active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
}

/// All TUI state.
pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub state_path: PathBuf,

    pub content: SiteContent,
    pub preloader: Preloader,
    pub typewriter: Typewriter,
    pub particles: ParticleField,
    /// `None` when the content has no slides; the panel renders a notice.
    pub carousel: Option<Carousel>,
    pub filter: vitrine_core::filter::TabFilter,
    pub counters: CounterBank,
    pub reveals: RevealEngine,
    pub scroll: ScrollState,

    pub form: ContactForm,
    pub form_focus: Field,
    /// True while keystrokes go into the focused form field.
    pub form_editing: bool,

    /// Reveal ids, one per section, in panel order.
    section_reveals: Vec<usize>,
    /// Dedicated trigger that arms the counters.
    counter_reveal: usize,
    loaded: bool,
}

impl AppState {
    pub fn new(now_ms: u64, content: SiteContent, seed: u64, state_path: PathBuf) -> Self {
        let sections: Vec<Section> = ["hero", "work", "showcase", "numbers", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| Section {
                id: (*id).to_string(),
                top: i as f64 * PAGE_UNITS,
            })
            .collect();
        let document_height = sections.len() as f64 * PAGE_UNITS;
        let scroll = ScrollState::new(PAGE_UNITS, document_height, sections);

        let mut reveals = RevealEngine::new();
        let section_reveals = (0..5)
            .map(|i| {
                reveals.observe(RevealTarget::new(DocRect::new(
                    0.0,
                    i as f64 * PAGE_UNITS,
                    1000.0,
                    PAGE_UNITS,
                )))
            })
            .collect();
        let counter_reveal = reveals.observe(
            RevealTarget::new(DocRect::new(0.0, 3.0 * PAGE_UNITS, 1000.0, PAGE_UNITS))
                .with_threshold(ARM_THRESHOLD)
                .with_root_margin_bottom(0.0),
        );

        let typewriter = Typewriter::new(&content.hero.headline, &content.hero.highlight_word);
        let filter = vitrine_core::filter::TabFilter::new(
            content.categories.clone(),
            content.card_categories(),
        );
        let counters = CounterBank::new(&content.stats);
        let carousel = Carousel::new(now_ms, content.slides.len());

        Self {
            running: true,
            active_panel: Panel::Hero,
            overlay: Overlay::Welcome,
            status_message: None,
            state_path,
            preloader: Preloader::new(now_ms, seed),
            typewriter,
            particles: ParticleField::new(1000.0, 600.0, seed),
            carousel,
            filter,
            counters,
            reveals,
            scroll,
            form: ContactForm::new(),
            form_focus: Field::Name,
            form_editing: false,
            section_reveals,
            counter_reveal,
            loaded: false,
            content,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll.scroll_y(), PAGE_UNITS)
    }

    /// Jump the document to a panel's section and make it active.
    pub fn select_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
        if panel.is_section() && !self.preloader.scroll_locked() {
            if let Some(top) = self.scroll.section_top(panel.index()) {
                self.scroll.set_scroll(top);
            }
        }
    }

    /// Scroll the document; the active panel follows the active section.
    pub fn scroll_by(&mut self, delta: f64) {
        if self.preloader.scroll_locked() {
            return;
        }
        self.scroll.scroll_by(delta);
        if self.active_panel.is_section() {
            if let Some(section) = self.scroll.active_section() {
                if let Some(panel) = Panel::from_index(section) {
                    self.active_panel = panel;
                }
            }
        }
    }

    /// Fraction of the showcase section currently in the viewport.
    pub fn showcase_ratio(&self) -> f64 {
        let rect = DocRect::new(0.0, 2.0 * PAGE_UNITS, 1000.0, PAGE_UNITS);
        vitrine_core::geometry::intersection_ratio(&rect, &self.viewport(), 0.0)
    }

    /// Arrow keys reach the carousel whenever any part of the showcase
    /// section is on screen.
    pub fn showcase_visible(&self) -> bool {
        self.showcase_ratio() > 0.0
    }

    /// Milliseconds since a panel's section first scrolled into view, or
    /// `None` while it is still unrevealed.
    pub fn section_revealed_since(&self, panel: Panel, now_ms: u64) -> Option<u64> {
        self.section_reveals
            .get(panel.index())
            .and_then(|&id| self.reveals.revealed_since(id, now_ms))
    }

    /// The active slide's natural height in document units, derived from
    /// how many rows its text wraps into.
    fn natural_slide_height(&self, index: usize) -> f64 {
        let Some(slide) = self.content.slides.get(index) else {
            return 0.0;
        };
        let body_rows = slide.body.len() / 48 + 1;
        (3 + body_rows) as f64 * UNITS_PER_ROW + 120.0
    }

    /// First frame drawn: the content is "loaded". Snaps the preloader
    /// toward done and asks the carousel to measure real heights.
    pub fn mark_loaded(&mut self, now_ms: u64) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.preloader.finish_load(now_ms);
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.on_content_loaded();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.particles.resize(
            f64::from(cols) * UNITS_PER_COL,
            f64::from(rows) * UNITS_PER_ROW,
        );
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.on_resize();
        }
    }

    /// One clock tick: drive every controller forward to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if self.preloader.advance(now_ms) {
            // Overlay just hid: the page is interactive, start the hero.
            self.typewriter.start(now_ms);
            self.set_status("Ready");
        }

        self.typewriter.advance(now_ms);

        // Particles only animate while the hero is on screen.
        let hero_rect = DocRect::new(0.0, 0.0, 1000.0, PAGE_UNITS);
        if vitrine_core::geometry::intersects(&hero_rect, &self.viewport()) {
            self.particles.step();
        }

        let events = match self.carousel.as_mut() {
            Some(carousel) => carousel.advance(now_ms),
            None => Vec::new(),
        };
        for event in events {
            // Both completion and explicit remeasure requests re-apply the
            // active slide's natural height.
            let index = match event {
                CarouselEvent::TransitionFinished { current } => current,
                CarouselEvent::RemeasureNeeded => {
                    self.carousel.as_ref().map_or(0, Carousel::current)
                }
            };
            let natural = self.natural_slide_height(index);
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.set_measured_height(natural);
            }
        }

        let viewport = self.viewport();
        for id in self.reveals.update(now_ms, &viewport) {
            if id == self.counter_reveal {
                self.counters.arm(now_ms);
            }
        }

        self.form.advance(now_ms);
    }
}
