//! Slide carousel controller.
//!
//! A small finite set of mutually exclusive slides, exactly one active at a
//! time. Transitions are serialized by an animation lock: a request while a
//! transition is in flight is dropped, not queued. Completion is an explicit
//! timer deadline owned by the controller, so it always fires a fixed
//! duration after the transition starts — unless the controller itself is
//! torn down, which drops the deadline with it.
//!
//! The controller's only output is [`CarouselVisual`], a declarative
//! snapshot an adapter renders: active index, track height, and per-slide
//! offset/opacity/visibility.

use crate::clock::{Scheduler, TimerId};
use crate::easing;

/// Fixed transition duration; the lock is held exactly this long.
pub const TRANSITION_MS: u64 = 550;
/// Net horizontal drag magnitude required to navigate on release.
pub const DRAG_THRESHOLD: f64 = 50.0;
/// Height readings below this are treated as still-loading and discarded.
pub const MIN_TRACK_HEIGHT: f64 = 100.0;
/// Re-measure delays after init, to absorb late-arriving content.
pub const SETTLE_DELAYS_MS: [u64; 3] = [500, 1000, 2000];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
        started_at: u64,
    },
}

#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    origin: Option<f64>,
    delta: f64,
}

/// Desired visual state of one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    /// Horizontal offset as a fraction of track width; negative is left.
    pub offset: f64,
    pub opacity: f64,
    pub visible: bool,
    pub interactive: bool,
    /// Carries the active marker (mirrors the dot indicator).
    pub active: bool,
}

impl SlideVisual {
    const HIDDEN: SlideVisual = SlideVisual {
        offset: 0.0,
        opacity: 0.0,
        visible: false,
        interactive: false,
        active: false,
    };

    /// True when the slide carries no transient transition overrides.
    pub fn is_neutral(&self) -> bool {
        self.offset == 0.0 && (self.opacity == 0.0 || self.opacity == 1.0)
    }
}

/// Declarative snapshot of the whole carousel.
#[derive(Debug, Clone)]
pub struct CarouselVisual {
    /// Index the dot indicators mark as active.
    pub active: usize,
    pub track_height: f64,
    pub slides: Vec<SlideVisual>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    TransitionFinished { current: usize },
    /// The adapter should re-measure the active slide's natural height.
    RemeasureNeeded,
}

#[derive(Debug)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    phase: Phase,
    drag: DragState,
    track_height: f64,
    timers: Scheduler,
    settle: Vec<TimerId>,
    finish: Option<TimerId>,
    pending: Vec<CarouselEvent>,
}

impl Carousel {
    /// Returns `None` for an empty slide set — the feature stays disabled.
    pub fn new(now_ms: u64, slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        let mut timers = Scheduler::new();
        let settle = SETTLE_DELAYS_MS
            .iter()
            .map(|&delay| timers.schedule(now_ms, delay))
            .collect();
        Some(Self {
            slide_count,
            current: 0,
            phase: Phase::Idle,
            drag: DragState::default(),
            track_height: MIN_TRACK_HEIGHT,
            timers,
            settle,
            finish: None,
            pending: vec![CarouselEvent::RemeasureNeeded],
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    /// Index the dot indicators mark: the destination as soon as a
    /// transition starts, `current` otherwise.
    pub fn active_indicator(&self) -> usize {
        match self.phase {
            Phase::Transitioning { to, .. } => to,
            Phase::Idle => self.current,
        }
    }

    /// Wrap-around next: direction is always explicit, never inferred.
    pub fn next(&mut self, now_ms: u64) -> bool {
        let target = if self.current + 1 == self.slide_count {
            0
        } else {
            self.current + 1
        };
        self.request(now_ms, target, Some(Direction::Next))
    }

    /// Wrap-around prev: direction is always explicit, never inferred.
    pub fn prev(&mut self, now_ms: u64) -> bool {
        let target = if self.current == 0 {
            self.slide_count - 1
        } else {
            self.current - 1
        };
        self.request(now_ms, target, Some(Direction::Prev))
    }

    /// Dot selection: direction inferred from index comparison.
    pub fn select(&mut self, now_ms: u64, target: usize) -> bool {
        self.request(now_ms, target, None)
    }

    /// Request a transition. Rejected (no-op, returns false) while a
    /// transition is in flight, when the target is the current index, or
    /// when the target is out of range.
    pub fn request(&mut self, now_ms: u64, target: usize, direction: Option<Direction>) -> bool {
        if self.is_animating() || target == self.current || target >= self.slide_count {
            return false;
        }
        let direction = direction.unwrap_or(if target > self.current {
            Direction::Next
        } else {
            Direction::Prev
        });
        self.phase = Phase::Transitioning {
            from: self.current,
            to: target,
            direction,
            started_at: now_ms,
        };
        self.finish = Some(self.timers.schedule(now_ms, TRANSITION_MS));
        true
    }

    /// Arrow-key navigation, honored only while the carousel is visible.
    pub fn key_left(&mut self, now_ms: u64, visible: bool) -> bool {
        if !visible {
            return false;
        }
        self.prev(now_ms)
    }

    pub fn key_right(&mut self, now_ms: u64, visible: bool) -> bool {
        if !visible {
            return false;
        }
        self.next(now_ms)
    }

    /// Apply a measured natural height to the track. Readings under the
    /// sanity floor are discarded and the prior height is retained.
    pub fn set_measured_height(&mut self, height: f64) {
        if height >= MIN_TRACK_HEIGHT {
            self.track_height = height;
        }
    }

    /// A window-resize analog: the track needs re-measuring.
    pub fn on_resize(&mut self) {
        self.pending.push(CarouselEvent::RemeasureNeeded);
    }

    /// Content finished loading inside the active slide.
    pub fn on_content_loaded(&mut self) {
        self.pending.push(CarouselEvent::RemeasureNeeded);
    }

    /// Begin drag tracking. Ignored while a transition is in flight.
    pub fn drag_start(&mut self, x: f64) {
        if self.is_animating() {
            return;
        }
        self.drag.origin = Some(x);
        self.drag.delta = 0.0;
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Some(origin) = self.drag.origin {
            self.drag.delta = x - origin;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.origin.is_some()
    }

    pub fn drag_delta(&self) -> f64 {
        self.drag.delta
    }

    /// Release the drag: past the threshold, leftward delta navigates next
    /// and rightward navigates prev. Tracking resets regardless of outcome.
    pub fn drag_end(&mut self, now_ms: u64) -> bool {
        let delta = self.drag.delta;
        let was_dragging = self.drag.origin.is_some();
        self.drag = DragState::default();
        if !was_dragging {
            return false;
        }
        if delta <= -DRAG_THRESHOLD {
            self.next(now_ms)
        } else if delta >= DRAG_THRESHOLD {
            self.prev(now_ms)
        } else {
            false
        }
    }

    /// Drive deferred completions. The transition completes unconditionally
    /// once the fixed duration elapses; there is no success/failure branch.
    pub fn advance(&mut self, now_ms: u64) -> Vec<CarouselEvent> {
        let mut events = std::mem::take(&mut self.pending);
        for id in self.timers.due(now_ms) {
            if self.finish == Some(id) {
                self.finish = None;
                if let Phase::Transitioning { to, .. } = self.phase {
                    self.current = to;
                    self.phase = Phase::Idle;
                    events.push(CarouselEvent::TransitionFinished { current: to });
                }
            } else if self.settle.contains(&id) {
                events.push(CarouselEvent::RemeasureNeeded);
            }
        }
        events
    }

    /// Declarative snapshot at `now_ms`. Idle: the current slide centered,
    /// fully visible, interactive; everything else hidden. Transitioning:
    /// source and destination interpolate offset/opacity, neither is
    /// interactive, and the destination starts fully offset in the
    /// direction of travel.
    pub fn visual_state(&self, now_ms: u64) -> CarouselVisual {
        let mut slides = vec![SlideVisual::HIDDEN; self.slide_count];
        match self.phase {
            Phase::Idle => {
                slides[self.current] = SlideVisual {
                    offset: 0.0,
                    opacity: 1.0,
                    visible: true,
                    interactive: true,
                    active: true,
                };
            }
            Phase::Transitioning {
                from,
                to,
                direction,
                started_at,
            } => {
                let t = easing::progress(now_ms.saturating_sub(started_at), TRANSITION_MS);
                let eased = easing::ease_out_cubic(t);
                // Next enters from the right and exits left; Prev mirrors.
                let sign = match direction {
                    Direction::Next => 1.0,
                    Direction::Prev => -1.0,
                };
                slides[from] = SlideVisual {
                    offset: -sign * eased,
                    opacity: 1.0 - eased,
                    visible: true,
                    interactive: false,
                    active: false,
                };
                slides[to] = SlideVisual {
                    offset: sign * (1.0 - eased),
                    opacity: eased,
                    visible: eased > 0.0,
                    interactive: false,
                    active: true,
                };
            }
        }
        CarouselVisual {
            active: self.active_indicator(),
            track_height: self.track_height,
            slides,
        }
    }
}
