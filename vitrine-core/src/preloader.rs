//! Boot preloader: a percentage that creeps up in random increments,
//! caps until the content is ready, then snaps to 100 and hides.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Interval between increments while loading.
pub const TICK_MS: u64 = 350;
/// The bar will not pass this until loading actually finishes.
pub const CAP_PCT: f64 = 85.0;
/// Pause at 100% before the overlay hides.
pub const HIDE_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    /// At 100%, waiting out the hide delay.
    Finishing { finished_at: u64 },
    Hidden,
}

#[derive(Debug)]
pub struct Preloader {
    pct: f64,
    phase: Phase,
    next_tick_at: u64,
    rng: StdRng,
}

impl Preloader {
    pub fn new(now_ms: u64, seed: u64) -> Self {
        Self {
            pct: 0.0,
            phase: Phase::Loading,
            next_tick_at: now_ms + TICK_MS,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pct(&self) -> f64 {
        self.pct
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == Phase::Hidden
    }

    /// While the overlay is up the document must not scroll.
    pub fn scroll_locked(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Content finished loading: snap to 100 and start the hide delay.
    pub fn finish_load(&mut self, now_ms: u64) {
        if self.phase == Phase::Loading {
            self.pct = 100.0;
            self.phase = Phase::Finishing { finished_at: now_ms };
        }
    }

    /// Advance the simulated progress. Returns true on the tick where the
    /// overlay hides, so the caller can unlock scrolling exactly once.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::Loading => {
                while now_ms >= self.next_tick_at {
                    let step: f64 = self.rng.gen_range(3.0..8.0);
                    self.pct = (self.pct + step).min(CAP_PCT);
                    self.next_tick_at += TICK_MS;
                }
                false
            }
            Phase::Finishing { finished_at } => {
                if now_ms >= finished_at + HIDE_DELAY_MS {
                    self.phase = Phase::Hidden;
                    true
                } else {
                    false
                }
            }
            Phase::Hidden => false,
        }
    }
}
