//! Scroll-triggered reveals: each observed element fires once when enough
//! of it enters the (margin-adjusted) viewport, then is forgotten.

use crate::geometry::{intersection_ratio, Rect, Viewport};

/// Stagger between consecutive children of a group reveal.
pub const CHILD_STAGGER_MS: u64 = 120;
/// Gallery curtain stagger per grid row / column (3-column grid).
pub const CURTAIN_ROW_MS: u64 = 150;
pub const CURTAIN_COL_MS: u64 = 100;

/// Observation parameters for one element.
#[derive(Debug, Clone, Copy)]
pub struct RevealTarget {
    pub rect: Rect,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Pulls the viewport bottom up, delaying below-the-fold reveals.
    pub root_margin_bottom: f64,
    /// Children revealed with a stagger once the parent fires.
    pub child_count: usize,
}

impl RevealTarget {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            threshold: 0.1,
            root_margin_bottom: 40.0,
            child_count: 0,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin_bottom(mut self, margin: f64) -> Self {
        self.root_margin_bottom = margin;
        self
    }

    pub fn with_children(mut self, count: usize) -> Self {
        self.child_count = count;
        self
    }
}

#[derive(Debug, Default)]
pub struct RevealEngine {
    targets: Vec<RevealTarget>,
    revealed_at: Vec<Option<u64>>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe an element; the returned id indexes later queries.
    pub fn observe(&mut self, target: RevealTarget) -> usize {
        self.targets.push(target);
        self.revealed_at.push(None);
        self.targets.len() - 1
    }

    /// Layout moved; update an element's rect (no effect once revealed).
    pub fn set_rect(&mut self, id: usize, rect: Rect) {
        if let Some(target) = self.targets.get_mut(id) {
            target.rect = rect;
        }
    }

    /// Check every unrevealed element against the viewport; returns the ids
    /// that fired this update. One-shot: a revealed element never re-fires.
    pub fn update(&mut self, now_ms: u64, viewport: &Viewport) -> Vec<usize> {
        let mut fired = Vec::new();
        for (id, target) in self.targets.iter().enumerate() {
            if self.revealed_at[id].is_some() {
                continue;
            }
            let ratio = intersection_ratio(&target.rect, viewport, target.root_margin_bottom);
            if ratio >= target.threshold && ratio > 0.0 {
                self.revealed_at[id] = Some(now_ms);
                fired.push(id);
            }
        }
        fired
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed_at.get(id).copied().flatten().is_some()
    }

    pub fn revealed_since(&self, id: usize, now_ms: u64) -> Option<u64> {
        self.revealed_at
            .get(id)
            .copied()
            .flatten()
            .map(|at| now_ms.saturating_sub(at))
    }

    /// Transition delay for the nth child of a staggered group.
    pub fn child_delay_ms(child_index: usize) -> u64 {
        child_index as u64 * CHILD_STAGGER_MS
    }

    /// Curtain delay for a gallery item in a 3-column grid.
    pub fn curtain_delay_ms(item_index: usize) -> u64 {
        let row = (item_index / 3) as u64;
        let col = (item_index % 3) as u64;
        row * CURTAIN_ROW_MS + col * CURTAIN_COL_MS
    }
}
