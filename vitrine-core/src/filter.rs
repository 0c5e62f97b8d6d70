//! Portfolio tab filtering with staggered card reveals.
//!
//! One tab is active at a time (`All` plus one per category). Switching
//! tabs fades newly hidden cards out over 200 ms, staggers newly visible
//! cards in at 80 ms per visible position, and recomputes the 12-column
//! grid layout from the visible count.

use crate::easing;

/// Per-visible-position reveal stagger.
pub const STAGGER_MS: u64 = 80;
/// Reveal fade/slide duration.
pub const REVEAL_MS: u64 = 400;
/// Hide fade duration before a card leaves the layout.
pub const HIDE_MS: u64 = 200;
/// Vertical slide-in distance, in document units.
pub const REVEAL_RISE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    /// Index into the category list.
    Category(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Small,
}

/// Desired visual state of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// False once the card has fully left the layout.
    pub visible: bool,
    pub opacity: f64,
    /// Remaining translate-y of the slide-in, in document units.
    pub rise: f64,
    /// 12-column grid span; 0 while hidden.
    pub span: u8,
    pub size: CardSize,
}

#[derive(Debug)]
pub struct TabFilter {
    categories: Vec<String>,
    card_categories: Vec<String>,
    active: Tab,
    switched_at: u64,
    was_visible: Vec<bool>,
}

impl TabFilter {
    pub fn new(categories: Vec<String>, card_categories: Vec<String>) -> Self {
        let card_count = card_categories.len();
        Self {
            categories,
            card_categories,
            active: Tab::All,
            switched_at: 0,
            was_visible: vec![true; card_count],
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tab_count(&self) -> usize {
        self.categories.len() + 1
    }

    pub fn tab_label(&self, tab: Tab) -> &str {
        match tab {
            Tab::All => "All",
            Tab::Category(i) => self.categories.get(i).map(String::as_str).unwrap_or(""),
        }
    }

    pub fn tab_at(&self, index: usize) -> Option<Tab> {
        match index {
            0 => Some(Tab::All),
            i if i <= self.categories.len() => Some(Tab::Category(i - 1)),
            _ => None,
        }
    }

    fn matches(&self, card: usize, tab: Tab) -> bool {
        match tab {
            Tab::All => true,
            Tab::Category(i) => self
                .categories
                .get(i)
                .is_some_and(|cat| self.card_categories[card] == *cat),
        }
    }

    /// Activate a tab. Reselecting the active tab replays the reveal, as
    /// the original does.
    pub fn select(&mut self, now_ms: u64, tab: Tab) {
        self.was_visible = (0..self.card_categories.len())
            .map(|i| self.matches(i, self.active))
            .collect();
        self.active = tab;
        self.switched_at = now_ms;
    }

    pub fn select_index(&mut self, now_ms: u64, index: usize) -> bool {
        match self.tab_at(index) {
            Some(tab) => {
                self.select(now_ms, tab);
                true
            }
            None => false,
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.card_categories.len())
            .filter(|&i| self.matches(i, self.active))
            .collect()
    }

    /// Grid layout for a card at `visible_pos` among `visible_count` cards:
    /// one card spans the full 12 columns, two split 6/6, otherwise
    /// positions alternate large(7)/small(5).
    pub fn layout(visible_count: usize, visible_pos: usize) -> (u8, CardSize) {
        if visible_count <= 2 {
            let span = if visible_count == 1 { 12 } else { 6 };
            (span, CardSize::Large)
        } else if visible_pos % 2 == 0 {
            (7, CardSize::Large)
        } else {
            (5, CardSize::Small)
        }
    }

    pub fn visual_state(&self, now_ms: u64) -> Vec<CardVisual> {
        let elapsed = now_ms.saturating_sub(self.switched_at);
        let visible = self.visible_indices();
        let mut out = Vec::with_capacity(self.card_categories.len());

        for card in 0..self.card_categories.len() {
            let shown = self.matches(card, self.active);
            if shown {
                let pos = visible.iter().position(|&v| v == card).unwrap_or(0);
                let (span, size) = Self::layout(visible.len(), pos);
                let delay = pos as u64 * STAGGER_MS;
                let t = easing::progress(elapsed.saturating_sub(delay), REVEAL_MS);
                let eased = easing::ease_out_cubic(t);
                out.push(CardVisual {
                    visible: true,
                    opacity: eased,
                    rise: REVEAL_RISE * (1.0 - eased),
                    span,
                    size,
                });
            } else if self.was_visible[card] && elapsed < HIDE_MS {
                // Fading out before leaving the layout.
                let t = easing::progress(elapsed, HIDE_MS);
                out.push(CardVisual {
                    visible: true,
                    opacity: 1.0 - t,
                    rise: 0.0,
                    span: 0,
                    size: CardSize::Small,
                });
            } else {
                out.push(CardVisual {
                    visible: false,
                    opacity: 0.0,
                    rise: 0.0,
                    span: 0,
                    size: CardSize::Small,
                });
            }
        }
        out
    }
}
