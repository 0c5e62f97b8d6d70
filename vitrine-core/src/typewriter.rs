//! Hero typewriter with a highlight-word style cycle.
//!
//! The headline types out character by character, then the highlight word
//! enters a permanent delete-and-retype loop, switching to the next font
//! style each time the word has been fully deleted.
//!
//! The machine stays dormant until [`Typewriter::start`] is called (the
//! adapter fires it when the preloader hides).

/// Delay between `start` and the first character.
pub const START_DELAY_MS: u64 = 600;
/// Per-character cadence of the initial type-out.
pub const TYPE_MS: u64 = 55;
/// Pause between the finished headline and the first delete.
pub const CYCLE_PAUSE_MS: u64 = 2_500;
/// Per-character delete cadence.
pub const DELETE_MS: u64 = 190;
/// Pause between a full delete and the retype, where the style swaps.
pub const STYLE_PAUSE_MS: u64 = 600;
/// Per-character retype cadence.
pub const RETYPE_MS: u64 = 200;
/// Hold with the word fully retyped before deleting again.
pub const HOLD_MS: u64 = 2_000;

/// One step of the highlight word's style cycle. Spacing is in hundredths
/// of an em; adapters map these onto whatever emphasis they can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    pub weight: u16,
    pub italic: bool,
    pub spacing_hundredths_em: i8,
}

pub const FONT_CYCLE: [FontStyle; 5] = [
    FontStyle { weight: 300, italic: false, spacing_hundredths_em: 4 },
    FontStyle { weight: 700, italic: false, spacing_hundredths_em: 0 },
    FontStyle { weight: 900, italic: true, spacing_hundredths_em: 0 },
    FontStyle { weight: 400, italic: false, spacing_hundredths_em: 4 },
    FontStyle { weight: 800, italic: false, spacing_hundredths_em: -2 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dormant,
    Starting { type_begins_at: u64 },
    Typing { shown: usize, next_at: u64 },
    CyclePause { until: u64 },
    Deleting { shown: usize, next_at: u64 },
    StylePause { until: u64 },
    Retyping { shown: usize, next_at: u64 },
    Hold { until: u64 },
    /// No highlight word in the headline: type out, then rest.
    Finished,
}

/// Styled segments an adapter renders: plain prefix, highlighted word (in
/// the current font style), plain suffix, trailing cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterVisual {
    pub prefix: String,
    pub word: String,
    pub suffix: String,
    pub style_index: usize,
    pub cursor: bool,
}

#[derive(Debug)]
pub struct Typewriter {
    full: Vec<char>,
    word: Vec<char>,
    /// Char index of the highlight word in the headline, if present.
    word_start: Option<usize>,
    style_index: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(headline: &str, highlight_word: &str) -> Self {
        let full: Vec<char> = headline.chars().collect();
        let word: Vec<char> = highlight_word.chars().collect();
        let word_start = if word.is_empty() {
            None
        } else {
            full.windows(word.len()).position(|w| w == word.as_slice())
        };
        Self {
            full,
            word,
            word_start,
            style_index: 0,
            phase: Phase::Dormant,
        }
    }

    /// Begin the animation (called when the preloader hides). Re-starting
    /// is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.phase == Phase::Dormant {
            self.phase = Phase::Starting {
                type_begins_at: now_ms + START_DELAY_MS,
            };
        }
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Dormant
    }

    pub fn style_index(&self) -> usize {
        self.style_index
    }

    pub fn current_style(&self) -> FontStyle {
        FONT_CYCLE[self.style_index]
    }

    /// Process every step due at or before `now_ms`. A late tick catches
    /// up: multiple characters may land in one call.
    pub fn advance(&mut self, now_ms: u64) {
        loop {
            match self.phase {
                Phase::Dormant | Phase::Finished => return,
                Phase::Starting { type_begins_at } => {
                    if now_ms < type_begins_at {
                        return;
                    }
                    // Nothing to type: rest immediately.
                    self.phase = if self.full.is_empty() {
                        Phase::Finished
                    } else {
                        Phase::Typing { shown: 0, next_at: type_begins_at }
                    };
                }
                Phase::Typing { shown, next_at } => {
                    if now_ms < next_at {
                        return;
                    }
                    let shown = shown + 1;
                    if shown == self.full.len() {
                        self.phase = match self.word_start {
                            Some(_) => Phase::CyclePause { until: next_at + CYCLE_PAUSE_MS },
                            None => Phase::Finished,
                        };
                    } else {
                        self.phase = Phase::Typing { shown, next_at: next_at + TYPE_MS };
                    }
                }
                Phase::CyclePause { until } => {
                    if now_ms < until {
                        return;
                    }
                    // The cycle opens with an immediate first delete.
                    self.phase = Phase::Deleting { shown: self.word.len(), next_at: until };
                }
                Phase::Deleting { shown, next_at } => {
                    if now_ms < next_at {
                        return;
                    }
                    let shown = shown.saturating_sub(1);
                    if shown == 0 {
                        self.style_index = (self.style_index + 1) % FONT_CYCLE.len();
                        self.phase = Phase::StylePause { until: next_at + STYLE_PAUSE_MS };
                    } else {
                        self.phase = Phase::Deleting { shown, next_at: next_at + DELETE_MS };
                    }
                }
                Phase::StylePause { until } => {
                    if now_ms < until {
                        return;
                    }
                    self.phase = Phase::Retyping { shown: 0, next_at: until };
                }
                Phase::Retyping { shown, next_at } => {
                    if now_ms < next_at {
                        return;
                    }
                    let shown = shown + 1;
                    if shown == self.word.len() {
                        self.phase = Phase::Hold { until: next_at + HOLD_MS };
                    } else {
                        self.phase = Phase::Retyping { shown, next_at: next_at + RETYPE_MS };
                    }
                }
                Phase::Hold { until } => {
                    if now_ms < until {
                        return;
                    }
                    self.phase = Phase::Deleting { shown: self.word.len(), next_at: until };
                }
            }
        }
    }

    fn collect(&self, range: std::ops::Range<usize>) -> String {
        self.full[range].iter().collect()
    }

    /// Split the fully-typed headline around the highlight word, showing
    /// `word_shown` of the word's characters.
    fn split_full(&self, word_shown: usize) -> TypewriterVisual {
        match self.word_start {
            Some(start) => TypewriterVisual {
                prefix: self.collect(0..start),
                word: self.word[..word_shown].iter().collect(),
                suffix: self.collect(start + self.word.len()..self.full.len()),
                style_index: self.style_index,
                cursor: true,
            },
            None => TypewriterVisual {
                prefix: self.full.iter().collect(),
                word: String::new(),
                suffix: String::new(),
                style_index: self.style_index,
                cursor: true,
            },
        }
    }

    pub fn visual_state(&self) -> TypewriterVisual {
        match self.phase {
            Phase::Dormant | Phase::Starting { .. } => TypewriterVisual {
                prefix: String::new(),
                word: String::new(),
                suffix: String::new(),
                style_index: self.style_index,
                cursor: true,
            },
            Phase::Typing { shown, .. } => {
                // The highlight kicks in only once the whole word is typed.
                let highlighted = self
                    .word_start
                    .is_some_and(|start| shown >= start + self.word.len());
                if highlighted {
                    let start = self.word_start.unwrap_or(0);
                    TypewriterVisual {
                        prefix: self.collect(0..start),
                        word: self.word.iter().collect(),
                        suffix: self.collect(start + self.word.len()..shown),
                        style_index: self.style_index,
                        cursor: true,
                    }
                } else {
                    TypewriterVisual {
                        prefix: self.collect(0..shown),
                        word: String::new(),
                        suffix: String::new(),
                        style_index: self.style_index,
                        cursor: true,
                    }
                }
            }
            Phase::CyclePause { .. } | Phase::Finished => self.split_full(self.word.len()),
            Phase::Deleting { shown, .. } | Phase::Retyping { shown, .. } => self.split_full(shown),
            Phase::StylePause { .. } => self.split_full(0),
            Phase::Hold { .. } => self.split_full(self.word.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Typewriter {
        // 8 chars, word at chars 3..8.
        Typewriter::new("We AMAZE", "AMAZE")
    }

    #[test]
    fn dormant_until_started() {
        let mut tw = machine();
        tw.advance(1_000_000);
        assert_eq!(tw.visual_state().prefix, "");
        tw.start(0);
        assert!(tw.started());
        tw.start(500); // no-op
        tw.advance(START_DELAY_MS);
        assert_eq!(tw.visual_state().prefix, "W");
    }

    #[test]
    fn types_at_fixed_cadence() {
        let mut tw = machine();
        tw.start(1_000);
        let begin = 1_000 + START_DELAY_MS;
        tw.advance(begin + 2 * TYPE_MS);
        assert_eq!(tw.visual_state().prefix, "We ");
    }

    #[test]
    fn highlight_appears_only_when_word_complete() {
        let mut tw = machine();
        tw.start(0);
        let begin = START_DELAY_MS;
        // 5 chars shown: "We AM" — partial word stays plain.
        tw.advance(begin + 4 * TYPE_MS);
        let vis = tw.visual_state();
        assert_eq!(vis.prefix, "We AM");
        assert_eq!(vis.word, "");

        // All 8 chars shown: word segment splits out.
        tw.advance(begin + 7 * TYPE_MS);
        let vis = tw.visual_state();
        assert_eq!(vis.prefix, "We ");
        assert_eq!(vis.word, "AMAZE");
        assert_eq!(vis.suffix, "");
    }

    #[test]
    fn cycle_deletes_swaps_style_retypes_holds() {
        let mut tw = machine();
        tw.start(0);
        let typed_at = START_DELAY_MS + 7 * TYPE_MS;
        let cycle_at = typed_at + CYCLE_PAUSE_MS;

        // First delete fires immediately at cycle start.
        tw.advance(cycle_at);
        assert_eq!(tw.visual_state().word, "AMAZ");
        assert_eq!(tw.style_index(), 0);

        // Fully deleted after four more steps; style advances.
        let deleted_at = cycle_at + 4 * DELETE_MS;
        tw.advance(deleted_at);
        assert_eq!(tw.visual_state().word, "");
        assert_eq!(tw.style_index(), 1);

        // Retype starts after the style pause, one char immediately.
        let retype_at = deleted_at + STYLE_PAUSE_MS;
        tw.advance(retype_at);
        assert_eq!(tw.visual_state().word, "A");

        let full_at = retype_at + 4 * RETYPE_MS;
        tw.advance(full_at);
        assert_eq!(tw.visual_state().word, "AMAZE");

        // Held, then deleting again.
        tw.advance(full_at + HOLD_MS);
        assert_eq!(tw.visual_state().word, "AMAZ");
    }

    #[test]
    fn style_cycle_wraps_after_five() {
        let mut tw = machine();
        tw.start(0);
        // Run long enough for six full cycles.
        tw.advance(120_000);
        assert!(tw.style_index() < FONT_CYCLE.len());
        // One full delete+retype round trip advances the style exactly once.
        let before = tw.style_index();
        let round = 5 * DELETE_MS + STYLE_PAUSE_MS + 5 * RETYPE_MS + HOLD_MS;
        tw.advance(120_000 + round);
        assert_ne!(tw.style_index(), before);
    }

    #[test]
    fn missing_word_types_then_rests() {
        let mut tw = Typewriter::new("Hello there", "AMAZE");
        tw.start(0);
        tw.advance(60_000);
        let vis = tw.visual_state();
        assert_eq!(vis.prefix, "Hello there");
        assert_eq!(vis.word, "");
        // No cycle: the state is stable forever.
        tw.advance(600_000);
        assert_eq!(tw.visual_state().prefix, "Hello there");
    }

    #[test]
    fn empty_headline_rests_without_typing() {
        let mut tw = Typewriter::new("", "");
        tw.start(0);
        tw.advance(START_DELAY_MS + 100);
        let vis = tw.visual_state();
        assert_eq!(vis.prefix, "");
        assert_eq!(vis.word, "");
        assert_eq!(vis.suffix, "");
        tw.advance(600_000);
        assert_eq!(tw.visual_state().prefix, "");
    }

    #[test]
    fn late_tick_catches_up() {
        let mut tw = machine();
        tw.start(0);
        // One giant jump straight into the steady-state cycle.
        tw.advance(30_000);
        let vis = tw.visual_state();
        assert_eq!(vis.prefix, "We ");
        assert!(vis.word.len() <= 5);
    }
}
