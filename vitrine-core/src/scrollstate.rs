//! Document scroll bookkeeping: nav compaction, read progress, and the
//! currently active section.

/// Scroll offset past which the nav compacts.
pub const NAV_SCROLL_THRESHOLD: f64 = 60.0;
/// Offset added when deciding which section is active, so a section
/// activates a little before its top reaches the viewport top.
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    /// Document-space top of the section.
    pub top: f64,
}

#[derive(Debug, Default)]
pub struct ScrollState {
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
    sections: Vec<Section>,
}

impl ScrollState {
    pub fn new(viewport_height: f64, document_height: f64, sections: Vec<Section>) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height,
            document_height,
            sections,
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll(self.scroll_y + delta);
    }

    pub fn resize(&mut self, viewport_height: f64, document_height: f64) {
        self.viewport_height = viewport_height;
        self.document_height = document_height;
        self.set_scroll(self.scroll_y);
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// True once the page has scrolled enough to compact the nav.
    pub fn scrolled(&self) -> bool {
        self.scroll_y > NAV_SCROLL_THRESHOLD
    }

    /// Read progress through the scrollable range, 0..=100.
    pub fn progress_pct(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / max * 100.0).clamp(0.0, 100.0)
    }

    /// Index of the last section whose top has passed the activation line.
    /// Falls back to the first section near the top of the document.
    pub fn active_section(&self) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        let line = self.scroll_y + SECTION_ACTIVATION_OFFSET;
        let mut active = 0;
        for (i, section) in self.sections.iter().enumerate() {
            if section.top <= line {
                active = i;
            }
        }
        Some(active)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Document top of section `index`, for jump-to-section navigation.
    pub fn section_top(&self, index: usize) -> Option<f64> {
        self.sections.get(index).map(|s| s.top)
    }
}
