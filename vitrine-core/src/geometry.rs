//! Rect/viewport intersection — the shared primitive behind scroll reveals
//! and the carousel's keyboard visibility guard.
//!
//! Coordinates are document-space units: y grows downward, the viewport is
//! the band `[scroll_y, scroll_y + height)`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }
}

/// Fraction of the rect's height inside the viewport band, with the band's
/// bottom edge pulled up by `root_margin_bottom` units. Zero-height rects
/// report 1.0 when their line is inside the band.
pub fn intersection_ratio(rect: &Rect, viewport: &Viewport, root_margin_bottom: f64) -> f64 {
    let band_top = viewport.scroll_y;
    let band_bottom = viewport.bottom() - root_margin_bottom;
    if band_bottom <= band_top {
        return 0.0;
    }

    let top = rect.y.max(band_top);
    let bottom = rect.bottom().min(band_bottom);
    if bottom < top {
        return 0.0;
    }
    if rect.height <= 0.0 {
        return 1.0;
    }
    ((bottom - top) / rect.height).clamp(0.0, 1.0)
}

/// True when any part of the rect is inside the unmargined viewport.
pub fn intersects(rect: &Rect, viewport: &Viewport) -> bool {
    intersection_ratio(rect, viewport, 0.0) > 0.0
}
