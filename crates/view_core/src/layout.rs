use std::collections::HashMap;

use content::domain::SectionId;

/// What the rendering layer knows about the visible page on a given frame.
/// Offsets are in content coordinates (0 = top of the page content).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

impl Viewport {
    /// The vertical coordinate that decides which section counts as
    /// "currently viewed": one third of the viewport below its top edge.
    pub fn probe(&self) -> f32 {
        self.scroll_offset + self.height / 3.0
    }
}

/// Measured vertical extent of one mounted section, content-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Extent is half-open: a probe exactly on the seam between two adjacent
    /// sections belongs to the later one.
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Fraction of this section currently inside the viewport, in `[0, 1]`.
    pub fn intersection_ratio(&self, viewport: Viewport) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let view_top = viewport.scroll_offset;
        let view_bottom = viewport.scroll_offset + viewport.height;
        let visible = (self.bottom().min(view_bottom) - self.top.max(view_top)).max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// Registry of section measurements, refreshed by the rendering layer as it
/// lays sections out. A section that was never recorded (or was forgotten)
/// simply does not participate in any scan.
#[derive(Debug, Default)]
pub struct SectionLayout {
    rects: HashMap<SectionId, SectionRect>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: SectionId, rect: SectionRect) {
        self.rects.insert(id, rect);
    }

    pub fn forget(&mut self, id: SectionId) {
        self.rects.remove(&id);
    }

    pub fn get(&self, id: SectionId) -> Option<SectionRect> {
        self.rects.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
