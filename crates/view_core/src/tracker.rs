use content::domain::{Section, SectionId};
use tracing::debug;

use crate::layout::{SectionLayout, Viewport};

/// Maps the current scroll position to the active section for the nav bar.
///
/// The scan walks sections in reverse document order and picks the first one
/// whose extent contains the probe point. When the probe misses every
/// measured section the previous answer is retained, so the nav highlight
/// never flickers off while scrolling through dead space.
pub struct SectionTracker {
    sections: Vec<Section>,
    active: Option<SectionId>,
}

impl SectionTracker {
    /// `sections` must be in document order.
    pub fn new(sections: &[Section]) -> Self {
        Self {
            sections: sections.to_vec(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Rescans against the given layout and viewport. Returns the new active
    /// id when it changed, `None` otherwise. Call once per scroll/frame and
    /// once eagerly after the first layout pass.
    pub fn observe(&mut self, layout: &SectionLayout, viewport: Viewport) -> Option<SectionId> {
        let probe = viewport.probe();

        for section in self.sections.iter().rev() {
            // Unmounted or unmeasured sections contribute no match.
            let Some(rect) = layout.get(section.id) else {
                continue;
            };
            if rect.contains(probe) {
                if self.active != Some(section.id) {
                    self.active = Some(section.id);
                    debug!(section = section.id.as_str(), "active section changed");
                    return Some(section.id);
                }
                return None;
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
