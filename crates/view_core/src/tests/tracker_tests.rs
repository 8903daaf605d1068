use super::*;
use content::domain::{Section, SectionId};

use crate::layout::{SectionLayout, SectionRect, Viewport};

const A: SectionId = SectionId("a");
const B: SectionId = SectionId("b");
const C: SectionId = SectionId("c");

fn sections() -> Vec<Section> {
    vec![
        Section { id: A, label: "A" },
        Section { id: B, label: "B" },
        Section { id: C, label: "C" },
    ]
}

fn stacked_layout() -> SectionLayout {
    let mut layout = SectionLayout::new();
    layout.record(
        A,
        SectionRect {
            top: 0.0,
            height: 100.0,
        },
    );
    layout.record(
        B,
        SectionRect {
            top: 100.0,
            height: 100.0,
        },
    );
    layout.record(
        C,
        SectionRect {
            top: 200.0,
            height: 100.0,
        },
    );
    layout
}

/// Probe = scroll + height / 3; pick viewport heights so the probe lands
/// where each test needs it.
fn viewport_with_probe(probe: f32) -> Viewport {
    Viewport {
        scroll_offset: probe - 30.0,
        height: 90.0,
    }
}

#[test]
fn probe_inside_a_section_activates_it() {
    let mut tracker = SectionTracker::new(&sections());
    let layout = stacked_layout();

    assert_eq!(
        tracker.observe(&layout, viewport_with_probe(50.0)),
        Some(A)
    );
    assert_eq!(tracker.active(), Some(A));

    assert_eq!(
        tracker.observe(&layout, viewport_with_probe(250.0)),
        Some(C)
    );
    assert_eq!(tracker.active(), Some(C));
}

#[test]
fn boundary_probe_resolves_to_the_later_section() {
    let mut tracker = SectionTracker::new(&sections());
    let layout = stacked_layout();

    tracker.observe(&layout, viewport_with_probe(100.0));
    assert_eq!(tracker.active(), Some(B));
}

#[test]
fn no_match_retains_the_previous_active_section() {
    let mut tracker = SectionTracker::new(&sections());
    let layout = stacked_layout();

    tracker.observe(&layout, viewport_with_probe(150.0));
    assert_eq!(tracker.active(), Some(B));

    // Probe far past every section: previous answer stands.
    assert_eq!(tracker.observe(&layout, viewport_with_probe(900.0)), None);
    assert_eq!(tracker.active(), Some(B));
}

#[test]
fn starts_with_no_active_section_until_a_probe_hits() {
    let mut tracker = SectionTracker::new(&sections());
    let layout = stacked_layout();

    assert_eq!(tracker.active(), None);
    assert_eq!(tracker.observe(&layout, viewport_with_probe(900.0)), None);
    assert_eq!(tracker.active(), None);
}

#[test]
fn unmeasured_section_is_skipped() {
    let mut tracker = SectionTracker::new(&sections());
    let mut layout = stacked_layout();
    layout.forget(B);

    // Probe inside B's old extent; with B unmounted nothing matches and the
    // previous value (none) is retained.
    assert_eq!(tracker.observe(&layout, viewport_with_probe(150.0)), None);
    assert_eq!(tracker.active(), None);

    // Other sections still match normally.
    assert_eq!(
        tracker.observe(&layout, viewport_with_probe(250.0)),
        Some(C)
    );
}

#[test]
fn observe_reports_changes_only() {
    let mut tracker = SectionTracker::new(&sections());
    let layout = stacked_layout();

    assert_eq!(
        tracker.observe(&layout, viewport_with_probe(50.0)),
        Some(A)
    );
    // Same section again: state unchanged, no change reported.
    assert_eq!(tracker.observe(&layout, viewport_with_probe(60.0)), None);
    assert_eq!(tracker.active(), Some(A));
}
