use super::*;
use content::domain::ABOUT;

fn viewport(scroll_offset: f32, height: f32) -> Viewport {
    Viewport {
        scroll_offset,
        height,
    }
}

#[test]
fn probe_sits_one_third_below_the_viewport_top() {
    assert_eq!(viewport(0.0, 900.0).probe(), 300.0);
    assert_eq!(viewport(150.0, 600.0).probe(), 350.0);
}

#[test]
fn extent_is_half_open() {
    let rect = SectionRect {
        top: 100.0,
        height: 100.0,
    };
    assert!(rect.contains(100.0));
    assert!(rect.contains(199.9));
    assert!(!rect.contains(200.0));
    assert!(!rect.contains(99.9));
}

#[test]
fn intersection_ratio_tracks_visible_fraction() {
    let rect = SectionRect {
        top: 100.0,
        height: 200.0,
    };

    // Fully inside the viewport.
    assert_eq!(rect.intersection_ratio(viewport(0.0, 600.0)), 1.0);
    // Bottom half scrolled out above.
    assert_eq!(rect.intersection_ratio(viewport(200.0, 600.0)), 0.5);
    // Entirely above the viewport.
    assert_eq!(rect.intersection_ratio(viewport(400.0, 600.0)), 0.0);
    // Entirely below the viewport.
    assert_eq!(rect.intersection_ratio(viewport(0.0, 50.0)), 0.0);
}

#[test]
fn zero_height_section_never_intersects() {
    let rect = SectionRect {
        top: 10.0,
        height: 0.0,
    };
    assert_eq!(rect.intersection_ratio(viewport(0.0, 600.0)), 0.0);
}

#[test]
fn forgotten_sections_are_absent() {
    let mut layout = SectionLayout::new();
    layout.record(
        ABOUT,
        SectionRect {
            top: 0.0,
            height: 10.0,
        },
    );
    assert!(layout.get(ABOUT).is_some());

    layout.forget(ABOUT);
    assert!(layout.get(ABOUT).is_none());
    assert!(layout.is_empty());
}
