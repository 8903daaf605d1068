use std::time::{Duration, Instant};

use super::*;

#[test]
fn nav_target_accounts_for_the_fixed_header() {
    // Section top 500 below the viewport top, scrolled 200 in, header 80.
    assert_eq!(nav_target(500.0, 200.0, 80.0), 620.0);
    // Exactly top + scroll - header, no rounding.
    assert_eq!(nav_target(1000.0, 40.0, 80.0), 1000.0 + 40.0 - 80.0);
}

#[test]
fn animation_starts_at_from_and_ends_at_target() {
    let start = Instant::now();
    let duration = Duration::from_millis(400);
    let mut scroll = SmoothScroll::new(100.0, 500.0, duration, start);

    assert_eq!(scroll.sample(start), 100.0);
    assert!(!scroll.is_finished(start));

    let end = start + duration;
    assert_eq!(scroll.sample(end), 500.0);
    assert!(scroll.is_finished(end));
    // Past the end it stays clamped.
    assert_eq!(scroll.sample(end + Duration::from_millis(100)), 500.0);
}

#[test]
fn midpoint_lies_between_the_endpoints() {
    let start = Instant::now();
    let mut scroll = SmoothScroll::new(0.0, 100.0, Duration::from_millis(400), start);

    let mid = scroll.sample(start + Duration::from_millis(200));
    assert!(mid > 0.0 && mid < 100.0);
}

#[test]
fn zero_duration_jumps_straight_to_the_target() {
    let start = Instant::now();
    let mut scroll = SmoothScroll::new(10.0, 90.0, Duration::ZERO, start);
    assert_eq!(scroll.sample(start), 90.0);
    assert!(scroll.is_finished(start));
}

#[test]
fn external_scrolling_interrupts_the_animation() {
    let start = Instant::now();
    let mut scroll = SmoothScroll::new(0.0, 100.0, Duration::from_millis(400), start);

    let emitted = scroll.sample(start + Duration::from_millis(100));
    // The position we wrote ourselves does not count as an interruption.
    assert!(!scroll.interrupted_by(emitted, 1000.0));
    assert!(!scroll.interrupted_by(emitted + 0.5, 1000.0));

    // A wheel scroll moved the page somewhere else entirely.
    assert!(scroll.interrupted_by(emitted + 50.0, 1000.0));
}

#[test]
fn offset_pinned_at_the_scroll_limit_does_not_interrupt() {
    let start = Instant::now();
    let mut scroll = SmoothScroll::new(0.0, 300.0, Duration::from_millis(400), start);

    let emitted = scroll.sample(start + Duration::from_millis(300));
    assert!(emitted > 200.0);

    // The page only scrolls to 200; the area pins us there. Still ours.
    assert!(!scroll.interrupted_by(200.0, 200.0));
    // Scrolling back up from the pin is a real interruption.
    assert!(scroll.interrupted_by(150.0, 200.0));
}
