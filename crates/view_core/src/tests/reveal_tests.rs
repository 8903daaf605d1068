use super::*;

#[test]
fn latched_reveal_stays_true_after_leaving_the_viewport() {
    let mut reveal = Reveal::new(RevealConfig::once(0.2));
    assert!(!reveal.in_view());

    assert!(reveal.observe(0.25));
    // Ratio drops below the threshold; the latch holds.
    assert!(reveal.observe(0.0));
    assert!(reveal.observe(0.1));
    assert!(reveal.in_view());
}

#[test]
fn live_reveal_tracks_the_intersection_condition() {
    let mut reveal = Reveal::new(RevealConfig::live(0.1));

    let observed: Vec<bool> = [0.3, 0.05, 0.3]
        .iter()
        .map(|ratio| reveal.observe(*ratio))
        .collect();
    assert_eq!(observed, vec![true, false, true]);
}

#[test]
fn threshold_is_inclusive() {
    let mut reveal = Reveal::new(RevealConfig::live(0.1));
    assert!(reveal.observe(0.1));
    assert!(!reveal.observe(0.0999));
}

#[test]
fn block_without_observations_stays_hidden() {
    let reveal = Reveal::new(RevealConfig::once(0.2));
    assert!(!reveal.in_view());
}

#[test]
fn latched_reveal_below_threshold_does_not_trigger() {
    let mut reveal = Reveal::new(RevealConfig::once(0.2));
    assert!(!reveal.observe(0.19));
    assert!(!reveal.in_view());
}
