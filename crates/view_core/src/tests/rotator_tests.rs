use std::{thread, time::Duration};

use super::*;

#[test]
fn index_advances_modulo_length() {
    let mut rotator = Rotator::new(3);
    assert_eq!(rotator.index(), 0);

    for k in 1..=10 {
        let index = rotator.advance();
        assert_eq!(index, k % 3);
    }
}

#[test]
fn single_label_rotator_never_moves() {
    let mut rotator = Rotator::new(1);
    rotator.advance();
    rotator.advance();
    assert_eq!(rotator.index(), 0);
}

#[test]
fn ticker_delivers_ticks_until_stopped() {
    let mut ticker = IntervalTicker::start(Duration::from_millis(15));

    thread::sleep(Duration::from_millis(80));
    assert!(ticker.drain() > 0, "ticker produced no ticks while running");

    ticker.stop();
    // The stop signal wakes the timer thread immediately; give it a moment,
    // flush whatever was already queued, then verify silence.
    thread::sleep(Duration::from_millis(40));
    ticker.drain();
    thread::sleep(Duration::from_millis(80));
    assert_eq!(ticker.drain(), 0, "ticker kept ticking after teardown");
}

#[test]
fn stop_is_idempotent() {
    let mut ticker = IntervalTicker::start(Duration::from_millis(10));
    ticker.stop();
    ticker.stop();
}

#[test]
fn role_rotator_applies_elapsed_ticks_on_poll() {
    // A length far above the possible tick count makes the index equal the
    // number of ticks applied, so the assertions stay exact.
    let mut rotator = RoleRotator::start(1000, Duration::from_millis(15));
    assert_eq!(rotator.index(), 0);

    thread::sleep(Duration::from_millis(80));
    let index = rotator.poll();
    assert!(index >= 1, "no ticks were applied");
    assert!(index < 1000);

    rotator.stop();
    thread::sleep(Duration::from_millis(40));
    let frozen = rotator.poll();
    thread::sleep(Duration::from_millis(80));
    assert_eq!(rotator.poll(), frozen, "index changed after teardown");
}
