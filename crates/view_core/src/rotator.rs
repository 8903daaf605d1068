use std::{thread, time::Duration};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TrySendError};
use tracing::debug;

use crate::subscription::Subscription;

/// Cyclic index over a fixed, non-empty label list. Pure state; pairing it
/// with a tick source is the caller's concern.
#[derive(Debug)]
pub struct Rotator {
    len: usize,
    index: usize,
}

impl Rotator {
    /// An empty list is a caller bug; clamping keeps the arithmetic total.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "rotator needs a non-empty label list");
        Self {
            len: len.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// Periodic tick source on a background thread. Ticks are delivered through
/// a bounded channel; when the UI falls behind, extra ticks are dropped
/// rather than queued. Stopping (or dropping) the ticker releases the thread.
pub struct IntervalTicker {
    ticks: Receiver<()>,
    guard: Option<Subscription>,
}

impl IntervalTicker {
    pub fn start(period: Duration) -> Self {
        let (tick_tx, tick_rx) = bounded::<()>(8);
        let (stop_tx, stop_rx) = bounded::<()>(1);

        // Dropping the handle detaches the thread; the stop channel is the
        // only teardown path it needs.
        let _detached = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => match tick_tx.try_send(()) {
                    Ok(()) | Err(TrySendError::Full(())) => {}
                    Err(TrySendError::Disconnected(())) => break,
                },
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        let guard = Subscription::new(move || {
            let _ = stop_tx.try_send(());
            debug!("interval ticker stopped");
        });

        Self {
            ticks: tick_rx,
            guard: Some(guard),
        }
    }

    /// Number of ticks elapsed since the last drain.
    pub fn drain(&self) -> usize {
        self.ticks.try_iter().count()
    }

    /// Stops the timer thread. Idempotent; also runs on drop.
    pub fn stop(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.dispose();
        }
    }
}

/// The hero's role-label rotation: a `Rotator` driven by an `IntervalTicker`.
/// Created on mount, dropped on unmount; dropping cancels the timer.
pub struct RoleRotator {
    rotator: Rotator,
    ticker: IntervalTicker,
}

impl RoleRotator {
    pub fn start(len: usize, period: Duration) -> Self {
        Self {
            rotator: Rotator::new(len),
            ticker: IntervalTicker::start(period),
        }
    }

    pub fn index(&self) -> usize {
        self.rotator.index()
    }

    /// Applies any ticks that arrived since the last poll and returns the
    /// current index. Call once per frame.
    pub fn poll(&mut self) -> usize {
        let elapsed = self.ticker.drain();
        for _ in 0..elapsed {
            self.rotator.advance();
        }
        self.rotator.index()
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }
}

#[cfg(test)]
#[path = "tests/rotator_tests.rs"]
mod tests;
