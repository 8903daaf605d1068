use std::time::{Duration, Instant};

/// Scroll offset that puts a section's top just below the fixed header.
/// `viewport_relative_top` is the section's top edge measured from the top of
/// the visible area (what the rendering layer reads off its layout pass).
pub fn nav_target(viewport_relative_top: f32, scroll_offset: f32, header_offset: f32) -> f32 {
    viewport_relative_top + scroll_offset - header_offset
}

/// One-shot animated scroll from one offset to another.
///
/// The owner samples it each frame and writes the result into the scroll
/// position. If the observed position stops matching what the animation last
/// emitted, the user scrolled on their own and the animation is abandoned.
#[derive(Debug)]
pub struct SmoothScroll {
    from: f32,
    target: f32,
    started: Instant,
    duration: Duration,
    last_emitted: f32,
}

impl SmoothScroll {
    pub fn new(from: f32, target: f32, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            target,
            started: now,
            duration,
            last_emitted: from,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Offset to apply at `now`. Clamped to the target once the duration has
    /// elapsed.
    pub fn sample(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        let value = self.from + (self.target - self.from) * ease_in_out_cubic(t);
        self.last_emitted = value;
        value
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// True when the scroll position moved without us: a wheel or scrollbar
    /// interaction cancels the programmatic scroll. The scroll area clamps
    /// applied offsets to `[0, max_offset]`, so a position pinned at the
    /// clamp of what we last emitted is still our own doing.
    pub fn interrupted_by(&self, observed_offset: f32, max_offset: f32) -> bool {
        let expected = self.last_emitted.clamp(0.0, max_offset.max(0.0));
        (observed_offset - expected).abs() > 1.0
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
