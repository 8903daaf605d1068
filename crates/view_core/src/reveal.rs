/// Visibility configuration for one observed content block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub trigger_once: bool,
    /// Intersection-ratio fraction, in `[0, 1]`, at which the block reveals.
    pub threshold: f32,
}

impl RevealConfig {
    /// Latches permanently on the first crossing.
    pub const fn once(threshold: f32) -> Self {
        Self {
            trigger_once: true,
            threshold,
        }
    }

    /// Tracks the intersection condition live.
    pub const fn live(threshold: f32) -> Self {
        Self {
            trigger_once: false,
            threshold,
        }
    }
}

/// Per-block reveal state. Holds only the boolean; the transition the
/// rendering layer plays off it is none of this type's business.
#[derive(Debug)]
pub struct Reveal {
    config: RevealConfig,
    in_view: bool,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            in_view: false,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Feeds the block's current intersection ratio and returns the updated
    /// `in_view`. A block whose ratio never arrives simply stays hidden.
    pub fn observe(&mut self, ratio: f32) -> bool {
        let met = ratio >= self.config.threshold;
        if self.config.trigger_once {
            if met {
                self.in_view = true;
            }
        } else {
            self.in_view = met;
        }
        self.in_view
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
