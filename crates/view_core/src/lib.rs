//! Scroll-state behaviors behind the single-page portfolio UI: the
//! active-section tracker, the reveal-on-view controller, the role-label
//! rotator, and the smooth programmatic scroll. The rendering layer supplies
//! viewport/scroll readings each frame; everything here is plain state.

use std::time::Duration;

pub mod layout;
pub mod reveal;
pub mod rotator;
pub mod scroll;
pub mod subscription;
pub mod tracker;

pub use layout::{SectionLayout, SectionRect, Viewport};
pub use reveal::{Reveal, RevealConfig};
pub use rotator::{IntervalTicker, RoleRotator, Rotator};
pub use scroll::{nav_target, SmoothScroll};
pub use subscription::Subscription;
pub use tracker::SectionTracker;

/// Height of the fixed header; programmatic scrolls stop this far above a
/// section so the header never covers its heading.
pub const FIXED_HEADER_OFFSET: f32 = 80.0;

/// Period of the hero role-label rotation.
pub const ROLE_ROTATION_PERIOD: Duration = Duration::from_millis(2000);

/// Duration of a programmatic smooth scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);
