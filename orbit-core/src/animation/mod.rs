//! Animation
//!
//! Animations are described by an [`AnimationSpec`] and handed to an
//! [`AnimationScheduler`](crate::traits::AnimationScheduler), which calls
//! back with normalized [`Progress`] for each frame. The sweep and reveal
//! animators are plain state machines that turn those frames into layer
//! frames; they never own a clock.

pub mod curve;
pub mod reveal;
pub mod sweep;
pub mod timeline;

pub use curve::Curve;
pub use reveal::{DateReveal, RevealPhase};
pub use sweep::{AnimationState, SweepAnimator, SweepState};
pub use timeline::{Frame, ScheduledWindow, Timeline};

use crate::geometry::{Point, Rect, Size};

/// Normalized animation progress, `0..=PROGRESS_MAX`
pub type Progress = u16;

/// Progress value representing a finished animation
pub const PROGRESS_MAX: Progress = u16::MAX;

/// Handle for a scheduled animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationId(u32);

impl AnimationId {
    /// Wrap a raw scheduler handle
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw scheduler handle
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// What to animate over time: duration, start delay and timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationSpec {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Delay before the first frame, in milliseconds
    pub delay_ms: u32,
    /// Timing curve
    pub curve: Curve,
}

impl AnimationSpec {
    /// Animation starting immediately
    pub const fn new(duration_ms: u32, curve: Curve) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            curve,
        }
    }

    /// Same animation, starting `delay_ms` after it is scheduled
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }
}

/// Interpolate between two integers
pub fn lerp(from: i32, to: i32, progress: Progress) -> i32 {
    let span = to as i64 - from as i64;
    (from as i64 + span * progress as i64 / PROGRESS_MAX as i64) as i32
}

/// Interpolate origin and size between two rects
pub fn lerp_rect(from: Rect, to: Rect, progress: Progress) -> Rect {
    Rect::from_parts(
        Point::new(
            lerp(from.origin.x, to.origin.x, progress),
            lerp(from.origin.y, to.origin.y, progress),
        ),
        Size::new(
            lerp(from.size.width as i32, to.size.width as i32, progress).max(0) as u32,
            lerp(from.size.height as i32, to.size.height as i32, progress).max(0) as u32,
        ),
    )
}
