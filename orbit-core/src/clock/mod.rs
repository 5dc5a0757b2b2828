//! Clock sampling
//!
//! Once per minute the watchface reads the wall clock, formats the hour,
//! minute and date strings, and measures how large the hour and minute
//! labels render. The result is an immutable [`ClockSample`] that layout
//! and the animators work from until the next tick.

pub mod format;
pub mod sample;

pub use format::{date_text, hour_text, minute_text, DateText, HourText, MinuteText};
pub use sample::{sample, ClockSample};

use crate::geometry::Angle;

/// Angle of the minute label for `minute` past the hour
///
/// Minutes beyond 59 wrap around the circle.
pub const fn minute_angle(minute: u32) -> Angle {
    Angle::from_minute(minute)
}
