//! Clock angles
//!
//! Angles are stored in a fixed integer domain where [`TRIG_MAX_ANGLE`]
//! is one full turn. Zero points at 12 o'clock and values grow clockwise.

use core::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One full turn in angle units
pub const TRIG_MAX_ANGLE: u32 = 0x1_0000;

/// An angle normalized to `0..TRIG_MAX_ANGLE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle(u32);

impl Angle {
    /// 12 o'clock
    pub const ZERO: Angle = Angle(0);

    /// Create an angle from raw units, wrapping into the full-turn range
    pub const fn new(raw: i64) -> Self {
        Self(raw.rem_euclid(TRIG_MAX_ANGLE as i64) as u32)
    }

    /// Create an angle from whole degrees
    pub const fn from_degrees(degrees: i64) -> Self {
        Self::new(degrees * TRIG_MAX_ANGLE as i64 / 360)
    }

    /// Angle of a minute hand at `minute` past the hour
    ///
    /// Minutes outside 0..60 wrap, so `from_minute(m + 60) == from_minute(m)`.
    pub const fn from_minute(minute: u32) -> Self {
        Self::new(TRIG_MAX_ANGLE as i64 * minute as i64 / 60)
    }

    /// Raw angle units in `0..TRIG_MAX_ANGLE`
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Clockwise distance from `self` to `to`, in `0..TRIG_MAX_ANGLE`
    pub const fn forward_delta(self, to: Angle) -> u32 {
        (to.0 + TRIG_MAX_ANGLE - self.0) % TRIG_MAX_ANGLE
    }

    /// Rotate clockwise by `delta` units
    pub const fn advance(self, delta: u32) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// Angle in radians, for trigonometry
    pub fn radians(self) -> f32 {
        self.0 as f32 * (TAU / TRIG_MAX_ANGLE as f32)
    }
}
