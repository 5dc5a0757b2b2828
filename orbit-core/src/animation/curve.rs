//! Timing curves
//!
//! Map linear time progress onto eased progress. Both endpoints are fixed:
//! `0` maps to `0` and `PROGRESS_MAX` maps to `PROGRESS_MAX`.

use super::{Progress, PROGRESS_MAX};

/// Timing curve selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Curve {
    /// Constant rate
    Linear,
    /// Slow start, fast middle, slow finish
    #[default]
    EaseInOut,
}

impl Curve {
    /// Eased progress for linear time progress `t`
    pub fn apply(self, t: Progress) -> Progress {
        match self {
            Curve::Linear => t,
            Curve::EaseInOut => ease_in_out(t),
        }
    }
}

/// Quadratic ease-in-out in fixed point
fn ease_in_out(t: Progress) -> Progress {
    let t = t as u64;
    let max = PROGRESS_MAX as u64;

    let eased = if t * 2 <= max {
        2 * t * t / max
    } else {
        let rest = max - t;
        max - 2 * rest * rest / max
    };

    eased as Progress
}
