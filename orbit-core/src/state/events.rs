//! Events delivered by the host

use chrono::NaiveDateTime;

use crate::animation::{AnimationId, Progress};

/// Accelerometer axis a tap was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Host callbacks into the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle events
    /// Window pushed, with the current local time
    Load(NaiveDateTime),
    /// Window about to be torn down
    Unload,

    // Timer and gesture events
    /// A new minute started
    MinuteTick(NaiveDateTime),
    /// Wrist tap; direction is +1 or -1 along `axis`
    Tap { axis: Axis, direction: i32 },

    // Animation events
    /// Progress for a scheduled animation
    AnimationFrame { id: AnimationId, progress: Progress },
}

impl Event {
    /// Check if this event starts or ends the face
    pub fn is_lifecycle_event(&self) -> bool {
        matches!(self, Event::Load(_) | Event::Unload)
    }

    /// Check if this event comes from the animation scheduler
    pub fn is_animation_event(&self) -> bool {
        matches!(self, Event::AnimationFrame { .. })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, f: defmt::Formatter) {
        use chrono::{Datelike, Timelike};

        match self {
            Event::Load(now) => defmt::write!(
                f,
                "Load({}-{}-{} {}:{})",
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute()
            ),
            Event::Unload => defmt::write!(f, "Unload"),
            Event::MinuteTick(now) => defmt::write!(f, "MinuteTick({}:{})", now.hour(), now.minute()),
            Event::Tap { axis, direction } => {
                defmt::write!(f, "Tap {{ axis: {}, direction: {} }}", axis, direction)
            }
            Event::AnimationFrame { id, progress } => defmt::write!(
                f,
                "AnimationFrame {{ id: {}, progress: {} }}",
                id,
                progress
            ),
        }
    }
}
