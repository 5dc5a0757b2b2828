//! Watchface lifecycle

use super::events::Event;

/// Lifecycle of the watchface window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Constructed, layers not set up yet
    Created,
    /// Layers set up, handling ticks, taps and frames
    Loaded,
    /// Torn down; every further event is ignored
    Unloaded,
}

impl Lifecycle {
    /// Check if timer, gesture and animation events are handled
    pub fn accepts_input(&self) -> bool {
        matches!(self, Lifecycle::Loaded)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Lifecycle::*;

        match (self, event) {
            (Created, Event::Load(_)) => Loaded,
            (Created, Event::Unload) => Unloaded,
            (Loaded, Event::Unload) => Unloaded,

            // A second load or anything after unload changes nothing
            (state, _) => state,
        }
    }
}
