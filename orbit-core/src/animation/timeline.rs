//! Software animation timeline
//!
//! A deterministic [`AnimationScheduler`] driven by a millisecond clock.
//! Used on hosts without a native animation engine: the event loop calls
//! [`Timeline::advance`] at its frame cadence and forwards the returned
//! frames to the watchface.
//!
//! The host clock is a free-running `u32` that wraps after ~49 days. Steps
//! are taken as wrapping differences and accumulated into a `u64` timebase,
//! so animations straddling the wrap keep progressing. After the first
//! reading, a step of more than half the clock range reads as the clock
//! moving backwards and is ignored.

use heapless::Vec;

use super::{AnimationId, AnimationSpec, Progress, PROGRESS_MAX};
use crate::traits::AnimationScheduler;

/// Maximum animations tracked at once
pub const MAX_ANIMATIONS: usize = 16;

/// Progress for one animation at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub id: AnimationId,
    pub progress: Progress,
}

/// When a scheduled animation runs, on the host clock
///
/// Both ends wrap with the clock, so `end_ms` may be below `start_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduledWindow {
    /// First frame (scheduling time plus delay)
    pub start_ms: u32,
    /// Final frame
    pub end_ms: u32,
}

#[derive(Debug, Clone)]
struct Entry {
    id: AnimationId,
    spec: AnimationSpec,
    /// Host clock reading when scheduled
    scheduled_at_ms: u32,
    /// Timebase reading when scheduled
    scheduled_at: u64,
}

impl Entry {
    fn window(&self) -> ScheduledWindow {
        let start_ms = self.scheduled_at_ms.wrapping_add(self.spec.delay_ms);
        ScheduledWindow {
            start_ms,
            end_ms: start_ms.wrapping_add(self.spec.duration_ms),
        }
    }

    /// Progress at timebase `now`, or `None` before the start
    fn progress_at(&self, now: u64) -> Option<Progress> {
        let start = self.scheduled_at + self.spec.delay_ms as u64;
        if now < start {
            return None;
        }

        let elapsed = now - start;
        if elapsed >= self.spec.duration_ms as u64 {
            return Some(PROGRESS_MAX);
        }

        let linear = elapsed as u64 * PROGRESS_MAX as u64 / self.spec.duration_ms as u64;
        Some(self.spec.curve.apply(linear as Progress))
    }
}

/// Millisecond-driven animation scheduler
#[derive(Debug, Clone)]
pub struct Timeline {
    /// Last host clock reading accepted
    now_ms: u32,
    /// Milliseconds accumulated since creation
    elapsed: u64,
    /// A host reading has been taken
    started: bool,
    /// Next handle to hand out
    next_id: u32,
    /// Pending and running animations, in scheduling order
    entries: Vec<Entry, MAX_ANIMATIONS>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Create an empty timeline at time zero
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            elapsed: 0,
            started: false,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Last host clock reading accepted
    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    /// Move the clock to `now_ms` and collect the frames due
    ///
    /// Every started animation yields exactly one frame. Animations whose
    /// duration has elapsed yield `PROGRESS_MAX` and are then forgotten.
    pub fn advance(&mut self, now_ms: u32) -> Vec<Frame, MAX_ANIMATIONS> {
        let step = now_ms.wrapping_sub(self.now_ms);
        if self.started && step > i32::MAX as u32 {
            warn!("timeline clock moved backwards: {} -> {}", self.now_ms, now_ms);
        } else {
            self.now_ms = now_ms;
            self.elapsed += step as u64;
            self.started = true;
        }

        let now = self.elapsed;
        let mut frames = Vec::new();
        self.entries.retain(|entry| match entry.progress_at(now) {
            None => true,
            Some(progress) => {
                // Both vecs share a capacity, so this cannot overflow
                let _ = frames.push(Frame {
                    id: entry.id,
                    progress,
                });
                progress < PROGRESS_MAX
            }
        });
        frames
    }

    /// Time window of a pending or running animation
    pub fn window(&self, id: AnimationId) -> Option<ScheduledWindow> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(Entry::window)
    }

    /// Number of pending and running animations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No animation pending or running
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnimationScheduler for Timeline {
    fn schedule(&mut self, spec: AnimationSpec) -> AnimationId {
        let id = AnimationId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let entry = Entry {
            id,
            spec,
            scheduled_at_ms: self.now_ms,
            scheduled_at: self.elapsed,
        };
        if self.entries.push(entry).is_err() {
            warn!("timeline full, animation {} will never run", id.raw());
        } else {
            trace!(
                "scheduled animation {} at {} ms (+{} ms delay)",
                id.raw(),
                self.now_ms,
                spec.delay_ms
            );
        }
        id
    }

    fn cancel(&mut self, id: AnimationId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Curve;
    use proptest::prelude::*;

    fn linear(duration_ms: u32) -> AnimationSpec {
        AnimationSpec::new(duration_ms, Curve::Linear)
    }

    #[test]
    fn test_linear_progress() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(linear(1000));

        let frames = timeline.advance(0);
        assert_eq!(frames.as_slice(), &[Frame { id, progress: 0 }]);

        let frames = timeline.advance(500);
        assert_eq!(frames[0].progress, PROGRESS_MAX / 2);

        let frames = timeline.advance(1000);
        assert_eq!(frames[0].progress, PROGRESS_MAX);
        assert!(timeline.is_empty());

        assert!(timeline.advance(1500).is_empty());
    }

    #[test]
    fn test_final_frame_when_overshooting() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(AnimationSpec::new(2000, Curve::EaseInOut));

        let frames = timeline.advance(60_000);
        assert_eq!(frames.as_slice(), &[Frame { id, progress: PROGRESS_MAX }]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_delay_holds_frames_back() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(linear(500).with_delay(2500));

        assert!(timeline.advance(0).is_empty());
        assert!(timeline.advance(2499).is_empty());
        assert_eq!(timeline.advance(2500).as_slice(), &[Frame { id, progress: 0 }]);
        assert_eq!(timeline.advance(3000)[0].progress, PROGRESS_MAX);
    }

    #[test]
    fn test_window_is_relative_to_scheduling_time() {
        let mut timeline = Timeline::new();
        timeline.advance(1000);
        let id = timeline.schedule(linear(500).with_delay(2500));

        assert_eq!(
            timeline.window(id),
            Some(ScheduledWindow {
                start_ms: 3500,
                end_ms: 4000,
            })
        );
    }

    #[test]
    fn test_cancel_stops_frames() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(linear(1000));
        timeline.advance(100);

        assert!(timeline.cancel(id));
        assert!(!timeline.cancel(id));
        assert!(timeline.advance(200).is_empty());
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut timeline = Timeline::new();
        timeline.advance(1000);
        timeline.advance(10);
        assert_eq!(timeline.now_ms(), 1000);
    }

    #[test]
    fn test_progress_survives_clock_wrap() {
        let mut timeline = Timeline::new();
        timeline.advance(u32::MAX - 10);
        let id = timeline.schedule(linear(2000));

        assert_eq!(
            timeline.window(id),
            Some(ScheduledWindow {
                start_ms: u32::MAX - 10,
                end_ms: 1989,
            })
        );

        let early = timeline.advance(0);
        assert_eq!(early.as_slice(), &[Frame { id, progress: 360 }]);

        let halfway = timeline.advance(989);
        assert_eq!(halfway[0].progress, PROGRESS_MAX / 2);

        let last = timeline.advance(1989);
        assert_eq!(last.as_slice(), &[Frame { id, progress: PROGRESS_MAX }]);
        assert!(timeline.is_empty());
        assert!(timeline.advance(5000).is_empty());
    }

    #[test]
    fn test_backwards_step_keeps_progress() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule(linear(1000));
        timeline.advance(600);

        // Stale reading: no time passes, progress holds
        let frames = timeline.advance(400);
        assert_eq!(frames[0].progress, 39321);

        let frames = timeline.advance(1000);
        assert_eq!(frames.as_slice(), &[Frame { id, progress: PROGRESS_MAX }]);
    }

    #[test]
    fn test_overflow_yields_silent_id() {
        let mut timeline = Timeline::new();
        for _ in 0..MAX_ANIMATIONS {
            timeline.schedule(linear(100));
        }
        let dropped = timeline.schedule(linear(100));

        assert_eq!(timeline.len(), MAX_ANIMATIONS);
        assert!(timeline.window(dropped).is_none());
        let frames = timeline.advance(0);
        assert!(frames.iter().all(|frame| frame.id != dropped));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut timeline = Timeline::new();
        let a = timeline.schedule(linear(100));
        let b = timeline.schedule(linear(100));
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn prop_progress_is_monotonic(
            duration in 1u32..5000,
            delay in 0u32..3000,
            mut steps in proptest::collection::vec(0u32..10_000, 1..40),
        ) {
            steps.sort_unstable();

            let mut timeline = Timeline::new();
            let id = timeline.schedule(AnimationSpec::new(duration, Curve::EaseInOut).with_delay(delay));

            let mut last: Option<Progress> = None;
            for now in steps {
                for frame in timeline.advance(now) {
                    prop_assert_eq!(frame.id, id);
                    if let Some(previous) = last {
                        prop_assert!(frame.progress >= previous);
                    }
                    last = Some(frame.progress);
                }
            }

            // Finishing always lands exactly on PROGRESS_MAX
            let finish = timeline.advance(delay + duration);
            if let Some(frame) = finish.first() {
                prop_assert_eq!(frame.progress, PROGRESS_MAX);
            } else {
                prop_assert_eq!(last, Some(PROGRESS_MAX));
            }
        }
    }
}
