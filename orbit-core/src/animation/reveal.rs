//! Date reveal animator
//!
//! A tap slides the whole window up to uncover the date banner parked just
//! below the display, holds, then slides it back. Both halves are queued
//! together at tap time: the exit animation carries a delay measured from
//! the tap, so the banner stays fully in view for the delay minus the slide.
//!
//! Taps are not debounced against the current phase. Every tap queues a
//! fresh enter/exit pair, so overlapping taps produce overlapping slides.

use heapless::Vec;

use super::{lerp_rect, AnimationId, AnimationSpec, Curve, Progress, PROGRESS_MAX};
use crate::geometry::Rect;
use crate::traits::AnimationScheduler;

/// How far the window slides, in pixels
pub const REVEAL_OFFSET: u32 = 22;

/// Duration of each slide in milliseconds
pub const REVEAL_DURATION_MS: u32 = 500;

/// Delay from the tap to the start of the slide back
pub const REVEAL_EXIT_DELAY_MS: u32 = 2500;

/// Height of the date banner
pub const DATE_BANNER_HEIGHT: u32 = 35;

/// Maximum overlapping reveals tracked at once
pub const MAX_REVEALS: usize = 4;

/// Slide into view
pub const ENTER_SPEC: AnimationSpec = AnimationSpec::new(REVEAL_DURATION_MS, Curve::EaseInOut);

/// Slide back, queued alongside the enter animation
pub const EXIT_SPEC: AnimationSpec =
    AnimationSpec::new(REVEAL_DURATION_MS, Curve::EaseInOut).with_delay(REVEAL_EXIT_DELAY_MS);

/// Phase of a date reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RevealPhase {
    /// Banner below the display
    Hidden,
    /// Sliding up
    Revealing,
    /// Banner on screen, waiting for the exit animation
    Visible,
    /// Sliding back down
    Hiding,
}

/// Root frame at rest
pub const fn resting_frame(bounds: Rect) -> Rect {
    bounds
}

/// Root frame with the banner in view
pub const fn revealed_frame(bounds: Rect) -> Rect {
    Rect::new(
        bounds.origin.x,
        bounds.origin.y - REVEAL_OFFSET as i32,
        bounds.size.width,
        bounds.size.height + REVEAL_OFFSET,
    )
}

/// Frame of the date banner, just below the visible area
pub const fn banner_frame(bounds: Rect) -> Rect {
    Rect::new(
        bounds.origin.x,
        bounds.origin.y + bounds.size.height as i32,
        bounds.size.width,
        DATE_BANNER_HEIGHT,
    )
}

#[derive(Debug, Clone, Copy)]
struct RevealRun {
    enter: AnimationId,
    exit: AnimationId,
    bounds: Rect,
    phase: RevealPhase,
}

/// Date banner reveal
#[derive(Debug, Clone, Default)]
pub struct DateReveal {
    /// Reveals in flight, oldest first
    runs: Vec<RevealRun, MAX_REVEALS>,
}

impl DateReveal {
    /// Animator with nothing in flight
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Phase of the most recent reveal, or `Hidden` when none is in flight
    pub fn phase(&self) -> RevealPhase {
        self.runs
            .last()
            .map(|run| run.phase)
            .unwrap_or(RevealPhase::Hidden)
    }

    /// Number of reveals in flight
    pub fn in_flight(&self) -> usize {
        self.runs.len()
    }

    /// Queue an enter/exit pair for the window with root `bounds`
    ///
    /// Returns the (enter, exit) handles. When `MAX_REVEALS` are already in
    /// flight the oldest is cancelled to make room.
    pub fn trigger<S: AnimationScheduler>(
        &mut self,
        bounds: Rect,
        scheduler: &mut S,
    ) -> (AnimationId, AnimationId) {
        if self.runs.is_full() {
            let oldest = self.runs.remove(0);
            warn!("too many overlapping reveals, dropping oldest");
            scheduler.cancel(oldest.enter);
            scheduler.cancel(oldest.exit);
        }

        let enter = scheduler.schedule(ENTER_SPEC);
        let exit = scheduler.schedule(EXIT_SPEC);
        debug!("date reveal {}/{} queued", enter.raw(), exit.raw());

        // Room was made above
        let _ = self.runs.push(RevealRun {
            enter,
            exit,
            bounds,
            phase: RevealPhase::Revealing,
        });
        (enter, exit)
    }

    /// Advance whichever reveal owns `id`
    ///
    /// Returns the new root frame, or `None` if `id` belongs to no reveal.
    pub fn on_frame(&mut self, id: AnimationId, progress: Progress) -> Option<Rect> {
        let index = self
            .runs
            .iter()
            .position(|run| run.enter == id || run.exit == id)?;
        let run = &mut self.runs[index];

        let rest = resting_frame(run.bounds);
        let revealed = revealed_frame(run.bounds);
        let done = progress >= PROGRESS_MAX;

        let frame = if run.enter == id {
            run.phase = if done {
                RevealPhase::Visible
            } else {
                RevealPhase::Revealing
            };
            lerp_rect(rest, revealed, progress)
        } else {
            run.phase = if done {
                RevealPhase::Hidden
            } else {
                RevealPhase::Hiding
            };
            lerp_rect(revealed, rest, progress)
        };

        if run.phase == RevealPhase::Hidden {
            trace!("date reveal {} finished", run.enter.raw());
            self.runs.remove(index);
        }
        Some(frame)
    }

    /// Cancel every queued slide so nothing fires after teardown
    pub fn cancel_all<S: AnimationScheduler>(&mut self, scheduler: &mut S) {
        for run in self.runs.iter() {
            scheduler.cancel(run.enter);
            scheduler.cancel(run.exit);
        }
        self.runs.clear();
    }
}
