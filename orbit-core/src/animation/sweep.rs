//! Minute sweep animator
//!
//! Slides the minute label clockwise along its circle from its previous
//! placement to the new minute. A new tick cancels the running sweep; the
//! replacement starts from the previous placement, not from wherever the
//! cancelled sweep had got to.

use super::{AnimationId, AnimationSpec, Curve, Progress, PROGRESS_MAX};
use crate::geometry::{Angle, Rect, Size};
use crate::layout;
use crate::traits::AnimationScheduler;

/// Sweep duration in milliseconds
pub const SWEEP_DURATION_MS: u32 = 2000;

/// Animation used for every sweep
pub const SWEEP_SPEC: AnimationSpec = AnimationSpec::new(SWEEP_DURATION_MS, Curve::EaseInOut);

/// Sweep animator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepState {
    /// Label at rest
    Idle,
    /// Label moving between placements
    Running,
}

/// Angular progress of one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    /// Where the label starts
    pub start_angle: Angle,
    /// Where the label comes to rest
    pub target_angle: Angle,
    /// Last progress delivered
    pub elapsed_fraction: Progress,
}

impl AnimationState {
    /// Fresh sweep between two placements
    pub const fn new(start_angle: Angle, target_angle: Angle) -> Self {
        Self {
            start_angle,
            target_angle,
            elapsed_fraction: 0,
        }
    }

    /// Angle at the current progress, moving clockwise
    pub fn angle(&self) -> Angle {
        self.angle_at(self.elapsed_fraction)
    }

    /// Angle at `progress`, moving clockwise
    pub fn angle_at(&self, progress: Progress) -> Angle {
        let delta = self.start_angle.forward_delta(self.target_angle) as u64;
        let step = delta * progress as u64 / PROGRESS_MAX as u64;
        self.start_angle.advance(step as u32)
    }
}

#[derive(Debug, Clone, Copy)]
struct Run {
    id: AnimationId,
    state: AnimationState,
}

/// Minute label sweep
#[derive(Debug, Clone)]
pub struct SweepAnimator {
    /// Running sweep, if any
    run: Option<Run>,
    /// Angle the label was last placed at (the last sweep's target)
    placed: Angle,
    /// Size of the label being moved
    label_size: Size,
}

impl Default for SweepAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepAnimator {
    /// Idle animator with the label placed at 12 o'clock
    pub const fn new() -> Self {
        Self {
            run: None,
            placed: Angle::ZERO,
            label_size: Size::zero(),
        }
    }

    /// Current state
    pub fn state(&self) -> SweepState {
        if self.run.is_some() {
            SweepState::Running
        } else {
            SweepState::Idle
        }
    }

    /// Progress of the running sweep
    pub fn current(&self) -> Option<&AnimationState> {
        self.run.as_ref().map(|run| &run.state)
    }

    /// Handle of the running sweep
    pub fn animation(&self) -> Option<AnimationId> {
        self.run.map(|run| run.id)
    }

    /// Where the label rests once the current sweep (if any) completes
    pub fn placed_angle(&self) -> Angle {
        self.placed
    }

    /// Record where the label was put without animating
    ///
    /// The next sweep starts from here.
    pub fn place(&mut self, angle: Angle, label_size: Size) {
        self.placed = angle;
        self.label_size = label_size;
    }

    /// Start a sweep to `target`, cancelling any sweep in flight
    pub fn start<S: AnimationScheduler>(
        &mut self,
        target: Angle,
        label_size: Size,
        scheduler: &mut S,
    ) -> AnimationId {
        self.cancel(scheduler);

        let state = AnimationState::new(self.placed, target);
        self.placed = target;
        self.label_size = label_size;

        let id = scheduler.schedule(SWEEP_SPEC);
        debug!(
            "sweep {} from {} to {}",
            id.raw(),
            state.start_angle.raw(),
            state.target_angle.raw()
        );
        self.run = Some(Run { id, state });
        id
    }

    /// Drop the running sweep; its frames are ignored from now on
    pub fn cancel<S: AnimationScheduler>(&mut self, scheduler: &mut S) {
        if let Some(run) = self.run.take() {
            trace!("cancelling sweep {}", run.id.raw());
            scheduler.cancel(run.id);
        }
    }

    /// Advance the running sweep
    ///
    /// Returns the minute label's new frame within `bounds`, or `None` if
    /// `id` is not the running sweep.
    pub fn on_frame(&mut self, id: AnimationId, progress: Progress, bounds: Rect) -> Option<Rect> {
        let run = self.run.as_mut().filter(|run| run.id == id)?;
        run.state.elapsed_fraction = progress;

        let frame = layout::minute_rect(run.state.angle(), self.label_size, bounds);
        if progress >= PROGRESS_MAX {
            trace!("sweep {} complete", id.raw());
            self.run = None;
        }
        Some(frame)
    }
}
