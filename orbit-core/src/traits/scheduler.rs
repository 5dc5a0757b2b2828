//! Animation scheduler trait

use crate::animation::{AnimationId, AnimationSpec};

/// Animation engine provided by the host
///
/// After `schedule`, the host delivers progress for the returned id as
/// [`Event::AnimationFrame`](crate::state::Event::AnimationFrame): values are
/// non-decreasing and the last one is exactly
/// [`PROGRESS_MAX`](crate::animation::PROGRESS_MAX).
pub trait AnimationScheduler {
    /// Queue an animation, starting after its delay
    fn schedule(&mut self, spec: AnimationSpec) -> AnimationId;

    /// Drop an animation; no further frames are delivered for it
    ///
    /// Returns `false` if the animation already finished or was never known.
    fn cancel(&mut self, id: AnimationId) -> bool;
}
