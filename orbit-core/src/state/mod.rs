//! Watchface state
//!
//! Host callbacks arrive as [`Event`]s. The [`Lifecycle`] machine decides
//! whether the face accepts them, and the [`Watchface`] context owns every
//! piece of mutable state plus the host collaborators.

pub mod events;
pub mod face;
pub mod machine;

pub use events::{Axis, Event};
pub use face::Watchface;
pub use machine::Lifecycle;
