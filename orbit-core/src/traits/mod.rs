//! Collaborator traits
//!
//! These traits define the interface between the watchface logic and the
//! host platform's window, text and animation services.

pub mod scheduler;
pub mod text;
pub mod window;

pub use scheduler::AnimationScheduler;
pub use text::{FontId, TextAlignment, TextMeasure, TextOverflow};
pub use window::{DisplayError, LabelStyle, LayerId, WindowService};
