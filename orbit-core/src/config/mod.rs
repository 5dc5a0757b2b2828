//! Configuration types
//!
//! The target geometry is fixed; the only runtime inputs are the user's
//! hour format and what the display hardware can do.

pub mod types;

pub use types::*;
