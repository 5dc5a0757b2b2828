//! Board-agnostic core logic for the Orbit watchface
//!
//! This crate contains all watchface logic that does not depend on a
//! specific display, font engine or event loop:
//!
//! - Geometry (angles, rects, polar placement on the minute circle)
//! - Clock sampling (hour/minute/date text and measured label sizes)
//! - Layout of the hour and minute labels
//! - Animation (timing curves, minute sweep, date reveal, software timeline)
//! - Background palette
//! - Collaborator traits (window, text measurement, animation scheduler)
//! - The watchface context that ties the pieces together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod animation;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod state;
pub mod traits;
