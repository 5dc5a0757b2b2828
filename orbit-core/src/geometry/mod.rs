//! Display geometry
//!
//! Integer pixel-space types shared by layout, animation and the window
//! service, plus the clock-convention angle used to place the minute label.

pub mod angle;
pub mod polar;

pub use angle::{Angle, TRIG_MAX_ANGLE};
pub use polar::{place_on_circle, position_on_circle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in display pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Offset this point by another point
    pub const fn offset(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

/// Width and height of a visual element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero-sized
    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Grow the height, keeping the width
    pub const fn with_extra_height(self, extra: u32) -> Self {
        Self {
            width: self.width,
            height: self.height + extra,
        }
    }
}

/// Placement of a visual element: origin plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rect from origin coordinates and dimensions
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from an origin point and a size
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Geometric center, rounding towards the origin
    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x + (self.size.width / 2) as i32,
            self.origin.y + (self.size.height / 2) as i32,
        )
    }

    /// Rect of the given size whose center is `center`
    pub const fn centered_at(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(
                center.x - (size.width / 2) as i32,
                center.y - (size.height / 2) as i32,
            ),
            size,
        }
    }
}
