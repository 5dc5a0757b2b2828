//! Configuration type definitions

use crate::geometry::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = 144;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 168;

/// Bounds of the target display
pub const DISPLAY_BOUNDS: Rect = Rect::new(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT);

/// What the display hardware supports
///
/// Resolved once when the watchface is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceCapabilities {
    /// Display can show the hourly background palette
    pub supports_color: bool,
}

impl DeviceCapabilities {
    /// Black-and-white display
    pub const fn monochrome() -> Self {
        Self {
            supports_color: false,
        }
    }

    /// Color display
    pub const fn color() -> Self {
        Self {
            supports_color: true,
        }
    }
}

/// Watchface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Show hours as "00".."23" instead of "0".."12"
    pub use_24h: bool,
    /// Hardware capabilities
    pub capabilities: DeviceCapabilities,
}

impl FaceConfig {
    /// Create a configuration
    pub const fn new(use_24h: bool, capabilities: DeviceCapabilities) -> Self {
        Self {
            use_24h,
            capabilities,
        }
    }
}
