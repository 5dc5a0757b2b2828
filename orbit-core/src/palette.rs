//! Hourly background palette
//!
//! Color displays rotate through nine fixed background colors, one step per
//! hour. Monochrome displays stay black.

use crate::config::DeviceCapabilities;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of palette entries
pub const PALETTE_LEN: usize = 9;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const ORANGE: Color = Color::rgb(0xFF, 0x55, 0x00);
    pub const DARK_GREEN: Color = Color::rgb(0x00, 0x55, 0x00);
    pub const DUKE_BLUE: Color = Color::rgb(0x00, 0x00, 0xAA);
    pub const DARK_CANDY_APPLE_RED: Color = Color::rgb(0xAA, 0x00, 0x00);
    pub const IMPERIAL_PURPLE: Color = Color::rgb(0x55, 0x00, 0x55);
    pub const JAEGER_GREEN: Color = Color::rgb(0x00, 0xAA, 0x55);
    pub const OXFORD_BLUE: Color = Color::rgb(0x00, 0x00, 0x55);
    pub const BULGARIAN_ROSE: Color = Color::rgb(0x55, 0x00, 0x00);
    pub const COBALT_BLUE: Color = Color::rgb(0x00, 0x55, 0xAA);
}

/// Background colors, indexed by `hour % PALETTE_LEN`
pub const PALETTE: [Color; PALETTE_LEN] = [
    Color::ORANGE,
    Color::DARK_GREEN,
    Color::DUKE_BLUE,
    Color::DARK_CANDY_APPLE_RED,
    Color::IMPERIAL_PURPLE,
    Color::JAEGER_GREEN,
    Color::OXFORD_BLUE,
    Color::BULGARIAN_ROSE,
    Color::COBALT_BLUE,
];

/// Palette slot for an hour of the day
pub const fn palette_index(hour: u32) -> usize {
    (hour % PALETTE_LEN as u32) as usize
}

/// Palette color for an hour of the day
pub const fn select(hour: u32) -> Color {
    PALETTE[palette_index(hour)]
}

/// Background color for an hour, honoring the display's capabilities
pub const fn background(hour: u32, capabilities: DeviceCapabilities) -> Color {
    if capabilities.supports_color {
        select(hour)
    } else {
        Color::BLACK
    }
}
