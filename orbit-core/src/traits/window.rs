//! Window service trait

use crate::geometry::Rect;
use crate::palette::Color;

use super::text::{FontId, TextAlignment};

/// Errors reported by the window service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Text does not fit the layer's buffer
    BufferOverflow,
}

/// Layers making up the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerId {
    /// Window root; moving it moves every child
    Root,
    /// Large hour digits
    Hour,
    /// Small minute digits on the circle
    Minute,
    /// Date banner below the visible area
    Date,
}

impl LayerId {
    /// Number of layers
    pub const COUNT: usize = 4;

    /// All layers, root first
    pub const ALL: [LayerId; Self::COUNT] =
        [LayerId::Root, LayerId::Hour, LayerId::Minute, LayerId::Date];

    /// Text layers, in drawing order
    pub const TEXT: [LayerId; 3] = [LayerId::Hour, LayerId::Minute, LayerId::Date];

    /// Stable slot index for array-backed layer stores
    pub const fn index(self) -> usize {
        match self {
            LayerId::Root => 0,
            LayerId::Hour => 1,
            LayerId::Minute => 2,
            LayerId::Date => 3,
        }
    }
}

/// How a text layer draws its text
///
/// Text is white on a clear layer background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelStyle {
    pub font: FontId,
    pub alignment: TextAlignment,
}

impl LabelStyle {
    /// Create a label style
    pub const fn new(font: FontId, alignment: TextAlignment) -> Self {
        Self { font, alignment }
    }
}

/// Window and layer tree provided by the host
pub trait WindowService {
    /// Bounds of the root layer
    fn bounds(&self) -> Rect;

    /// Move and resize a layer
    fn set_frame(&mut self, layer: LayerId, frame: Rect) -> Result<(), DisplayError>;

    /// Replace a text layer's text
    fn set_text(&mut self, layer: LayerId, text: &str) -> Result<(), DisplayError>;

    /// Set a text layer's font and alignment
    fn set_style(&mut self, layer: LayerId, style: LabelStyle) -> Result<(), DisplayError>;

    /// Fill the window background
    fn set_background_color(&mut self, color: Color) -> Result<(), DisplayError>;
}
