//! Text measurement trait

use crate::geometry::{Rect, Size};

/// Fonts supplied by the resource loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontId {
    /// Hour digits, roughly 74pt
    Large,
    /// Minute digits and date, roughly 18pt
    Small,
}

/// What to do with text wider than its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextOverflow {
    /// Break between words onto further lines
    #[default]
    WordWrap,
    /// Keep a single line, clipped to the box
    Clip,
}

/// Horizontal text alignment within a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Text layout service provided by the host
pub trait TextMeasure {
    /// Size of `text` laid out in `font` inside `bounds`
    ///
    /// The result never exceeds the size of `bounds`.
    fn measure_text(
        &self,
        text: &str,
        font: FontId,
        bounds: Rect,
        overflow: TextOverflow,
        alignment: TextAlignment,
    ) -> Size;
}
