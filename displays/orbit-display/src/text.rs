//! Text measurement over embedded-graphics text renderers
//!
//! Words are packed greedily onto lines no wider than the measuring box;
//! a word wider than the box gets a line of its own. The result is
//! clamped to the box.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point as DrawPoint, RgbColor};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::Baseline;
use u8g2_fonts::{fonts, U8g2TextStyle};

use orbit_core::geometry::{Rect, Size};
use orbit_core::traits::{FontId, TextAlignment, TextMeasure, TextOverflow};

/// Font styles for the two watchface fonts
#[derive(Debug, Clone)]
pub struct StyleMeasure<L, S> {
    /// Hour digits
    pub large: L,
    /// Minute digits and date
    pub small: S,
}

/// The stock watchface fonts: large numeric u8g2 digits and a 10x20 mono font
pub type WatchFonts = StyleMeasure<U8g2TextStyle<Rgb565>, MonoTextStyle<'static, Rgb565>>;

/// White text in the stock watchface fonts
pub fn watch_fonts() -> WatchFonts {
    StyleMeasure::new(
        U8g2TextStyle::new(fonts::u8g2_font_inb57_mn, Rgb565::WHITE),
        MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE),
    )
}

impl<L, S> StyleMeasure<L, S> {
    /// Pair a large and a small style
    pub const fn new(large: L, small: S) -> Self {
        Self { large, small }
    }
}

impl<L, S> TextMeasure for StyleMeasure<L, S>
where
    L: TextRenderer,
    S: TextRenderer,
{
    fn measure_text(
        &self,
        text: &str,
        font: FontId,
        bounds: Rect,
        overflow: TextOverflow,
        _alignment: TextAlignment,
    ) -> Size {
        match font {
            FontId::Large => measure(&self.large, text, bounds, overflow),
            FontId::Small => measure(&self.small, text, bounds, overflow),
        }
    }
}

/// Rendered width of a single line
fn line_width<R: TextRenderer>(style: &R, text: &str) -> u32 {
    style
        .measure_string(text, DrawPoint::zero(), Baseline::Top)
        .bounding_box
        .size
        .width
}

fn measure<R: TextRenderer>(style: &R, text: &str, bounds: Rect, overflow: TextOverflow) -> Size {
    let max_width = bounds.size.width;

    // Only measured once two words meet; digit-only fonts may lack it
    let mut space: Option<u32> = None;

    let mut lines = 0u32;
    let mut widest = 0u32;
    let mut current: Option<u32> = None;

    for word in text.split_whitespace() {
        let width = line_width(style, word);
        let Some(line) = current else {
            lines += 1;
            current = Some(width);
            continue;
        };

        let gap = *space.get_or_insert_with(|| line_width(style, " "));
        if overflow == TextOverflow::WordWrap && line + gap + width > max_width {
            widest = widest.max(line);
            lines += 1;
            current = Some(width);
        } else {
            current = Some(line + gap + width);
        }
    }
    widest = widest.max(current.unwrap_or(0));

    Size::new(
        widest.min(max_width),
        (lines * style.line_height()).min(bounds.size.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn mono() -> StyleMeasure<MonoTextStyle<'static, Rgb565>, MonoTextStyle<'static, Rgb565>> {
        StyleMeasure::new(
            MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE),
            MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
        )
    }

    fn wrap(measure: &impl TextMeasure, text: &str, font: FontId, bounds: Rect) -> Size {
        measure.measure_text(
            text,
            font,
            bounds,
            TextOverflow::WordWrap,
            TextAlignment::Left,
        )
    }

    #[test]
    fn test_single_word() {
        let size = wrap(&mono(), "05", FontId::Large, Rect::new(0, 0, 144, 35));
        assert_eq!(size, Size::new(20, 20));
    }

    #[test]
    fn test_digit_count_changes_width() {
        let fonts = mono();
        let one = wrap(&fonts, "5", FontId::Large, Rect::new(0, 0, 144, 35));
        let two = wrap(&fonts, "12", FontId::Large, Rect::new(0, 0, 144, 35));
        assert!(two.width > one.width);
    }

    #[test]
    fn test_words_wrap_to_box_width() {
        let size = wrap(&mono(), "Mon Jan 5", FontId::Small, Rect::new(0, 0, 30, 35));
        // "Mon" / "Jan 5"
        assert_eq!(size, Size::new(30, 20));
    }

    #[test]
    fn test_words_share_a_line_when_they_fit() {
        let size = wrap(&mono(), "Mon Jan 5", FontId::Small, Rect::new(0, 0, 144, 35));
        assert_eq!(size, Size::new(54, 10));
    }

    #[test]
    fn test_clip_keeps_one_line() {
        let size = mono().measure_text(
            "Mon Jan 5",
            FontId::Small,
            Rect::new(0, 0, 30, 35),
            TextOverflow::Clip,
            TextAlignment::Left,
        );
        assert_eq!(size, Size::new(30, 10));
    }

    #[test]
    fn test_clamped_to_box_height() {
        let size = wrap(&mono(), "a b c d e f", FontId::Large, Rect::new(0, 0, 10, 35));
        assert_eq!(size.height, 35);
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(
            wrap(&mono(), "", FontId::Small, Rect::new(0, 0, 144, 35)),
            Size::zero()
        );
    }

    #[test]
    fn test_stock_fonts_measure_within_box() {
        let bounds = Rect::new(0, 0, 144, 70);
        let size = wrap(&watch_fonts(), "12", FontId::Large, bounds);
        assert!(size.width > 0 && size.width <= 144);
        assert!(size.height > 0 && size.height <= 70);
    }
}
