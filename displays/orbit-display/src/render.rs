//! Layer tree rendering
//!
//! Clears the target to the background color, then draws each styled text
//! layer clipped to its frame. Every layer is offset by the root frame's
//! origin, which is how the date reveal slides the whole face.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::{DrawTarget, DrawTargetExt, Point as DrawPoint, Size as DrawSize};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::Drawable;

use orbit_core::geometry::Rect;
use orbit_core::palette::Color;
use orbit_core::traits::{FontId, LayerId, TextAlignment};

use crate::layers::LayerTree;
use crate::text::StyleMeasure;

/// Convert a palette color to the panel format
pub fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::from(Rgb888::new(color.r, color.g, color.b))
}

/// Draw the whole tree onto `target`
pub fn render<D, L, S>(
    tree: &LayerTree,
    fonts: &StyleMeasure<L, S>,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    L: TextRenderer<Color = Rgb565> + Clone,
    S: TextRenderer<Color = Rgb565> + Clone,
{
    target.clear(to_rgb565(tree.background()))?;

    let root = tree.frame(LayerId::Root).origin;
    for layer in LayerId::TEXT {
        let text = tree.text(layer);
        let Some(style) = tree.style(layer) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        let local = tree.frame(layer);
        let frame = Rect::from_parts(local.origin.offset(root), local.size);
        match style.font {
            FontId::Large => draw_label(text, frame, style.alignment, fonts.large.clone(), target)?,
            FontId::Small => draw_label(text, frame, style.alignment, fonts.small.clone(), target)?,
        }
    }
    Ok(())
}

fn draw_label<D, R>(
    text: &str,
    frame: Rect,
    alignment: TextAlignment,
    character_style: R,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    R: TextRenderer<Color = Rgb565>,
{
    let width = frame.size.width as i32;
    let (x, alignment) = match alignment {
        TextAlignment::Left => (frame.origin.x, Alignment::Left),
        TextAlignment::Center => (frame.origin.x + width / 2, Alignment::Center),
        TextAlignment::Right => (frame.origin.x + width, Alignment::Right),
    };
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();

    let area = Rectangle::new(
        DrawPoint::new(frame.origin.x, frame.origin.y),
        DrawSize::new(frame.size.width, frame.size.height),
    );
    let mut clipped = target.clipped(&area);
    Text::with_text_style(
        text,
        DrawPoint::new(x, frame.origin.y),
        character_style,
        text_style,
    )
    .draw(&mut clipped)?;
    Ok(())
}
