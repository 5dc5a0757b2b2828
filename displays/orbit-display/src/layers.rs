//! Layer tree
//!
//! An in-memory window: one root layer whose frame offsets everything, and
//! three text layers. Setters only record state and flag the tree dirty;
//! [`render`](crate::render) draws it.

use heapless::String;

use orbit_core::config::DISPLAY_BOUNDS;
use orbit_core::geometry::Rect;
use orbit_core::palette::Color;
use orbit_core::traits::{DisplayError, LabelStyle, LayerId, WindowService};

/// Maximum bytes of text per layer
pub const TEXT_CAPACITY: usize = 16;

/// One layer of the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layer {
    /// Frame relative to the root layer (the root's own frame for `Root`)
    pub frame: Rect,
    /// Text drawn in the frame
    pub text: String<TEXT_CAPACITY>,
    /// Font and alignment; unstyled layers are not drawn
    pub style: Option<LabelStyle>,
}

/// Window service backed by plain memory
#[derive(Debug, Clone)]
pub struct LayerTree {
    /// Root bounds
    bounds: Rect,
    /// Layers indexed by [`LayerId::index`]
    layers: [Layer; LayerId::COUNT],
    /// Window fill color
    background: Color,
    /// Whether the tree changed since the last render
    dirty: bool,
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::new(DISPLAY_BOUNDS)
    }
}

impl LayerTree {
    /// Create an empty tree; the root frame starts at `bounds`
    pub fn new(bounds: Rect) -> Self {
        let mut layers: [Layer; LayerId::COUNT] = Default::default();
        layers[LayerId::Root.index()].frame = bounds;
        Self {
            bounds,
            layers,
            background: Color::BLACK,
            dirty: true,
        }
    }

    /// A single layer
    pub fn layer(&self, layer: LayerId) -> &Layer {
        &self.layers[layer.index()]
    }

    /// Current frame of a layer
    pub fn frame(&self, layer: LayerId) -> Rect {
        self.layer(layer).frame
    }

    /// Current text of a layer
    pub fn text(&self, layer: LayerId) -> &str {
        self.layer(layer).text.as_str()
    }

    /// Current style of a layer
    pub fn style(&self, layer: LayerId) -> Option<LabelStyle> {
        self.layer(layer).style
    }

    /// Window fill color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Check if the tree needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the tree as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl WindowService for LayerTree {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_frame(&mut self, layer: LayerId, frame: Rect) -> Result<(), DisplayError> {
        let slot = &mut self.layers[layer.index()].frame;
        if *slot != frame {
            *slot = frame;
            self.dirty = true;
        }
        Ok(())
    }

    fn set_text(&mut self, layer: LayerId, text: &str) -> Result<(), DisplayError> {
        let slot = &mut self.layers[layer.index()].text;
        if slot.as_str() == text {
            return Ok(());
        }

        let mut replacement = String::new();
        replacement
            .push_str(text)
            .map_err(|_| DisplayError::BufferOverflow)?;
        *slot = replacement;
        self.dirty = true;
        Ok(())
    }

    fn set_style(&mut self, layer: LayerId, style: LabelStyle) -> Result<(), DisplayError> {
        self.layers[layer.index()].style = Some(style);
        self.dirty = true;
        Ok(())
    }

    fn set_background_color(&mut self, color: Color) -> Result<(), DisplayError> {
        if self.background != color {
            self.background = color;
            self.dirty = true;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LayerTree {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LayerTree[");
        for (i, layer) in LayerId::TEXT.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}: {}", layer, self.text(*layer));
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::traits::{FontId, TextAlignment};

    #[test]
    fn test_new_tree() {
        let tree = LayerTree::default();
        assert_eq!(tree.frame(LayerId::Root), DISPLAY_BOUNDS);
        assert_eq!(tree.text(LayerId::Hour), "");
        assert_eq!(tree.style(LayerId::Date), None);
        assert_eq!(tree.background(), Color::BLACK);
        assert!(tree.is_dirty());
    }

    #[test]
    fn test_setters_mark_dirty() {
        let mut tree = LayerTree::default();
        tree.mark_clean();

        tree.set_text(LayerId::Minute, "05").unwrap();
        assert!(tree.is_dirty());
        assert_eq!(tree.text(LayerId::Minute), "05");

        tree.mark_clean();
        tree.set_frame(LayerId::Root, Rect::new(0, -22, 144, 190)).unwrap();
        assert!(tree.is_dirty());

        tree.mark_clean();
        tree.set_style(
            LayerId::Hour,
            LabelStyle::new(FontId::Large, TextAlignment::Left),
        )
        .unwrap();
        assert!(tree.is_dirty());
    }

    #[test]
    fn test_unchanged_values_stay_clean() {
        let mut tree = LayerTree::default();
        tree.set_text(LayerId::Hour, "12").unwrap();
        tree.set_frame(LayerId::Hour, Rect::new(1, 2, 3, 4)).unwrap();
        tree.mark_clean();

        tree.set_text(LayerId::Hour, "12").unwrap();
        tree.set_frame(LayerId::Hour, Rect::new(1, 2, 3, 4)).unwrap();
        tree.set_background_color(Color::BLACK).unwrap();
        assert!(!tree.is_dirty());
    }

    #[test]
    fn test_text_overflow_keeps_old_text() {
        let mut tree = LayerTree::default();
        tree.set_text(LayerId::Date, "Mon Jan 5").unwrap();

        let result = tree.set_text(LayerId::Date, "Wednesday September 30");
        assert_eq!(result, Err(DisplayError::BufferOverflow));
        assert_eq!(tree.text(LayerId::Date), "Mon Jan 5");
    }
}
