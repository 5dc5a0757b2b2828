//! embedded-graphics adapters for the Orbit watchface
//!
//! This crate provides:
//! - `LayerTree`, an in-memory [`WindowService`](orbit_core::traits::WindowService)
//! - `StyleMeasure`, a [`TextMeasure`](orbit_core::traits::TextMeasure) over any
//!   `embedded-graphics` text renderer
//! - `render`, which composites a layer tree onto any RGB565 draw target
//!
//! # Architecture
//!
//! The watchface core only talks to the collaborator traits. A board crate
//! owns a `Watchface<LayerTree, StyleMeasure<_, _>, _>`, feeds it events, and
//! calls [`render`] whenever the tree reports itself dirty.

#![cfg_attr(not(test), no_std)]

pub mod layers;
pub mod render;
pub mod text;

// Re-export key types
pub use layers::{Layer, LayerTree, TEXT_CAPACITY};
pub use render::{render, to_rgb565};
pub use text::{watch_fonts, StyleMeasure, WatchFonts};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use embedded_graphics::pixelcolor::Rgb565;
    use orbit_core::animation::Timeline;
    use orbit_core::config::{DeviceCapabilities, FaceConfig, DISPLAY_BOUNDS};
    use orbit_core::palette::Color;
    use orbit_core::state::{Axis, Event, Watchface};
    use orbit_core::traits::LayerId;

    #[test]
    fn test_watchface_drives_layer_tree() {
        let config = FaceConfig::new(false, DeviceCapabilities::color());
        let mut face = Watchface::new(
            LayerTree::new(DISPLAY_BOUNDS),
            watch_fonts(),
            Timeline::new(),
            config,
        );

        let now = NaiveDate::from_ymd_opt(2015, 1, 5)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        face.handle(Event::Load(now)).unwrap();

        let tree = face.window();
        assert!(tree.is_dirty());
        assert_eq!(tree.text(LayerId::Hour), "2");
        assert_eq!(tree.text(LayerId::Minute), "05");
        assert_eq!(tree.text(LayerId::Date), "Mon Jan 5");
        assert_eq!(tree.background(), Color::JAEGER_GREEN);

        // Minute label sits on the circle, hour label straddles the center
        let minute = tree.frame(LayerId::Minute);
        assert_eq!(minute.size.width, 20);
        let hour = tree.frame(LayerId::Hour);
        assert!(hour.origin.y < 84 && hour.origin.y + hour.size.height as i32 > 84);

        face.window_mut().mark_clean();
        face.handle(Event::Tap {
            axis: Axis::Z,
            direction: 1,
        })
        .unwrap();
        face.advance_to(500).unwrap();

        let tree = face.window();
        assert!(tree.is_dirty());
        assert_eq!(tree.frame(LayerId::Root).origin.y, -22);
        assert_eq!(to_rgb565(tree.background()), Rgb565::new(0, 42, 10));
    }
}
