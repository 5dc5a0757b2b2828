//! Label layout
//!
//! The hour label sits dead center with some vertical padding; the minute
//! label rides a circle around the same center.

use crate::clock::ClockSample;
use crate::geometry::{place_on_circle, Angle, Rect, Size};

/// Radius of the minute circle
pub const MINUTE_RADIUS: u32 = 60;

/// Vertical padding added around the hour text
pub const HOUR_PADDING: u32 = 20;

/// Box the hour text is measured in
pub const HOUR_TEXT_BOX: Rect = Rect::new(0, 0, 144, 70);

/// Box the minute text is measured in
pub const MINUTE_TEXT_BOX: Rect = Rect::new(0, 0, 144, 35);

/// Hour layer frame before the first layout
pub const HOUR_LAYER_FRAME: Rect = Rect::new(0, 0, 100, 70);

/// Minute layer frame before the first layout
pub const MINUTE_LAYER_FRAME: Rect = Rect::new(0, 0, 50, 35);

/// Placement of both clock labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceLayout {
    pub hour: Rect,
    pub minute: Rect,
}

/// Lay out both labels for `sample` within `bounds`
pub fn layout(sample: &ClockSample, bounds: Rect) -> FaceLayout {
    FaceLayout {
        hour: hour_rect(sample.hour_label_size, bounds),
        minute: minute_rect(sample.minute_angle, sample.minute_label_size, bounds),
    }
}

/// Hour label frame, padded and centered in `bounds`
pub const fn hour_rect(label_size: Size, bounds: Rect) -> Rect {
    Rect::centered_at(bounds.center(), label_size.with_extra_height(HOUR_PADDING))
}

/// Minute label frame at `angle` on the minute circle
pub fn minute_rect(angle: Angle, label_size: Size, bounds: Rect) -> Rect {
    place_on_circle(angle, MINUTE_RADIUS, bounds.center(), label_size)
}
