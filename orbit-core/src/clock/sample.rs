//! Per-tick clock sample

use chrono::{NaiveDateTime, Timelike};

use super::format::{date_text, hour_text, minute_text, DateText, HourText, MinuteText};
use super::minute_angle;
use crate::geometry::{Angle, Size};
use crate::layout::{HOUR_TEXT_BOX, MINUTE_TEXT_BOX};
use crate::traits::{FontId, TextAlignment, TextMeasure, TextOverflow};

/// Everything the watchface shows for one minute
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSample {
    pub hour_text: HourText,
    pub minute_text: MinuteText,
    pub date_text: DateText,
    /// Rendered size of the hour text in the large font
    pub hour_label_size: Size,
    /// Rendered size of the minute text in the small font
    pub minute_label_size: Size,
    /// Where the minute label sits on its circle
    pub minute_angle: Angle,
    /// Hour of day (0..24), drives the background palette
    pub hour_of_day: u32,
}

/// Sample the clock at `now`
pub fn sample<T: TextMeasure>(now: &NaiveDateTime, use_24h: bool, text: &T) -> ClockSample {
    let hour_text = hour_text(now.hour(), use_24h);
    let minute_text = minute_text(now.minute());

    let hour_label_size = text.measure_text(
        &hour_text,
        FontId::Large,
        HOUR_TEXT_BOX,
        TextOverflow::WordWrap,
        TextAlignment::Left,
    );
    let minute_label_size = text.measure_text(
        &minute_text,
        FontId::Small,
        MINUTE_TEXT_BOX,
        TextOverflow::WordWrap,
        TextAlignment::Left,
    );

    ClockSample {
        hour_text,
        minute_text,
        date_text: date_text(&now.date()),
        hour_label_size,
        minute_label_size,
        minute_angle: minute_angle(now.minute()),
        hour_of_day: now.hour(),
    }
}
