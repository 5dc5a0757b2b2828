//! Clock text formatting

use core::fmt::Write;

use chrono::Datelike;
use heapless::String;

/// Capacity of the hour text
pub const HOUR_TEXT_LEN: usize = 2;

/// Capacity of the minute text
pub const MINUTE_TEXT_LEN: usize = 2;

/// Capacity of the date text ("Wed Sep 30" plus slack)
pub const DATE_TEXT_LEN: usize = 16;

pub type HourText = String<HOUR_TEXT_LEN>;
pub type MinuteText = String<MINUTE_TEXT_LEN>;
pub type DateText = String<DATE_TEXT_LEN>;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Hour text for `hour` (0..24)
///
/// 24-hour mode is zero padded. 12-hour mode has no leading zero and only
/// folds hours after noon, so midnight reads "0" rather than "12".
pub fn hour_text(hour: u32, use_24h: bool) -> HourText {
    let mut text = String::new();
    // Two digits always fit
    let _ = if use_24h {
        write!(text, "{:02}", hour)
    } else if hour <= 12 {
        write!(text, "{}", hour)
    } else {
        write!(text, "{}", hour - 12)
    };
    text
}

/// Zero-padded minute text
pub fn minute_text(minute: u32) -> MinuteText {
    let mut text = String::new();
    let _ = write!(text, "{:02}", minute);
    text
}

/// Abbreviated weekday, month and day of month, e.g. "Mon Jan 5"
pub fn date_text<D: Datelike>(date: &D) -> DateText {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];

    let mut text = String::new();
    let _ = write!(text, "{} {} {}", weekday, month, date.day());
    text
}
