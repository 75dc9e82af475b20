//! Conversions between times and the floating point "date numbers" used on the plot time axis.
//!
//! A date number is the number of days, including the fractional part, since
//! 1970-01-01T00:00:00 UTC.

use chrono::{DateTime, NaiveDateTime};
use plotters::coord::{
    ranged1d::{DefaultFormatting, KeyPointHint, Ranged},
    types::RangedCoordf64,
};
use std::ops::Range;

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Most ticks [`hourly_ticks`] will produce, a wider range gets none.
pub const MAX_TICKS: usize = 1000;

// Tolerance, in hours, for deciding a value already sits on a whole hour.
const HOUR_EPS: f64 = 1.0e-6;

/// Convert a UTC time to a date number.
pub fn date2num(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Convert a date number back to a UTC time, rounded to the nearest millisecond.
///
/// Returns `None` if the value is not finite or out of range.
pub fn num2date(num: f64) -> Option<NaiveDateTime> {
    let millis = (num * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}

/// Date numbers of every whole hour in the closed range `[lo, hi]`.
///
/// If the range holds more than [`MAX_TICKS`] hours, usually because the times are not date
/// numbers, a warning is logged and no ticks are returned.
pub fn hourly_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) {
        return vec![];
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    let first = (lo * HOURS_PER_DAY - HOUR_EPS).ceil();
    let last = (hi * HOURS_PER_DAY + HOUR_EPS).floor();

    if last - first >= MAX_TICKS as f64 {
        log::warn!(
            "{} hourly ticks requested between date numbers {} and {}, dropping them",
            last - first + 1.0,
            lo,
            hi
        );
        return vec![];
    }

    let (first, last) = (first as i64, last as i64);
    (first..=last).map(|h| h as f64 / HOURS_PER_DAY).collect()
}

/// A time axis in date numbers with a key point at every whole hour.
pub(crate) struct HourlyAxis {
    span: Range<f64>,
    coord: RangedCoordf64,
}

impl HourlyAxis {
    pub(crate) fn new(span: Range<f64>) -> Self {
        let coord = RangedCoordf64::from(span.clone());
        HourlyAxis { span, coord }
    }
}

impl Ranged for HourlyAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.coord.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        hourly_ticks(self.span.start, self.span.end)
    }

    fn range(&self) -> Range<f64> {
        self.span.clone()
    }
}

/// Format a date number as `HHMM`, the time axis tick label.
pub fn format_hhmm(num: f64) -> String {
    num2date(num)
        .map(|dt| dt.format("%H%M").to_string())
        .unwrap_or_default()
}
