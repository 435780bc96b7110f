// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar records (UTC).
//!
//! [`CalendarDate`] holds the six fields of one instant; [`CalendarBatch`]
//! holds the same fields as index-aligned columns.  Both are generic over the
//! field type so that the floating result of the Julian Day algorithm and its
//! integer truncation share one shape.
//!
//! [`GpsDate`] / [`GpsBatch`] additionally carry the intermediate Unix time
//! produced by the GPS conversion.

use chrono::{DateTime, NaiveDate, Utc};

use super::instant::Time;
use super::scales::{UnixTime, JD};

// ═══════════════════════════════════════════════════════════════════════════
// Field value traits
// ═══════════════════════════════════════════════════════════════════════════

/// A numeric type usable as a calendar field.
pub trait CalendarScalar: Copy + std::fmt::Debug + PartialEq + 'static {
    /// Widen to `f64` (lossless for the supported types' calendar ranges).
    fn as_f64(self) -> f64;
}

impl CalendarScalar for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl CalendarScalar for i32 {
    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl CalendarScalar for i64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// An integer type the floating fields can be truncated into.
///
/// Truncation is toward zero.  Out-of-range values saturate and NaN becomes
/// `0`, following Rust's float-to-int `as` semantics.
pub trait CalendarInteger: CalendarScalar {
    fn truncate(value: f64) -> Self;
}

impl CalendarInteger for i32 {
    #[inline]
    fn truncate(value: f64) -> Self {
        value as i32
    }
}

impl CalendarInteger for i64 {
    #[inline]
    fn truncate(value: f64) -> Self {
        value as i64
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate
// ═══════════════════════════════════════════════════════════════════════════

/// Year, month, day, hour, minute, second of one UTC instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate<T = f64> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
    pub minute: T,
    pub second: T,
}

impl<T: CalendarScalar> CalendarDate<T> {
    pub const fn new(year: T, month: T, day: T, hour: T, minute: T, second: T) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Apply `f` to every field.
    pub fn map<U: CalendarScalar>(self, f: impl Fn(T) -> U) -> CalendarDate<U> {
        CalendarDate {
            year: f(self.year),
            month: f(self.month),
            day: f(self.day),
            hour: f(self.hour),
            minute: f(self.minute),
            second: f(self.second),
        }
    }

    /// Hand the fields to chrono.
    ///
    /// Fractional seconds become nanoseconds.  Returns `None` for non-finite
    /// fields or combinations chrono rejects (month 13, 25:00, ...).
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let f = self.map(T::as_f64);
        let fields = [f.year, f.month, f.day, f.hour, f.minute, f.second];
        if fields.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let second = f.second.max(0.0);
        let whole = second.floor();
        let nanos = (((second - whole) * 1e9) as u32).min(999_999_999);

        let date = NaiveDate::from_ymd_opt(f.year as i32, f.month as u32, f.day as u32)?;
        let time = date.and_hms_nano_opt(f.hour as u32, f.minute as u32, whole as u32, nanos)?;
        Some(DateTime::<Utc>::from_naive_utc_and_offset(time, Utc))
    }
}

impl CalendarDate<f64> {
    /// Truncate every field toward zero.
    pub fn truncate<I: CalendarInteger>(&self) -> CalendarDate<I> {
        self.map(I::truncate)
    }

    /// Julian Day Number of these fields (forward formula).
    pub fn to_julian_day(&self) -> Time<JD> {
        Time::new(julian_day_from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ))
    }
}

/// Julian Day Number of a UTC calendar instant.
///
/// Dates from 1582-10-15 onward use the Gregorian leap-year rule, earlier
/// dates the Julian one (Meeus, *Astronomical Algorithms*, ch. 7).
pub fn julian_day_from_calendar(
    year: f64,
    month: f64,
    day: f64,
    hour: f64,
    minute: f64,
    second: f64,
) -> f64 {
    let (y, m) = if month <= 2.0 {
        (year - 1.0, month + 12.0)
    } else {
        (year, month)
    };
    let gregorian = (year, month, day) >= (1582.0, 10.0, 15.0);
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    let day_fraction = (hour * 3_600.0 + minute * 60.0 + second) / 86_400.0;
    (365.25 * (y + 4_716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1_524.5
        + day_fraction
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarBatch
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar fields for a batch of instants, one column per field.
///
/// Column `k` of every field describes input element `k`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarBatch<T = f64> {
    pub year: Vec<T>,
    pub month: Vec<T>,
    pub day: Vec<T>,
    pub hour: Vec<T>,
    pub minute: Vec<T>,
    pub second: Vec<T>,
}

impl<T: CalendarScalar> CalendarBatch<T> {
    /// Empty batch with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            year: Vec::with_capacity(capacity),
            month: Vec::with_capacity(capacity),
            day: Vec::with_capacity(capacity),
            hour: Vec::with_capacity(capacity),
            minute: Vec::with_capacity(capacity),
            second: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, date: CalendarDate<T>) {
        self.year.push(date.year);
        self.month.push(date.month);
        self.day.push(date.day);
        self.hour.push(date.hour);
        self.minute.push(date.minute);
        self.second.push(date.second);
    }

    pub fn len(&self) -> usize {
        self.year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_empty()
    }

    /// The record of element `index`.
    pub fn get(&self, index: usize) -> Option<CalendarDate<T>> {
        Some(CalendarDate {
            year: *self.year.get(index)?,
            month: *self.month.get(index)?,
            day: *self.day.get(index)?,
            hour: *self.hour.get(index)?,
            minute: *self.minute.get(index)?,
            second: *self.second.get(index)?,
        })
    }

    /// Records in input order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Apply `f` to every value of every column.
    pub fn map<U: CalendarScalar>(&self, f: impl Fn(T) -> U + Copy) -> CalendarBatch<U> {
        self.iter().map(|date| date.map(f)).collect()
    }

    /// [`CalendarDate::to_utc`] for every element.
    pub fn to_utc(&self) -> Vec<Option<DateTime<Utc>>> {
        self.iter().map(|date| date.to_utc()).collect()
    }
}

impl CalendarBatch<f64> {
    /// Truncate every value toward zero.
    pub fn truncate<I: CalendarInteger>(&self) -> CalendarBatch<I> {
        self.map(I::truncate)
    }
}

impl<T: CalendarScalar> FromIterator<CalendarDate<T>> for CalendarBatch<T> {
    fn from_iter<It: IntoIterator<Item = CalendarDate<T>>>(iter: It) -> Self {
        let iter = iter.into_iter();
        let mut batch = Self::with_capacity(iter.size_hint().0);
        for date in iter {
            batch.push(date);
        }
        batch
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GPS results
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar fields of one GPS instant plus its Unix time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsDate<T = f64> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub calendar: CalendarDate<T>,
    pub unix: Time<UnixTime>,
}

impl GpsDate<f64> {
    /// Truncate the calendar fields; the Unix time is left untouched.
    pub fn truncate<I: CalendarInteger>(&self) -> GpsDate<I> {
        GpsDate {
            calendar: self.calendar.truncate(),
            unix: self.unix,
        }
    }
}

/// Calendar columns of a GPS batch plus the Unix time of every element.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsBatch<T = f64> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub calendar: CalendarBatch<T>,
    pub unix: Vec<Time<UnixTime>>,
}

impl<T: CalendarScalar> GpsBatch<T> {
    pub fn len(&self) -> usize {
        self.unix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unix.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<GpsDate<T>> {
        Some(GpsDate {
            calendar: self.calendar.get(index)?,
            unix: *self.unix.get(index)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = GpsDate<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl GpsBatch<f64> {
    /// Truncate the calendar columns; Unix times are left untouched.
    pub fn truncate<I: CalendarInteger>(&self) -> GpsBatch<I> {
        GpsBatch {
            calendar: self.calendar.truncate(),
            unix: self.unix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> CalendarDate {
        CalendarDate::new(1999.0, 12.0, 31.0, 7.0, 52.0, 29.999_999_999_998_7)
    }

    #[test]
    fn truncate_is_toward_zero_not_rounding() {
        let ints: CalendarDate<i64> = sample().truncate();
        assert_eq!(ints, CalendarDate::new(1999, 12, 31, 7, 52, 29));

        let negative = CalendarDate::new(-4712.0, 1.0, 1.0, 12.0, 0.0, -0.75);
        assert_eq!(negative.truncate::<i32>().second, 0);
        assert_eq!(negative.truncate::<i32>().year, -4712);
    }

    #[test]
    fn truncate_saturates_and_zeroes_nan() {
        let odd = CalendarDate::new(f64::NAN, 1e12, 1.0, 0.0, 0.0, 0.0);
        let ints = odd.truncate::<i32>();
        assert_eq!(ints.year, 0);
        assert_eq!(ints.month, i32::MAX);
    }

    #[test]
    fn forward_formula_reference_dates() {
        let cases = [
            ((2000.0, 1.0, 1.0, 12.0), 2_451_545.0),
            ((1970.0, 1.0, 1.0, 0.0), 2_440_587.5),
            ((1980.0, 1.0, 6.0, 0.0), 2_444_244.5),
            ((1582.0, 10.0, 15.0, 0.0), 2_299_160.5),
            ((1582.0, 10.0, 4.0, 0.0), 2_299_159.5),
            ((-4712.0, 1.0, 1.0, 12.0), 0.0),
        ];
        for ((y, m, d, h), expected) in cases {
            assert_eq!(
                julian_day_from_calendar(y, m, d, h, 0.0, 0.0),
                expected,
                "{y}-{m}-{d} {h}h"
            );
        }
    }

    #[test]
    fn to_julian_day_method() {
        let date = CalendarDate::new(2020.0, 2.0, 29.0, 13.0, 30.0, 0.0);
        assert_eq!(date.to_julian_day().value(), 2_458_909.0625);
    }

    #[test]
    fn to_utc_builds_chrono_datetime() {
        let date = CalendarDate::new(2018.0, 11.0, 6.0, 16.0, 56.0, 54.5);
        let expected = Utc.with_ymd_and_hms(2018, 11, 6, 16, 56, 54).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(date.to_utc(), Some(expected));

        let ints = CalendarDate::<i64>::new(2018, 11, 6, 16, 56, 54);
        assert_eq!(
            ints.to_utc(),
            Some(Utc.with_ymd_and_hms(2018, 11, 6, 16, 56, 54).unwrap())
        );
    }

    #[test]
    fn to_utc_rejects_invalid_fields() {
        assert!(CalendarDate::new(2018.0, 13.0, 1.0, 0.0, 0.0, 0.0).to_utc().is_none());
        assert!(CalendarDate::new(2018.0, 2.0, 30.0, 0.0, 0.0, 0.0).to_utc().is_none());
        assert!(CalendarDate::new(f64::NAN, 1.0, 1.0, 0.0, 0.0, 0.0).to_utc().is_none());
    }

    #[test]
    fn batch_columns_stay_aligned() {
        let a = CalendarDate::new(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0);
        let b = sample();
        let batch: CalendarBatch = [a, b].into_iter().collect();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.year, vec![2000.0, 1999.0]);
        assert_eq!(batch.get(1), Some(b));
        assert_eq!(batch.get(2), None);
        assert_eq!(batch.iter().collect::<Vec<_>>(), vec![a, b]);

        let ints = batch.truncate::<i64>();
        assert_eq!(ints.second, vec![0, 29]);
    }

    #[test]
    fn empty_batch() {
        let batch = CalendarBatch::<f64>::default();
        assert!(batch.is_empty());
        assert!(batch.to_utc().is_empty());
    }

    #[test]
    fn gps_truncate_keeps_unix() {
        let date = GpsDate {
            calendar: sample(),
            unix: Time::new(946_626_749.999_999_9),
        };
        let ints = date.truncate::<i32>();
        assert_eq!(ints.calendar.second, 29);
        assert_eq!(ints.unix, date.unix);
    }
}
