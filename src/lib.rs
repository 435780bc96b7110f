// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GPS time to UTC calendar conversion with leap-second correction.
//!
//! Satellite products (e.g. ICESat-2 ATLAS) timestamp their samples in GPS
//! seconds.  This crate turns those values into civil UTC calendar fields:
//!
//! ```text
//! GPS seconds ──(leap seconds)──► Unix seconds ──► Julian Day ──► Y M D h m s
//! ```
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`CalendarDate`] / [`CalendarBatch`] — calendar fields of one instant / a batch.
//! - [`GpsDate`] / [`GpsBatch`] — calendar fields plus the intermediate Unix time.
//! - [`CalendarOutput`] — a result in the encoding selected by [`CalendarFormat`].
//!
//! # Time scales
//!
//! | Marker | Scale | Unit |
//! |--------|-------|------|
//! | [`GPS`] | GPS Time | seconds |
//! | [`UnixTime`] | Unix / POSIX time | seconds |
//! | [`JD`] | Julian Day Number | days |
//!
//! # Quick example
//!
//! ```rust
//! use gps_calendar::{convert_gps_time, CalendarDate};
//!
//! let date = convert_gps_time(0.0, 0.0);
//! assert_eq!(date.unix.value(), 315_964_800.0);
//! assert_eq!(date.calendar, CalendarDate::new(1980.0, 1.0, 6.0, 0.0, 0.0, 0.0));
//! ```
//!
//! All conversions are total: malformed input (NaN, absurd ranges) flows
//! through as floating-point results instead of errors.

mod calendar;
mod convert;
mod error;
mod format;
mod gps_time_ext;
pub(crate) mod instant;
mod julian_date_ext;
pub mod leap_seconds;
pub(crate) mod scales;
mod unix_time_ext;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    julian_day_from_calendar, CalendarBatch, CalendarDate, CalendarInteger, CalendarScalar,
    GpsBatch, GpsDate,
};
pub use convert::{
    convert_atlas_delta_time, convert_gps_time, convert_gps_time_batch, convert_gps_to_unix,
    convert_gps_to_unix_batch, convert_julian, convert_julian_batch, ATLAS_SDP_GPS_EPOCH,
};
pub use error::{Error, Result};
pub use format::{
    CalendarField, CalendarFormat, CalendarOutput, CalendarPairs, CalendarTuple, FieldValue,
    IntegerKind,
};
pub use gps_time_ext::{gps_to_unix_batch_with_offset, gps_to_unix_with_offset};
pub use instant::{Time, TimeScale};
pub use julian_date_ext::{julian_to_calendar, julian_to_calendar_batch};
pub use leap_seconds::{
    count_leaps_before, count_leaps_before_batch, is_exact_leap_instant, is_exact_leap_instant_batch,
};
pub use scales::{
    UnixTime, GPS, GPS_UNIX_EPOCH_OFFSET, GREGORIAN_SWITCHOVER_JD, JD, UNIX_EPOCH_JD,
};
pub use unix_time_ext::unix_to_julian;

// ── Type aliases ──────────────────────────────────────────────────────────

/// GPS Time — continuous seconds since 1980-01-06T00:00:00 UTC.
pub type GpsTime = Time<GPS>;

/// Unix Time — seconds since 1970-01-01T00:00:00 UTC.
pub type UnixTimestamp = Time<UnixTime>;

/// Julian Date on the UTC axis.
pub type JulianDate = Time<JD>;
