// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Entry points over raw `f64` values.
//!
//! Every conversion has a scalar and a batch form sharing the same
//! per-element formula.  Batch outputs are index-aligned with their input.
//!
//! ```text
//! GPS seconds ──► Unix seconds ──► Julian Day ──► calendar fields
//! ```

use super::calendar::{CalendarBatch, CalendarDate, GpsBatch, GpsDate};
use super::format::{
    present_batch, present_date, CalendarFormat, CalendarOutput, FieldValue, IntegerKind,
};
use super::gps_time_ext::{gps_to_unix_batch_with_offset, gps_to_unix_with_offset};
use super::instant::Time;
use super::julian_date_ext::{julian_to_calendar, julian_to_calendar_batch};
use super::unix_time_ext::unix_to_julian;

/// GPS seconds of the ICESat-2 ATLAS standard data product epoch
/// (`atlas_sdp_gps_epoch`, 2018-01-01T00:00:00 UTC).
pub const ATLAS_SDP_GPS_EPOCH: f64 = 1_198_800_018.0;

// ── GPS → Unix ────────────────────────────────────────────────────────────

/// GPS seconds → Unix seconds, leap seconds removed.
#[inline]
pub fn convert_gps_to_unix(gps_seconds: f64) -> f64 {
    gps_to_unix_with_offset(gps_seconds, 0.0)
}

/// Batch form of [`convert_gps_to_unix`].
pub fn convert_gps_to_unix_batch(gps_seconds: &[f64]) -> Vec<f64> {
    gps_to_unix_batch_with_offset(gps_seconds, 0.0)
}

// ── Julian Day → calendar ─────────────────────────────────────────────────

/// Julian Day → calendar fields, optionally truncated, in the chosen encoding.
pub fn convert_julian(
    jd: f64,
    as_type: Option<IntegerKind>,
    format: CalendarFormat,
) -> CalendarOutput<FieldValue> {
    present_date(julian_to_calendar(jd), as_type, format)
}

/// Batch form of [`convert_julian`]; every field becomes a column.
pub fn convert_julian_batch(
    jd: &[f64],
    as_type: Option<IntegerKind>,
    format: CalendarFormat,
) -> CalendarOutput<Vec<FieldValue>> {
    log::debug!(
        "converting {} Julian days to calendar fields ({format}, {})",
        jd.len(),
        as_type.map_or_else(|| "f64".to_owned(), |kind| kind.to_string())
    );
    present_batch(julian_to_calendar_batch(jd), as_type, format)
}

// ── GPS → calendar ────────────────────────────────────────────────────────

/// GPS seconds (shifted by `offset`) → calendar fields plus Unix time.
pub fn convert_gps_time(gps_seconds: f64, offset: f64) -> GpsDate {
    let unix = gps_to_unix_with_offset(gps_seconds, offset);
    GpsDate {
        calendar: julian_to_calendar(unix_to_julian(unix)),
        unix: Time::new(unix),
    }
}

/// Batch form of [`convert_gps_time`].
pub fn convert_gps_time_batch(gps_seconds: &[f64], offset: f64) -> GpsBatch {
    let unix = gps_to_unix_batch_with_offset(gps_seconds, offset);
    let calendar: CalendarBatch = unix
        .iter()
        .map(|&u| julian_to_calendar(unix_to_julian(u)))
        .collect();
    GpsBatch {
        calendar,
        unix: Time::from_values(&unix),
    }
}

/// Calendar fields of ATLAS `delta_time` values (seconds since
/// [`ATLAS_SDP_GPS_EPOCH`]).
///
/// The epoch enters as the conversion offset, so leap seconds are looked up
/// on the absolute GPS time.
pub fn convert_atlas_delta_time(delta_time: &[f64]) -> GpsBatch {
    convert_gps_time_batch(delta_time, ATLAS_SDP_GPS_EPOCH)
}

impl From<GpsDate> for CalendarDate {
    fn from(date: GpsDate) -> Self {
        date.calendar
    }
}
