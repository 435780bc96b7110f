// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GPS Time (`Time<GPS>`) specific extensions: conversion to Unix time.
//!
//! ```text
//! t    = gps + offset
//! unix = t + 315 964 800 − count_leaps_before(t)
//! unix += 0.5            if floor(t) is a tabulated leap instant
//! ```
//!
//! Both the leap count and the leap-instant test see the offset-adjusted
//! value.  The half-second bump on a leap instant is the historical
//! convention of the altimetry processing chain and is kept bit-for-bit.

use qtty::Seconds;

use super::instant::Time;
use super::leap_seconds::{count_leaps_before, is_exact_leap_instant};
use super::scales::{UnixTime, GPS, GPS_UNIX_EPOCH_OFFSET};

/// Extra correction applied inside an actual leap second.
const LEAP_INSTANT_CORRECTION_S: f64 = 0.5;

impl Time<GPS> {
    /// GPS epoch: 1980-01-06T00:00:00 UTC.
    pub const EPOCH: Self = Self::new(0.0);

    /// Leap seconds inserted at or before this instant.
    #[inline]
    pub fn leap_seconds(&self) -> u32 {
        count_leaps_before(self.value())
    }

    /// Whether this instant falls inside a tabulated leap second.
    #[inline]
    pub fn is_leap_instant(&self) -> bool {
        is_exact_leap_instant(self.value())
    }

    /// Convert to Unix time, removing accumulated leap seconds.
    #[inline]
    pub fn to_unix(&self) -> Time<UnixTime> {
        Time::new(gps_to_unix_with_offset(self.value(), 0.0))
    }

    /// Convert to Unix time after shifting this instant by `offset`.
    ///
    /// The shifted instant, not the raw one, drives the leap-second lookup.
    #[inline]
    pub fn to_unix_with_offset(&self, offset: Seconds) -> Time<UnixTime> {
        Time::new(gps_to_unix_with_offset(self.value(), offset.value()))
    }
}

impl From<Time<GPS>> for Time<UnixTime> {
    #[inline]
    fn from(gps: Time<GPS>) -> Self {
        gps.to_unix()
    }
}

/// Raw GPS seconds (plus `offset`) → Unix seconds.
///
/// Pre-epoch or non-finite input is not rejected; it produces whatever the
/// arithmetic yields.
pub fn gps_to_unix_with_offset(gps_seconds: f64, offset: f64) -> f64 {
    let t = gps_seconds + offset;
    let leaps = count_leaps_before(t);
    let mut unix = t + GPS_UNIX_EPOCH_OFFSET.value() - f64::from(leaps);
    if is_exact_leap_instant(t) {
        log::trace!("GPS {t} s falls inside leap second #{leaps}");
        unix += LEAP_INSTANT_CORRECTION_S;
    }
    unix
}

/// [`gps_to_unix_with_offset`] applied to every element, index-aligned.
pub fn gps_to_unix_batch_with_offset(gps_seconds: &[f64], offset: f64) -> Vec<f64> {
    log::debug!(
        "converting {} GPS timestamps to Unix time (offset {offset} s)",
        gps_seconds.len()
    );
    gps_seconds
        .iter()
        .map(|&t| gps_to_unix_with_offset(t, offset))
        .collect()
}
