// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unix Time (`Time<UnixTime>`) specific extensions.

use chrono::{DateTime, Utc};

use super::instant::Time;
use super::scales::{UnixTime, JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};

impl Time<UnixTime> {
    /// Unix epoch: 1970-01-01T00:00:00 UTC.
    pub const EPOCH: Self = Self::new(0.0);

    /// Julian Day Number: `JD = unix / 86400 + 2440587.5`.
    #[inline]
    pub fn to_julian(&self) -> Time<JD> {
        Time::new(unix_to_julian(self.value()))
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` for non-finite values or values outside chrono's
    /// representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = self.value();
        if !seconds.is_finite() {
            return None;
        }
        let secs = seconds.floor();
        let nanos = (((seconds - secs) * 1e9) as u32).min(999_999_999);
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = datetime.timestamp() as f64;
        let nanos = datetime.timestamp_subsec_nanos() as f64 / 1e9;
        Self::new(seconds + nanos)
    }
}

impl From<Time<UnixTime>> for Time<JD> {
    #[inline]
    fn from(unix: Time<UnixTime>) -> Self {
        unix.to_julian()
    }
}

/// Raw Unix seconds → Julian Day Number.
#[inline]
pub fn unix_to_julian(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD.value()
}
