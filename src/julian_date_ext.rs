// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions: calendar fields.
//!
//! The Julian Day → calendar conversion is the closed-form algorithm of
//! *Numerical Recipes* (`caldat`) extended with the time of day:
//!
//! ```text
//! JDO = floor(JD + 0.5)
//! C   = JDO + 1524                                  if JDO <  2 299 161
//! C   = JDO + B − floor(B/4) + 1525                 otherwise,
//!       B = floor((JDO − 1 867 216.25) / 36 524.25)
//! D   = floor((C − 122.1) / 365.25)
//! E   = floor(365·D + floor(D/4))
//! F   = floor((C − E) / 30.6001)
//! ```
//!
//! Every operation is performed in `f64`, in this order, so results are
//! reproducible bit for bit.  Each element of a batch picks its own calendar
//! regime.
//!
//! ## References
//! * Press et al., *Numerical Recipes*, §1.1 (`caldat`)
//! * Hatcher (1984), "Simple formulae for Julian day numbers and calendar dates"

use super::calendar::{CalendarBatch, CalendarDate};
use super::instant::Time;
use super::scales::{UnixTime, GREGORIAN_SWITCHOVER_JD, JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// First day of the Gregorian calendar, 1582-10-15 (JD 2 299 161.0 at noon).
    pub const GREGORIAN_SWITCHOVER: Self = Self::new(GREGORIAN_SWITCHOVER_JD.value());

    /// Calendar fields of this Julian Day.
    #[inline]
    pub fn to_calendar(&self) -> CalendarDate {
        julian_to_calendar(self.value())
    }

    /// Unix seconds of this Julian Day (inverse of
    /// [`Time::<UnixTime>::to_julian`](Time::to_julian)).
    #[inline]
    pub fn to_unix(&self) -> Time<UnixTime> {
        Time::new((self.value() - UNIX_EPOCH_JD.value()) * SECONDS_PER_DAY)
    }
}

impl From<Time<JD>> for CalendarDate {
    #[inline]
    fn from(jd: Time<JD>) -> Self {
        jd.to_calendar()
    }
}

/// Raw Julian Day → calendar fields.
pub fn julian_to_calendar(jd: f64) -> CalendarDate {
    let jdo = (jd + 0.5).floor();

    let c = if jdo < GREGORIAN_SWITCHOVER_JD.value() {
        jdo + 1_524.0
    } else {
        let b = ((jdo - 1_867_216.25) / 36_524.25).floor();
        jdo + b - (b / 4.0).floor() + 1_525.0
    };

    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.0 * d + (d / 4.0).floor()).floor();
    let f = ((c - e) / 30.6001).floor();

    let day = (c - e + 0.5).floor() - (30.6001 * f).floor();
    let month = f - 1.0 - 12.0 * (f / 14.0).floor();
    let year = d - 4_715.0 - ((7.0 + month) / 10.0).floor();

    let hour = (24.0 * (jd + 0.5 - jdo)).floor();
    let g = (jd + 0.5 - jdo) - hour / 24.0;
    let minute = (g * 1_440.0).floor();
    let second = (g - minute / 1_440.0) * 86_400.0;

    CalendarDate::new(year, month, day, hour, minute, second)
}

/// [`julian_to_calendar`] applied to every element, index-aligned.
pub fn julian_to_calendar_batch(jd: &[f64]) -> CalendarBatch {
    jd.iter().map(|&v| julian_to_calendar(v)).collect()
}
