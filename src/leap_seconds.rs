// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap seconds announced since the GPS epoch, expressed in GPS seconds.
//!
//! Each entry is the GPS-time instant at which UTC absorbed one more leap
//! second (00:00:00 UTC of the day following the insertion).  The value of
//! entry *i* therefore already includes the *i* earlier insertions.
//!
//! The table is static: new announcements are appended by a software update,
//! never loaded at runtime.
//!
//! ## References
//! * IERS Bulletin C (leap second announcements)

/// Number of leap seconds inserted between 1980-01-06 and the last table entry.
pub const LEAP_SECOND_COUNT: usize = 18;

/// Leap-second instants in GPS seconds, strictly ascending, integral.
pub const LEAP_SECONDS: [f64; LEAP_SECOND_COUNT] = [
    46_828_800.0,    // 1981-07-01
    78_364_801.0,    // 1982-07-01
    109_900_802.0,   // 1983-07-01
    173_059_203.0,   // 1985-07-01
    252_028_804.0,   // 1988-01-01
    315_187_205.0,   // 1990-01-01
    346_723_206.0,   // 1991-01-01
    393_984_007.0,   // 1992-07-01
    425_520_008.0,   // 1993-07-01
    457_056_009.0,   // 1994-07-01
    504_489_610.0,   // 1996-01-01
    551_750_411.0,   // 1997-07-01
    599_184_012.0,   // 1999-01-01
    820_108_813.0,   // 2006-01-01
    914_803_214.0,   // 2009-01-01
    1_025_136_015.0, // 2012-07-01
    1_119_744_016.0, // 2015-07-01
    1_167_264_017.0, // 2017-01-01
];

/// Number of table entries `<= gps_seconds`.
///
/// NaN compares false against every entry and yields `0`.
#[inline]
pub fn count_leaps_before(gps_seconds: f64) -> u32 {
    // Binary search for the first entry > gps_seconds.
    let mut lo = 0usize;
    let mut hi = LEAP_SECONDS.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if LEAP_SECONDS[mid] <= gps_seconds {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo as u32
}

/// Whether `floor(gps_seconds)` is exactly one of the tabulated instants.
///
/// Entries are distinct integers, so if `floor(t)` matches one it is the
/// last entry counted by [`count_leaps_before`].
#[inline]
pub fn is_exact_leap_instant(gps_seconds: f64) -> bool {
    match count_leaps_before(gps_seconds) {
        0 => false,
        n => LEAP_SECONDS[n as usize - 1] == gps_seconds.floor(),
    }
}

/// [`count_leaps_before`] applied independently to every element.
pub fn count_leaps_before_batch(gps_seconds: &[f64]) -> Vec<u32> {
    gps_seconds.iter().map(|&t| count_leaps_before(t)).collect()
}

/// [`is_exact_leap_instant`] applied independently to every element.
pub fn is_exact_leap_instant_batch(gps_seconds: &[f64]) -> Vec<bool> {
    gps_seconds.iter().map(|&t| is_exact_leap_instant(t)).collect()
}
