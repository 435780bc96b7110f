// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies the epoch and unit of the value stored in
//! a [`Time`](super::Time).
//!
//! | Marker | Description | Epoch | Unit |
//! |--------|-------------|-------|------|
//! | [`GPS`] | GPS Time, no leap seconds | 1980-01-06T00:00:00 UTC | seconds |
//! | [`UnixTime`] | Unix / POSIX time | 1970-01-01T00:00:00 UTC | seconds |
//! | [`JD`] | Julian Day Number (UTC axis) | −4712-01-01T12:00 (Julian) | days |

use super::instant::{Time, TimeScale};
use qtty::{Days, Seconds};
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Epoch constants
// ---------------------------------------------------------------------------

/// Seconds between the Unix epoch (1970-01-01) and the GPS epoch (1980-01-06).
pub const GPS_UNIX_EPOCH_OFFSET: Seconds = Seconds::new(315_964_800.0);

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// JD at and after which the Gregorian leap-year rule applies (1582-10-15).
pub const GREGORIAN_SWITCHOVER_JD: Days = Days::new(2_299_161.0);

/// Length of a civil day in seconds.
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// GPS Time — continuous seconds since 1980-01-06T00:00:00 UTC.
///
/// GPS time never inserts leap seconds, so it runs ahead of UTC by the
/// number of leap seconds announced since its epoch.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct GPS;

impl TimeScale for GPS {
    const LABEL: &'static str = "GPS";
    const UNIT_SYMBOL: &'static str = "s";
}

/// Unix Time — seconds since 1970-01-01T00:00:00 UTC.
///
/// Leap seconds are absorbed by the GPS → Unix conversion; values on this
/// scale follow UTC.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";
    const UNIT_SYMBOL: &'static str = "s";
}

/// Julian Day Number on the UTC axis, in days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";
    const UNIT_SYMBOL: &'static str = "d";
}

// ---------------------------------------------------------------------------
// Typed quantity accessors and arithmetic (generated by macro)
// ---------------------------------------------------------------------------

/// Bind a scale to its `qtty` quantity type: accessor, constructor and
/// `±` / `±=` with that quantity.
macro_rules! impl_quantity_arithmetic {
    ($scale:ty, $quantity:ty, $accessor:ident) => {
        impl Time<$scale> {
            /// The underlying value as a typed quantity.
            #[inline]
            pub fn $accessor(&self) -> $quantity {
                <$quantity>::new(self.value())
            }

            /// Create from a typed quantity.
            #[inline]
            pub fn from_quantity(quantity: $quantity) -> Self {
                Self::new(quantity.value())
            }
        }

        impl Add<$quantity> for Time<$scale> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: $quantity) -> Self::Output {
                Self::new(self.value() + rhs.value())
            }
        }

        impl AddAssign<$quantity> for Time<$scale> {
            #[inline]
            fn add_assign(&mut self, rhs: $quantity) {
                *self = *self + rhs;
            }
        }

        impl Sub<$quantity> for Time<$scale> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: $quantity) -> Self::Output {
                Self::new(self.value() - rhs.value())
            }
        }

        impl SubAssign<$quantity> for Time<$scale> {
            #[inline]
            fn sub_assign(&mut self, rhs: $quantity) {
                *self = *self - rhs;
            }
        }
    };
}

impl_quantity_arithmetic!(GPS, Seconds, seconds);
impl_quantity_arithmetic!(UnixTime, Seconds, seconds);
impl_quantity_arithmetic!(JD, Days, days);
