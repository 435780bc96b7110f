// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a single `f64` whose *meaning* (epoch and unit) is
//! determined by the compile-time marker `S: TimeScale`.  Construction,
//! ordering, differences, display and serialisation are implemented once,
//! generically.
//!
//! Conversions that only make sense between particular scales (GPS → Unix
//! with leap seconds, Unix → Julian Day, Julian Day → calendar) live in
//! inherent `impl` blocks gated on the concrete marker type.

use std::marker::PhantomData;
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A **time scale** fixes the epoch and the unit of the raw value carried by
/// [`Time`].  Markers are zero-sized; all conversion logic lives in
/// scale-specific `impl Time<Marker>` blocks.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Unit symbol of the raw value (`"s"` or `"d"`).
    const UNIT_SYMBOL: &'static str;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    value: f64,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar expressed in the scale's native unit.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _scale: PhantomData,
        }
    }

    /// The underlying scalar value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Wrap every element of a raw batch.
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values.iter().copied().map(Self::new).collect()
    }

    /// Element-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// Element-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", S::LABEL, self.value, S::UNIT_SYMBOL)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

/// Difference of two instants on the same scale, in the scale's raw unit.
impl<S: TimeScale> Sub for Time<S> {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.value - rhs.value
    }
}

// ── From/Into f64 ─────────────────────────────────────────────────────────

impl<S: TimeScale> From<f64> for Time<S> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<S: TimeScale> From<Time<S>> for f64 {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.value
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{UnixTime, GPS, JD};
    use super::*;

    #[test]
    fn test_creation_and_value() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.value(), 2_451_545.0);
    }

    #[test]
    fn test_from_values_preserves_order() {
        let raw = [3.0, 1.0, 2.0];
        let times = Time::<GPS>::from_values(&raw);
        let back: Vec<f64> = times.into_iter().map(f64::from).collect();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_min_max() {
        let a = Time::<UnixTime>::new(10.0);
        let b = Time::<UnixTime>::new(14.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_difference() {
        let a = Time::<GPS>::new(100.0);
        let b = Time::<GPS>::new(40.0);
        assert_eq!(a - b, 60.0);
    }

    #[test]
    fn test_comparison() {
        let a = Time::<JD>::new(1.0);
        let b = Time::<JD>::new(2.0);
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_display_labels() {
        let gps = format!("{}", Time::<GPS>::new(5.0));
        assert!(gps.starts_with("GPS"));
        assert!(gps.ends_with(" s"));

        let jd = format!("{}", Time::<JD>::new(2_451_545.0));
        assert!(jd.contains("Julian Day"));
        assert!(jd.ends_with(" d"));
    }
}
