// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Presentation of calendar results.
//!
//! One canonical computation ([`CalendarDate`] / [`CalendarBatch`]) is
//! exposed in three equivalent encodings:
//!
//! | [`CalendarFormat`] | Shape |
//! |--------------------|-------|
//! | `Map` | `BTreeMap<CalendarField, V>` keyed by field name |
//! | `Tuple` | `(year, month, day, hour, minute, second)` |
//! | `Pairs` | lazy iterator of per-element tuples ([`CalendarPairs`]) |
//!
//! [`IntegerKind`] selects an optional integer truncation, applied after the
//! floating computation.  [`FieldValue`] carries a runtime-typed field.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::calendar::{CalendarBatch, CalendarDate, CalendarInteger, CalendarScalar, GpsBatch, GpsDate};
use super::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// Selectors
// ═══════════════════════════════════════════════════════════════════════════

/// Name of one output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    /// Unix seconds; only present in GPS results.
    Unix,
}

impl CalendarField {
    /// The six calendar fields in positional order.
    pub const CALENDAR: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Unix => "unix",
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoding of a calendar result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarFormat {
    #[default]
    Map,
    Tuple,
    Pairs,
}

impl FromStr for CalendarFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" | "dict" => Ok(Self::Map),
            "tuple" => Ok(Self::Tuple),
            "pairs" | "zip" => Ok(Self::Pairs),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for CalendarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Map => "map",
            Self::Tuple => "tuple",
            Self::Pairs => "pairs",
        })
    }
}

/// Integer type requested for truncated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntegerKind {
    I32,
    I64,
}

impl FromStr for IntegerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i32" | "int32" => Ok(Self::I32),
            "i64" | "int64" | "int" => Ok(Self::I64),
            _ => Err(Error::UnknownIntegerKind(s.to_owned())),
        }
    }
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FieldValue
// ═══════════════════════════════════════════════════════════════════════════

/// A field whose numeric type was chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    I32(i32),
    I64(i64),
    Float(f64),
}

impl FieldValue {
    /// Keep `value` as a float, or truncate it to `kind`.
    #[inline]
    pub fn coerce(value: f64, kind: Option<IntegerKind>) -> Self {
        match kind {
            None => Self::Float(value),
            Some(IntegerKind::I32) => Self::I32(i32::truncate(value)),
            Some(IntegerKind::I64) => Self::I64(i64::truncate(value)),
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Self::Float(_))
    }
}

impl CalendarScalar for FieldValue {
    #[inline]
    fn as_f64(self) -> f64 {
        match self {
            Self::I32(v) => f64::from(v),
            Self::I64(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tuple / map / pairs adapters
// ═══════════════════════════════════════════════════════════════════════════

/// `(year, month, day, hour, minute, second)`.
pub type CalendarTuple<V> = (V, V, V, V, V, V);

impl<T: CalendarScalar> CalendarDate<T> {
    pub fn to_tuple(&self) -> CalendarTuple<T> {
        (self.year, self.month, self.day, self.hour, self.minute, self.second)
    }

    pub fn to_map(&self) -> BTreeMap<CalendarField, T> {
        CalendarField::CALENDAR.into_iter().zip(self.to_array()).collect()
    }

    fn to_array(self) -> [T; 6] {
        [self.year, self.month, self.day, self.hour, self.minute, self.second]
    }
}

impl<T: CalendarScalar> CalendarBatch<T> {
    pub fn into_tuple(self) -> CalendarTuple<Vec<T>> {
        (self.year, self.month, self.day, self.hour, self.minute, self.second)
    }

    pub fn into_map(self) -> BTreeMap<CalendarField, Vec<T>> {
        let columns = [self.year, self.month, self.day, self.hour, self.minute, self.second];
        CalendarField::CALENDAR.into_iter().zip(columns).collect()
    }

    /// Per-element tuples, borrowed and lazy.
    pub fn pairs(&self) -> impl Iterator<Item = CalendarTuple<T>> + '_ {
        self.iter().map(|date| date.to_tuple())
    }

    /// Per-element tuples, owning and lazy.
    pub fn into_pairs(self) -> CalendarPairs<T> {
        CalendarPairs {
            batch: self,
            next: 0,
        }
    }
}

impl<T: CalendarScalar + Into<FieldValue>> GpsDate<T> {
    /// Calendar fields plus [`CalendarField::Unix`].
    pub fn to_map(&self) -> BTreeMap<CalendarField, FieldValue> {
        let mut map: BTreeMap<CalendarField, FieldValue> = self
            .calendar
            .to_map()
            .into_iter()
            .map(|(field, v)| (field, v.into()))
            .collect();
        map.insert(CalendarField::Unix, FieldValue::Float(self.unix.value()));
        map
    }
}

impl<T: CalendarScalar + Into<FieldValue>> GpsBatch<T> {
    /// Calendar columns plus a [`CalendarField::Unix`] column.
    pub fn into_map(self) -> BTreeMap<CalendarField, Vec<FieldValue>> {
        let unix: Vec<FieldValue> = self
            .unix
            .iter()
            .map(|t| FieldValue::Float(t.value()))
            .collect();
        let mut map: BTreeMap<CalendarField, Vec<FieldValue>> = self
            .calendar
            .into_map()
            .into_iter()
            .map(|(field, column)| (field, column.into_iter().map(Into::into).collect()))
            .collect();
        map.insert(CalendarField::Unix, unix);
        map
    }
}

/// Owning, lazy iterator over `(year, month, day, hour, minute, second)`
/// tuples, one per element.
#[derive(Debug, Clone)]
pub struct CalendarPairs<T = f64> {
    batch: CalendarBatch<T>,
    next: usize,
}

impl<T: CalendarScalar> Iterator for CalendarPairs<T> {
    type Item = CalendarTuple<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.batch.get(self.next)?.to_tuple();
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<T: CalendarScalar> ExactSizeIterator for CalendarPairs<T> {}

// ═══════════════════════════════════════════════════════════════════════════
// Runtime-selected output
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar result in the encoding picked by [`CalendarFormat`].
///
/// `V` is [`FieldValue`] for a scalar input and `Vec<FieldValue>` for a
/// batch.  The `Pairs` encoding always iterates per element (once for a
/// scalar).
#[derive(Debug, Clone)]
pub enum CalendarOutput<V> {
    Map(BTreeMap<CalendarField, V>),
    Tuple(CalendarTuple<V>),
    Pairs(CalendarPairs<FieldValue>),
}

impl<V> CalendarOutput<V> {
    pub fn format(&self) -> CalendarFormat {
        match self {
            Self::Map(_) => CalendarFormat::Map,
            Self::Tuple(_) => CalendarFormat::Tuple,
            Self::Pairs(_) => CalendarFormat::Pairs,
        }
    }

    pub fn into_map(self) -> Option<BTreeMap<CalendarField, V>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_tuple(self) -> Option<CalendarTuple<V>> {
        match self {
            Self::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn into_pairs(self) -> Option<CalendarPairs<FieldValue>> {
        match self {
            Self::Pairs(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// Encode one record.
pub(crate) fn present_date(
    date: CalendarDate,
    as_type: Option<IntegerKind>,
    format: CalendarFormat,
) -> CalendarOutput<FieldValue> {
    let values = date.map(|v| FieldValue::coerce(v, as_type));
    match format {
        CalendarFormat::Map => CalendarOutput::Map(values.to_map()),
        CalendarFormat::Tuple => CalendarOutput::Tuple(values.to_tuple()),
        CalendarFormat::Pairs => {
            CalendarOutput::Pairs(std::iter::once(values).collect::<CalendarBatch<_>>().into_pairs())
        }
    }
}

/// Encode a batch.
pub(crate) fn present_batch(
    batch: CalendarBatch,
    as_type: Option<IntegerKind>,
    format: CalendarFormat,
) -> CalendarOutput<Vec<FieldValue>> {
    let values = batch.map(move |v| FieldValue::coerce(v, as_type));
    match format {
        CalendarFormat::Map => CalendarOutput::Map(values.into_map()),
        CalendarFormat::Tuple => CalendarOutput::Tuple(values.into_tuple()),
        CalendarFormat::Pairs => CalendarOutput::Pairs(values.into_pairs()),
    }
}
