// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the textual selectors.
//!
//! The numeric conversions never fail; only parsing a [`CalendarFormat`] or an
//! [`IntegerKind`] from a string can.
//!
//! [`CalendarFormat`]: crate::CalendarFormat
//! [`IntegerKind`]: crate::IntegerKind

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown calendar format `{0}` (expected `map`, `tuple` or `pairs`)")]
    UnknownFormat(String),

    #[error("unknown integer kind `{0}` (expected `i32` or `i64`)")]
    UnknownIntegerKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
