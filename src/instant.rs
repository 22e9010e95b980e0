// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points in time usable as interval endpoints.
//!
//! The rule algebra only ever compares, subtracts and constructs instants,
//! so [`TimeInstant`] is deliberately narrow. Two implementations ship with
//! the crate:
//!
//! - `chrono::DateTime<Utc>` for civil calendar schedules.
//! - [`qtty::Days`] for schedules expressed as a day count since the Unix
//!   epoch (fractional days allowed).

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Seconds};
use std::fmt::Debug;

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as endpoints of
/// [`Interval<T>`](crate::Interval) and therefore flow through every rule.
pub trait TimeInstant: Copy + Clone + Debug + PartialEq + PartialOrd + Sized {
    /// The duration type produced by [`difference`](Self::difference).
    type Duration;

    /// Compute `self - other`.
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Build an instant from whole seconds since 1970-01-01T00:00:00.
    ///
    /// Returns `None` when the value is not representable.
    fn from_unix_seconds(seconds: i64) -> Option<Self>;

    /// The earlier of two instants.
    #[inline]
    fn earliest(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The later of two instants.
    #[inline]
    fn latest(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    fn from_unix_seconds(seconds: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(seconds, 0)
    }
}

impl TimeInstant for Days {
    type Duration = Days;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn from_unix_seconds(seconds: i64) -> Option<Self> {
        Some(Seconds::new(seconds as f64).to::<Day>())
    }
}
