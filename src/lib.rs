// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Recurring Interval Rules
//!
//! This crate provides a small algebra for patterned time intervals: given a
//! bounding interval, a rule yields the sub-intervals that match it ("every
//! Tuesday", "the 2nd weekday of the month", "business hours except
//! holidays"). Primitive rules are supplied by the caller; the crate only
//! composes them.
//!
//! # Core types
//!
//! - [`Interval<T>`] — a half-open span over any [`TimeInstant`].
//! - [`TimeInstant`] — trait for points in time (`chrono::DateTime<Utc>`,
//!   [`qtty::Days`]).
//! - [`Finder<T>`] — rule yielding at most one match per bound.
//! - [`Enumerator<T>`] — rule yielding every match in a bound.
//!
//! # Combinators
//!
//! | Type | Built with | Result |
//! |------|------------|--------|
//! | [`Promote`] | [`Finder::promote`] | finder re-applied until it runs dry |
//! | [`Negate`] | [`Enumerator::negate`] | gaps in the bound |
//! | [`Union`] / [`UnionAll`] | [`Enumerator::union`] / [`union_all`] | concatenated matches |
//! | [`Intersect`] / [`IntersectAll`] | [`Enumerator::intersect`] / [`intersect_all`] | sequential narrowing |
//! | [`Ordinal`] | [`Enumerator::nth_of`] | N-th inner match per outer span |
//!
//! No combinator sorts, merges or deduplicates its output.
//!
//! # Entry points
//!
//! [`Enumerator::apply`] evaluates a rule over `[start, end)`;
//! [`Enumerator::apply_seconds`] takes the bound as Unix seconds.
//!
//! # Caller obligations
//!
//! - A [`Finder`] must return matches that end after the start of the bound
//!   it is given; [`Promote`] stops (with a `tracing` warning) otherwise,
//!   and never calls a finder more than [`Limits::max_matches`] times per
//!   bound.
//! - [`Negate`] expects chronological, non-overlapping matches.

mod combine;
mod error;
pub(crate) mod instant;
mod limits;
mod negate;
mod ordinal;
mod period;
mod promote;
mod rule;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use combine::{intersect_all, union_all, Intersect, IntersectAll, Union, UnionAll};
pub use error::{RuleError, RuleResult};
pub use instant::TimeInstant;
pub use limits::{Limits, DEFAULT_MAX_MATCHES};
pub use negate::Negate;
pub use ordinal::Ordinal;
pub use period::{gaps_within, DayPeriod, Interval, UtcPeriod};
pub use promote::Promote;
pub use rule::{
    enumerator_fn, finder_fn, BoxedEnumerator, Enumerator, Finder, FnEnumerator, FnFinder,
};
