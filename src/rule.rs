// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The two rule kinds and their plumbing.
//!
//! - [`Finder<T>`]: at most one match per bound (`find_first`).
//! - [`Enumerator<T>`]: every match in a bound (`find_all`).
//!
//! Both traits carry provided methods that wrap `self` into the
//! combinators, so rules read left to right:
//!
//! ```
//! use qtty::Days;
//! use tempoch_rules::{finder_fn, Enumerator, Finder, Interval, TimeInstant};
//!
//! // Day 1 of every 3-day cycle, as a finder on the day-count axis.
//! let cycle = finder_fn(|bound: Interval<Days>| {
//!     let k = ((bound.start.value() - 1.0) / 3.0).ceil().max(0.0);
//!     let day = Days::new(1.0 + 3.0 * k);
//!     (day < bound.end).then(|| Interval::new(day, (day + Days::new(1.0)).earliest(bound.end)))
//! });
//!
//! let off_days = cycle.negate();
//! let gaps = off_days.apply(Days::new(0.0), Days::new(10.0));
//! assert_eq!(gaps.len(), 4);
//! ```

use crate::{
    Interval, Intersect, Negate, Ordinal, Promote, RuleError, RuleResult, TimeInstant, Union,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A rule producing at most one match per bound.
///
/// Implementations return the first (or best) occurrence at or after
/// `bound.start`, clipped to `bound`, or `None`.
///
/// When a finder is promoted into an [`Enumerator`] the search restarts at
/// the `end` of each match, so every match must end strictly after the
/// `start` of the bound it was found in. [`Promote`] stops with a warning
/// when that does not hold.
pub trait Finder<T: TimeInstant> {
    /// Find the first occurrence inside `bound`.
    fn find_first(&self, bound: Interval<T>) -> Option<Interval<T>>;

    /// Turn this finder into an enumerator by repeated application.
    fn promote(self) -> Promote<Self>
    where
        Self: Sized,
    {
        Promote::new(self)
    }

    /// Gaps between the promoted matches.
    fn negate(self) -> Negate<Promote<Self>>
    where
        Self: Sized,
    {
        Negate::new(self.promote())
    }

    /// Matches of `self` followed by matches of `other`.
    fn union<F>(self, other: F) -> Union<Promote<Self>, Promote<F>>
    where
        Self: Sized,
        F: Finder<T>,
    {
        Union::new(self.promote(), other.promote())
    }

    /// Matches of `self`, each narrowed by the matches of `filter`.
    fn intersect<F>(self, filter: F) -> Intersect<Promote<Self>, Promote<F>>
    where
        Self: Sized,
        F: Finder<T>,
    {
        Intersect::new(self.promote(), filter.promote())
    }

    /// The `order`-th match of `self` within each match of `outer`.
    fn nth_of<F>(self, order: i32, outer: F) -> RuleResult<Ordinal<Promote<Self>, Promote<F>>>
    where
        Self: Sized,
        F: Finder<T>,
    {
        Ordinal::new(order, self.promote(), outer.promote())
    }
}

/// Type-erased enumerator, for runtime-sized rule lists.
pub type BoxedEnumerator<T> = Box<dyn Enumerator<T> + Send + Sync>;

/// A rule producing every match in a bound.
///
/// The order of the returned intervals is rule-specific: promoted finders
/// are chronological, unions are concatenations.
pub trait Enumerator<T: TimeInstant> {
    /// Find all occurrences inside `bound`.
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>>;

    /// Evaluate the rule over `[start, end)`.
    fn apply(&self, start: T, end: T) -> Vec<Interval<T>> {
        let matches = self.find_all(Interval::new(start, end));
        debug!(?start, ?end, matches = matches.len(), "rule applied");
        matches
    }

    /// Evaluate the rule over a bound given in whole seconds since the
    /// Unix epoch.
    fn apply_seconds(&self, start: i64, end: i64) -> RuleResult<Vec<Interval<T>>> {
        let to_instant = |seconds: i64| {
            T::from_unix_seconds(seconds).ok_or(RuleError::TimestampOutOfRange { seconds })
        };
        Ok(self.apply(to_instant(start)?, to_instant(end)?))
    }

    /// Gaps in the bound not covered by this rule's matches.
    ///
    /// Only meaningful when the matches are chronological and do not
    /// overlap; see [`Negate`].
    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate::new(self)
    }

    /// Matches of `self` followed by matches of `other`, unmerged.
    fn union<E>(self, other: E) -> Union<Self, E>
    where
        Self: Sized,
        E: Enumerator<T>,
    {
        Union::new(self, other)
    }

    /// Evaluate `filter` inside every match of `self`.
    fn intersect<E>(self, filter: E) -> Intersect<Self, E>
    where
        Self: Sized,
        E: Enumerator<T>,
    {
        Intersect::new(self, filter)
    }

    /// The `order`-th match of `self` within each match of `outer`.
    ///
    /// Fails with [`RuleError::ZeroOrdinal`] when `order == 0`.
    fn nth_of<E>(self, order: i32, outer: E) -> RuleResult<Ordinal<Self, E>>
    where
        Self: Sized,
        E: Enumerator<T>,
    {
        Ordinal::new(order, self, outer)
    }

    /// Erase the concrete rule type.
    fn boxed(self) -> BoxedEnumerator<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

// ── Closure adapters ──────────────────────────────────────────────────────

/// Finder backed by a closure. Built with [`finder_fn`].
#[derive(Clone, Copy)]
pub struct FnFinder<F>(F);

/// Wrap a closure `Fn(Interval<T>) -> Option<Interval<T>>` as a [`Finder`].
pub fn finder_fn<T, F>(f: F) -> FnFinder<F>
where
    T: TimeInstant,
    F: Fn(Interval<T>) -> Option<Interval<T>>,
{
    FnFinder(f)
}

impl<T, F> Finder<T> for FnFinder<F>
where
    T: TimeInstant,
    F: Fn(Interval<T>) -> Option<Interval<T>>,
{
    #[inline]
    fn find_first(&self, bound: Interval<T>) -> Option<Interval<T>> {
        (self.0)(bound)
    }
}

impl<F> fmt::Debug for FnFinder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFinder")
    }
}

/// Enumerator backed by a closure. Built with [`enumerator_fn`].
#[derive(Clone, Copy)]
pub struct FnEnumerator<F>(F);

/// Wrap a closure `Fn(Interval<T>) -> Vec<Interval<T>>` as an [`Enumerator`].
pub fn enumerator_fn<T, F>(f: F) -> FnEnumerator<F>
where
    T: TimeInstant,
    F: Fn(Interval<T>) -> Vec<Interval<T>>,
{
    FnEnumerator(f)
}

impl<T, F> Enumerator<T> for FnEnumerator<F>
where
    T: TimeInstant,
    F: Fn(Interval<T>) -> Vec<Interval<T>>,
{
    #[inline]
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        (self.0)(bound)
    }
}

impl<F> fmt::Debug for FnEnumerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnEnumerator")
    }
}

// ── Forwarding through pointers ───────────────────────────────────────────

impl<T: TimeInstant, R: Finder<T> + ?Sized> Finder<T> for &R {
    #[inline]
    fn find_first(&self, bound: Interval<T>) -> Option<Interval<T>> {
        (**self).find_first(bound)
    }
}

impl<T: TimeInstant, R: Finder<T> + ?Sized> Finder<T> for Box<R> {
    #[inline]
    fn find_first(&self, bound: Interval<T>) -> Option<Interval<T>> {
        (**self).find_first(bound)
    }
}

impl<T: TimeInstant, R: Finder<T> + ?Sized> Finder<T> for Arc<R> {
    #[inline]
    fn find_first(&self, bound: Interval<T>) -> Option<Interval<T>> {
        (**self).find_first(bound)
    }
}

impl<T: TimeInstant, R: Enumerator<T> + ?Sized> Enumerator<T> for &R {
    #[inline]
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        (**self).find_all(bound)
    }
}

impl<T: TimeInstant, R: Enumerator<T> + ?Sized> Enumerator<T> for Box<R> {
    #[inline]
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        (**self).find_all(bound)
    }
}

impl<T: TimeInstant, R: Enumerator<T> + ?Sized> Enumerator<T> for Arc<R> {
    #[inline]
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        (**self).find_all(bound)
    }
}
