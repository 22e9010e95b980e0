// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`UtcPeriod`] and [`DayPeriod`]: aliases for the two shipped instants
//! - [`gaps_within`]: the single-pass gap walk behind [`Negate`](crate::Negate)

use super::TimeInstant;
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an interval between two instants.
///
/// Intervals are half-open by convention, `[start, end)`: the `end` of one
/// match is reused unmodified as the `start` of the search for the next.
/// An interval with `end <= start` is empty; rules treat it as "nothing left
/// to search" rather than as an error.
///
/// # Examples
///
/// ```
/// use qtty::Days;
/// use tempoch_rules::Interval;
///
/// let span = Interval::new(Days::new(1.0), Days::new(2.5));
/// assert_eq!(span.duration(), Days::new(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

/// Interval on a bare day-count axis.
pub type DayPeriod = Interval<Days>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns `end - start`. Negative for an inverted interval.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// `true` when there is nothing inside the interval (`end <= start`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// `true` when `other` shares at least one instant with `self`, treating
    /// both as half-open.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `true` when `other` lies entirely inside `self`.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Truncates the edges of `self` so they do not extend past `bound`.
    ///
    /// Unlike [`intersection`](Self::intersection) this never fails: a
    /// disjoint interval comes back inverted, which callers read as empty.
    pub fn clamp_to(&self, bound: &Self) -> Self {
        Self::new(self.start.latest(bound.start), self.end.earliest(bound.end))
    }

    /// Returns the overlapping sub-interval between `self` and `other`.
    ///
    /// If one interval ends exactly when the other starts, the intersection
    /// is empty and `None` is returned.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let clipped = self.clamp_to(other);
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl Interval<DateTime<Utc>> {
    /// Returns the duration in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        self.duration().num_seconds()
    }
}

/// Returns the gaps of `periods` within the bounding `outer` interval.
///
/// The walk keeps a cursor that starts at `outer.start`. For every period a
/// gap `[cursor, period.start)` is emitted when the cursor is strictly
/// before the period, then the cursor jumps to `period.end`. A trailing gap
/// closes the walk when the cursor is still before `outer.end`.
///
/// `periods` should be sorted and non-overlapping. Other inputs do not
/// panic, but the cursor follows each `end` as given, so the gaps it reports
/// may overlap the periods.
pub fn gaps_within<T: TimeInstant>(outer: Interval<T>, periods: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut gaps = Vec::new();
    let mut cursor = outer.start;
    for p in periods {
        if cursor < p.start {
            gaps.push(Interval::new(cursor, p.start));
        }
        cursor = p.end;
    }
    if cursor < outer.end {
        gaps.push(Interval::new(cursor, outer.end));
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn days(start: f64, end: f64) -> DayPeriod {
        Interval::new(Days::new(start), Days::new(end))
    }

    #[test]
    fn test_interval_creation() {
        let period = days(1.0, 2.0);
        assert_eq!(period.start, Days::new(1.0));
        assert_eq!(period.end, Days::new(2.0));
    }

    #[test]
    fn test_interval_duration_can_be_negative() {
        assert_eq!(days(1.0, 2.5).duration(), Days::new(1.5));
        assert_eq!(days(3.0, 1.0).duration(), Days::new(-2.0));
    }

    #[test]
    fn test_interval_is_empty() {
        assert!(!days(0.0, 1.0).is_empty());
        assert!(days(1.0, 1.0).is_empty());
        assert!(days(2.0, 1.0).is_empty());
    }

    #[test]
    fn test_interval_duration_utc() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap();
        let period = Interval::new(start, end);

        assert_eq!(period.duration_seconds(), 8 * 3600);
    }

    #[test]
    fn test_interval_display() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let display = format!("{}", Interval::new(start, end));

        assert!(display.contains("2024-01-01"));
        assert!(display.contains("2024-01-02"));
        assert!(display.contains("to"));
    }

    #[test]
    fn test_overlaps_is_half_open() {
        assert!(days(0.0, 5.0).overlaps(&days(3.0, 8.0)));
        assert!(!days(0.0, 3.0).overlaps(&days(3.0, 8.0)));
        assert!(!days(5.0, 8.0).overlaps(&days(0.0, 3.0)));
    }

    #[test]
    fn test_contains() {
        assert!(days(0.0, 10.0).contains(&days(2.0, 4.0)));
        assert!(days(0.0, 10.0).contains(&days(0.0, 10.0)));
        assert!(!days(0.0, 10.0).contains(&days(8.0, 11.0)));
    }

    #[test]
    fn test_clamp_to_truncates_edges() {
        let bound = days(2.0, 6.0);
        assert_eq!(days(0.0, 9.0).clamp_to(&bound), bound);
        assert_eq!(days(3.0, 9.0).clamp_to(&bound), days(3.0, 6.0));
        assert!(days(7.0, 9.0).clamp_to(&bound).is_empty());
    }

    #[test]
    fn test_interval_intersection_overlap() {
        let overlap = days(0.0, 5.0).intersection(&days(3.0, 8.0)).expect("expected overlap");
        assert_eq!(overlap, days(3.0, 5.0));
    }

    #[test]
    fn test_interval_intersection_touching_edges() {
        assert_eq!(days(0.0, 3.0).intersection(&days(3.0, 8.0)), None);
    }

    #[test]
    fn test_gaps_within() {
        let gaps = gaps_within(days(0.0, 10.0), &[days(2.0, 4.0), days(6.0, 8.0)]);
        assert_eq!(gaps, vec![days(0.0, 2.0), days(4.0, 6.0), days(8.0, 10.0)]);
    }

    #[test]
    fn test_gaps_within_empty() {
        let gaps = gaps_within(days(0.0, 10.0), &[]);
        assert_eq!(gaps, vec![days(0.0, 10.0)]);
    }

    #[test]
    fn test_gaps_within_full() {
        assert!(gaps_within(days(0.0, 10.0), &[days(0.0, 10.0)]).is_empty());
    }

    #[test]
    fn test_gaps_within_inverted_outer() {
        assert!(gaps_within(days(5.0, 1.0), &[]).is_empty());
    }

    #[test]
    fn test_gaps_within_follows_unsorted_input() {
        // The cursor follows each end as given, even backwards.
        let gaps = gaps_within(days(0.0, 10.0), &[days(6.0, 8.0), days(2.0, 4.0)]);
        assert_eq!(gaps, vec![days(0.0, 6.0), days(4.0, 10.0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_utc_period_serde_roundtrip() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let period = Interval::new(start, end);

        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("start"));
        assert!(json.contains("end"));
        let back: UtcPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_day_period_serde_roundtrip() {
        let period: DayPeriod = days(1.5, 4.0);

        let json = serde_json::to_string(&period).unwrap();
        let back: DayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }
}
