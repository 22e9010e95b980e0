// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Complement of an enumerator within its bound.

use crate::{gaps_within, Enumerator, Interval, TimeInstant};

/// Enumerator returning the parts of the bound *not* covered by `inner`.
///
/// The inner matches are walked in the order they are returned, so they
/// must be chronological and non-overlapping for the result to be a true
/// complement. Promoted finders satisfy this; a [`Union`](crate::Union) in
/// general does not. Other inputs give deterministic but unintuitive gaps
/// (see [`gaps_within`]).
#[derive(Debug, Clone, Copy)]
pub struct Negate<E> {
    inner: E,
}

impl<E> Negate<E> {
    /// Complement of `inner` within each bound.
    pub fn new(inner: E) -> Self {
        Negate { inner }
    }

    /// The negated rule.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<T: TimeInstant, E: Enumerator<T>> Enumerator<T> for Negate<E> {
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        gaps_within(bound, &self.inner.find_all(bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enumerator_fn, finder_fn, Finder};
    use qtty::Days;

    fn days(start: f64, end: f64) -> Interval<Days> {
        Interval::new(Days::new(start), Days::new(end))
    }

    fn every_third_day() -> impl Finder<Days> {
        finder_fn(|bound: Interval<Days>| {
            let k = ((bound.start.value() - 1.0) / 3.0).ceil().max(0.0);
            let day = Days::new(1.0 + 3.0 * k);
            (day < bound.end).then(|| Interval::new(day, (day + Days::new(1.0)).earliest(bound.end)))
        })
    }

    #[test]
    fn test_negate_every_third_day() {
        let gaps = every_third_day().negate().find_all(days(0.0, 10.0));
        assert_eq!(
            gaps,
            vec![days(0.0, 1.0), days(2.0, 4.0), days(5.0, 7.0), days(8.0, 10.0)]
        );
    }

    #[test]
    fn test_negate_nothing_matched_is_whole_bound() {
        let never = finder_fn(|_: Interval<Days>| None);
        assert_eq!(never.negate().find_all(days(2.0, 5.0)), vec![days(2.0, 5.0)]);
    }

    #[test]
    fn test_negate_everything_matched_is_empty() {
        let whole = finder_fn(|bound: Interval<Days>| Some(bound));
        assert!(whole.negate().find_all(days(2.0, 5.0)).is_empty());
    }

    #[test]
    fn test_double_negate_restores_matches() {
        let bound = days(0.0, 10.0);
        let once = every_third_day().promote().find_all(bound);
        let twice = every_third_day().negate().negate().find_all(bound);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_negate_does_not_touch_bound() {
        let inner = enumerator_fn(|_: Interval<Days>| vec![days(3.0, 4.0)]);
        let negate = Negate::new(inner);
        let bound = days(0.0, 6.0);

        assert_eq!(negate.find_all(bound), vec![days(0.0, 3.0), days(4.0, 6.0)]);
        assert_eq!(bound, days(0.0, 6.0));
        assert_eq!(negate.inner().find_all(bound), vec![days(3.0, 4.0)]);
    }

    #[test]
    fn test_negate_overlapping_input_does_not_panic() {
        let inner = enumerator_fn(|_: Interval<Days>| vec![days(1.0, 6.0), days(2.0, 3.0)]);
        let gaps = inner.negate().find_all(days(0.0, 10.0));
        // The cursor falls back to 3.0 after the nested span.
        assert_eq!(gaps, vec![days(0.0, 1.0), days(3.0, 10.0)]);
    }
}
