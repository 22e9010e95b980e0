// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Union and intersection of enumerators.
//!
//! Neither combinator sorts, merges or deduplicates. Binary forms
//! ([`Union`], [`Intersect`]) nest through the provided methods on
//! [`Enumerator`]; the n-ary forms ([`UnionAll`], [`IntersectAll`]) take
//! runtime-sized lists, usually of [`BoxedEnumerator`](crate::BoxedEnumerator).

use crate::{Enumerator, Interval, TimeInstant};

/// Concatenation of two enumerators: every match of `first`, then every
/// match of `second`.
#[derive(Debug, Clone, Copy)]
pub struct Union<A, B> {
    first: A,
    second: B,
}

impl<A, B> Union<A, B> {
    /// Matches of `first`, then matches of `second`.
    pub fn new(first: A, second: B) -> Self {
        Union { first, second }
    }
}

impl<T: TimeInstant, A: Enumerator<T>, B: Enumerator<T>> Enumerator<T> for Union<A, B> {
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        let mut result = self.first.find_all(bound);
        result.extend(self.second.find_all(bound));
        result
    }
}

/// Progressive narrowing: `filter` is evaluated inside each match of
/// `base`, and its matches replace that span.
///
/// This is not a symmetric set intersection. With bound-respecting rules
/// the instants covered are the same either way round, but the cuts follow
/// the later rule, so `a.intersect(b)` and `b.intersect(a)` may split the
/// same coverage differently.
#[derive(Debug, Clone, Copy)]
pub struct Intersect<A, B> {
    base: A,
    filter: B,
}

impl<A, B> Intersect<A, B> {
    /// Matches of `filter` found inside each match of `base`.
    pub fn new(base: A, filter: B) -> Self {
        Intersect { base, filter }
    }
}

impl<T: TimeInstant, A: Enumerator<T>, B: Enumerator<T>> Enumerator<T> for Intersect<A, B> {
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        self.base
            .find_all(bound)
            .into_iter()
            .flat_map(|span| self.filter.find_all(span))
            .collect()
    }
}

/// Concatenation of any number of enumerators, in list order.
#[derive(Debug, Clone)]
pub struct UnionAll<E> {
    members: Vec<E>,
}

/// Build a [`UnionAll`] from a list of rules.
pub fn union_all<E, I>(members: I) -> UnionAll<E>
where
    I: IntoIterator<Item = E>,
{
    UnionAll {
        members: members.into_iter().collect(),
    }
}

impl<T: TimeInstant, E: Enumerator<T>> Enumerator<T> for UnionAll<E> {
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        self.members
            .iter()
            .flat_map(|member| member.find_all(bound))
            .collect()
    }
}

/// `base` narrowed by each filter in turn.
///
/// `R0 = base(bound)`, then `R(i) = filters[i]` evaluated inside every span
/// of `R(i-1)`. An empty filter list returns the base matches unchanged.
#[derive(Debug, Clone)]
pub struct IntersectAll<B, E> {
    base: B,
    filters: Vec<E>,
}

/// Build an [`IntersectAll`] from a base rule and a list of filters.
pub fn intersect_all<B, E, I>(base: B, filters: I) -> IntersectAll<B, E>
where
    I: IntoIterator<Item = E>,
{
    IntersectAll {
        base,
        filters: filters.into_iter().collect(),
    }
}

impl<T: TimeInstant, B: Enumerator<T>, E: Enumerator<T>> Enumerator<T> for IntersectAll<B, E> {
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        self.filters
            .iter()
            .fold(self.base.find_all(bound), |spans, filter| {
                spans
                    .into_iter()
                    .flat_map(|span| filter.find_all(span))
                    .collect()
            })
    }
}
