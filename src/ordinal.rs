// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Positional selection: "the 2nd Tuesday of each month".

use crate::{Enumerator, Interval, RuleError, RuleResult, TimeInstant};
use tracing::trace;

/// Picks the `order`-th match of `inner` within every span of `outer`.
///
/// For each containing span produced by `outer` over the bound, `inner` is
/// evaluated over that span and one candidate is chosen by position:
/// `order = 1` is the first match, `order = -1` the last. The pick is then
/// clipped to the bound, and dropped if it lies entirely outside
/// it. Containing spans are handled independently, so `outer` may return
/// whole months that only partially overlap the bound.
///
/// The position counts matches in the order `inner` returns them, which is
/// not necessarily chronological (a [`Union`](crate::Union) concatenates).
#[derive(Debug, Clone, Copy)]
pub struct Ordinal<I, O> {
    order: i32,
    inner: I,
    outer: O,
}

impl<I, O> Ordinal<I, O> {
    /// Fails with [`RuleError::ZeroOrdinal`] when `order == 0`.
    pub fn new(order: i32, inner: I, outer: O) -> RuleResult<Self> {
        if order == 0 {
            return Err(RuleError::ZeroOrdinal);
        }
        Ok(Ordinal {
            order,
            inner,
            outer,
        })
    }

    /// The signed position picked in each outer span.
    pub fn order(&self) -> i32 {
        self.order
    }
}

/// Resolve a non-zero `order` against `len` candidates.
fn position(order: i32, len: usize) -> Option<usize> {
    let steps = order.unsigned_abs() as usize;
    if steps > len {
        return None;
    }
    Some(if order > 0 { steps - 1 } else { len - steps })
}

impl<T, I, O> Enumerator<T> for Ordinal<I, O>
where
    T: TimeInstant,
    I: Enumerator<T>,
    O: Enumerator<T>,
{
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        if bound.is_empty() {
            return Vec::new();
        }

        let mut result = Vec::new();

        for span in self.outer.find_all(bound) {
            let candidates = self.inner.find_all(span);
            let Some(index) = position(self.order, candidates.len()) else {
                trace!(?span, order = self.order, found = candidates.len(), "ordinal out of range");
                continue;
            };

            let picked = candidates[index];
            if !picked.overlaps(&bound) {
                trace!(?span, ?picked, "ordinal pick outside bound");
                continue;
            }
            result.push(picked.clamp_to(&bound));
        }

        result
    }
}
