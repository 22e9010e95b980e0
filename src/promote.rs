// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Finder → enumerator promotion.

use crate::{Enumerator, Finder, Interval, Limits, TimeInstant};
use tracing::warn;

/// Enumerator that re-applies a [`Finder`] until it runs dry.
///
/// The search starts over the whole bound. After each match the cursor
/// moves to the match's `end` and the finder is asked again over
/// `[cursor, bound.end)`. Iteration stops when the finder returns `None`,
/// when the remaining search window is empty, or when [`Limits`] is hit.
///
/// For a finder that clips to its bound and always advances, the output is
/// chronological, non-overlapping and contained in the bound. A match that
/// does not end after the cursor is kept, then the walk stops with a
/// warning instead of spinning.
#[derive(Debug, Clone, Copy)]
pub struct Promote<F> {
    finder: F,
    limits: Limits,
}

impl<F> Promote<F> {
    /// Promote `finder` with [`Limits::default`].
    pub fn new(finder: F) -> Self {
        Promote {
            finder,
            limits: Limits::default(),
        }
    }

    /// Replace the evaluation limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The wrapped finder.
    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// The limits applied to each bound.
    pub fn limits(&self) -> Limits {
        self.limits
    }
}

impl<T: TimeInstant, F: Finder<T>> Enumerator<T> for Promote<F> {
    fn find_all(&self, bound: Interval<T>) -> Vec<Interval<T>> {
        let mut result = Vec::new();
        let mut cursor = bound.start;
        let mut calls = 0;

        loop {
            let window = Interval::new(cursor, bound.end);
            if window.is_empty() {
                break;
            }
            if calls == self.limits.max_matches {
                warn!(
                    max_matches = self.limits.max_matches,
                    ?bound,
                    "finder call cap reached, truncating matches"
                );
                break;
            }
            calls += 1;

            let Some(found) = self.finder.find_first(window) else {
                break;
            };
            result.push(found);

            if found.end <= cursor {
                warn!(?found, ?cursor, "finder match does not advance, stopping");
                break;
            }
            cursor = found.end;
        }

        result
    }
}
