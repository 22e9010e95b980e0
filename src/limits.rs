// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Evaluation limits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cap on finder calls per promoted bound.
pub const DEFAULT_MAX_MATCHES: usize = 100_000;

/// Tunables for rule evaluation.
///
/// A finder that keeps matching forever would make promotion loop without
/// bound; `max_matches` caps the number of finder calls made for a single
/// bound. Hitting the cap is logged and the matches found so far are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Maximum number of `find_first` calls per bound.
    ///
    /// This counts calls, not matches: a call that returns `None` counts
    /// too.
    pub max_matches: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_matches: DEFAULT_MAX_MATCHES,
        }
    }
}

impl Limits {
    /// Limits with a custom finder-call cap.
    pub const fn with_max_matches(max_matches: usize) -> Self {
        Limits { max_matches }
    }
}
