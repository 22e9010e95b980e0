// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for rule construction and evaluation.

use thiserror::Error;

/// Errors that can occur while building or applying a rule.
///
/// "No match" is never an error: rules report it as `None` or an empty
/// vector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// Ordinal selection needs a position: 1 is the first match, -1 the last.
    #[error("ordinal cannot be zero")]
    ZeroOrdinal,

    /// An epoch-second bound cannot be represented by the instant type.
    #[error("timestamp {seconds}s is out of the representable range")]
    TimestampOutOfRange { seconds: i64 },
}

/// Result type alias for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;
