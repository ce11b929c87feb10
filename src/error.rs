//! Error types shared by every index builder and scanner in this crate.
//!
//! Preprocessing and construction return a typed [`StringMatchError`]; queries never do
//! (see the module docs of `pattern_matching` and `data_structures` for the iterator
//! contract that replaces `Result` at scan time).

use thiserror::Error;

/// Errors surfaced while building or validating an index.
///
/// This enum intentionally has no `#[non_exhaustive]` attribute: callers match on it to
/// decide whether a failure is retryable (`AllocationFailed`), a caller bug
/// (`InvalidArgument`, `IteratorMisuse`), or a broken precondition supplied by another
/// component (`InvariantViolation`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringMatchError {
    /// A preprocessing allocation failed. No partial index is retained; the builder that
    /// raised this has released whatever it had already allocated.
    #[error("allocation failed while building index")]
    AllocationFailed,

    /// The caller supplied an argument the algorithm cannot operate on: an empty sequence
    /// or pattern, a duplicate pattern identifier in a multi-pattern builder, an
    /// unsupported alphabet size, or (for Boyer-Moore) a pattern longer than the text.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable detail; not matched on by callers, only displayed.
        message: String,
    },

    /// A precondition a caller claimed (e.g. that a supplied suffix tree carries
    /// leftmost-occurrence edge labels) does not hold, detected by a runtime guard.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// Human-readable detail; not matched on by callers, only displayed.
        message: String,
    },

    /// A query was driven incorrectly: `next()` called on an iterator that already
    /// reported a terminal "no more matches", or a scan resumed on an index whose build
    /// failed. Iterators recover from this state on their own (by continuing to return
    /// `None`); this variant exists so a caller *asking* why can be told.
    #[error("iterator used after a terminal state")]
    IteratorMisuse,
}

impl StringMatchError {
    /// Build an [`StringMatchError::InvalidArgument`] from any displayable message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        StringMatchError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build an [`StringMatchError::InvariantViolation`] from any displayable message.
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        StringMatchError::InvariantViolation {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate's build/construction entry points.
pub type Result<T> = std::result::Result<T, StringMatchError>;
