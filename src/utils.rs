//! Small shared types used across index builders: the owned-or-borrowed [`Sequence`]
//! buffer, and the match/repeat/statistics record types returned at the public API
//! boundary.

use std::borrow::Cow;

use crate::error::{Result, StringMatchError};

/// A borrowed byte slice, as accepted by every preprocessing entry point.
pub type TextSlice<'a> = &'a [u8];

/// An immutable byte sequence, either borrowed from the caller or defensively copied.
///
/// This is the `copyflag` of spec.md §3/§6 made concrete: [`Sequence::borrowed`] requires
/// the caller to keep the backing bytes alive for the lifetime of whatever index is built
/// over it; [`Sequence::owned`] takes a private copy and has no such requirement.
#[derive(Clone, Debug)]
pub struct Sequence<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> Sequence<'a> {
    /// Wrap a borrowed slice without copying it.
    pub fn borrowed(bytes: &'a [u8]) -> Self {
        Sequence {
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Take ownership of a defensive copy of `bytes`.
    pub fn owned(bytes: &[u8]) -> Sequence<'static> {
        Sequence {
            bytes: Cow::Owned(bytes.to_vec()),
        }
    }

    /// The sequence length, `M` in spec.md's notation.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the underlying bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Validate that this sequence is non-empty, the shape every builder in this crate
    /// requires before it can do anything useful.
    pub fn require_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(StringMatchError::invalid_argument(
                "sequence must not be empty",
            ))
        } else {
            Ok(())
        }
    }
}

impl<'a> From<&'a [u8]> for Sequence<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Sequence::borrowed(bytes)
    }
}

/// A single match of a pattern against a text.
///
/// `position` is 1-based (spec.md §6: "positions are 1-based when presented externally").
/// `pattern_id` is `None` for single-pattern engines (C1-C4, C7-C9) and `Some` for
/// multi-pattern engines (C5, C6).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// 1-based start position of the match in the text.
    pub position: usize,
    /// Length of the matched pattern.
    pub length: usize,
    /// Which pattern matched, for multi-pattern engines.
    pub pattern_id: Option<usize>,
}

impl Match {
    /// Construct a single-pattern match record.
    pub fn single(position: usize, length: usize) -> Self {
        Match {
            position,
            length,
            pattern_id: None,
        }
    }

    /// Construct a multi-pattern match record.
    pub fn with_pattern(position: usize, length: usize, pattern_id: usize) -> Self {
        Match {
            position,
            length,
            pattern_id: Some(pattern_id),
        }
    }
}

/// Advisory preprocessing/scanning counters, populated only when a builder's
/// `*_with_stats` constructor is used (spec.md §6: "values are advisory only").
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Character comparisons performed during preprocessing.
    pub preprocessing_compares: u64,
    /// Character comparisons performed during scanning.
    pub scanning_compares: u64,
    /// Sum of shift amounts applied during scanning.
    pub shifts: u64,
    /// Edges traversed (suffix-tree/trie consumers only).
    pub edges_traversed: u64,
}
