//! The shared repeat record every finder in [`crate::repeats`] yields, and the `Display`
//! impl that renders it against the original sequence.
//!
//! spec.md §9's "printing is interleaved with algorithmic logic" redesign flag is resolved
//! here: every algorithm below yields [`Repeat`] values; rendering against the original
//! text is this module's job alone, never the discovery loop's.

use std::fmt;

/// Which repeat-finding algorithm produced a [`Repeat`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepeatKind {
    /// A primitive tandem repeat `ww` where `w` is not itself a power (C11).
    PrimitiveTandem,
    /// A nonoverlapping maximal pair: two equal, non-overlapping occurrences of a
    /// substring with distinct left context (C12/C13).
    NonoverlappingMaximalPair,
    /// A branching tandem repeat, corresponding to an internal suffix-tree node (C14).
    BranchingTandem,
    /// A maximal run of a tandem repeat: `w` repeated `repetitions` times, right-maximal
    /// (C14/C15).
    TandemArray,
    /// A supermaximal (or near-supermaximal) repeat (C16).
    Supermaximal,
}

/// One repeat occurrence, as yielded by any finder in [`crate::repeats`] (spec.md §3's
/// "Repeat report").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repeat {
    /// Which algorithm/shape this repeat is.
    pub kind: RepeatKind,
    /// 1-based start position of the (leftmost, for multi-occurrence kinds) occurrence.
    pub position: usize,
    /// Length of the repeated unit `w` (the period, for tandem repeats/arrays), or the
    /// length of the repeated substring for nonoverlapping pairs and supermaximals.
    pub length: usize,
    /// Number of consecutive repetitions (2 for a bare tandem repeat `ww`; >2 for a
    /// tandem array; 1 for nonoverlapping pairs and supermaximals, where it is not
    /// meaningful and kept at 1 for a uniform record shape).
    pub repetitions: usize,
}

impl Repeat {
    /// Construct a tandem-repeat-shaped record (C11/C14/C15): `position` is the start of
    /// the first copy, `length` is the period, `repetitions` is the repeat count.
    pub fn tandem(kind: RepeatKind, position: usize, length: usize, repetitions: usize) -> Self {
        Repeat { kind, position, length, repetitions }
    }

    /// Construct a pair-shaped record (C12/C13): a single occurrence reference plus its
    /// partner's position, rendered via [`Repeat::second_position`].
    pub fn pair(kind: RepeatKind, position: usize, length: usize, partner: usize) -> Self {
        Repeat { kind, position, length, repetitions: partner }
    }

    /// For [`RepeatKind::NonoverlappingMaximalPair`], the partner occurrence's 1-based
    /// position (reusing the `repetitions` field, which has no meaning for pairs).
    pub fn second_position(&self) -> Option<usize> {
        match self.kind {
            RepeatKind::NonoverlappingMaximalPair => Some(self.repetitions),
            _ => None,
        }
    }

    /// Render this repeat against `text`, e.g. `"tandem repeat of \"ab\" x2 at 3"`.
    pub fn display<'a>(&'a self, text: &'a [u8]) -> RepeatDisplay<'a> {
        RepeatDisplay { repeat: self, text }
    }
}

/// A [`Repeat`] paired with the sequence it was found in, for formatting (spec.md §9:
/// discovery yields records, a separate formatter renders them).
pub struct RepeatDisplay<'a> {
    repeat: &'a Repeat,
    text: &'a [u8],
}

impl<'a> fmt::Display for RepeatDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.repeat;
        let unit_start = r.position - 1;
        let unit = self
            .text
            .get(unit_start..unit_start + r.length)
            .map(|s| String::from_utf8_lossy(s).into_owned())
            .unwrap_or_default();
        match r.kind {
            RepeatKind::PrimitiveTandem => {
                write!(f, "primitive tandem repeat \"{unit}\" at {}", r.position)
            }
            RepeatKind::NonoverlappingMaximalPair => write!(
                f,
                "nonoverlapping maximal pair \"{unit}\" at {} and {}",
                r.position,
                r.second_position().unwrap_or(0)
            ),
            RepeatKind::BranchingTandem => {
                write!(f, "branching tandem repeat of period {} at {}", r.length, r.position)
            }
            RepeatKind::TandemArray => write!(
                f,
                "tandem array \"{unit}\" x{} at {}",
                r.repetitions, r.position
            ),
            RepeatKind::Supermaximal => {
                write!(f, "supermaximal repeat \"{unit}\" at {}", r.position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_primitive_tandem() {
        let text = b"abababab";
        let r = Repeat::tandem(RepeatKind::PrimitiveTandem, 1, 2, 2);
        assert_eq!(r.display(text).to_string(), "primitive tandem repeat \"ab\" at 1");
    }

    #[test]
    fn pair_second_position() {
        let r = Repeat::pair(RepeatKind::NonoverlappingMaximalPair, 1, 3, 10);
        assert_eq!(r.second_position(), Some(10));
        let r2 = Repeat::tandem(RepeatKind::PrimitiveTandem, 1, 3, 2);
        assert_eq!(r2.second_position(), None);
    }
}
