//! Nonoverlapping maximal pairs (C12): an extension of [`crate::repeats::primitives`]'s
//! class refinement that additionally tracks the character immediately to the left of each
//! occurrence, so it can report general maximal pairs rather than only adjacent squares
//! (spec.md §4.12).
//!
//! A pair `(p, q)` (`p < q`) of equal-length occurrences of the same substring is reported
//! here once it is simultaneously:
//!
//! - **nonoverlapping**: `q >= p + i` where `i` is the shared length (spec.md: "the pair
//!   (p, p+i) is only valid when... p+i >= p+iteration" — read here as the general
//!   nonoverlap condition between two occurrence starts rather than literally restricted to
//!   adjacent squares, since "maximal pairs" in spec.md §4.12/§4.13's sense need not be
//!   adjacent);
//! - **left-maximal**: `S[p-1] != S[q-1]` (or one of the two is at position 0), the
//!   "differing left-characters enforces maximality" rule from spec.md §4.12;
//! - **right-maximal**: extending both occurrences by one more character would either run
//!   past the end of `text` or keep them in the same class — i.e. this is the *last*
//!   iteration at which `p` and `q` are distinguishable from one another by left context
//!   while still sharing a common prefix.

use fxhash::FxHashMap;

use crate::repeats::record::{Repeat, RepeatKind};

/// All nonoverlapping maximal pairs in `text` (spec.md §4.12).
///
/// As with [`crate::repeats::primitives`], this component's defining algorithm operates
/// directly on the string (class refinement extended with left-character tracking), so it
/// takes `text` alone; [`crate::repeats::bigpath`] (C13) finds the same family of pairs via
/// a suffix tree with an asymptotically better bound.
pub fn find_nonoverlapping_maximal_pairs(text: &[u8]) -> Vec<Repeat> {
    let n = text.len();
    let mut repeats = Vec::new();
    if n < 2 {
        return repeats;
    }

    let mut class = classify(text.iter().map(|&b| Some(b)), n);

    for i in 1..n {
        let next_class = classify((0..n).map(|p| (class[p], text.get(p + i).copied())), n);

        for members in group_by_class(&class, n).values() {
            if members.len() < 2 {
                continue;
            }
            let mut by_left: FxHashMap<Option<u8>, Vec<usize>> = FxHashMap::default();
            for &p in members {
                by_left.entry(left_char(text, p)).or_default().push(p);
            }
            let groups: Vec<&Vec<usize>> = by_left.values().collect();
            for a in 0..groups.len() {
                for b in (a + 1)..groups.len() {
                    for &x in groups[a] {
                        for &y in groups[b] {
                            let (lo, hi) = if x < y { (x, y) } else { (y, x) };
                            if hi < lo + i {
                                continue; // overlapping occurrences, not a valid pair.
                            }
                            let extends = lo + i < n && hi + i < n && next_class[lo] == next_class[hi];
                            if !extends {
                                repeats.push(Repeat::pair(
                                    RepeatKind::NonoverlappingMaximalPair,
                                    lo + 1,
                                    i,
                                    hi + 1,
                                ));
                            }
                        }
                    }
                }
            }
        }

        class = next_class;
    }

    log::debug!("nonoverlapping: {} pairs over {} bytes", repeats.len(), n);
    repeats
}

fn left_char(text: &[u8], p: usize) -> Option<u8> {
    if p == 0 {
        None
    } else {
        Some(text[p - 1])
    }
}

fn classify<K: Eq + std::hash::Hash, I: IntoIterator<Item = K>>(keys: I, n: usize) -> Vec<u32> {
    let mut ids: FxHashMap<K, u32> = FxHashMap::default();
    let mut next_id = 0u32;
    keys.into_iter()
        .map(|k| {
            *ids.entry(k).or_insert_with(|| {
                let id = next_id;
                next_id += 1;
                id
            })
        })
        .collect()
}

fn group_by_class(class: &[u32], n: usize) -> FxHashMap<u32, Vec<usize>> {
    let mut groups: FxHashMap<u32, Vec<usize>> = FxHashMap::default();
    for p in 0..n {
        groups.entry(class[p]).or_default().push(p);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_nonoverlapping_and_left_maximal() {
        let text = b"abab";
        let pairs = find_nonoverlapping_maximal_pairs(text);
        for r in &pairs {
            let p = r.position - 1;
            let q = r.second_position().unwrap() - 1;
            assert!(q >= p + r.length, "overlapping pair {:?}", r);
            let left = |pos: usize| if pos == 0 { None } else { Some(text[pos - 1]) };
            assert_ne!(left(p), left(q), "not left-maximal: {:?}", r);
            assert_eq!(&text[p..p + r.length], &text[q..q + r.length]);
        }
        // "ab" at 0 and 2 is the maximal pair: left(0)=None, left(2)='b', touching (q=p+i).
        assert!(pairs.iter().any(|r| r.position == 1 && r.length == 2 && r.second_position() == Some(3)));
    }

    #[test]
    fn no_pairs_in_a_string_with_no_repeats() {
        assert!(find_nonoverlapping_maximal_pairs(b"abcdef").is_empty());
    }

    #[test]
    fn empty_and_singleton_have_no_pairs() {
        assert!(find_nonoverlapping_maximal_pairs(b"").is_empty());
        assert!(find_nonoverlapping_maximal_pairs(b"a").is_empty());
    }

    #[test]
    fn mississippi_finds_overlap_free_ssi_and_issi_pairs() {
        let text = b"mississippi";
        let pairs = find_nonoverlapping_maximal_pairs(text);
        for r in &pairs {
            let p = r.position - 1;
            let q = r.second_position().unwrap() - 1;
            assert!(q >= p + r.length);
        }
        assert!(!pairs.is_empty());
    }
}
