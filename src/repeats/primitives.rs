//! Crochemore's O(n log n)-style class-refinement algorithm for primitive tandem repeats
//! (C11): every occurrence of a square `ww` where `w` is not itself a power of a shorter
//! string (spec.md §4.11).
//!
//! The original `repeats_primitives.c` keeps the refinement state as linked lists of
//! entries threaded through nodes, spliced in place so that a position is moved between
//! classes in O(1). spec.md §9 flags exactly this shape for re-architecture ("replace with
//! an arena of fixed-size records indexed by small integers"). This module keeps the same
//! *equivalence-class* idea but represents a class directly as its member positions: at
//! iteration `i`, `class[p]` identifies the equivalence class of the length-`i` prefix
//! `S[p..p+i)`, and refining from iteration `i` to `i+1` only needs one more character,
//! `S[p+i]`, appended to the existing class key — there is no need to consult a neighbour's
//! class at all. This trades the original's O(1)-amortised splice (and its O(n log n) bound
//! from the "always recurse on the smaller half" rule) for a flat per-iteration regrouping,
//! O(n) per iteration via a hash map — easier to verify, at the cost of the tighter
//! asymptotic bound; the crate's own `repeats::bigpath` (C13) is where the "always recurse
//! on the smaller half" trick is applied to a genuinely expensive enumeration instead.
//!
//! Because a class at iteration `i` is split purely by appending one character at a time,
//! a square reported at iteration `i` (two members of the same class `i` positions apart)
//! is automatically *primitive*: a non-primitive square `x^k` (`k>1`) would already have
//! been reported at the smaller period `|x|`, the first iteration at which its two halves
//! fell into the same class.

use fxhash::FxHashMap;

use crate::repeats::record::{Repeat, RepeatKind};

/// All occurrences of primitive tandem repeats in `text` (spec.md §4.11, seed scenario S6).
///
/// Unlike the rest of [`crate::repeats`], this component's algorithm (per spec.md §4.11) is
/// defined directly over the string via class refinement, not over a suffix tree, so this
/// function takes `text` alone.
pub fn find_primitive_tandem_repeats(text: &[u8]) -> Vec<Repeat> {
    let n = text.len();
    let mut repeats = Vec::new();
    if n < 2 {
        return repeats;
    }

    let mut class = classify(text.iter().map(|&b| Some(b)), n);

    for i in 1..n {
        for members in group_by_class(&class, n).values() {
            if members.len() < 2 {
                continue;
            }
            for w in members.windows(2) {
                let (prev, cur) = (w[0], w[1]);
                if cur - prev == i {
                    repeats.push(Repeat::tandem(RepeatKind::PrimitiveTandem, prev + 1, i, 2));
                }
            }
        }
        class = classify(
            (0..n).map(|p| (class[p], text.get(p + i).copied())),
            n,
        );
    }

    log::debug!("primitives: {} occurrences over {} bytes", repeats.len(), n);
    repeats
}

/// Bucket `0..n` by a key (current class id, or `(class, next byte)` for refinement),
/// assigning fresh dense ids in first-seen order.
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
