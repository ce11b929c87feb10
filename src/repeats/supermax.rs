//! Supermaximal and near-supermaximal repeats (C16), derived from a suffix tree
//! (spec.md §4.16).
//!
//! A suffix-tree internal node `v` labels a repeat of length `label_len(v)` occurring
//! `num_leaves_below(v)` times. It is *left-diverse* if the leaves in its subtree have at
//! least two distinct left-context characters (the byte immediately preceding each leaf's
//! starting position, with a sentinel for position 0) — meaning the repeat cannot be
//! extended one character to the left and remain a repeat of the same multiplicity. The
//! number of *witnesses* is how many of those leaves have a left context unique within the
//! subtree (i.e. it alone would block a left extension). `v` is reported when its witness
//! percentage clears `min_percent` (100 for a true supermaximal) and its label is at least
//! `min_length` long.

use fxhash::FxHashMap;

use crate::data_structures::suffix_tree::{NodeId, SuffixTree};
use crate::repeats::record::{Repeat, RepeatKind};

/// Supermaximal repeats (spec.md §4.16, `min_percent = 100`).
pub fn find_supermaximal_repeats<T: SuffixTree>(tree: &T, min_length: usize) -> Vec<Repeat> {
    find_near_supermaximal_repeats(tree, min_length, 100)
}

/// Near-supermaximal repeats: `witnesses * 100 / num_leaves >= min_percent` (spec.md §4.16;
/// §9's open question on rounding is resolved to floor division, as spec.md adopts).
pub fn find_near_supermaximal_repeats<T: SuffixTree>(
    tree: &T,
    min_length: usize,
    min_percent: u32,
) -> Vec<Repeat> {
    let mut repeats = Vec::new();
    if tree.text().is_empty() {
        return repeats;
    }
    visit(tree, tree.root(), min_length, min_percent, &mut repeats);
    log::debug!(
        "supermax: {} repeats (min_length={min_length}, min_percent={min_percent})",
        repeats.len()
    );
    repeats
}

fn visit<T: SuffixTree>(
    tree: &T,
    v: NodeId,
    min_length: usize,
    min_percent: u32,
    repeats: &mut Vec<Repeat>,
) {
    if tree.is_leaf(v) {
        return;
    }

    let label_len = tree.label_len(v);
    if label_len > 0 {
        let leaves = collect_leaves(tree, v);
        let num_leaves = leaves.len();
        if num_leaves > 0 && label_len >= min_length {
            let mut by_left: FxHashMap<Option<u8>, u32> = FxHashMap::default();
            for &pos in &leaves {
                *by_left.entry(left_character(tree.text(), pos)).or_insert(0) += 1;
            }
            let witnesses = by_left.values().filter(|&&count| count == 1).count() as u32;
            if (witnesses * 100) / (num_leaves as u32) >= min_percent {
                let leftmost = leaves.iter().copied().min().unwrap();
                repeats.push(Repeat::tandem(
                    RepeatKind::Supermaximal,
                    leftmost + 1,
                    label_len,
                    num_leaves,
                ));
            }
        }
    }

    for &child in tree.children(v) {
        visit(tree, child, min_length, min_percent, repeats);
    }
}

fn left_character(text: &[u8], pos: usize) -> Option<u8> {
    if pos == 0 {
        None
    } else {
        Some(text[pos - 1])
    }
}

fn collect_leaves<T: SuffixTree>(tree: &T, v: NodeId) -> Vec<usize> {
    let mut out = Vec::new();
    let mut stack = vec![v];
    while let Some(node) = stack.pop() {
        if tree.is_leaf(node) {
            if let Some(pos) = tree.leaf_position(node) {
                out.push(pos);
            }
        } else {
            stack.extend(tree.children(node).iter().copied());
        }
    }
    out
}
