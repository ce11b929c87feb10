//! Branching tandem repeats, their rotations, and tandem arrays (C14), derived from a
//! suffix tree (spec.md §4.14).
//!
//! A *branching* tandem repeat of period `D` is one whose two occurrences diverge exactly
//! at an internal suffix-tree node `v` of string-depth `D`: some leaf position `p` in `v`'s
//! subtree has `p - D` also a leaf position in `v`'s subtree, but the two leaves reach `v`
//! through *different* children (otherwise their true divergence point — and hence period —
//! is deeper than `D`, and belongs to that deeper node instead).
//!
//! This module computes, per node, a leaf-rank range `[start, end)` over a depth-first
//! (lexicographic) leaf numbering — spec.md's `S`/`G`, with `N`/`Pos` the rank/position maps
//! between them — so "is `q` a leaf of child `c`" is an O(1) range check instead of an
//! explicit subtree walk.

use fxhash::FxHashSet;

use crate::data_structures::suffix_tree::{NodeId, SuffixTree};
use crate::repeats::record::{Repeat, RepeatKind};

/// All branching tandem repeats and their maximal tandem arrays in the text backing
/// `tree` (spec.md §4.14).
pub fn find_tandem_repeats<T: SuffixTree>(tree: &T) -> Vec<Repeat> {
    let text = tree.text();
    let n = text.len();
    let mut repeats = Vec::new();
    if n < 2 {
        return repeats;
    }

    let ranges = LeafRanges::build(tree);

    let mut branching_starts = FxHashSet::default();
    walk(tree, tree.root(), &ranges, text, &mut repeats, &mut branching_starts);

    log::debug!("tandem: {} records over {} bytes", repeats.len(), n);
    repeats
}

/// `start[v]..end[v]` is `v`'s leaf-rank range in depth-first (lexicographic) order;
/// `rank_of_pos[p]` is the leaf rank of the leaf at text position `p`.
struct LeafRanges {
    start: Vec<usize>,
    end: Vec<usize>,
    rank_of_pos: Vec<usize>,
    pos_of_rank: Vec<usize>,
}

impl LeafRanges {
    fn build<T: SuffixTree>(tree: &T) -> Self {
        let n = tree.num_nodes();
        let mut ranges = LeafRanges {
            start: vec![0; n],
            end: vec![0; n],
            rank_of_pos: vec![0; tree.text().len()],
            pos_of_rank: vec![0; tree.text().len()],
        };
        let mut counter = 0usize;
        ranges.visit(tree, tree.root(), &mut counter);
        ranges
    }

    fn visit<T: SuffixTree>(&mut self, tree: &T, v: NodeId, counter: &mut usize) {
        let start = *counter;
        if tree.is_leaf(v) {
            if let Some(pos) = tree.leaf_position(v) {
                self.rank_of_pos[pos] = *counter;
                self.pos_of_rank[*counter] = pos;
            }
            *counter += 1;
        } else {
            for &c in tree.children(v) {
                self.visit(tree, c, counter);
            }
        }
        self.start[v] = start;
        self.end[v] = *counter;
    }

    /// Whether text position `q` is a valid leaf in `v`'s subtree but in a *different*
    /// child's range than `skip_child`.
    fn is_leaf_elsewhere_in<T: SuffixTree>(
        &self,
        tree: &T,
        q: usize,
        v: NodeId,
        skip_child: NodeId,
    ) -> bool {
        if q >= self.rank_of_pos.len() {
            return false;
        }
        let rank = self.rank_of_pos[q];
        if rank < self.start[v] || rank >= self.end[v] {
            return false;
        }
        rank < self.start[skip_child] || rank >= self.end[skip_child]
    }
}

fn walk<T: SuffixTree>(
    tree: &T,
    v: NodeId,
    ranges: &LeafRanges,
    text: &[u8],
    repeats: &mut Vec<Repeat>,
    seen: &mut FxHashSet<(usize, usize)>,
) {
    if tree.is_leaf(v) {
        return;
    }

    let depth = tree.label_len(v);
    if depth > 0 {
        for &child in tree.children(v) {
            for rank in ranges.start[child]..ranges.end[child] {
                let p = ranges.pos_of_rank[rank];
                if p >= depth {
                    let q = p - depth;
                    if ranges.is_leaf_elsewhere_in(tree, q, v, child) && seen.insert((q, depth)) {
                        report_branching(text, q, depth, repeats);
                    }
                }
            }
        }
    }

    for &child in tree.children(v) {
        walk(tree, child, ranges, text, repeats, seen);
    }
}

fn report_branching(text: &[u8], q0: usize, period: usize, repeats: &mut Vec<Repeat>) {
    repeats.push(Repeat::tandem(RepeatKind::BranchingTandem, q0 + 1, period, 2));

    // Expand left while the rotation is still a valid period-`period` square (spec.md:
    // "expand left by single-character matches").
    let mut q = q0;
    while q > 0 && text[q - 1] == text[q - 1 + period] {
        q -= 1;
    }

    let reps = max_repetitions(text, q, period);
    if reps >= 2 {
        repeats.push(Repeat::tandem(RepeatKind::TandemArray, q + 1, period, reps));
    }
}

/// Largest `k` such that `text[start..start+period]`, repeated `k` times starting at
/// `start`, stays inside `text` and each consecutive block matches the first.
fn max_repetitions(text: &[u8], start: usize, period: usize) -> usize {
    let mut reps = 1;
    while start + (reps + 1) * period <= text.len()
        && text[start + (reps - 1) * period..start + reps * period]
            == text[start + reps * period..start + (reps + 1) * period]
    {
        reps += 1;
    }
    reps
}
