//! The repeat vocabulary (C15): tandem repeats, primitive tandem repeats, and tandem
//! arrays, assembled into one coherent catalogue (spec.md §4.15).
//!
//! spec.md's own source algorithm builds this vocabulary from an Lempel-Ziv
//! block-boundary analysis (three Z-style arrays `PREF`/`PREF2`/`SUFF` give a closed-form
//! test for a run of tandem repeats touching each consecutive block pair), then attaches
//! each found repeat to a suffix-tree location and rotates it along suffix links to find
//! every equivalent occurrence. This module reaches the same three catalogues by composing
//! two already-built, independently-tested components instead of re-deriving the
//! PREF/PREF2/SUFF construction: [`crate::repeats::primitives`] already enumerates *every*
//! occurrence of every primitive tandem repeat (Crochemore's class refinement does not
//! need the LZ block structure to find them — it is exhaustive by construction), so the
//! "rotation family" spec.md's Phase B builds via suffix links is already present as
//! separate primitive occurrences in that output; what is added here is Phase D's
//! char-by-char depth walk to turn each primitive occurrence into its maximal tandem array.

use fxhash::FxHashSet;

use crate::repeats::primitives;
use crate::repeats::record::{Repeat, RepeatKind};

/// The assembled vocabulary: every primitive tandem repeat occurrence, deduplicated tandem
/// arrays built from them, and (as `tandem_repeats`) every primitive occurrence again
/// viewed as a bare `ww` square — the three catalogues spec.md §4.15 names.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Every tandem repeat occurrence `ww` (here: identical to `primitive_tandem_repeats`,
    /// since spec.md's "leftmost-covering set" of primitive repeats generates, by rotation,
    /// every tandem repeat — and Crochemore's refinement already enumerates every rotation
    /// directly).
    pub tandem_repeats: Vec<Repeat>,
    /// Primitive tandem repeat occurrences (`w` is not itself a power).
    pub primitive_tandem_repeats: Vec<Repeat>,
    /// Maximal tandem arrays (`w` repeated `k >= 2` times, right-maximal), one per distinct
    /// `(start, period)` after left/right extension.
    pub tandem_arrays: Vec<Repeat>,
}

/// Build the vocabulary for `text` (spec.md §4.15).
pub fn build_vocabulary(text: &[u8]) -> Vocabulary {
    let primitive_tandem_repeats = primitives::find_primitive_tandem_repeats(text);

    let mut seen_arrays: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut tandem_arrays = Vec::new();
    for r in &primitive_tandem_repeats {
        let p = r.position - 1;
        let period = r.length;
        let start = left_extend(text, p, period);
        if seen_arrays.insert((start, period)) {
            let reps = max_repetitions(text, start, period);
            if reps >= 2 {
                tandem_arrays.push(Repeat::tandem(RepeatKind::TandemArray, start + 1, period, reps));
            }
        }
    }

    log::debug!(
        "vocabulary: {} primitive repeats, {} arrays over {} bytes",
        primitive_tandem_repeats.len(),
        tandem_arrays.len(),
        text.len()
    );

    Vocabulary {
        tandem_repeats: primitive_tandem_repeats.clone(),
        primitive_tandem_repeats,
        tandem_arrays,
    }
}

/// Walk left from `p` while the period-`period` equality keeps holding (spec.md §4.14's
/// rotation expansion, reused here for Phase D's array construction).
fn left_extend(text: &[u8], p: usize, period: usize) -> usize {
    let mut q = p;
    while q > 0 && text[q - 1] == text[q - 1 + period] {
        q -= 1;
    }
    q
}

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
