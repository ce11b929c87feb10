//! Naive multi-pattern search via one Boyer-Moore scanner per pattern (C6).
//!
//! spec.md §4.6 / §8 requires this engine to produce *exactly* the same trace as
//! [`crate::pattern_matching::aho_corasick::AhoCorasick`] on identical input: emission
//! order is by ascending right-endpoint (`position + length`), ties broken by descending
//! pattern length. This module reuses [`crate::pattern_matching::boyer_moore::BoyerMoore`]
//! directly, one instance per pattern, and at each step picks whichever sub-scanner's next
//! unread match has the smallest right-endpoint.
//!
//! # Example
//!
//! ```
//! use strmatch::pattern_matching::bm_set::BmSet;
//!
//! let patterns = vec![b"he".to_vec(), b"she".to_vec(), b"his".to_vec(), b"hers".to_vec()];
//! let bm = BmSet::build(&patterns).unwrap();
//! let hits: Vec<_> = bm.search(b"ushers").map(|m| (m.position, m.length, m.pattern_id.unwrap())).collect();
//! assert_eq!(hits, vec![(2, 3, 1), (3, 2, 0), (3, 4, 3)]);
//! ```

use crate::error::{Result, StringMatchError};
use crate::pattern_matching::boyer_moore::BoyerMoore;
use crate::utils::Match;

/// A set of independently-preprocessed Boyer-Moore patterns (spec.md §4.6).
#[derive(Clone, Debug)]
pub struct BmSet {
    patterns: Vec<BoyerMoore>,
}

impl BmSet {
    /// Build one Boyer-Moore preprocessing per pattern. Pattern ids are the input's
    /// indices.
    ///
    /// # Errors
    ///
    /// Returns [`StringMatchError::InvalidArgument`] if `patterns` is empty or any
    /// pattern is empty.
    pub fn build(patterns: &[Vec<u8>]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(StringMatchError::invalid_argument(
                "bm-set requires at least one pattern",
            ));
        }
        let built = patterns
            .iter()
            .map(|p| BoyerMoore::build(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(BmSet { patterns: built })
    }

    /// Scan `text`, emitting matches in the same order [`crate::pattern_matching::aho_corasick::AhoCorasick`]
    /// would (spec.md §8: "AC(T) = BM-set-naive(...)(T) as sequences").
    pub fn search<'a>(&'a self, text: &'a [u8]) -> BmSetSearch<'a> {
        let cursors = self
            .patterns
            .iter()
            .enumerate()
            .map(|(id, bm)| PatternCursor {
                id,
                next: bm.search(text).next().map(|pos| (pos, bm)),
            })
            .collect();
        BmSetSearch { text, cursors }
    }
}

struct PatternCursor<'a> {
    id: usize,
    /// The next unread match position for this pattern, and a handle to re-run the scan
    /// from just past it (spec.md §4.6: "advance only that pattern's scanner by one
    /// position past its emitted match").
    next: Option<(usize, &'a BoyerMoore)>,
}

/// A running scan over every pattern's Boyer-Moore scanner in lock-step (spec.md §4.6).
pub struct BmSetSearch<'a> {
    text: &'a [u8],
    cursors: Vec<PatternCursor<'a>>,
}

impl<'a> Iterator for BmSetSearch<'a> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        // Pick the cursor whose current match has the smallest right-end (position +
        // length), ties broken by larger length (spec.md §4.6/§5).
        let mut best: Option<usize> = None;
        for (i, cursor) in self.cursors.iter().enumerate() {
            if let Some((pos, bm)) = &cursor.next {
                let len = bm.pattern_len();
                let candidate_key = (pos + len, std::cmp::Reverse(len));
                let better = match best {
                    None => true,
                    Some(j) => {
                        let (jpos, jbm) = self.cursors[j].next.as_ref().unwrap();
                        let jlen = jbm.pattern_len();
                        candidate_key < (jpos + jlen, std::cmp::Reverse(jlen))
                    }
                };
                if better {
                    best = Some(i);
                }
            }
        }
        let i = best?;
        let (pos, bm) = self.cursors[i].next.take().unwrap();
        let len = bm.pattern_len();
        let id = self.cursors[i].id;
        // Boyer-Moore carries no state across alignments besides the current one, so
        // re-scanning the suffix starting one byte past the emitted match's first
        // character (0-based index `pos`, since `pos` is 1-based) is exactly equivalent
        // to "advance only this pattern's scanner by one position past its emitted
        // match" (spec.md §4.6) — just re-anchored to the slice's own start.
        self.cursors[i].next = bm
            .search(&self.text[pos..])
            .next()
            .map(|relative| (pos + relative, bm));
        Some(Match::with_pattern(pos, len, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern_matching::aho_corasick::AhoCorasick;

    fn ids(patterns: &[&[u8]]) -> Vec<Vec<u8>> {
        patterns.iter().map(|p| p.to_vec()).collect()
    }

    #[test]
    fn s3_ushers() {
        let patterns = ids(&[b"he", b"she", b"his", b"hers"]);
        let bm = BmSet::build(&patterns).unwrap();
        let hits: Vec<_> = bm
            .search(b"ushers")
            .map(|m| (m.position, m.length, m.pattern_id.unwrap()))
            .collect();
        assert_eq!(hits, vec![(2, 3, 1), (3, 2, 0), (3, 4, 3)]);
    }

    #[test]
    fn matches_aho_corasick_trace() {
        let texts: [&[u8]; 3] = [b"ushers", b"hishershehe", b"abcabcabc"];
        let pattern_sets = [
            ids(&[b"he", b"she", b"his", b"hers"]),
            ids(&[b"abc", b"bca", b"a"]),
        ];
        for patterns in &pattern_sets {
            let ac = AhoCorasick::build(patterns).unwrap();
            let bm = BmSet::build(patterns).unwrap();
            for text in &texts {
                let ac_hits: Vec<_> = ac
                    .search(text)
                    .map(|m| (m.position, m.length, m.pattern_id))
                    .collect();
                let bm_hits: Vec<_> = bm
                    .search(text)
                    .map(|m| (m.position, m.length, m.pattern_id))
                    .collect();
                assert_eq!(ac_hits, bm_hits, "text {:?}", String::from_utf8_lossy(text));
            }
        }
    }

    #[test]
    fn empty_pattern_set_rejected() {
        assert!(BmSet::build(&[]).is_err());
    }

    #[test]
    fn empty_text_no_matches() {
        let bm = BmSet::build(&ids(&[b"a"])).unwrap();
        assert!(bm.search(b"").next().is_none());
    }

    #[test]
    fn exhausted_pattern_returns_none_idempotently() {
        let bm = BmSet::build(&ids(&[b"zzz"])).unwrap();
        let mut search = bm.search(b"abc");
        assert!(search.next().is_none());
        assert!(search.next().is_none());
    }
}
