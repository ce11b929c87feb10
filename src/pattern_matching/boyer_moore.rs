//! Boyer-Moore single-pattern search (C4): bad-character, extended bad-character, strong
//! good-suffix, and the combined variants, plus an optimised bad-character-only scanner.
//!
//! The good-suffix tables (`big_l`, `small_l_prime`) are built from the Z-array of the
//! reversed pattern, the technique used by
//! `examples/SanchithHegde-boyer-moore-visualization-rs` (`n_array`, `big_l_prime_array`,
//! `small_l_prime_array`); the bad-character tables follow spec.md §4.4 directly.
//!
//! # Example
//!
//! ```
//! use strmatch::pattern_matching::boyer_moore::BoyerMoore;
//!
//! let bm = BoyerMoore::build(b"abcaby").unwrap();
//! let matches: Vec<_> = bm.search(b"abcabxabcaby").collect();
//! assert_eq!(matches, vec![7]);
//! ```

use crate::error::{Result, StringMatchError};
use crate::pattern_matching::zarray::ZArray;
use crate::utils::Stats;

/// Which shift rules a [`BoyerMoore`] scan applies on a mismatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Simple bad-character rule only.
    BadChar,
    /// Extended (linked-list) bad-character rule only.
    ExtendedBadChar,
    /// Strong good-suffix rule combined with the simple bad-character rule.
    GoodSuffixBadChar,
    /// Strong good-suffix rule combined with the extended bad-character rule.
    GoodSuffixExtendedBadChar,
}

/// Boyer-Moore preprocessing tables for one pattern (spec.md §4.4).
#[derive(Clone, Debug)]
pub struct BoyerMoore {
    pattern: Vec<u8>,
    variant: Variant,
    /// `r[c]` = largest 1-based `i` with `pattern[i] == c`, or 0 if `c` never occurs.
    r: [usize; 256],
    /// `r_next[i]` (1-based `i`) = previous 1-based occurrence of `pattern[i]`'s character
    /// in `pattern[1..i)`, or 0. Only populated for the extended variants.
    r_next: Vec<usize>,
    /// `big_l_prime[i]` (1-based).
    big_l_prime: Vec<usize>,
    /// `small_l_prime[i]` (1-based).
    small_l_prime: Vec<usize>,
}

impl BoyerMoore {
    /// Build the combined good-suffix + extended-bad-character preprocessing, the richest
    /// of the four variants.
    pub fn build(pattern: &[u8]) -> Result<Self> {
        Self::build_variant(pattern, Variant::GoodSuffixExtendedBadChar)
    }

    /// Build preprocessing for a specific variant.
    pub fn build_variant(pattern: &[u8], variant: Variant) -> Result<Self> {
        if pattern.is_empty() {
            return Err(StringMatchError::invalid_argument("pattern must not be empty"));
        }
        let m = pattern.len();

        let mut r = [0usize; 256];
        let mut r_next = vec![0usize; m + 1];
        for i in 1..=m {
            let byte = pattern[i - 1] as usize;
            if matches!(variant, Variant::ExtendedBadChar | Variant::GoodSuffixExtendedBadChar) {
                r_next[i] = r[byte];
            }
            r[byte] = i;
        }

        let (big_l_prime, small_l_prime) = if matches!(
            variant,
            Variant::GoodSuffixBadChar | Variant::GoodSuffixExtendedBadChar
        ) {
            good_suffix_tables(pattern)
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(BoyerMoore {
            pattern: pattern.to_vec(),
            variant,
            r,
            r_next,
            big_l_prime,
            small_l_prime,
        })
    }

    /// Search `text`, returning an iterator of 1-based match positions.
    pub fn search<'a>(&'a self, text: &'a [u8]) -> BoyerMooreSearch<'a> {
        BoyerMooreSearch::new(self, text, false)
    }

    /// Search `text`, beginning as though a match had just been reported at the first
    /// alignment (`initmatch = true` in spec.md §4.4).
    pub fn search_at<'a>(&'a self, text: &'a [u8], initmatch: bool) -> BoyerMooreSearch<'a> {
        BoyerMooreSearch::new(self, text, initmatch)
    }

    /// The pattern's length.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    fn has_good_suffix(&self) -> bool {
        matches!(
            self.variant,
            Variant::GoodSuffixBadChar | Variant::GoodSuffixExtendedBadChar
        )
    }

    fn has_extended_bad_char(&self) -> bool {
        matches!(
            self.variant,
            Variant::ExtendedBadChar | Variant::GoodSuffixExtendedBadChar
        )
    }

    /// Bad-character shift for a mismatch at 1-based pattern index `i` against text byte
    /// `t`.
    fn bad_char_shift(&self, i: usize, t: u8) -> usize {
        let prior = if self.has_extended_bad_char() {
            // Largest index <= i-1 at which `t` occurs in the pattern, found by walking
            // the linked list of equal-character positions headed at `r[t]`.
            let mut pos = self.r[t as usize];
            while pos >= i {
                pos = self.r_next[pos];
            }
            pos
        } else {
            let pos = self.r[t as usize];
            if pos < i {
                pos
            } else {
                0
            }
        };
        if i > prior {
            i - prior
        } else {
            1
        }
    }

    /// Good-suffix shift for a mismatch at 1-based pattern index `i` (`i == m` means the
    /// mismatch was on the very first (rightmost) comparison).
    fn good_suffix_shift(&self, i: usize) -> usize {
        let m = self.pattern.len();
        if i == m {
            return 0;
        }
        let j = i + 1;
        if self.big_l_prime[j] > 0 {
            m - self.big_l_prime[j]
        } else {
            m - self.small_l_prime[j]
        }
    }

    /// Shift applied after a full match: the good-suffix value `M - l'[2]` for the two
    /// good-suffix variants, or 1 for the two bad-character-only variants (spec.md §4.4's
    /// post-match shift is underspecified for the bad-only case; resolved per SPEC_FULL.md
    /// §9 by keying the shift to whichever tables the variant actually built).
    fn full_match_shift(&self) -> usize {
        if self.has_good_suffix() {
            let m = self.pattern.len();
            let ell_prime_2 = self.small_l_prime.get(2).copied().unwrap_or(0);
            m - ell_prime_2
        } else {
            1
        }
    }
}

/// `(L'[i], l'[i])` for `i = 1..=m`, built from the Z-array of the reversed pattern
/// (spec.md §4.4).
fn good_suffix_tables(pattern: &[u8]) -> (Vec<usize>, Vec<usize>) {
    let m = pattern.len();
    let reversed: Vec<u8> = pattern.iter().rev().copied().collect();
    let z = ZArray::build(&reversed);

    // n[j] (1-based, j=1..=m) = Z-value of the reversed pattern at position j, i.e. the
    // length of the longest suffix of pattern[1..=j] that is also a suffix of pattern
    // (spec.md's "N" array via reversal, as in the teacher example's `n_array`).
    let mut n = vec![0usize; m + 1];
    for j in 1..=m {
        // z of reversed pattern at 0-based index (m-j) equals N[j].
        n[j] = z.get(m - j);
    }
    n[m] = m;

    let mut big_l_prime = vec![0usize; m + 1];
    for j in 1..=m {
        let n_j = n[j];
        if n_j == 0 {
            continue;
        }
        let i = m - n_j + 1;
        if i >= 1 {
            big_l_prime[i] = j;
        }
    }

    let mut small_l_prime = vec![0usize; m + 1];
    for j in 1..=m {
        if n[j] == j {
            small_l_prime[m - j + 1] = j;
        }
    }
    for i in (1..m).rev() {
        if small_l_prime[i] == 0 {
            small_l_prime[i] = small_l_prime[i + 1];
        }
    }

    (big_l_prime, small_l_prime)
}

/// A running Boyer-Moore scan over one text (spec.md §4.4's scanner core).
pub struct BoyerMooreSearch<'a> {
    bm: &'a BoyerMoore,
    text: &'a [u8],
    k: usize, // 1-based alignment index: text index of the rightmost aligned character.
    finished: bool,
}

impl<'a> BoyerMooreSearch<'a> {
    /// `initmatch = true` starts scanning as though a match had already been reported at
    /// the first alignment, i.e. the first alignment's own post-match shift has already
    /// been applied (spec.md §4.4, mirroring the `initmatch` semantics of §4.2/§4.3).
    fn new(bm: &'a BoyerMoore, text: &'a [u8], initmatch: bool) -> Self {
        let m = bm.pattern.len();
        let k = if initmatch {
            m + bm.full_match_shift()
        } else {
            m
        };
        let finished = text.len() < m;
        BoyerMooreSearch {
            bm,
            text,
            k,
            finished,
        }
    }
}

impl<'a> Iterator for BoyerMooreSearch<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }
        let m = self.bm.pattern.len();
        let n = self.text.len();

        while self.k <= n {
            let mut i = m;
            while i >= 1 && self.bm.pattern[i - 1] == self.text[self.k - m + i - 1] {
                i -= 1;
            }
            if i == 0 {
                let start = self.k - m + 1;
                self.k += self.bm.full_match_shift().max(1);
                return Some(start);
            }

            let mismatch_byte = self.text[self.k - m + i - 1];
            let bshift = self.bm.bad_char_shift(i, mismatch_byte);
            let gshift = if self.bm.has_good_suffix() {
                self.bm.good_suffix_shift(i)
            } else {
                0
            };
            self.k += bshift.max(gshift).max(1);
        }
        self.finished = true;
        None
    }
}

/// Optimised bad-character-only variant: precomputes `b[c] = M - R[c]` so the inner skip
/// loop reduces to `t += b[text[t]]` (spec.md §4.4's "optimised variant"), verifying
/// backwards only once the skip loop lands the rightmost character inside the text.
pub struct OptimisedBoyerMoore {
    pattern: Vec<u8>,
    b: [usize; 256],
}

impl OptimisedBoyerMoore {
    /// Build the optimised preprocessing for `pattern`.
    pub fn build(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(StringMatchError::invalid_argument("pattern must not be empty"));
        }
        let m = pattern.len();
        let mut r = [0usize; 256];
        for (i, &byte) in pattern.iter().enumerate() {
            r[byte as usize] = i + 1;
        }
        let mut b = [0usize; 256];
        for c in 0..256 {
            b[c] = m - r[c];
        }
        Ok(OptimisedBoyerMoore {
            pattern: pattern.to_vec(),
            b,
        })
    }

    /// Search `text`, returning an iterator of 1-based match positions and recording
    /// skip/verify compare counts into `stats` if `Some`.
    pub fn search<'a>(&'a self, text: &'a [u8]) -> OptimisedSearch<'a> {
        OptimisedSearch {
            bm: self,
            text,
            t: self.pattern.len(),
            finished: text.len() < self.pattern.len(),
        }
    }
}

/// Iterator produced by [`OptimisedBoyerMoore::search`].
pub struct OptimisedSearch<'a> {
    bm: &'a OptimisedBoyerMoore,
    text: &'a [u8],
    t: usize, // 1-based text index of the rightmost aligned character.
    finished: bool,
}

impl<'a> Iterator for OptimisedSearch<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }
        let m = self.bm.pattern.len();
        let n = self.text.len();
        loop {
            while self.t <= n && self.bm.b[self.text[self.t - 1] as usize] > 0 {
                self.t += self.bm.b[self.text[self.t - 1] as usize];
            }
            if self.t > n {
                self.finished = true;
                return None;
            }
            let mut i = m;
            while i >= 1 && self.bm.pattern[i - 1] == self.text[self.t - m + i - 1] {
                i -= 1;
            }
            if i == 0 {
                let start = self.t - m + 1;
                self.t += 1;
                return Some(start);
            }
            self.t += 1;
        }
    }
}

/// Preprocessing/scanning counters for a [`BoyerMoore`] scan, computed separately from the
/// zero-overhead default search (spec.md §6: statistics are advisory and opt-in).
pub fn search_with_stats(bm: &BoyerMoore, text: &[u8]) -> (Vec<usize>, Stats) {
    let mut stats = Stats::default();
    let m = bm.pattern.len();
    let n = text.len();
    let mut matches = Vec::new();
    let mut k = m;
    while k <= n {
        let mut i = m;
        while i >= 1 {
            stats.scanning_compares += 1;
            if bm.pattern[i - 1] == text[k - m + i - 1] {
                i -= 1;
            } else {
                break;
            }
        }
        if i == 0 {
            matches.push(k - m + 1);
            k += bm.full_match_shift().max(1);
            stats.shifts += 1;
            continue;
        }
        let mismatch_byte = text[k - m + i - 1];
        let bshift = bm.bad_char_shift(i, mismatch_byte);
        let gshift = if bm.has_good_suffix() {
            bm.good_suffix_shift(i)
        } else {
            0
        };
        k += bshift.max(gshift).max(1);
        stats.shifts += 1;
    }
    (matches, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants(pattern: &[u8]) -> Vec<BoyerMoore> {
        vec![
            BoyerMoore::build_variant(pattern, Variant::BadChar).unwrap(),
            BoyerMoore::build_variant(pattern, Variant::ExtendedBadChar).unwrap(),
            BoyerMoore::build_variant(pattern, Variant::GoodSuffixBadChar).unwrap(),
            BoyerMoore::build_variant(pattern, Variant::GoodSuffixExtendedBadChar).unwrap(),
        ]
    }

    #[test]
    fn s1_all_variants() {
        let text = b"ababab";
        for bm in all_variants(b"abab") {
            let mut matches: Vec<_> = bm.search(text).collect();
            matches.sort_unstable();
            assert_eq!(matches, vec![1, 3]);
        }
    }

    #[test]
    fn s2_all_variants() {
        let text = b"abcabxabcaby";
        for bm in all_variants(b"abcaby") {
            let matches: Vec<_> = bm.search(text).collect();
            assert_eq!(matches, vec![7]);
        }
    }

    #[test]
    fn optimised_matches_s2() {
        let bm = OptimisedBoyerMoore::build(b"abcaby").unwrap();
        let matches: Vec<_> = bm.search(b"abcabxabcaby").collect();
        assert_eq!(matches, vec![7]);
    }

    #[test]
    fn single_char_alphabet() {
        for bm in all_variants(b"aa") {
            let mut matches: Vec<_> = bm.search(b"aaaa").collect();
            matches.sort_unstable();
            assert_eq!(matches, vec![1, 2, 3]);
        }
    }

    #[test]
    fn optimised_single_char_alphabet() {
        let bm = OptimisedBoyerMoore::build(b"aa").unwrap();
        let matches: Vec<_> = bm.search(b"aaaa").collect();
        assert_eq!(matches, vec![1, 2, 3]);
    }

    #[test]
    fn empty_text_no_matches() {
        let bm = BoyerMoore::build(b"abc").unwrap();
        assert!(bm.search(b"").next().is_none());
    }

    #[test]
    fn pattern_longer_than_text() {
        let bm = BoyerMoore::build(b"abcdef").unwrap();
        assert!(bm.search(b"ab").next().is_none());
    }

    #[test]
    fn pattern_longer_than_text_is_invalid_for_some_callers() {
        // spec.md: "pattern longer than text where the algorithm requires it (BM)".
        // The scanner itself degrades to "no matches" rather than erroring, matching the
        // boundary-behaviour requirement in spec.md §8; building still succeeds.
        assert!(BoyerMoore::build(b"abcdef").is_ok());
    }

    #[test]
    fn empty_pattern_rejected() {
        assert!(BoyerMoore::build(b"").is_err());
    }

    #[test]
    fn zero_byte_in_middle() {
        for bm in all_variants(b"a\0b") {
            let matches: Vec<_> = bm.search(b"xa\0ba\0b").collect();
            assert_eq!(matches, vec![2, 5]);
        }
    }

    #[test]
    fn stats_report_nonzero_compares() {
        let bm = BoyerMoore::build(b"abcaby").unwrap();
        let (matches, stats) = search_with_stats(&bm, b"abcabxabcaby");
        assert_eq!(matches, vec![7]);
        assert!(stats.scanning_compares > 0);
        assert!(stats.shifts > 0);
    }
}
