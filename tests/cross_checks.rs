//! Universal cross-checks between the independently-implemented matching engines
//! (SPEC_FULL.md §8): every engine over the same pattern/text pair must agree on the
//! sequence of 1-based match positions it reports, since they are all describing the same
//! notion of "occurrence".

use proptest::prelude::*;
use rand::Rng;

use strmatch::pattern_matching::aho_corasick::AhoCorasick;
use strmatch::pattern_matching::bm_set::BmSet;
use strmatch::pattern_matching::boyer_moore::{BoyerMoore, Variant};
use strmatch::pattern_matching::kmp::{Failure, KmpSearch};
use strmatch::pattern_matching::naive::NaiveSearch;
use strmatch::pattern_matching::zarray::ZSearch;
use strmatch::data_structures::suffix_array::SuffixArray;
use strmatch::data_structures::suffix_array_lcp::SuffixArrayLcpIndex;
use strmatch::data_structures::suffix_tree::ArenaSuffixTree;

fn naive_positions(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    NaiveSearch::new(pattern, text).unwrap().collect()
}

fn z_positions(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    ZSearch::new(pattern, text).unwrap().collect()
}

fn kmp_variant_positions(pattern: &[u8], text: &[u8]) -> [Vec<usize>; 4] {
    let builders: [fn(&[u8]) -> strmatch::error::Result<Failure>; 4] = [
        Failure::from_z_sp,
        Failure::from_z_sp_prime,
        Failure::from_incremental_sp,
        Failure::from_incremental_sp_prime,
    ];
    let mut out = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for (i, build) in builders.iter().enumerate() {
        let failure = build(pattern).unwrap();
        out[i] = KmpSearch::new(pattern, text, failure).collect();
    }
    out
}

fn bm_variant_positions(pattern: &[u8], text: &[u8]) -> [Vec<usize>; 4] {
    let variants = [
        Variant::BadChar,
        Variant::ExtendedBadChar,
        Variant::GoodSuffixBadChar,
        Variant::GoodSuffixExtendedBadChar,
    ];
    let mut out = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for (i, &variant) in variants.iter().enumerate() {
        let bm = BoyerMoore::build_variant(pattern, variant).unwrap();
        out[i] = bm.search(text).collect();
    }
    out
}

/// Fixed fixtures first: small, hand-inspectable cases that pin the boundary behaviours
/// (single-character alphabet, pattern touching text boundaries) before proptest explores
/// the space at random.
#[test]
fn naive_z_kmp_bm_agree_on_fixtures() {
    let cases: &[(&[u8], &[u8])] = &[
        (b"aba", b"abababa"),
        (b"aaaa", b"aaaaaaaa"),
        (b"a", b"aaaaa"),
        (b"abc", b"xyz"),
        (b"abcaby", b"abcabxabcaby"),
        (b"mississippi", b"mississippimississippi"),
    ];
    for &(pattern, text) in cases {
        let naive = naive_positions(pattern, text);
        assert_eq!(z_positions(pattern, text), naive, "z mismatch on {pattern:?}/{text:?}");
        for (i, kmp) in kmp_variant_positions(pattern, text).into_iter().enumerate() {
            assert_eq!(kmp, naive, "kmp variant {i} mismatch on {pattern:?}/{text:?}");
        }
        for (i, bm) in bm_variant_positions(pattern, text).into_iter().enumerate() {
            assert_eq!(bm, naive, "bm variant {i} mismatch on {pattern:?}/{text:?}");
        }
    }
}

proptest! {
    #[test]
    fn naive_z_kmp_bm_agree_on_random_inputs(
        pattern in prop::collection::vec(0u8..4, 1..6),
        text in prop::collection::vec(0u8..4, 0..40),
    ) {
        let naive = naive_positions(&pattern, &text);
        prop_assert_eq!(z_positions(&pattern, &text), naive.clone());
        for kmp in kmp_variant_positions(&pattern, &text) {
            prop_assert_eq!(kmp, naive.clone());
        }
        for bm in bm_variant_positions(&pattern, &text) {
            prop_assert_eq!(bm, naive.clone());
        }
    }

    /// Single-character alphabets are a named boundary behaviour (spec.md §8): every
    /// matcher must still agree when every byte in text and pattern is identical.
    #[test]
    fn agreement_holds_on_single_character_alphabets(
        pattern_len in 1usize..5,
        text_len in 0usize..30,
    ) {
        let pattern = vec![b'a'; pattern_len];
        let text = vec![b'a'; text_len];
        let naive = naive_positions(&pattern, &text);
        prop_assert_eq!(z_positions(&pattern, &text), naive.clone());
        for kmp in kmp_variant_positions(&pattern, &text) {
            prop_assert_eq!(kmp, naive.clone());
        }
        for bm in bm_variant_positions(&pattern, &text) {
            prop_assert_eq!(bm, naive.clone());
        }
    }
}

/// AC(T) = BM-set-naive(T) as full (position, length, pattern_id) sequences (spec.md §8).
#[test]
fn aho_corasick_agrees_with_bm_set_naive() {
    let cases: &[&[&[u8]]] = &[
        &[b"he", b"she", b"his", b"hers"],
        &[b"a", b"ab", b"abc"],
        &[b"aa", b"aaa"],
    ];
    let texts: &[&[u8]] = &[b"ushers", b"aabcabc", b"aaaaaa"];
    for (patterns, &text) in cases.iter().zip(texts.iter()) {
        let owned: Vec<Vec<u8>> = patterns.iter().map(|p| p.to_vec()).collect();
        let ac = AhoCorasick::build(&owned).unwrap();
        let bmset = BmSet::build(&owned).unwrap();
        let ac_hits: Vec<_> = ac.search(text).map(|m| (m.position, m.length, m.pattern_id)).collect();
        let bm_hits: Vec<_> = bmset.search(text).map(|m| (m.position, m.length, m.pattern_id)).collect();
        assert_eq!(ac_hits, bm_hits, "AC/BM-set mismatch on {patterns:?}/{text:?}");
    }
}

/// The two direct suffix-array builders must agree on suffix order (spec.md §8: "the three
/// SA builders agree" — comparison-sort, the incremental builder, and the DFS-over-a-
/// suffix-tree builder in `SuffixArrayLcpIndex`, cross-checked below).
#[test]
fn suffix_array_builders_agree() {
    let texts: &[&[u8]] = &[b"banana", b"mississippi", b"aaaa", b"abcabcabc"];
    for &text in texts {
        let by_sort = SuffixArray::build_comparison_sort(text).unwrap();
        let incremental = SuffixArray::build_incremental(text).unwrap();
        assert_eq!(by_sort.pos(), incremental.pos(), "SA pos mismatch on {text:?}");

        let tree = ArenaSuffixTree::build(text).unwrap();
        let via_tree = SuffixArrayLcpIndex::build(&tree).unwrap();
        assert_eq!(by_sort.pos(), via_tree.pos(), "SA-via-tree pos mismatch on {text:?}");
    }
}

/// The three LCP-index search strategies (naive, mlr-accelerated, lcp-accelerated) must
/// return the same set of match positions, only possibly in different iteration order.
#[test]
fn suffix_array_search_variants_agree() {
    let text: &[u8] = b"mississippimississippi";
    let tree = ArenaSuffixTree::build(text).unwrap();
    let index = SuffixArrayLcpIndex::build(&tree).unwrap();

    for pattern in [&b"issi"[..], b"ss", b"i", b"mississippi", b"zzz"] {
        let mut naive: Vec<usize> = index.search_naive(pattern).collect();
        let mut mlr: Vec<usize> = index.search_mlr(pattern).collect();
        let mut lcp: Vec<usize> = index.search_lcp(pattern).collect();
        naive.sort_unstable();
        mlr.sort_unstable();
        lcp.sort_unstable();
        assert_eq!(naive, mlr, "mlr disagrees with naive on {pattern:?}");
        assert_eq!(naive, lcp, "lcp disagrees with naive on {pattern:?}");
    }
}

/// A larger DNA-alphabet stress fixture, generated with `rand` rather than proptest's
/// shrinking generators: a few hundred bytes is enough to exercise the sliding-window
/// bookkeeping in `zarray`/`boyer_moore` past proptest's default small-vector sizes, while
/// patterns are cut directly out of the text so at least some of them are guaranteed hits.
#[test]
fn naive_z_kmp_bm_agree_on_a_larger_random_sequence() {
    let mut rng = rand::thread_rng();
    let text: Vec<u8> = (0..400).map(|_| *b"ACGT".iter().nth(rng.gen_range(0..4)).unwrap()).collect();

    for _ in 0..20 {
        let start = rng.gen_range(0..text.len());
        let max_len = (text.len() - start).min(12);
        let len = rng.gen_range(1..=max_len);
        let pattern = &text[start..start + len];

        let naive = naive_positions(pattern, &text);
        assert_eq!(z_positions(pattern, &text), naive, "z mismatch on pattern {pattern:?}");
        for (i, kmp) in kmp_variant_positions(pattern, &text).into_iter().enumerate() {
            assert_eq!(kmp, naive, "kmp variant {i} mismatch on pattern {pattern:?}");
        }
        for (i, bm) in bm_variant_positions(pattern, &text).into_iter().enumerate() {
            assert_eq!(bm, naive, "bm variant {i} mismatch on pattern {pattern:?}");
        }
        // The pattern was cut directly from `text`, so it must occur at least once.
        assert!(!naive.is_empty(), "pattern {pattern:?} taken from text but not found");
    }
}
