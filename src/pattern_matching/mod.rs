//! Single- and multi-pattern exact string search.
//!
//! - [`zarray`] — Z-array construction and Z-value driven search (C1).
//! - [`naive`] — brute-force search, the oracle the rest are tested against (C2).
//! - [`kmp`] — Knuth-Morris-Pratt failure-function construction and scanning, four
//!   preprocessing variants (C3).
//! - [`boyer_moore`] — bad-character, extended bad-character, strong good-suffix, and
//!   combined Boyer-Moore variants, plus an optimised bad-character-only scanner (C4).
//! - [`aho_corasick`] — multi-pattern trie automaton with failure and output links (C5).
//! - [`bm_set`] — naive multi-pattern search by running one Boyer-Moore scanner per
//!   pattern in lock-step, emitting in the same order as [`aho_corasick`] (C6).
//!
//! Every scanner here is a Rust `Iterator<Item = Match>` (or `Item = usize` for the
//! single-pattern position-only engines); a scan that has reached its end keeps
//! returning `None` rather than panicking if polled again.

pub mod aho_corasick;
pub mod bm_set;
pub mod boyer_moore;
pub mod kmp;
pub mod naive;
pub mod zarray;
