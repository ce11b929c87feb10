//! Full-text indexing structures: suffix trees, suffix arrays, and LCP-accelerated search.
//!
//! - [`suffix_tree`] — the [`suffix_tree::SuffixTree`] trait (spec.md's "external
//!   collaborator" contract) and [`suffix_tree::ArenaSuffixTree`], a correctness-first
//!   arena-based implementation built by repeated suffix insertion (C17, added: spec.md
//!   treats suffix-tree *construction* as out of scope, but a concrete tree is required
//!   for anything in this crate to consume one).
//! - [`suffix_array`] — two independent builders for the suffix array `Pos[]`: a
//!   comparison-sort builder and the Gusfield/Zerkle increment-by-one O(n log n) method
//!   (C7).
//! - [`suffix_array_lcp`] — the suffix-tree-derived `Pos[]`/LCP-leaves/LCP-tree index
//!   (C8) and its three binary-search variants (naive, mlr-accelerated, LCP-accelerated)
//!   (C9).

pub mod suffix_array;
pub mod suffix_array_lcp;
pub mod suffix_tree;
