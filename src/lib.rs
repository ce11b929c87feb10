//! Exact string-matching and string-indexing algorithms over byte-valued sequences.
//!
//! This crate implements the classical single-pattern matchers (naive, Z-value, Knuth-
//! Morris-Pratt, Boyer-Moore), multi-pattern matchers (Aho-Corasick, a naive Boyer-Moore
//! set matcher), full-text indexing via suffix arrays with LCP-accelerated search, and a
//! suffix-tree-based toolkit for finding tandem repeats, primitive tandem repeats, tandem
//! arrays, supermaximal repeats, and nonoverlapping maximal pairs.
//!
//! It is meant for off-line analysis of moderate-to-large byte strings (DNA, protein,
//! ASCII, or arbitrary binary data) rather than streaming I/O: every builder consumes a
//! complete, frozen sequence up front and hands back an index or a scanning iterator.
//!
//! # Layout
//!
//! - [`pattern_matching`] — single- and multi-pattern search engines (C1-C6).
//! - [`data_structures`] — suffix trees, suffix arrays, and the LCP-accelerated search
//!   index built on top of them (C7-C9, C17).
//! - [`repeats`] — the suffix-tree-based repeat-finding toolkit (C10-C16).
//! - [`alphabets`] — a minimal byte-alphabet helper.
//! - [`error`] — the typed error hierarchy shared by every builder.
//! - [`utils`] — the owned-or-borrowed [`utils::Sequence`] buffer and shared record types
//!   ([`utils::Match`], [`utils::Stats`]).
//!
//! None of these algorithms attempt approximate matching, regular expressions, on-disk
//! persistence, concurrency, or Unicode awareness; see each module's docs for the precise
//! boundary.

pub mod alphabets;
pub mod data_structures;
pub mod error;
pub mod pattern_matching;
pub mod repeats;
pub mod utils;
