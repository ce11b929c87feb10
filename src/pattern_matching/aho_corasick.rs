//! Aho-Corasick multi-pattern search (C5): a goto trie plus failure and output links,
//! streamed over the text in a single pass.
//!
//! Trie/fail-link shape follows the classical BFS construction (the same shape as
//! `other_examples/187a1a27_simmsb-like-aho-corasick-but-different__src-nfa.rs.rs`'s NFA):
//! insert every pattern into a byte-keyed trie, then compute `fail(v)` by a breadth-first
//! pass so that every node's failure link is already known before its children need it.
//!
//! # Example
//!
//! ```
//! use strmatch::pattern_matching::aho_corasick::AhoCorasick;
//!
//! let ac = AhoCorasick::build(&[b"he".to_vec(), b"she".to_vec(), b"his".to_vec(), b"hers".to_vec()]).unwrap();
//! let hits: Vec<_> = ac.search(b"ushers").map(|m| (m.position, m.length, m.pattern_id.unwrap())).collect();
//! // "she" and "he" both end at position 4 (tie broken by longer pattern first), then "hers".
//! assert_eq!(hits, vec![(2, 3, 1), (3, 2, 0), (3, 4, 3)]);
//! ```

use fxhash::FxHashMap;

use crate::error::{Result, StringMatchError};
use crate::utils::Match;

const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: FxHashMap<u8, usize>,
    fail: usize,
    /// Nearest strict ancestor-in-fail-chain that is itself a pattern end, or `ROOT` if
    /// none (sentinel; `ROOT` never carries output since no pattern is empty).
    output_link: usize,
    /// Pattern ids ending exactly at this node, longest-first so emission order at a
    /// shared endpoint already matches spec.md §4.5's tie-break without extra sorting.
    output: Vec<usize>,
    depth: usize,
}

/// A built Aho-Corasick automaton over a fixed set of patterns (spec.md §4.5).
#[derive(Clone, Debug)]
pub struct AhoCorasick {
    nodes: Vec<TrieNode>,
    pattern_lens: Vec<usize>,
}

impl AhoCorasick {
    /// Build the automaton over `patterns`. Pattern ids are the input's indices.
    ///
    /// # Errors
    ///
    /// Returns [`StringMatchError::InvalidArgument`] if `patterns` is empty or any pattern
    /// is empty (spec.md's "Failure semantics": empty pattern is invalid).
    pub fn build(patterns: &[Vec<u8>]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(StringMatchError::invalid_argument(
                "aho-corasick requires at least one pattern",
            ));
        }
        if patterns.iter().any(|p| p.is_empty()) {
            return Err(StringMatchError::invalid_argument(
                "aho-corasick patterns must not be empty",
            ));
        }

        let mut nodes = vec![TrieNode::default()];
        for (id, pattern) in patterns.iter().enumerate() {
            let mut node = ROOT;
            for &byte in pattern {
                node = *nodes[node].children.entry(byte).or_insert_with(|| {
                    nodes.push(TrieNode {
                        depth: nodes[node].depth + 1,
                        ..TrieNode::default()
                    });
                    nodes.len() - 1
                });
            }
            // Longest pattern ending here goes first, per spec.md's tie-break rule.
            let pos = nodes[node].output.partition_point(|&pid| patterns[pid].len() > pattern.len());
            nodes[node].output.insert(pos, id);
        }

        build_fail_links(&mut nodes);

        log::debug!(
            "aho-corasick: {} patterns, {} trie nodes",
            patterns.len(),
            nodes.len()
        );

        Ok(AhoCorasick {
            nodes,
            pattern_lens: patterns.iter().map(Vec::len).collect(),
        })
    }

    /// Scan `text`, returning matches in ascending right-endpoint order (ties broken by
    /// descending pattern length), per spec.md §5's ordering guarantee.
    pub fn search<'a>(&'a self, text: &'a [u8]) -> AhoCorasickSearch<'a> {
        AhoCorasickSearch {
            ac: self,
            text,
            state: ROOT,
            pos: 0,
            pending: Vec::new(),
            pending_cursor: 0,
        }
    }

    fn goto(&self, mut state: usize, byte: u8) -> usize {
        loop {
            if let Some(&next) = self.nodes[state].children.get(&byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }
}

fn build_fail_links(nodes: &mut [TrieNode]) {
    let mut queue = std::collections::VecDeque::new();
    let root_children: Vec<(u8, usize)> = nodes[ROOT]
        .children
        .iter()
        .map(|(&b, &c)| (b, c))
        .collect();
    for (_, child) in &root_children {
        nodes[*child].fail = ROOT;
        queue.push_back(*child);
    }
    while let Some(v) = queue.pop_front() {
        let children: Vec<(u8, usize)> = nodes[v].children.iter().map(|(&b, &c)| (b, c)).collect();
        for (byte, child) in children {
            let mut f = nodes[v].fail;
            let fail_target = loop {
                if let Some(&next) = nodes[f].children.get(&byte) {
                    break next;
                }
                if f == ROOT {
                    break ROOT;
                }
                f = nodes[f].fail;
            };
            let resolved = if fail_target == child { ROOT } else { fail_target };
            nodes[child].fail = resolved;
            nodes[child].output_link = if !nodes[resolved].output.is_empty() {
                resolved
            } else {
                nodes[resolved].output_link
            };
            queue.push_back(child);
        }
    }
}

/// A running Aho-Corasick scan (spec.md §4.5's automaton walk, plus output-link walk at
/// each endpoint).
pub struct AhoCorasickSearch<'a> {
    ac: &'a AhoCorasick,
    text: &'a [u8],
    state: usize,
    pos: usize,
    /// Matches ending at the position just scanned, already in emission order; drained
    /// before advancing further.
    pending: Vec<Match>,
    pending_cursor: usize,
}

impl<'a> Iterator for AhoCorasickSearch<'a> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if self.pending_cursor < self.pending.len() {
                let m = self.pending[self.pending_cursor];
                self.pending_cursor += 1;
                return Some(m);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            let byte = self.text[self.pos];
            self.state = self.ac.goto(self.state, byte);
            self.pos += 1;

            self.pending.clear();
            self.pending_cursor = 0;
            let mut node = self.state;
            loop {
                for &pattern_id in &self.ac.nodes[node].output {
                    let len = self.ac.pattern_lens[pattern_id];
                    let start = self.pos - len + 1;
                    self.pending.push(Match::with_pattern(start, len, pattern_id));
                }
                if node == ROOT {
                    break;
                }
                let ol = self.ac.nodes[node].output_link;
                if ol == ROOT && self.ac.nodes[ROOT].output.is_empty() {
                    break;
                }
                if ol == node {
                    break;
                }
                node = ol;
                if node == ROOT {
                    break;
                }
            }
        }
    }
}
