//! Descriptive statistics for stored words and trie shape.
//!
//! The snapshot is intended for diagnostics and tuning, not for
//! correctness-critical consumption: `num_words` and `num_nodes` are
//! exact, histogram bucketing is non-normative.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashMap;

use crate::trie::node::Node;
use crate::trie::Trie;

/// A point-in-time snapshot of trie contents and shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrieStats {
    /// Exact number of stored words.
    pub num_words: usize,
    /// Exact number of nodes, the root included.
    pub num_nodes: usize,
    /// Mean stored-word length in characters (`0.0` when empty).
    pub avg_word_length: f64,
    /// Word count per character length.
    pub word_lengths: BTreeMap<usize, usize>,
    /// Total occurrences per character across all stored words.
    pub letter_frequency: FxHashMap<char, usize>,
    /// Per-character occurrence counts indexed by word position.
    pub letter_positions: FxHashMap<char, Vec<usize>>,
    /// Node count per depth (edges from the root).
    pub nodes_per_depth: BTreeMap<usize, usize>,
    /// Word-node count per depth.
    pub words_per_depth: BTreeMap<usize, usize>,
}

impl TrieStats {
    /// One-line human-readable digest.
    pub fn summary(&self) -> String {
        format!(
            "words: {}, nodes: {}, avg word length: {:.2}, max depth: {}",
            self.num_words,
            self.num_nodes,
            self.avg_word_length,
            self.nodes_per_depth.keys().next_back().copied().unwrap_or(0),
        )
    }
}

impl<V, P> Trie<V, P> {
    /// Collect a descriptive snapshot of the trie.
    ///
    /// Runs a full breadth-first traversal; cost is linear in the number
    /// of nodes plus total stored characters.
    pub fn stats(&self) -> TrieStats {
        let mut num_words = 0usize;
        let mut num_nodes = 0usize;
        let mut total_word_chars = 0usize;
        let mut word_lengths: BTreeMap<usize, usize> = BTreeMap::new();
        let mut letter_frequency: FxHashMap<char, usize> = FxHashMap::default();
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        let mut nodes_per_depth: BTreeMap<usize, usize> = BTreeMap::new();
        let mut words_per_depth: BTreeMap<usize, usize> = BTreeMap::new();

        let mut pending: VecDeque<(usize, String, &Node<V>)> = VecDeque::new();
        pending.push_back((0, String::new(), &self.root));

        while let Some((depth, path, node)) = pending.pop_front() {
            num_nodes += 1;
            *nodes_per_depth.entry(depth).or_insert(0) += 1;

            if node.is_word() {
                num_words += 1;
                *words_per_depth.entry(depth).or_insert(0) += 1;

                let length = path.chars().count();
                total_word_chars += length;
                *word_lengths.entry(length).or_insert(0) += 1;

                for (position, ch) in path.chars().enumerate() {
                    *letter_frequency.entry(ch).or_insert(0) += 1;
                    let positions = letter_positions.entry(ch).or_default();
                    if positions.len() <= position {
                        positions.resize(position + 1, 0);
                    }
                    positions[position] += 1;
                }
            }

            for (label, child) in node.edges() {
                let mut child_path = String::with_capacity(path.len() + label.len());
                child_path.push_str(&path);
                child_path.push_str(label);
                pending.push_back((depth + 1, child_path, child));
            }
        }

        debug_assert_eq!(num_words, self.num_words, "word counter out of sync");

        TrieStats {
            num_words,
            num_nodes,
            avg_word_length: if num_words == 0 {
                0.0
            } else {
                total_word_chars as f64 / num_words as f64
            },
            word_lengths,
            letter_frequency,
            letter_positions,
            nodes_per_depth,
            words_per_depth,
        }
    }
}
