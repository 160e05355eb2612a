//! Approximate queries over the trie.
//!
//! Two fuzzy-matching modes share the same breadth-first walk over live
//! nodes:
//!
//! - [`Trie::edit_distance`]: bounded Damerau-Levenshtein search. The
//!   accumulated-prefix length prunes whole branches before any distance
//!   is computed, so the O(n·m) metric only runs on plausible-length
//!   word nodes.
//! - [`Trie::fuzzy_search`]: threshold-driven ratio search with a
//!   pluggable scorer, meant to feed an external reranker. An O(1)
//!   length-ratio bound gates both branch expansion and per-candidate
//!   scoring; the expensive scorer never runs when the bound already
//!   rules the candidate out.
//!
//! Both return every match within budget rather than a single best hit,
//! favoring completeness for downstream reranking.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::distance::{damerau_levenshtein, similarity};
use crate::error::TrieError;
use crate::trie::node::Node;
use crate::trie::Trie;

/// A match produced by [`Trie::edit_distance`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate<'a, V> {
    /// The matching stored word.
    pub term: String,
    /// Damerau-Levenshtein distance from the query.
    pub distance: usize,
    /// The word's attribute payload.
    pub attributes: &'a V,
}

/// A match produced by [`Trie::fuzzy_search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredCandidate<'a, V> {
    /// The matching stored word.
    pub term: String,
    /// Similarity score in `[0, 1]`, as reported by the scorer.
    pub score: f64,
    /// The word's attribute payload.
    pub attributes: &'a V,
}

/// Upper bound on any length-normalized similarity of two strings given
/// only their character lengths: `min_len / max_len`.
#[inline]
fn length_bound(len_a: usize, len_b: usize) -> f64 {
    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    len_a.min(len_b) as f64 / len_a.max(len_b) as f64
}

impl<V, P> Trie<V, P> {
    /// Find every stored word within `max_distance` Damerau-Levenshtein
    /// edits of `word`.
    ///
    /// Returns all matches within budget, in traversal order; callers
    /// sort as needed. Branches whose accumulated prefix is already
    /// longer than `word` plus the budget are abandoned without distance
    /// computation; prefixes still shorter than `word` minus the budget
    /// are descended through but not yet tested.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzytrie::Trie;
    ///
    /// let trie = Trie::from_terms(["cat", "cats", "car", "dog"]);
    /// let matches = trie.edit_distance("cat", 1);
    /// assert_eq!(matches.len(), 3); // cat, cats, car; never dog
    /// ```
    pub fn edit_distance(&self, word: &str, max_distance: usize) -> Vec<Candidate<'_, V>> {
        let target_len = word.chars().count();
        let mut matches = Vec::new();

        let mut pending: VecDeque<(String, &Node<V>)> = VecDeque::new();
        pending.push_back((String::new(), &self.root));

        while let Some((prefix, node)) = pending.pop_front() {
            let prefix_len = prefix.chars().count();

            // No word reachable from here can get back within budget.
            if prefix_len > target_len + max_distance {
                continue;
            }

            // Test only word nodes inside the plausible length window;
            // shorter prefixes may still grow into range.
            if prefix_len + max_distance >= target_len {
                if let Some(attributes) = node.attributes() {
                    let distance = damerau_levenshtein(&prefix, word);
                    if distance <= max_distance {
                        matches.push(Candidate {
                            term: prefix.clone(),
                            distance,
                            attributes,
                        });
                    }
                }
            }

            for (label, child) in node.edges() {
                let mut child_prefix = String::with_capacity(prefix.len() + label.len());
                child_prefix.push_str(&prefix);
                child_prefix.push_str(label);
                pending.push_back((child_prefix, child));
            }
        }

        matches
    }

    /// Find every stored word whose similarity to `word` reaches
    /// `threshold`, scored with the default normalized
    /// Damerau-Levenshtein [`similarity`].
    pub fn fuzzy_search(&self, word: &str, threshold: f64) -> Vec<ScoredCandidate<'_, V>> {
        self.fuzzy_search_with(word, threshold, similarity)
    }

    /// Threshold similarity search with a caller-supplied scorer.
    ///
    /// The scorer must never exceed the `min_len / max_len` length bound
    /// (any length-normalized edit similarity satisfies this); the bound
    /// is what allows candidates and whole branches to be discarded in
    /// O(1) before the scorer runs.
    pub fn fuzzy_search_with<F>(
        &self,
        word: &str,
        threshold: f64,
        scorer: F,
    ) -> Vec<ScoredCandidate<'_, V>>
    where
        F: Fn(&str, &str) -> f64,
    {
        let target_len = word.chars().count();
        let mut matches = Vec::new();

        let mut pending: VecDeque<(String, &Node<V>)> = VecDeque::new();
        pending.push_back((String::new(), &self.root));

        while let Some((prefix, node)) = pending.pop_front() {
            let prefix_len = prefix.chars().count();

            // Once the prefix is longer than the query, extending it only
            // lowers the best reachable ratio; abandon the branch as soon
            // as the cheap bound drops below the threshold.
            if prefix_len > target_len && length_bound(prefix_len, target_len) < threshold {
                continue;
            }

            if let Some(attributes) = node.attributes() {
                if length_bound(prefix_len, target_len) >= threshold {
                    let score = scorer(&prefix, word);
                    if score >= threshold {
                        matches.push(ScoredCandidate {
                            term: prefix.clone(),
                            score,
                            attributes,
                        });
                    }
                }
            }

            for (label, child) in node.edges() {
                let mut child_prefix = String::with_capacity(prefix.len() + label.len());
                child_prefix.push_str(&prefix);
                child_prefix.push_str(label);
                pending.push_back((child_prefix, child));
            }
        }

        matches
    }

    /// Unified approximate-lookup entry point.
    ///
    /// Dispatches to [`Trie::edit_distance`] when `max_distance` is
    /// given (sorted by ascending distance, then term) or to
    /// [`Trie::fuzzy_search`] on `threshold` alone (sorted by descending
    /// score, then term). Supplying neither is a configuration error;
    /// when both are supplied the distance budget wins.
    ///
    /// # Errors
    ///
    /// [`TrieError::MissingSimilarityBound`] if called with neither
    /// bound.
    pub fn similar_to(
        &self,
        word: &str,
        max_distance: Option<usize>,
        threshold: Option<f64>,
    ) -> Result<Vec<String>, TrieError> {
        match (max_distance, threshold) {
            (Some(max_distance), _) => {
                let mut matches = self.edit_distance(word, max_distance);
                matches.sort_by(|a, b| {
                    a.distance
                        .cmp(&b.distance)
                        .then_with(|| a.term.cmp(&b.term))
                });
                Ok(matches.into_iter().map(|c| c.term).collect())
            }
            (None, Some(threshold)) => {
                let mut matches = self.fuzzy_search(word, threshold);
                matches.sort_by(|a, b| {
                    b.score
                        .partial_cmp(&a.score)
                        .unwrap_or(Ordering::Equal)
                        .then_with(|| a.term.cmp(&b.term))
                });
                Ok(matches.into_iter().map(|c| c.term).collect())
            }
            (None, None) => Err(TrieError::MissingSimilarityBound),
        }
    }
}
