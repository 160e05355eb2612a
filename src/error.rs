//! Error types for trie construction and query configuration.
//!
//! Lookup misses are not errors: membership and retrieval surface absence
//! as `false` / `None` / empty iterators. The variants here cover caller
//! programming mistakes (an unconfigured similarity query) and corrupt
//! construction input (a tagged record that cannot be decomposed).

use thiserror::Error;

/// Errors surfaced by trie construction and query entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// [`similar_to`](crate::trie::Trie::similar_to) was called without a
    /// distance budget or a similarity threshold.
    #[error("similarity query needs a max_distance or a threshold")]
    MissingSimilarityBound,

    /// A tagged input line could not be split into a word and its
    /// attribute payload.
    #[error("malformed record {record:?}: expected `word{separator}attributes`")]
    MalformedRecord {
        /// The offending input line, verbatim.
        record: String,
        /// The separator the line was expected to contain.
        separator: char,
    },
}
