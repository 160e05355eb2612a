//! # fuzzytrie
//!
//! Compressed prefix tree (radix trie) for large string sets with
//! approximate lookup.
//!
//! Words are stored along multi-character edge labels, so chains of
//! single-child nodes never exist and memory stays proportional to the
//! number of branch points rather than the number of characters. Each
//! stored word may carry an arbitrary attribute payload, merged on
//! duplicate insertion by a pluggable [`MergePolicy`](trie::policy::MergePolicy).
//!
//! Beyond exact membership and prefix enumeration, the trie answers
//! bounded edit-distance queries (Damerau-Levenshtein, transpositions
//! count as one edit) and threshold-driven fuzzy-ratio queries, both with
//! branch pruning so the expensive string metric only runs on
//! plausible-length candidates.
//!
//! ## Example
//!
//! ```rust
//! use fuzzytrie::prelude::*;
//!
//! let mut trie = Trie::new();
//! trie.add("cat", ());
//! trie.add("cats", ());
//! trie.add("car", ());
//! trie.add("dog", ());
//!
//! assert!(trie.contains("cat"));
//! assert_eq!(trie.len(), 4);
//!
//! let mut close: Vec<_> = trie
//!     .edit_distance("cat", 1)
//!     .into_iter()
//!     .map(|c| c.term)
//!     .collect();
//! close.sort();
//! assert_eq!(close, ["car", "cat", "cats"]);
//! ```
//!
//! ## Mutation discipline
//!
//! The trie is a plain owned structure with no interior mutability:
//! queries borrow `&self`, mutations take `&mut self`, so the borrow
//! checker statically rules out mutating the trie while a lazy traversal
//! (`words`, `iter`, `starts_with`) is being consumed. Callers sharing a
//! trie across threads must serialize access themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod search;
pub mod trie;

pub use error::TrieError;
pub use search::{Candidate, ScoredCandidate};
pub use trie::{Node, Trie, TrieStats};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{damerau_levenshtein, levenshtein, similarity};
    pub use crate::error::TrieError;
    pub use crate::search::{Candidate, ScoredCandidate};
    pub use crate::trie::policy::{Accumulate, Count, MergePolicy, Overwrite};
    pub use crate::trie::{Node, Trie, TrieStats};
}
