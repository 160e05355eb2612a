//! Attribute merge strategies.
//!
//! When a word is inserted twice, the trie asks its merge policy how to
//! combine the new attribute payload with the stored one. The policy is
//! injected at trie construction, so frequency counting or multi-label
//! accumulation never requires touching the trie algorithms.
//!
//! # Examples
//!
//! ```rust
//! use fuzzytrie::prelude::*;
//!
//! // Count duplicate insertions.
//! let mut trie = Trie::with_policy(Count);
//! trie.add("the", 1u64);
//! trie.add("the", 1u64);
//! assert_eq!(trie.get("the"), Some(&2));
//! assert_eq!(trie.len(), 1);
//! ```

/// Strategy for combining attribute payloads on duplicate insertion.
///
/// Implemented by the provided [`Overwrite`], [`Accumulate`], and
/// [`Count`] policies; any `Fn(&mut V, V)` closure works as an ad-hoc
/// policy via the blanket implementation.
pub trait MergePolicy<V> {
    /// Fold `incoming` into the payload already stored at a word node.
    fn merge(&self, existing: &mut V, incoming: V);
}

impl<V, F> MergePolicy<V> for F
where
    F: Fn(&mut V, V),
{
    fn merge(&self, existing: &mut V, incoming: V) {
        self(existing, incoming)
    }
}

/// Last-write-wins: a duplicate insertion replaces the stored payload.
///
/// This is the default policy and matches the common "presence marker"
/// use where the payload is `()` or a sentinel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overwrite;

impl<V> MergePolicy<V> for Overwrite {
    fn merge(&self, existing: &mut V, incoming: V) {
        *existing = incoming;
    }
}

/// Collect every inserted payload into the stored `Vec`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accumulate;

impl<T> MergePolicy<Vec<T>> for Accumulate {
    fn merge(&self, existing: &mut Vec<T>, mut incoming: Vec<T>) {
        existing.append(&mut incoming);
    }
}

/// Add numeric payloads together, turning the trie into a frequency map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Count;

impl MergePolicy<u64> for Count {
    fn merge(&self, existing: &mut u64, incoming: u64) {
        *existing += incoming;
    }
}
