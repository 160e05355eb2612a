//! Compressed radix trie engine.
//!
//! The trie owns a root [`Node`] and a word counter, and provides the
//! mutation algorithms (single insertion, sorted bulk construction,
//! deletion with restructuring) and the exact-query surface (membership,
//! lookup, word enumeration, prefix queries). Approximate queries live in
//! [`crate::search`], distance metrics in [`crate::distance`].
//!
//! # Example
//!
//! ```rust
//! use fuzzytrie::prelude::*;
//!
//! let trie = Trie::from_sorted_terms(["app", "apple", "apply", "apt"]);
//! assert_eq!(trie.len(), 4);
//! assert!(trie.contains("app"));
//!
//! let extensions: Vec<String> =
//!     trie.starts_with("app").map(|(word, _)| word).collect();
//! assert!(extensions.contains(&"apple".to_string()));
//! assert!(!extensions.contains(&"apt".to_string()));
//! ```

pub mod iter;
pub mod node;
pub mod policy;

mod prefix;
mod stats;

use std::collections::VecDeque;
use std::iter::Peekable;

use crate::error::TrieError;
use iter::{Items, StartsWith, Words};
use policy::{MergePolicy, Overwrite};
use prefix::common_prefix_len;

pub use node::Node;
pub use stats::TrieStats;

/// A compressed prefix tree mapping words to attribute payloads.
///
/// `V` is the per-word attribute type (`()` for plain word sets); `P` is
/// the [`MergePolicy`] applied when a word is inserted more than once.
///
/// The root node is never itself a word, and the word counter always
/// equals the number of word-marked nodes reachable from it.
#[derive(Debug, Clone)]
pub struct Trie<V = (), P = Overwrite> {
    pub(crate) root: Node<V>,
    pub(crate) num_words: usize,
    policy: P,
}

impl Trie<(), Overwrite> {
    /// Create an empty trie storing bare words with no payload.
    pub fn new() -> Self {
        Trie::with_policy(Overwrite)
    }

    /// Build a trie by inserting each term individually, in the order
    /// given. Input does not need to be sorted.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for term in terms {
            trie.add(term.as_ref(), ());
        }
        trie
    }

    /// Build a trie from a lexicographically sorted term sequence via the
    /// bulk construction algorithm (see [`Trie::add_words`] for the
    /// sortedness precondition).
    pub fn from_sorted_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trie = Self::new();
        trie.add_terms(terms);
        trie
    }
}

impl<V> Trie<V, Overwrite> {
    /// Create an empty trie carrying attribute payloads, with the default
    /// last-write-wins merge policy.
    pub fn with_values() -> Self {
        Trie::with_policy(Overwrite)
    }
}

impl Trie<String, Overwrite> {
    /// Build a trie from `word<separator>attributes` lines, the thin
    /// separator-convention layer for compound string attributes.
    ///
    /// A line without the separator, or with an empty word part, is a
    /// malformed record and aborts construction; corrupted labels are
    /// never silently stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzytrie::Trie;
    ///
    /// let trie = Trie::from_tagged(["cat\tnoun", "purr\tverb"], '\t').unwrap();
    /// assert_eq!(trie.get("cat").map(String::as_str), Some("noun"));
    /// ```
    pub fn from_tagged<I, S>(lines: I, separator: char) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::with_values();
        for line in lines {
            let line = line.as_ref();
            let (word, attributes) = line
                .split_once(separator)
                .filter(|(word, _)| !word.is_empty())
                .ok_or_else(|| TrieError::MalformedRecord {
                    record: line.to_string(),
                    separator,
                })?;
            trie.add(word, attributes.to_string());
        }
        Ok(trie)
    }
}

impl<P: MergePolicy<()>> Trie<(), P> {
    /// Bulk-insert a lexicographically sorted sequence of bare terms.
    pub fn add_terms<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_words(terms.into_iter().map(|term| (term, ())));
    }
}

impl<V, P: MergePolicy<V>> Trie<V, P> {
    /// Create an empty trie with an explicit attribute-merge policy.
    pub fn with_policy(policy: P) -> Self {
        Trie {
            root: Node::new(),
            num_words: 0,
            policy,
        }
    }

    /// Insert a single word with its attribute payload.
    ///
    /// Returns `true` if the word is new, `false` if it was already
    /// stored (in which case the payloads were merged via the policy and
    /// the word count is unchanged). The empty string is not storable and
    /// is ignored.
    pub fn add(&mut self, word: &str, attributes: V) -> bool {
        if word.is_empty() {
            return false;
        }
        let added = Self::insert_at(&mut self.root, word, attributes, &self.policy);
        self.num_words += added;
        added == 1
    }

    /// Bulk-insert a lexicographically sorted sequence of
    /// `(word, attributes)` entries.
    ///
    /// Asymptotically preferable to repeated [`Trie::add`] for large
    /// sorted inputs: batches are delimited with one-item lookahead and
    /// the common prefix of a whole batch is read off its first and last
    /// entries, so sibling sets are never rescanned.
    ///
    /// # Precondition
    ///
    /// Entries MUST be in ascending lexicographic order by word. This is
    /// not validated in release builds (a `debug_assert!` checks
    /// consecutive entries in debug builds); unsorted input yields a
    /// structurally incorrect trie, never a panic. Input is deliberately
    /// never sorted internally; that would mask caller bugs and change
    /// the streaming cost model.
    pub fn add_words<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        let mut entries = entries
            .into_iter()
            .map(|(word, attributes)| (word.into(), attributes))
            .peekable();
        let mut num_words = self.num_words;
        Self::insert_sorted(&mut self.root, 0, &mut entries, &self.policy, &mut num_words);
        self.num_words = num_words;
    }

    /// Remove a word, restructuring the trie so no non-word node is left
    /// with fewer than two children.
    ///
    /// Returns `true` if the word was present. Other words sharing a
    /// prefix with the removed one are unaffected.
    pub fn remove(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let removed = Self::remove_at(&mut self.root, word);
        if removed {
            self.num_words -= 1;
        }
        removed
    }

    /// Single-word insertion below `node`: descend along matching edges,
    /// splitting at the divergence point when needed.
    fn insert_at(node: &mut Node<V>, suffix: &str, attributes: V, policy: &P) -> usize {
        debug_assert!(!suffix.is_empty());

        match node.matching_edge(suffix) {
            // No edge shares a prefix with the suffix: brand-new sibling
            // keyed by the whole remaining suffix.
            None => {
                let mut leaf = Node::new();
                let added = leaf.add_attributes(attributes, policy);
                node.insert_edge(suffix.into(), leaf);
                added
            }
            Some((index, shared)) => {
                let label_len = node.edge(index).label.len();

                if shared == label_len {
                    if shared == suffix.len() {
                        // Suffix equals the edge label: merge in place.
                        node.child_mut(index).add_attributes(attributes, policy)
                    } else {
                        // Edge label is a prefix of the suffix: descend.
                        Self::insert_at(
                            node.child_mut(index),
                            &suffix[shared..],
                            attributes,
                            policy,
                        )
                    }
                } else {
                    // True divergence inside the edge label: split.
                    node.split_edge(index, shared);
                    if shared == suffix.len() {
                        // The new word ends exactly at the split point.
                        node.child_mut(index).add_attributes(attributes, policy)
                    } else {
                        let mut leaf = Node::new();
                        let added = leaf.add_attributes(attributes, policy);
                        node.child_mut(index)
                            .insert_edge(suffix[shared..].into(), leaf);
                        added
                    }
                }
            }
        }
    }

    /// Sorted bulk insertion below `node`, where every remaining entry is
    /// known to carry the node's full path as its first `offset` bytes.
    fn insert_sorted<I>(
        node: &mut Node<V>,
        offset: usize,
        entries: &mut Peekable<I>,
        policy: &P,
        num_words: &mut usize,
    ) where
        I: Iterator<Item = (String, V)>,
    {
        #[cfg(debug_assertions)]
        let mut prev: Option<String> = None;

        while let Some((word, attributes)) = entries.next() {
            #[cfg(debug_assertions)]
            if let Some(prev) = prev.replace(word.clone()) {
                debug_assert!(
                    prev <= word,
                    "add_words requires lexicographically sorted input"
                );
            }

            // Out-of-order input can leave `offset` past the end of a
            // word or inside a multi-byte character. Fall back to a plain
            // insertion so the violated precondition degrades to a wrong
            // structure, never a panic.
            let Some(suffix) = word.get(offset..) else {
                if !word.is_empty() {
                    *num_words += Self::insert_at(node, &word, attributes, policy);
                }
                continue;
            };

            if suffix.is_empty() {
                if offset == 0 {
                    // Empty words are not storable.
                    continue;
                }
                // The word ends exactly at this node.
                *num_words += node.add_attributes(attributes, policy);
                continue;
            }

            // Pull the maximal run of upcoming entries that continue with
            // the same character at this offset; sorted input makes the
            // run contiguous.
            let lead = suffix.chars().next().expect("suffix is non-empty");
            let mut batch = vec![(word, attributes)];
            loop {
                let continues = match entries.peek() {
                    Some((next, _)) => {
                        next.len() > offset
                            && next.is_char_boundary(offset)
                            && next[offset..].starts_with(lead)
                    }
                    None => false,
                };
                if !continues {
                    break;
                }
                batch.push(entries.next().expect("peeked entry"));
                debug_assert!(
                    batch[batch.len() - 2].0 <= batch[batch.len() - 1].0,
                    "add_words requires lexicographically sorted input"
                );
            }
            #[cfg(debug_assertions)]
            {
                // Order is checked against the last entry of the batch,
                // so inversions across batch boundaries are caught too.
                prev = Some(batch[batch.len() - 1].0.clone());
            }

            if batch.len() == 1 {
                let (word, attributes) = batch.pop().expect("single entry");
                *num_words += Self::insert_at(node, &word[offset..], attributes, policy);
                continue;
            }

            // The batch is sorted, so the common prefix of its first and
            // last entries is the common prefix of the whole batch.
            let shared = common_prefix_len(
                &batch[0].0[offset..],
                &batch[batch.len() - 1].0[offset..],
            );
            debug_assert!(shared > 0, "batch entries share their lead character");
            let label: Box<str> = batch[0].0[offset..offset + shared].into();
            let label_len = label.len();

            let target = match node.matching_edge(&label) {
                None => Some(node.insert_edge(label, Node::new())),
                Some((index, matched))
                    if matched == label_len && node.edge(index).label.len() == label_len =>
                {
                    Some(index)
                }
                Some(_) => None,
            };

            match target {
                Some(index) => {
                    let mut sub = batch.into_iter().peekable();
                    Self::insert_sorted(
                        node.child_mut(index),
                        offset + shared,
                        &mut sub,
                        policy,
                        num_words,
                    );
                }
                None => {
                    // An edge left over from earlier incremental adds
                    // overlaps the batch prefix; insert entry by entry.
                    for (word, attributes) in batch {
                        *num_words += Self::insert_at(node, &word[offset..], attributes, policy);
                    }
                }
            }
        }
    }

    /// Recursive deletion: clear the attribute at the word node, then
    /// restructure on the unwind so no single-child non-word node
    /// survives the mutation.
    fn remove_at(node: &mut Node<V>, suffix: &str) -> bool {
        let Some((index, shared)) = node.matching_edge(suffix) else {
            return false;
        };
        if shared < node.edge(index).label.len() {
            // The word would end inside the edge label; it is not stored.
            return false;
        }

        let removed = if shared == suffix.len() {
            node.child_mut(index).delete_attributes()
        } else {
            Self::remove_at(node.child_mut(index), &suffix[shared..])
        };

        if removed {
            node.restructure_child(index);
        }
        removed
    }
}

impl<V, P> Trie<V, P> {
    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.num_words
    }

    /// `true` iff no words are stored.
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Number of stored words (alias of [`Trie::len`]).
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// The root node. Never a word itself; exposed for structural
    /// inspection via [`Node::edges`].
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        let (path, matched) = self.descend(word);
        matched == word.len() && path.last().expect("path includes root").0.is_word()
    }

    /// Exact lookup, returning the stored attributes. Absence is a normal
    /// result, not an error.
    pub fn get(&self, word: &str) -> Option<&V> {
        let (path, matched) = self.descend(word);
        if matched == word.len() {
            path.last().expect("path includes root").0.attributes()
        } else {
            None
        }
    }

    /// Lazily enumerate every stored word. Fresh traversal per call;
    /// breadth-first, siblings in lexicographic order.
    pub fn words(&self) -> Words<'_, V> {
        Words::new(self.root.items(String::new(), false))
    }

    /// Lazily enumerate every stored `(word, attributes)` pair.
    pub fn iter(&self) -> Items<'_, V> {
        self.root.items(String::new(), false)
    }

    /// Enumerate every stored word that extends `prefix`.
    ///
    /// The empty prefix yields every stored word. The prefix does not
    /// need to end on an edge-label boundary.
    pub fn starts_with(&self, prefix: &str) -> StartsWith<'_, V> {
        let (path, matched) = self.descend(prefix);
        let (last, _) = *path.last().expect("path includes root");

        let mut subtrees = VecDeque::new();
        if matched == prefix.len() {
            // The descent landed exactly on a node: its whole subtree
            // (the node's own word included) extends the prefix.
            subtrees.push_back(last.items(prefix.to_string(), true));
        } else {
            // Partial miss: any child edge extending the unmatched
            // fragment contributes its subtree.
            let rest = &prefix[matched..];
            for (label, child) in last.edges() {
                if label.starts_with(rest) {
                    let mut full = String::with_capacity(matched + label.len());
                    full.push_str(&prefix[..matched]);
                    full.push_str(label);
                    subtrees.push_back(child.items(full, true));
                }
            }
        }
        StartsWith::new(subtrees)
    }

    /// Every stored word that is a prefix of `text`, in root-to-leaf
    /// order, the inverse of [`Trie::starts_with`].
    ///
    /// ```rust
    /// use fuzzytrie::Trie;
    ///
    /// let trie = Trie::from_terms(["a", "ab", "abc", "b"]);
    /// let found: Vec<String> = trie
    ///     .prefixes_of("abcd")
    ///     .into_iter()
    ///     .map(|(word, _)| word)
    ///     .collect();
    /// assert_eq!(found, ["a", "ab", "abc"]);
    /// ```
    pub fn prefixes_of(&self, text: &str) -> Vec<(String, &V)> {
        let (path, _) = self.descend(text);
        path.into_iter()
            .filter_map(|(node, depth)| {
                node.attributes()
                    .map(|attributes| (text[..depth].to_string(), attributes))
            })
            .collect()
    }

    /// Shared descent primitive: walk from the root toward `word`,
    /// following an edge only when its label fully matches the next
    /// fragment of the remaining suffix.
    ///
    /// Returns the visited path as `(node, bytes matched so far)` pairs,
    /// root first, plus the total number of bytes matched. An exact hit
    /// matched the entire word; anything less is a closest-prefix miss.
    pub(crate) fn descend<'a>(&'a self, word: &str) -> (Vec<(&'a Node<V>, usize)>, usize) {
        let mut path = vec![(&self.root, 0usize)];
        let mut node = &self.root;
        let mut matched = 0;

        while matched < word.len() {
            let rest = &word[matched..];
            match node.matching_edge(rest) {
                Some((index, shared)) if shared == node.edge(index).label.len() => {
                    matched += shared;
                    node = node.child(index);
                    path.push((node, matched));
                }
                _ => break,
            }
        }
        (path, matched)
    }
}

impl<V, P: MergePolicy<V> + Default> Default for Trie<V, P> {
    fn default() -> Self {
        Trie::with_policy(P::default())
    }
}

impl<V: PartialEq, P> PartialEq for Trie<V, P> {
    /// Structural equality of the stored tree; the merge policy does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.num_words == other.num_words && self.root == other.root
    }
}

impl<'a, V, P> IntoIterator for &'a Trie<V, P> {
    type Item = (String, &'a V);
    type IntoIter = Items<'a, V>;

    fn into_iter(self) -> Items<'a, V> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_contains() {
        let mut trie = Trie::new();
        assert!(trie.add("apple", ()));
        assert!(trie.contains("apple"));
        assert!(!trie.contains("app"));
        assert!(!trie.contains("apples"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_signaled() {
        let mut trie = Trie::new();
        assert!(trie.add("apple", ()));
        assert!(!trie.add("apple", ()));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_empty_word_is_a_noop() {
        let mut trie = Trie::new();
        assert!(!trie.add("", ()));
        assert!(trie.is_empty());
        assert!(!trie.contains(""));
        assert!(!trie.remove(""));
    }

    #[test]
    fn test_words_breadth_first_lexicographic() {
        let trie = Trie::from_terms(["bee", "ant", "be", "a"]);
        let words: Vec<String> = trie.words().collect();
        // Shorter (shallower) words first, siblings lexicographic.
        assert_eq!(words, ["a", "be", "ant", "bee"]);
    }

    #[test]
    fn test_descend_partial_miss() {
        let trie = Trie::from_terms(["apple"]);
        let (path, matched) = trie.descend("applesauce");
        assert_eq!(matched, 5);
        assert_eq!(path.len(), 2);
        assert!(path[1].0.is_word());
    }

    #[test]
    fn test_get_returns_attributes() {
        let mut trie = Trie::with_values();
        trie.add("cat", 7u32);
        assert_eq!(trie.get("cat"), Some(&7));
        assert_eq!(trie.get("ca"), None);
        assert_eq!(trie.get("cats"), None);
    }

    #[test]
    fn test_from_tagged_rejects_malformed() {
        let err = Trie::from_tagged(["cat\tnoun", "nosep"], '\t').unwrap_err();
        assert_eq!(
            err,
            TrieError::MalformedRecord {
                record: "nosep".to_string(),
                separator: '\t',
            }
        );

        let err = Trie::from_tagged(["\tmissing-word"], '\t').unwrap_err();
        assert!(matches!(err, TrieError::MalformedRecord { .. }));
    }

    #[test]
    fn test_into_iterator() {
        let mut trie = Trie::with_values();
        trie.add("a", 1u32);
        trie.add("b", 2u32);
        let collected: Vec<(String, &u32)> = (&trie).into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
