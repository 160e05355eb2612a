//! Radix trie nodes.
//!
//! A node owns an optional attribute payload (present exactly when the
//! root-to-node path spells a stored word) and a sorted list of labeled
//! edges to child nodes. Sibling labels never share a non-empty prefix:
//! at most one edge can continue any given suffix, which is what keeps
//! every traversal a single downward walk.

use crate::trie::iter::{Items, NodeIter};
use crate::trie::policy::MergePolicy;
use crate::trie::prefix::common_prefix_len;

/// A labeled edge to a child node.
///
/// Labels are non-empty and, among siblings, prefix-disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<V> {
    pub(crate) label: Box<str>,
    pub(crate) node: Node<V>,
}

/// A single node of the compressed trie.
///
/// Nodes are handed out by reference from [`Trie`](crate::trie::Trie)
/// queries; all structural mutation goes through the trie so the word
/// counter stays consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    pub(crate) attributes: Option<V>,
    pub(crate) children: Vec<Edge<V>>,
}

impl<V> Node<V> {
    pub(crate) fn new() -> Self {
        Node {
            attributes: None,
            children: Vec::new(),
        }
    }

    /// `true` iff the path from the root to this node is a stored word.
    pub fn is_word(&self) -> bool {
        self.attributes.is_some()
    }

    /// The attribute payload, if this node marks a stored word.
    pub fn attributes(&self) -> Option<&V> {
        self.attributes.as_ref()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// `true` iff this node has no outgoing edges. O(1).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over outgoing edges as `(label, child)` pairs, in
    /// lexicographic label order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &Node<V>)> {
        self.children.iter().map(|e| (e.label.as_ref(), &e.node))
    }

    /// Merge `attributes` into this node via `policy`.
    ///
    /// Returns `1` if the call transitioned the node from non-word to
    /// word (so the caller can maintain the trie's word count), else `0`.
    pub fn add_attributes<P>(&mut self, attributes: V, policy: &P) -> usize
    where
        P: MergePolicy<V>,
    {
        match self.attributes.as_mut() {
            Some(existing) => {
                policy.merge(existing, attributes);
                0
            }
            None => {
                self.attributes = Some(attributes);
                1
            }
        }
    }

    /// Clear the attribute payload.
    ///
    /// Returns `true` if the node transitioned from word to non-word.
    pub fn delete_attributes(&mut self) -> bool {
        self.attributes.take().is_some()
    }

    /// Lazily produce every word in the subtree rooted here as
    /// `(word, attributes)` pairs, breadth-first with siblings in
    /// lexicographic order. Each call starts a fresh traversal.
    ///
    /// `prefix` is prepended to every reconstructed word; when
    /// `include_root` is `false` the subtree root's own word (if any) is
    /// skipped.
    pub fn items(&self, prefix: impl Into<String>, include_root: bool) -> Items<'_, V> {
        Items::new(self, prefix.into(), include_root)
    }

    /// Breadth-first traversal of the whole subtree as
    /// `(path, node)` pairs, the subtree root first with an empty path.
    /// Sibling order is always lexicographic because edges are stored
    /// sorted.
    pub fn nodes(&self) -> NodeIter<'_, V> {
        NodeIter::new(self, String::new())
    }

    // ------------------------------------------------------------------
    // Structural operations (trie-internal)
    // ------------------------------------------------------------------

    pub(crate) fn edge(&self, index: usize) -> &Edge<V> {
        &self.children[index]
    }

    pub(crate) fn child(&self, index: usize) -> &Node<V> {
        &self.children[index].node
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> &mut Node<V> {
        &mut self.children[index].node
    }

    /// Locate the unique child whose label shares a non-empty prefix with
    /// `fragment`, returning its index and the shared byte length.
    ///
    /// Sibling labels are prefix-disjoint, so scanning all children and
    /// taking the first hit is unambiguous.
    pub(crate) fn matching_edge(&self, fragment: &str) -> Option<(usize, usize)> {
        for (index, edge) in self.children.iter().enumerate() {
            let shared = common_prefix_len(&edge.label, fragment);
            if shared > 0 {
                return Some((index, shared));
            }
        }
        None
    }

    /// Exact-label edge lookup via binary search.
    pub(crate) fn edge_index(&self, label: &str) -> Option<usize> {
        self.children
            .binary_search_by(|e| e.label.as_ref().cmp(label))
            .ok()
    }

    /// Insert a new edge, keeping siblings sorted by label. Returns the
    /// insertion index.
    pub(crate) fn insert_edge(&mut self, label: Box<str>, node: Node<V>) -> usize {
        debug_assert!(!label.is_empty(), "edge labels must be non-empty");
        debug_assert!(self.edge_index(&label).is_none(), "duplicate edge label");

        let index = self
            .children
            .partition_point(|e| e.label.as_ref() < label.as_ref());
        self.children.insert(index, Edge { label, node });
        index
    }

    /// Split the edge at `index` after `at` bytes, introducing an
    /// intermediate non-word node keyed by the shared prefix and
    /// re-parenting the old child under its remaining suffix.
    pub(crate) fn split_edge(&mut self, index: usize, at: usize) {
        let edge = &mut self.children[index];
        debug_assert!(at > 0 && at < edge.label.len(), "split must be strictly inside the label");

        let head: Box<str> = edge.label[..at].into();
        let tail: Box<str> = edge.label[at..].into();

        let old_child = std::mem::replace(&mut edge.node, Node::new());
        edge.label = head;
        edge.node.children.push(Edge {
            label: tail,
            node: old_child,
        });
    }

    /// Re-establish compactness at the child behind edge `index` after a
    /// deletion below it: detach an empty non-word leaf, or splice a
    /// single-child non-word node into a combined edge.
    pub(crate) fn restructure_child(&mut self, index: usize) {
        let (is_word, child_count) = {
            let child = &self.children[index].node;
            (child.is_word(), child.children.len())
        };

        if is_word || child_count >= 2 {
            return;
        }

        if child_count == 0 {
            self.children.remove(index);
            return;
        }

        // Exactly one grandchild: merge the two edge labels.
        let Edge {
            label: tail,
            node: grandchild,
        } = self.children[index]
            .node
            .children
            .pop()
            .expect("single child checked above");

        let edge = &mut self.children[index];
        let mut combined = String::with_capacity(edge.label.len() + tail.len());
        combined.push_str(&edge.label);
        combined.push_str(&tail);
        edge.label = combined.into_boxed_str();
        edge.node = grandchild;
    }
}
