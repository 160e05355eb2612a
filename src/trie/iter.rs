//! Lazy trie traversal iterators.
//!
//! Every iterator here walks live node references and starts a fresh
//! traversal when created; none of them store a resumable cursor inside
//! the trie. Traversal is breadth-first with siblings in lexicographic
//! label order, so output is fully deterministic.
//!
//! Words are reconstructed lazily by concatenating edge labels as the
//! queue advances; a node's full word is only materialized when its
//! queue entry is built, never re-derived per yield.

use std::collections::VecDeque;

use crate::trie::node::Node;

/// Breadth-first iterator over `(path, node)` pairs of a subtree.
///
/// The subtree root is yielded first, with the prefix it was started
/// with; each child follows with the parent's path extended by its edge
/// label.
pub struct NodeIter<'a, V> {
    pending: VecDeque<(String, &'a Node<V>)>,
}

impl<'a, V> NodeIter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, prefix: String) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back((prefix, root));
        Self { pending }
    }
}

impl<'a, V> Iterator for NodeIter<'a, V> {
    type Item = (String, &'a Node<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.pending.pop_front()?;

        for (label, child) in node.edges() {
            let mut child_path = String::with_capacity(path.len() + label.len());
            child_path.push_str(&path);
            child_path.push_str(label);
            self.pending.push_back((child_path, child));
        }

        Some((path, node))
    }
}

/// Iterator over `(word, attributes)` pairs of a subtree.
///
/// Filters the breadth-first node traversal down to word-marked nodes.
pub struct Items<'a, V> {
    inner: NodeIter<'a, V>,
    include_root: bool,
    started: bool,
}

impl<'a, V> Items<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, prefix: String, include_root: bool) -> Self {
        Self {
            inner: NodeIter::new(root, prefix),
            include_root,
            started: false,
        }
    }
}

impl<'a, V> Iterator for Items<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (path, node) = self.inner.next()?;

            let is_root = !self.started;
            self.started = true;
            if is_root && !self.include_root {
                continue;
            }

            if let Some(attributes) = node.attributes() {
                return Some((path, attributes));
            }
        }
    }
}

/// Iterator over the words of a subtree, without attributes.
pub struct Words<'a, V> {
    inner: Items<'a, V>,
}

impl<'a, V> Words<'a, V> {
    pub(crate) fn new(inner: Items<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for Words<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(word, _)| word)
    }
}

/// Iterator over every stored word extending a query prefix.
///
/// Produced by [`Trie::starts_with`](crate::trie::Trie::starts_with);
/// unions one or more subtree traversals.
pub struct StartsWith<'a, V> {
    subtrees: VecDeque<Items<'a, V>>,
}

impl<'a, V> StartsWith<'a, V> {
    pub(crate) fn new(subtrees: VecDeque<Items<'a, V>>) -> Self {
        Self { subtrees }
    }
}

impl<'a, V> Iterator for StartsWith<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let front = self.subtrees.front_mut()?;
            match front.next() {
                Some(item) => return Some(item),
                None => {
                    self.subtrees.pop_front();
                }
            }
        }
    }
}
