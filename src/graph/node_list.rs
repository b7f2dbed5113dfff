use std::fmt;

use smallvec::SmallVec;

use super::Node;

/// Ordered list of nodes, used as the adjacency list of a single cell.
///
/// Insertion order is kept until something gets removed. Removal moves the last node into the
/// freed slot, so it's `O(1)`, but the order of the remaining nodes changes. Nothing outside of
/// the graph should rely on the order.
///
/// Six nodes fit inline, which is the most a cell of a 3D grid can have.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeList<N: Node>(SmallVec<[N; 6]>);

impl<N: Node> NodeList<N> {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.0.iter()
    }

    /// Returns the position of the first occurrence of `node`.
    pub fn index(&self, node: N) -> Option<usize> {
        self.0.iter().position(|&n| n == node)
    }

    pub fn has(&self, node: N) -> bool {
        self.index(node).is_some()
    }

    /// Appends the node, even if it's already in the list.
    pub fn append(&mut self, node: N) {
        self.0.push(node);
    }

    /// Appends the node only if it's not in the list yet.
    pub fn append_unique(&mut self, node: N) {
        if !self.has(node) {
            self.append(node);
        }
    }

    /// Removes the node at `index`, filling the slot with the last node.
    ///
    /// Out of range index is ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<N> {
        (index < self.0.len()).then(|| self.0.swap_remove(index))
    }

    /// Removes the first occurrence of `node`, does nothing if it's not there.
    pub fn remove(&mut self, node: N) {
        if let Some(i) = self.index(node) {
            self.remove_at(i);
        }
    }

    pub fn pop(&mut self) -> Option<N> {
        self.0.pop()
    }
}

impl<N: Node> Default for NodeList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> fmt::Debug for NodeList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<N: Node> FromIterator<N> for NodeList<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, N: Node> IntoIterator for &'a NodeList<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
