use hashbrown::{HashMap, HashSet};
use rand::seq::SliceRandom as _;

use super::{Graph, Node, NodeList};
use crate::algorithms::Random;

/// Graph stored as a map from node to its adjacency list.
///
/// Nodes are also kept in a list, so picking a random node is O(1) and the iteration order only
/// depends on what was done with the graph, which keeps seeded generation reproducible.
/// Works for any topology, it's not the most compact option for dense regular grids, though.
#[derive(Debug, Clone)]
pub struct MapGraph<N: Node> {
    nodes: HashMap<N, Entry<N>>,
    order: Vec<N>,
}

#[derive(Debug, Clone)]
struct Entry<N: Node> {
    /// Position of the node in `order`.
    slot: usize,
    neighbors: NodeList<N>,
}

impl<N: Node> MapGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Lists every edge exactly once.
    pub fn edges(&self) -> Vec<(N, N)> {
        let mut done = HashSet::with_capacity(self.nodes.len());
        let mut edges = Vec::new();

        for &node in &self.order {
            for &neighbor in &self.nodes[&node].neighbors {
                if !done.contains(&neighbor) {
                    edges.push((node, neighbor));
                }
            }
            done.insert(node);
        }

        edges
    }

    fn entry(&mut self, node: N) -> &mut NodeList<N> {
        let order = &mut self.order;
        let entry = self.nodes.entry(node).or_insert_with(|| {
            order.push(node);
            Entry {
                slot: order.len() - 1,
                neighbors: NodeList::new(),
            }
        });
        &mut entry.neighbors
    }
}

impl<N: Node> Default for MapGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> PartialEq for MapGraph<N> {
    /// Two graphs are equal when they have the same nodes and edges, order of the nodes and of
    /// the adjacency lists doesn't matter.
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.nodes.iter().all(|(&node, entry)| {
                other.neighbors(node).is_some_and(|others| {
                    others.len() == entry.neighbors.len()
                        && entry.neighbors.iter().all(|n| others.contains(n))
                })
            })
    }
}

impl<N: Node> Eq for MapGraph<N> {}

impl<N: Node> Graph<N> for MapGraph<N> {
    fn has(&self, node: N) -> bool {
        self.nodes.contains_key(&node)
    }

    fn add(&mut self, nodes: &[N]) {
        for &node in nodes {
            self.entry(node);
        }
    }

    fn remove(&mut self, nodes: &[N]) {
        for &node in nodes {
            let Some(Entry { slot, neighbors }) = self.nodes.remove(&node) else {
                continue;
            };

            self.order.swap_remove(slot);
            if let Some(&moved) = self.order.get(slot) {
                if let Some(entry) = self.nodes.get_mut(&moved) {
                    entry.slot = slot;
                }
            }

            // drop the back references, so no neighbor keeps a dangling edge
            for neighbor in &neighbors {
                if let Some(entry) = self.nodes.get_mut(neighbor) {
                    entry.neighbors.remove(node);
                }
            }
        }
    }

    fn neighbors(&self, node: N) -> Option<&[N]> {
        self.nodes.get(&node).map(|entry| entry.neighbors.as_slice())
    }

    fn has_edge(&self, a: N, b: N) -> bool {
        self.nodes
            .get(&a)
            .is_some_and(|entry| entry.neighbors.has(b))
    }

    fn add_edge(&mut self, a: N, b: N) {
        if a == b {
            return;
        }

        self.entry(a).append_unique(b);
        self.entry(b).append_unique(a);
    }

    fn remove_edge(&mut self, a: N, b: N) {
        if let Some(entry) = self.nodes.get_mut(&a) {
            entry.neighbors.remove(b);
        }

        if let Some(entry) = self.nodes.get_mut(&b) {
            entry.neighbors.remove(a);
        }
    }

    fn random_node(&self, rng: &mut Random) -> Option<N> {
        self.order.choose(rng).copied()
    }

    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.order.iter().copied())
    }
}
