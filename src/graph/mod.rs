pub mod map_graph;
pub mod node_list;

use std::{fmt, hash::Hash};

use crate::algorithms::Random;

pub use map_graph::MapGraph;
pub use node_list::NodeList;

/// Identity of a single cell of the maze.
///
/// Anything small, comparable and hashable can be a node, cells of the grid are their linear
/// indices.
pub trait Node: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> Node for T where T: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Undirected, unweighted graph of cells, the only thing maze generators need to know about the
/// topology.
///
/// Implementations must keep edges symmetric: `b` is a neighbor of `a` if and only if `a` is a
/// neighbor of `b`. Self loops are never stored. All the mutations are idempotent, adding
/// something that's there or removing something that isn't does nothing.
pub trait Graph<N: Node>: fmt::Debug + Send + Sync {
    /// Returns true if the graph contains the node.
    fn has(&self, node: N) -> bool;

    /// Adds the nodes without any edges, nodes already in the graph are skipped.
    fn add(&mut self, nodes: &[N]);

    /// Removes the nodes together with every edge touching them.
    fn remove(&mut self, nodes: &[N]);

    /// Returns the neighbors of the node.
    ///
    /// Returns `Some(&[])` for an isolated node and `None` if the node isn't in the graph.
    fn neighbors(&self, node: N) -> Option<&[N]>;

    /// Returns true if `a` and `b` are connected. False if either of them is missing.
    fn has_edge(&self, a: N, b: N) -> bool;

    /// Connects `a` and `b`, adding them to the graph if needed. `a == b` does nothing.
    fn add_edge(&mut self, a: N, b: N);

    /// Disconnects `a` and `b`, if they are connected.
    fn remove_edge(&mut self, a: N, b: N);

    /// Returns a roughly uniformly chosen node, `None` if the graph is empty.
    fn random_node(&self, rng: &mut Random) -> Option<N>;

    fn node_count(&self) -> usize;

    /// Iterates over all the nodes, order is up to the implementation.
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    fn edge_count(&self) -> usize {
        self.nodes()
            .filter_map(|n| self.neighbors(n))
            .map(|neighbors| neighbors.len())
            .sum::<usize>()
            / 2
    }

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
