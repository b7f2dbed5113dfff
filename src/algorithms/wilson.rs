use hashbrown::HashMap;
use rand::seq::SliceRandom as _;

use super::{ensure_connected, GeneratorError, MazeGenerator, Params, Random};
use crate::{
    graph::{Graph, MapGraph, Node},
    progress::ProgressHandle,
};

/// Wilson's algorithm, builds the maze from loop-erased random walks.
///
/// Every spanning tree of the source graph is equally likely, unlike with the depth-first search,
/// which prefers long corridors.
///
/// Parameters:
/// - `check_connectivity` (default `true`): fail fast with [`GeneratorError::Disconnected`]
///   instead of walking forever on a disconnected graph.
/// - `rejection_sampling` (default `false`): pick the next start of a walk by asking the graph for
///   random nodes until one outside of the maze comes up, instead of tracking the unvisited nodes.
///   The distribution is the same, but it gets slow once most of the nodes are in the maze.
#[derive(Debug)]
pub struct Wilson;

impl<N: Node> MazeGenerator<N> for Wilson {
    fn generate(
        &self,
        graph: &dyn Graph<N>,
        rng: &mut Random,
        progress: ProgressHandle,
        params: &Params,
    ) -> Result<MapGraph<N>, GeneratorError> {
        let total = graph.node_count();
        let mut maze = MapGraph::with_capacity(total);

        if total == 0 {
            progress.lock().finish();
            return Ok(maze);
        }

        if params.parsed_or_warn("check_connectivity", true) {
            ensure_connected(graph)?;
        }

        let mut unvisited = if params.parsed_or_warn("rejection_sampling", false) {
            Unvisited::Sampled
        } else {
            Unvisited::tracked(graph)
        };

        progress.lock().from = total;
        log::debug!("Wilson: generating maze of {} cells", total);

        if let Some(root) = unvisited.pick(graph, &maze, rng) {
            maze.add(&[root]);
            unvisited.visit(root);
        }

        let mut path = Vec::new();
        // position of each node in the path, for the loop erasure
        let mut in_path = HashMap::new();
        let mut steps = 0usize;

        while let Some(start) = unvisited.pick(graph, &maze, rng) {
            path.clear();
            in_path.clear();
            path.push(start);
            in_path.insert(start, 0);

            let mut current = start;
            while !maze.has(current) {
                if progress.is_stopped() {
                    return Err(GeneratorError::Stopped);
                }

                // walk the source graph, the maze doesn't know the topology
                let next = *graph
                    .neighbors(current)
                    .unwrap_or_default()
                    .choose(rng)
                    .ok_or(GeneratorError::DeadEnd)?;
                steps += 1;

                match in_path.get(&next) {
                    Some(&prev) => {
                        for erased in path.drain(prev + 1..) {
                            in_path.remove(&erased);
                        }
                    }
                    None => {
                        in_path.insert(next, path.len());
                        path.push(next);
                    }
                }

                current = next;
            }

            for pair in path.windows(2) {
                maze.add_edge(pair[0], pair[1]);
            }
            for &node in &path {
                unvisited.visit(node);
            }

            progress.lock().done = maze.node_count();
            log::trace!("Wilson: added path of {} cells", path.len());
        }

        progress.lock().finish();
        log::debug!("Wilson: done after {} walk steps", steps);

        Ok(maze)
    }
}

/// Nodes that are not in the maze yet.
enum Unvisited<N: Node> {
    /// Nothing is tracked, the graph is sampled until an unvisited node comes up.
    Sampled,
    /// Unvisited nodes with their positions, removal swaps in the last node.
    Tracked {
        nodes: Vec<N>,
        positions: HashMap<N, usize>,
    },
}

impl<N: Node> Unvisited<N> {
    fn tracked(graph: &dyn Graph<N>) -> Self {
        let nodes: Vec<N> = graph.nodes().collect();
        let positions = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        Self::Tracked { nodes, positions }
    }

    /// Returns uniformly chosen node outside of the maze, `None` once there are none.
    fn pick(&self, graph: &dyn Graph<N>, maze: &MapGraph<N>, rng: &mut Random) -> Option<N> {
        match self {
            Self::Sampled => {
                if maze.node_count() >= graph.node_count() {
                    return None;
                }

                loop {
                    let node = graph.random_node(rng)?;
                    if !maze.has(node) {
                        return Some(node);
                    }
                }
            }
            Self::Tracked { nodes, .. } => nodes.choose(rng).copied(),
        }
    }

    fn visit(&mut self, node: N) {
        let Self::Tracked { nodes, positions } = self else {
            return;
        };

        if let Some(i) = positions.remove(&node) {
            nodes.swap_remove(i);
            if let Some(&moved) = nodes.get(i) {
                positions.insert(moved, i);
            }
        }
    }
}
