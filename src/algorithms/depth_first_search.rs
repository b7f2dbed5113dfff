use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{GeneratorError, MazeGenerator, Params, Random};
use crate::{
    graph::{Graph, MapGraph, Node},
    progress::ProgressHandle,
};

/// Randomized depth-first search, also known as recursive backtracker.
///
/// Fast and simple, but the mazes have long corridors with few branches, it's not uniform.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl<N: Node> MazeGenerator<N> for DepthFirstSearch {
    fn generate(
        &self,
        graph: &dyn Graph<N>,
        rng: &mut Random,
        progress: ProgressHandle,
        _params: &Params,
    ) -> Result<MapGraph<N>, GeneratorError> {
        let total = graph.node_count();
        let mut maze = MapGraph::with_capacity(total);

        let Some(start) = graph.random_node(rng) else {
            progress.lock().finish();
            return Ok(maze);
        };

        progress.lock().from = total;
        log::debug!("DFS: generating maze of {} cells from {:?}", total, start);

        maze.add(&[start]);
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            let unvisited_neighbors = graph
                .neighbors(current)
                .unwrap_or_default()
                .iter()
                .copied()
                .filter(|&n| !maze.has(n))
                .collect::<SmallVec<[_; 6]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                stack.push(current);
                maze.add_edge(current, next);
                stack.push(next);
            }

            progress.lock().done = maze.node_count();
            if progress.is_stopped() {
                return Err(GeneratorError::Stopped);
            }
        }

        if maze.node_count() < total {
            return Err(GeneratorError::Disconnected {
                reached: maze.node_count(),
                total,
            });
        }

        progress.lock().finish();
        log::debug!("DFS: done");

        Ok(maze)
    }
}
