pub mod depth_first_search;
pub mod types;
pub mod wilson;

use std::{fmt, sync::Arc};

use hashbrown::HashSet;
use rand::{thread_rng, Rng as _, SeedableRng as _};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use thiserror::Error;

use crate::{
    graph::{Graph, MapGraph, Node},
    progress::ProgressHandle,
    registry::Registry,
};
pub use depth_first_search::DepthFirstSearch;
pub use types::*;
pub use wilson::Wilson;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Registry of the maze generators.
pub type GeneratorRegistry<N> = Registry<Arc<dyn MazeGenerator<N>>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("graph is not connected, only {reached} of {total} cells are reachable")]
    Disconnected { reached: usize, total: usize },
    #[error("random walk got stuck in a cell without neighbors")]
    DeadEnd,
    #[error("generation was stopped")]
    Stopped,
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
}

/// Algorithm turning a graph of cells into a maze, a spanning tree of that graph.
///
/// The source graph is only read, the maze is always a new graph with the same nodes. Every edge
/// of the maze is an edge of the source graph.
pub trait MazeGenerator<N: Node>: fmt::Debug + Send + Sync {
    fn generate(
        &self,
        graph: &dyn Graph<N>,
        rng: &mut Random,
        progress: ProgressHandle,
        params: &Params,
    ) -> Result<MapGraph<N>, GeneratorError>;
}

/// Registry with all the built-in generators, [`Wilson`] being the default one.
pub fn default_registry<N: Node>() -> GeneratorRegistry<N> {
    let wilson: Arc<dyn MazeGenerator<N>> = Arc::new(Wilson);

    let mut registry = Registry::with_default(wilson.clone());
    registry.register("wilson".to_string(), wilson);
    registry.register("depth_first_search".to_string(), Arc::new(DepthFirstSearch));
    registry
}

/// Generates a uniformly random maze from the graph with [`Wilson`]'s algorithm and a random
/// seed.
pub fn generate<N: Node>(graph: &dyn Graph<N>) -> Result<MapGraph<N>, GeneratorError> {
    Generator::new(Arc::new(Wilson), Params::default()).generate(graph, ProgressHandle::new())
}

/// Configured generator, ready to be run on any number of graphs.
#[derive(Debug, Clone)]
pub struct Generator<N: Node> {
    generator: Arc<dyn MazeGenerator<N>>,
    params: Params,
    seed: Option<u64>,
}

impl<N: Node> Generator<N> {
    pub fn new(generator: Arc<dyn MazeGenerator<N>>, params: Params) -> Self {
        Self {
            generator,
            params,
            seed: None,
        }
    }

    /// Looks up the algorithm by its name, or takes the default one, if there's no algorithm.
    pub fn from_registry(
        registry: &GeneratorRegistry<N>,
        algorithm: Option<&Algorithm>,
    ) -> Result<Self, GeneratorError> {
        let (generator, params) = match algorithm {
            Some((name, params)) => (
                registry
                    .get(name.as_str())
                    .ok_or_else(|| GeneratorError::UnknownGenerator(name.clone()))?,
                params.clone(),
            ),
            None => (
                registry
                    .get_default()
                    .ok_or_else(|| GeneratorError::UnknownGenerator("default".to_string()))?,
                Params::default(),
            ),
        };

        Ok(Self::new(generator.clone(), params))
    }

    /// Fixes the seed, `None` means a new random seed on every run.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn generate(
        &self,
        graph: &dyn Graph<N>,
        progress: ProgressHandle,
    ) -> Result<MapGraph<N>, GeneratorError> {
        let mut rng = self.rng();
        self.generator.generate(graph, &mut rng, progress, &self.params)
    }

    /// Generates `count` independent mazes from the same graph in parallel.
    ///
    /// Each maze gets its own rng, jumped off the seeded one, so the result is still
    /// deterministic for a fixed seed.
    pub fn generate_many(
        &self,
        graph: &dyn Graph<N>,
        count: usize,
        progress: ProgressHandle,
    ) -> Result<Vec<MapGraph<N>>, GeneratorError> {
        let mut rng = self.rng();
        let children = progress.start_batch(count);

        let mazes = split_rng(&mut rng, count)
            .into_par_iter()
            .zip(children)
            .map(|(mut rng, child)| {
                self.generator.generate(graph, &mut rng, child, &self.params)
            })
            .collect::<Result<Vec<_>, _>>();
        progress.end_batch();

        let mazes = mazes?;
        progress.lock().finish();
        Ok(mazes)
    }

    fn rng(&self) -> Random {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        log::debug!("Using seed {} for {:?}", seed, self.generator);
        Random::seed_from_u64(seed)
    }
}

/// Counts the nodes reachable from `start`, including itself.
pub fn reachable_count<N: Node>(graph: &dyn Graph<N>, start: N) -> usize {
    if !graph.has(start) {
        return 0;
    }

    let mut visited = HashSet::with_capacity(graph.node_count());
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(node) = stack.pop() {
        for &neighbor in graph.neighbors(node).unwrap_or_default() {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited.len()
}

/// Fails with [`GeneratorError::Disconnected`] unless every node can reach every other one.
/// Empty graph is considered connected.
pub fn ensure_connected<N: Node>(graph: &dyn Graph<N>) -> Result<(), GeneratorError> {
    let total = graph.node_count();
    let Some(start) = graph.nodes().next() else {
        return Ok(());
    };

    let reached = reachable_count(graph, start);
    if reached != total {
        return Err(GeneratorError::Disconnected { reached, total });
    }

    Ok(())
}

pub fn is_connected<N: Node>(graph: &dyn Graph<N>) -> bool {
    ensure_connected(graph).is_ok()
}

fn split_rng(rng: &mut Random, count: usize) -> Vec<Random> {
    (0..count)
        .map(|_| {
            rng.long_jump();
            rng.clone()
        })
        .collect()
}
