use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    dims::Dims3D,
    graph::MapGraph,
    grid::{clamp_size, make_grid},
    progress::ProgressHandle,
};

use super::{Generator, GeneratorError, GeneratorRegistry};

/// Parameters of the generators.
/// In the future, not only String will be allowed, but also other types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map.insert(key.into(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(|s| s.parse())
    }

    pub fn parsed_or<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.parsed(key) {
            None | Some(Err(_)) => default,
            Some(Ok(v)) => v,
        }
    }

    pub fn parsed_or_warn<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.parsed(key) {
            None => default,
            Some(Ok(v)) => v,
            Some(Err(_)) => {
                log::warn!("Invalid value for parameter '{}', using default value", key);
                default
            }
        }
    }
}

/// Specific algorithm specification, name in the registry and its parameters.
pub type Algorithm = (String, Params);

/// Description of a grid maze, usually loaded from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    /// Size of the grid.
    pub size: Dims3D,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation.
    pub seed: Option<u64>,

    /// Used generator, registry default if not set.
    pub generator: Option<Algorithm>,
}

impl MazeSpec {
    pub fn validate(&self, generators: &GeneratorRegistry<usize>) -> bool {
        if !self.size.all_positive() || clamp_size(self.size) != self.size {
            return false;
        }

        if let Some((name, _)) = &self.generator {
            if !generators.is_registered(name.as_str()) {
                return false;
            }
        }

        true
    }

    /// Builds the grid and generates the maze on it.
    pub fn generate(
        &self,
        generators: &GeneratorRegistry<usize>,
        progress: ProgressHandle,
    ) -> Result<MapGraph<usize>, GeneratorError> {
        let grid = make_grid(self.size);
        Generator::from_registry(generators, self.generator.as_ref())?
            .with_seed(self.seed)
            .generate(&grid, progress)
    }
}
