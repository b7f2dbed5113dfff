//! Maze generation over arbitrary graphs of cells.
//!
//! A maze is a spanning tree of the graph of cells: every cell is reachable from every other one
//! by exactly one path. Topology comes in as a [`graph::Graph`], for example from
//! [`grid::make_grid`], and [`algorithms::generate`] turns it into the maze.
//!
//! ```
//! use wmaze::{algorithms, dims::Dims3D, graph::Graph as _, grid};
//!
//! let grid = grid::make_grid(Dims3D(3, 3, 1));
//! let maze = algorithms::generate(&grid).unwrap();
//!
//! assert_eq!(maze.node_count(), 9);
//! assert_eq!(maze.edge_count(), 8);
//! ```

pub mod algorithms;
pub mod dims;
pub mod graph;
pub mod grid;
pub mod progress;
pub mod registry;
