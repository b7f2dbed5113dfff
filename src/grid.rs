//! Regular grid topology, the usual input of maze generators.

use crate::{
    dims::Dims3D,
    graph::{Graph, MapGraph},
};

/// Largest supported extent of the grid, in every axis.
pub const MAX_EXTENT: i32 = 1024;

/// Offsets of the orthogonal neighbors, in the order the edges are added.
const NEIGHBOR_OFFSETS: [Dims3D; 6] = [
    Dims3D(-1, 0, 0),
    Dims3D(1, 0, 0),
    Dims3D(0, -1, 0),
    Dims3D(0, 1, 0),
    Dims3D(0, 0, -1),
    Dims3D(0, 0, 1),
];

/// Clamps every extent into `1..=MAX_EXTENT`.
pub fn clamp_size(size: Dims3D) -> Dims3D {
    Dims3D(
        size.0.clamp(1, MAX_EXTENT),
        size.1.clamp(1, MAX_EXTENT),
        size.2.clamp(1, MAX_EXTENT),
    )
}

/// Builds a grid graph, where each cell is connected to its up to 6 orthogonal neighbors.
///
/// The size is clamped with [`clamp_size`] first. Nodes are linear indices of the cells, see
/// [`Dims3D::linear_index`].
pub fn make_grid(size: Dims3D) -> MapGraph<usize> {
    let size = clamp_size(size);
    let mut graph = MapGraph::with_capacity(size.product() as usize);

    for pos in Dims3D::iter_fill(Dims3D::ZERO, size) {
        let node = pos.linear_index(size);
        graph.add(&[node]);

        for offset in NEIGHBOR_OFFSETS {
            let neighbor = pos + offset;
            if neighbor.is_in_bounds(size) {
                graph.add_edge(node, neighbor.linear_index(size));
            }
        }
    }

    log::debug!(
        "Built {:?} grid, {} cells, {} edges",
        size,
        graph.node_count(),
        graph.edge_count()
    );

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_neighbors(graph: &MapGraph<usize>, node: usize) -> Vec<usize> {
        let mut neighbors = graph.neighbors(node).unwrap().to_vec();
        neighbors.sort_unstable();
        neighbors
    }

    #[test]
    fn grid_3x3x3() {
        let graph = make_grid(Dims3D(3, 3, 3));

        #[rustfmt::skip]
        let expected: [&[usize]; 27] = [
            // z = 0
            &[1, 3, 9], &[0, 2, 4, 10], &[1, 5, 11],
            &[0, 4, 6, 12], &[1, 3, 5, 7, 13], &[2, 4, 8, 14],
            &[3, 7, 15], &[4, 6, 8, 16], &[5, 7, 17],
            // z = 1
            &[0, 10, 12, 18], &[1, 9, 11, 13, 19], &[2, 10, 14, 20],
            &[3, 9, 13, 15, 21], &[4, 10, 12, 14, 16, 22], &[5, 11, 13, 17, 23],
            &[6, 12, 16, 24], &[7, 13, 15, 17, 25], &[8, 14, 16, 26],
            // z = 2
            &[9, 19, 21], &[10, 18, 20, 22], &[11, 19, 23],
            &[12, 18, 22, 24], &[13, 19, 21, 23, 25], &[14, 20, 22, 26],
            &[15, 21, 25], &[16, 22, 24, 26], &[17, 23, 25],
        ];

        assert_eq!(graph.node_count(), 27);
        for (node, neighbors) in expected.iter().enumerate() {
            assert_eq!(sorted_neighbors(&graph, node), *neighbors, "cell {node}");
        }
    }

    #[test]
    fn grid_3x3x1() {
        let graph = make_grid(Dims3D(3, 3, 1));

        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 12);

        let degrees: Vec<_> = (0..9).map(|n| graph.neighbors(n).unwrap().len()).collect();
        assert_eq!(degrees, [2, 3, 2, 3, 4, 3, 2, 3, 2]);
    }

    #[test]
    fn grid_line() {
        let graph = make_grid(Dims3D(1, 1, 4));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(sorted_neighbors(&graph, 0), [1]);
        assert_eq!(sorted_neighbors(&graph, 1), [0, 2]);
        assert_eq!(sorted_neighbors(&graph, 3), [2]);
    }

    #[test]
    fn single_cell() {
        let graph = make_grid(Dims3D(1, 1, 1));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbors(0), Some(&[][..]));
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_size(Dims3D(0, -5, 3)), Dims3D(1, 1, 3));
        assert_eq!(clamp_size(Dims3D(2000, 1024, 1)), Dims3D(1024, 1024, 1));

        let graph = make_grid(Dims3D(0, 2, -1));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.has_edge(0, 1));
    }
}
