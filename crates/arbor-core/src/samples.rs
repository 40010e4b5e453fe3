//! Small sample graphs.
//!
//! These are the fixtures used by the test suites, the benchmarks, and the
//! `arbor` command-line tool. Each one is tiny enough to check by hand.

use arbor_common::utils::error::Result;

use crate::graph::{DiGraph, EdgeWeightedDiGraph, EdgeWeightedGraph, UndirectedGraph};

/// Six vertices, one component: a cycle with chords.
///
/// ```text
/// 0-1, 0-2, 0-5, 1-2, 2-3, 2-4, 3-4, 3-5
/// ```
pub fn tiny_graph() -> Result<UndirectedGraph> {
    UndirectedGraph::from_edges(
        6,
        [
            (0, 1),
            (0, 2),
            (0, 5),
            (1, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (3, 5),
        ],
    )
}

/// Thirteen vertices in three components: `0..=6`, `7..=8`, `9..=12`.
pub fn three_components() -> Result<UndirectedGraph> {
    UndirectedGraph::from_edges(
        13,
        [
            (0, 1),
            (0, 2),
            (0, 5),
            (0, 6),
            (3, 4),
            (3, 5),
            (4, 5),
            (4, 6),
            (7, 8),
            (9, 10),
            (9, 11),
            (9, 12),
            (11, 12),
        ],
    )
}

/// Thirteen vertices in five strongly connected components:
/// `{1}`, `{7}`, `{6, 8}`, `{9, 10, 11, 12}` and `{0, 2, 3, 4, 5}`.
pub fn tiny_digraph() -> Result<DiGraph> {
    DiGraph::from_edges(
        13,
        [
            (0, 1),
            (0, 5),
            (2, 0),
            (2, 3),
            (3, 2),
            (3, 5),
            (4, 2),
            (4, 3),
            (5, 4),
            (6, 0),
            (6, 4),
            (6, 8),
            (6, 9),
            (7, 6),
            (7, 9),
            (8, 6),
            (9, 10),
            (9, 11),
            (10, 12),
            (11, 4),
            (11, 12),
            (12, 9),
        ],
    )
}

/// Thirteen-vertex acyclic digraph, suitable for topological ordering.
pub fn tiny_dag() -> Result<DiGraph> {
    DiGraph::from_edges(
        13,
        [
            (2, 3),
            (0, 6),
            (0, 1),
            (2, 0),
            (11, 12),
            (9, 12),
            (9, 10),
            (9, 11),
            (3, 5),
            (8, 7),
            (5, 4),
            (0, 5),
            (6, 4),
            (6, 9),
            (7, 6),
        ],
    )
}

/// Eight vertices, sixteen weighted edges. The minimum spanning tree weighs
/// 1.81.
pub fn tiny_ewg() -> Result<EdgeWeightedGraph> {
    EdgeWeightedGraph::from_edges(
        8,
        [
            (4, 5, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (0, 7, 0.16),
            (1, 5, 0.32),
            (0, 4, 0.38),
            (2, 3, 0.17),
            (1, 7, 0.19),
            (0, 2, 0.26),
            (1, 2, 0.36),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

/// Six vertices, eight edges with tied weights, so more than one minimum
/// spanning tree exists. Every one of them weighs 7.
pub fn tied_ewg() -> Result<EdgeWeightedGraph> {
    EdgeWeightedGraph::from_edges(
        6,
        [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 2.0),
            (3, 0, 2.0),
            (0, 2, 3.0),
            (3, 4, 1.0),
            (4, 5, 2.0),
            (2, 5, 2.0),
        ],
    )
}

/// Eight vertices, fifteen weighted directed edges, all weights positive.
///
/// Shortest distances from vertex 0: `[0.0, 1.05, 0.26, 0.99, 0.38, 0.73,
/// 1.51, 0.60]`.
pub fn tiny_ewd() -> Result<EdgeWeightedDiGraph> {
    EdgeWeightedDiGraph::from_edges(
        8,
        [
            (4, 5, 0.35),
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_sample_sizes() {
        let g = tiny_graph().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (6, 8));

        let g = three_components().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (13, 13));

        let g = tiny_digraph().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (13, 22));

        let g = tiny_dag().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (13, 15));

        let g = tiny_ewg().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (8, 16));

        let g = tied_ewg().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (6, 8));

        let g = tiny_ewd().unwrap();
        assert_eq!((g.vertex_count(), g.edge_count()), (8, 15));
    }
}
