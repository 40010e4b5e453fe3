//! Connected components of undirected graphs and strongly connected
//! components of directed graphs.
//!
//! Both label every vertex with a dense component id, handed out in the
//! order components are discovered. Queries go through the
//! [`Components`] trait.
//!
//! Strongly connected components use Kosaraju's two-pass algorithm: the
//! reverse postorder of the reversed graph tells the second pass where to
//! start each depth-first walk so that it never leaks into another
//! component.

use arbor_common::utils::error::Result;
use arbor_core::graph::{DiGraph, Graph, UndirectedGraph};
use tracing::debug;

use crate::topological::TopologicalSort;
use crate::traits::Components;
use crate::traversal::depth_first;

/// Labels `graph`'s vertices by walking depth-first from each unmarked vertex
/// of `starts` in turn. Returns the labels and the number of walks.
fn label_components<G: Graph>(
    graph: &G,
    starts: impl IntoIterator<Item = usize>,
) -> Result<(Vec<usize>, usize)> {
    let vertex_count = graph.vertex_count();
    let mut marked = vec![false; vertex_count];
    let mut ids = vec![0; vertex_count];
    let mut count = 0;

    for start in starts {
        if marked[start] {
            continue;
        }
        ids[start] = count;
        depth_first(graph, start, &mut marked, |_, w| ids[w] = count, |_| {})?;
        count += 1;
    }

    Ok((ids, count))
}

/// Connected components of an undirected graph.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    ids: Vec<usize>,
    count: usize,
}

impl ConnectedComponents {
    /// Finds the connected components of `graph`.
    pub fn new(graph: &UndirectedGraph) -> Result<Self> {
        let (ids, count) = label_components(graph, 0..graph.vertex_count())?;
        debug!(
            vertices = graph.vertex_count(),
            components = count,
            "connected components complete"
        );
        Ok(Self { ids, count })
    }
}

impl Components for ConnectedComponents {
    fn count(&self) -> usize {
        self.count
    }

    fn ids(&self) -> &[usize] {
        &self.ids
    }
}

/// Strongly connected components of a directed graph.
///
/// Two vertices share a component exactly when each is reachable from the
/// other.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    ids: Vec<usize>,
    count: usize,
}

impl StronglyConnectedComponents {
    /// Finds the strongly connected components of `graph`.
    pub fn new(graph: &DiGraph) -> Result<Self> {
        let order = TopologicalSort::new(&graph.reverse())?;
        let (ids, count) = label_components(graph, order.order().iter().copied())?;
        debug!(
            vertices = graph.vertex_count(),
            components = count,
            "strongly connected components complete"
        );
        Ok(Self { ids, count })
    }
}

impl Components for StronglyConnectedComponents {
    fn count(&self) -> usize {
        self.count
    }

    fn ids(&self) -> &[usize] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Error;
    use arbor_core::samples;
    use proptest::prelude::*;

    #[test]
    fn test_tiny_graph_is_one_component() {
        let graph = samples::tiny_graph().unwrap();
        let cc = ConnectedComponents::new(&graph).unwrap();

        assert_eq!(cc.count(), 1);
        assert!(cc.is_connected(0, 4).unwrap());
        assert_eq!(cc.members(0), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_three_components() {
        let graph = samples::three_components().unwrap();
        let cc = ConnectedComponents::new(&graph).unwrap();

        assert_eq!(cc.count(), 3);
        assert_eq!(cc.members(0), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(cc.members(1), vec![7, 8]);
        assert_eq!(cc.members(2), vec![9, 10, 11, 12]);
        assert!(cc.members(3).is_empty());

        assert_eq!(cc.id(3).unwrap(), 0);
        assert_eq!(cc.id(8).unwrap(), 1);
        assert!(cc.is_connected(9, 12).unwrap());
        assert!(!cc.is_connected(6, 7).unwrap());
    }

    #[test]
    fn test_isolated_vertices() {
        let graph = UndirectedGraph::new(3);
        let cc = ConnectedComponents::new(&graph).unwrap();

        assert_eq!(cc.count(), 3);
        assert_eq!(cc.ids(), &[0, 1, 2]);
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let graph = samples::tiny_graph().unwrap();
        let cc = ConnectedComponents::new(&graph).unwrap();

        assert_eq!(
            cc.id(6),
            Err(Error::VertexOutOfBounds {
                vertex: 6,
                vertex_count: 6
            })
        );
        assert!(cc.is_connected(0, 6).is_err());
    }

    #[test]
    fn test_tiny_digraph_strong_components() {
        let graph = samples::tiny_digraph().unwrap();
        let scc = StronglyConnectedComponents::new(&graph).unwrap();

        assert_eq!(scc.count(), 5);

        let mut groups: Vec<Vec<usize>> = (0..scc.count()).map(|id| scc.members(id)).collect();
        groups.sort();
        assert_eq!(
            groups,
            vec![
                vec![0, 2, 3, 4, 5],
                vec![1],
                vec![6, 8],
                vec![7],
                vec![9, 10, 11, 12],
            ]
        );

        assert!(scc.is_connected(0, 4).unwrap());
        assert!(scc.is_connected(9, 12).unwrap());
        assert!(!scc.is_connected(1, 0).unwrap());
        assert!(!scc.is_connected(6, 7).unwrap());
        assert!(!scc.is_connected(8, 9).unwrap());
    }

    #[test]
    fn test_sink_component_found_first() {
        // 0 <-> 1 -> 2 <-> 3: the walk from the sink {2, 3} must not leak.
        let graph = DiGraph::from_edges(4, [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
        let scc = StronglyConnectedComponents::new(&graph).unwrap();

        assert_eq!(scc.count(), 2);
        assert_eq!(scc.members(0), vec![2, 3]);
        assert_eq!(scc.members(1), vec![0, 1]);
    }

    /// Brute-force mutual reachability via transitive closure.
    fn reachability(graph: &DiGraph) -> Vec<Vec<bool>> {
        let n = graph.vertex_count();
        let mut reach = vec![vec![false; n]; n];
        for v in 0..n {
            reach[v][v] = true;
            for w in graph.adjacent(v).unwrap() {
                reach[v][w] = true;
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if reach[i][k] && reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
        reach
    }

    fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
    }

    proptest! {
        #[test]
        fn connected_is_an_equivalence((n, edges) in edges_strategy()) {
            let graph = UndirectedGraph::from_edges(n, edges).unwrap();
            let cc = ConnectedComponents::new(&graph).unwrap();

            for u in 0..n {
                prop_assert!(cc.is_connected(u, u).unwrap());
                for v in 0..n {
                    let uv = cc.is_connected(u, v).unwrap();
                    prop_assert_eq!(uv, cc.is_connected(v, u).unwrap());
                    for w in 0..n {
                        if uv && cc.is_connected(v, w).unwrap() {
                            prop_assert!(cc.is_connected(u, w).unwrap());
                        }
                    }
                }
            }
            prop_assert!(cc.ids().iter().all(|&id| id < cc.count()));
        }

        #[test]
        fn strong_components_match_mutual_reachability((n, edges) in edges_strategy()) {
            let graph = DiGraph::from_edges(n, edges).unwrap();
            let scc = StronglyConnectedComponents::new(&graph).unwrap();
            let reach = reachability(&graph);

            for v in 0..n {
                for w in 0..n {
                    prop_assert_eq!(
                        scc.is_connected(v, w).unwrap(),
                        reach[v][w] && reach[w][v]
                    );
                }
            }
        }
    }
}
