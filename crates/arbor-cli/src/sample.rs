//! Bundled sample graphs, selectable by name on the command line.

use arbor::{DiGraph, EdgeWeightedDiGraph, EdgeWeightedGraph, Graph, UndirectedGraph, samples};
use clap::ValueEnum;
use serde::Serialize;

/// Sample graphs shipped with the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// 6 vertices, 8 edges, one component
    Tiny,
    /// 13 vertices in three connected components
    ThreeComponents,
    /// 13-vertex digraph with five strong components
    TinyDigraph,
    /// 13-vertex acyclic digraph
    TinyDag,
    /// 8 vertices, 16 weighted edges
    TinyEwg,
    /// 6 vertices, 8 weighted edges with tied weights
    TiedEwg,
    /// 8-vertex weighted digraph
    TinyEwd,
}

impl Sample {
    /// Every sample, in listing order.
    pub const ALL: [Sample; 7] = [
        Sample::Tiny,
        Sample::ThreeComponents,
        Sample::TinyDigraph,
        Sample::TinyDag,
        Sample::TinyEwg,
        Sample::TiedEwg,
        Sample::TinyEwd,
    ];

    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Sample::Tiny => "tiny",
            Sample::ThreeComponents => "three-components",
            Sample::TinyDigraph => "tiny-digraph",
            Sample::TinyDag => "tiny-dag",
            Sample::TinyEwg => "tiny-ewg",
            Sample::TiedEwg => "tied-ewg",
            Sample::TinyEwd => "tiny-ewd",
        }
    }

    /// Builds the graph.
    pub fn load(self) -> arbor::Result<SampleGraph> {
        let graph = match self {
            Sample::Tiny => SampleGraph::Undirected(samples::tiny_graph()?),
            Sample::ThreeComponents => SampleGraph::Undirected(samples::three_components()?),
            Sample::TinyDigraph => SampleGraph::Directed(samples::tiny_digraph()?),
            Sample::TinyDag => SampleGraph::Directed(samples::tiny_dag()?),
            Sample::TinyEwg => SampleGraph::Weighted(samples::tiny_ewg()?),
            Sample::TiedEwg => SampleGraph::Weighted(samples::tied_ewg()?),
            Sample::TinyEwd => SampleGraph::WeightedDirected(samples::tiny_ewd()?),
        };
        tracing::debug!(
            sample = self.name(),
            kind = graph.kind().label(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "loaded sample graph"
        );
        Ok(graph)
    }
}

/// The four graph families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    Undirected,
    Directed,
    Weighted,
    WeightedDirected,
}

impl GraphKind {
    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            GraphKind::Undirected => "undirected",
            GraphKind::Directed => "directed",
            GraphKind::Weighted => "weighted undirected",
            GraphKind::WeightedDirected => "weighted directed",
        }
    }
}

/// A loaded sample graph.
pub enum SampleGraph {
    Undirected(UndirectedGraph),
    Directed(DiGraph),
    Weighted(EdgeWeightedGraph),
    WeightedDirected(EdgeWeightedDiGraph),
}

impl SampleGraph {
    pub fn kind(&self) -> GraphKind {
        match self {
            SampleGraph::Undirected(_) => GraphKind::Undirected,
            SampleGraph::Directed(_) => GraphKind::Directed,
            SampleGraph::Weighted(_) => GraphKind::Weighted,
            SampleGraph::WeightedDirected(_) => GraphKind::WeightedDirected,
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            SampleGraph::Undirected(g) => g.vertex_count(),
            SampleGraph::Directed(g) => g.vertex_count(),
            SampleGraph::Weighted(g) => g.vertex_count(),
            SampleGraph::WeightedDirected(g) => g.vertex_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            SampleGraph::Undirected(g) => g.edge_count(),
            SampleGraph::Directed(g) => g.edge_count(),
            SampleGraph::Weighted(g) => g.edge_count(),
            SampleGraph::WeightedDirected(g) => g.edge_count(),
        }
    }
}

/// Fails with a message naming what `command` needs instead.
pub fn unsupported(sample: Sample, kind: GraphKind, command: &str, needs: &str) -> anyhow::Error {
    let article = match kind {
        GraphKind::Undirected => "an",
        _ => "a",
    };
    anyhow::anyhow!(
        "`{command}` needs {needs}, but sample `{}` is {article} {} graph",
        sample.name(),
        kind.label()
    )
}
