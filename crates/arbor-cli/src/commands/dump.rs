//! Graph dump command.

use anyhow::Result;
use arbor::Graph;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{GraphKind, Sample, SampleGraph};

/// One edge of the dumped graph. Unweighted edges carry no weight.
#[derive(Serialize)]
struct EdgeOutput {
    from: usize,
    to: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
}

/// Machine-readable dump.
#[derive(Serialize)]
struct DumpOutput {
    sample: &'static str,
    kind: GraphKind,
    vertex_count: usize,
    edge_count: usize,
    edges: Vec<EdgeOutput>,
}

/// Lists every edge once; undirected edges from their lower endpoint.
fn edges(graph: &SampleGraph) -> Result<Vec<EdgeOutput>> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    match graph {
        SampleGraph::Undirected(g) => {
            for v in 0..g.vertex_count() {
                for w in g.adjacent(v)?.filter(|&w| v <= w) {
                    edges.push(EdgeOutput {
                        from: v,
                        to: w,
                        weight: None,
                    });
                }
            }
        }
        SampleGraph::Directed(g) => {
            for v in 0..g.vertex_count() {
                for w in g.adjacent(v)? {
                    edges.push(EdgeOutput {
                        from: v,
                        to: w,
                        weight: None,
                    });
                }
            }
        }
        SampleGraph::Weighted(g) => {
            edges.extend(g.edges().map(|e| {
                let (v, w) = e.endpoints();
                EdgeOutput {
                    from: v,
                    to: w,
                    weight: Some(e.weight()),
                }
            }));
        }
        SampleGraph::WeightedDirected(g) => {
            edges.extend(g.edges().map(|e| EdgeOutput {
                from: e.from(),
                to: e.to(),
                weight: Some(e.weight()),
            }));
        }
    }
    Ok(edges)
}

/// Run the dump command.
pub fn run(sample: Sample, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = sample.load()?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            let dump = DumpOutput {
                sample: sample.name(),
                kind: graph.kind(),
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
                edges: edges(&graph)?,
            };
            output::print_json(&dump, quiet)?;
        }
        Format::Table => {
            let text = match &graph {
                SampleGraph::Undirected(g) => g.to_string(),
                SampleGraph::Directed(g) => g.to_string(),
                SampleGraph::Weighted(g) => g.to_string(),
                SampleGraph::WeightedDirected(g) => g.to_string(),
            };
            output::status(text.trim_end(), quiet);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_listed_once() {
        for sample in Sample::ALL {
            let graph = sample.load().unwrap();
            assert_eq!(
                edges(&graph).unwrap().len(),
                graph.edge_count(),
                "{}",
                sample.name()
            );
        }
    }
}
