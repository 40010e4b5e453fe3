//! Minimum spanning tree command.

use anyhow::Result;
use arbor::{KruskalMst, PrimConfig, PrimMst, SpanningTree, Vertex};
use clap::ValueEnum;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{Sample, SampleGraph, unsupported};

/// Spanning tree algorithm.
#[derive(Clone, Copy, Debug, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    /// Grow one tree from a root vertex
    #[default]
    Prim,
    /// Merge forests in ascending edge weight
    Kruskal,
}

/// One tree edge.
#[derive(Serialize)]
struct TreeEdgeOutput {
    v: Vertex,
    w: Vertex,
    weight: f64,
}

/// Spanning tree report.
#[derive(Serialize)]
struct MstOutput {
    sample: &'static str,
    algorithm: MstAlgorithm,
    weight: f64,
    spanning: bool,
    edges: Vec<TreeEdgeOutput>,
}

fn summarize(sample: Sample, algorithm: MstAlgorithm, tree: &dyn SpanningTree) -> MstOutput {
    MstOutput {
        sample: sample.name(),
        algorithm,
        weight: tree.weight(),
        spanning: tree.is_spanning(),
        edges: tree
            .edges()
            .iter()
            .map(|e| {
                let (v, w) = e.endpoints();
                TreeEdgeOutput {
                    v,
                    w,
                    weight: e.weight(),
                }
            })
            .collect(),
    }
}

/// Run the mst command.
pub fn run(
    sample: Sample,
    algorithm: MstAlgorithm,
    root: Vertex,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = match sample.load()? {
        SampleGraph::Weighted(g) => g,
        other => {
            return Err(unsupported(
                sample,
                other.kind(),
                "mst",
                "a weighted undirected graph",
            ));
        }
    };

    let report = match algorithm {
        MstAlgorithm::Prim => {
            let config = PrimConfig::new().root(root);
            summarize(sample, algorithm, &PrimMst::with_config(&graph, &config)?)
        }
        MstAlgorithm::Kruskal => summarize(sample, algorithm, &KruskalMst::new(&graph)?),
    };
    if !report.spanning {
        tracing::warn!(
            sample = sample.name(),
            "graph is disconnected; the result does not span every vertex"
        );
    }

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&report, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Edge", "Weight"]);
            for edge in &report.edges {
                table.add_row(vec![
                    format!("{} -- {}", edge.v, edge.w),
                    output::format_weight(edge.weight),
                ]);
            }
            output::print_table(&table, quiet);
            output::status(
                &format!("Total weight: {}", output::format_weight(report.weight)),
                quiet,
            );
        }
    }

    Ok(())
}
