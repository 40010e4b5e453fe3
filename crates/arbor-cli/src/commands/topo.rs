//! Topological order command.

use anyhow::Result;
use arbor::{Components, Graph, StronglyConnectedComponents, TopologicalSort, Vertex};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{Sample, SampleGraph, unsupported};

/// Topological order report.
#[derive(Serialize)]
struct TopoOutput {
    sample: &'static str,
    acyclic: bool,
    order: Vec<Vertex>,
}

/// Run the topo command.
pub fn run(sample: Sample, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = match sample.load()? {
        SampleGraph::Directed(g) => g,
        other => {
            return Err(unsupported(
                sample,
                other.kind(),
                "topo",
                "an unweighted directed graph",
            ));
        }
    };

    // Acyclic exactly when every strong component is a single vertex.
    let acyclic = StronglyConnectedComponents::new(&graph)?.count() == graph.vertex_count();
    if !acyclic {
        tracing::warn!(
            sample = sample.name(),
            "graph has cycles; the order is a reverse postorder, not a topological order"
        );
    }

    let report = TopoOutput {
        sample: sample.name(),
        acyclic,
        order: TopologicalSort::new(&graph)?.into_order(),
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&report, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Position", "Vertex"]);
            for (position, vertex) in report.order.iter().enumerate() {
                table.add_row(vec![position.to_string(), vertex.to_string()]);
            }
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}
