//! Single-source shortest path command.

use anyhow::Result;
use arbor::{DijkstraSp, Vertex};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{Sample, SampleGraph, unsupported};

/// Shortest path to one vertex. Unreachable vertices have neither distance
/// nor path.
#[derive(Serialize)]
struct DistanceOutput {
    vertex: Vertex,
    distance: Option<f64>,
    path: Option<Vec<Vertex>>,
}

/// Shortest path report.
#[derive(Serialize)]
struct ShortestPathOutput {
    sample: &'static str,
    source: Vertex,
    distances: Vec<DistanceOutput>,
}

fn distances(sp: &DijkstraSp, vertex_count: usize) -> Result<Vec<DistanceOutput>> {
    let mut rows = Vec::with_capacity(vertex_count);
    for vertex in 0..vertex_count {
        let path = sp.path_to(vertex)?.map(|edges| {
            std::iter::once(sp.source())
                .chain(edges.iter().map(|e| e.to()))
                .collect()
        });
        let distance = sp.distance_to(vertex)?;
        rows.push(DistanceOutput {
            vertex,
            distance: distance.is_finite().then_some(distance),
            path,
        });
    }
    Ok(rows)
}

/// Run the shortest-path command.
pub fn run(sample: Sample, source: Vertex, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = match sample.load()? {
        SampleGraph::WeightedDirected(g) => g,
        other => {
            return Err(unsupported(
                sample,
                other.kind(),
                "shortest-path",
                "a weighted directed graph",
            ));
        }
    };

    let sp = DijkstraSp::new(&graph, source)?;
    let report = ShortestPathOutput {
        sample: sample.name(),
        source,
        distances: distances(&sp, graph.vertex_count())?,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&report, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Distance", "Path"]);
            for row in &report.distances {
                table.add_row(vec![
                    row.vertex.to_string(),
                    output::format_weight(row.distance.unwrap_or(f64::INFINITY)),
                    output::format_path(row.path.as_deref()),
                ]);
            }
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}
