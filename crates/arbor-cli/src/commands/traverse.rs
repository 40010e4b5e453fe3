//! Single-source traversal command.

use anyhow::Result;
use arbor::{BreadthFirstSearch, DepthFirstSearch, Graph, Paths, Vertex};
use clap::ValueEnum;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{Sample, SampleGraph, unsupported};

/// Search order for the traverse command.
#[derive(Clone, Copy, Debug, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    /// Depth-first
    #[default]
    Dfs,
    /// Breadth-first
    Bfs,
}

/// Path from the source to one vertex.
#[derive(Serialize)]
struct PathOutput {
    vertex: Vertex,
    path: Option<Vec<Vertex>>,
}

/// Traversal report.
#[derive(Serialize)]
struct TraverseOutput {
    sample: &'static str,
    order: SearchOrder,
    source: Vertex,
    reached: usize,
    paths: Vec<PathOutput>,
}

fn search<G: Graph>(graph: &G, source: Vertex, order: SearchOrder) -> Result<Vec<PathOutput>> {
    let paths: Box<dyn Paths> = match order {
        SearchOrder::Dfs => Box::new(DepthFirstSearch::new(graph, source)?),
        SearchOrder::Bfs => Box::new(BreadthFirstSearch::new(graph, source)?),
    };

    (0..graph.vertex_count())
        .map(|vertex| -> Result<PathOutput> {
            Ok(PathOutput {
                vertex,
                path: paths.path_to(vertex)?,
            })
        })
        .collect()
}

/// Run the traverse command.
pub fn run(
    sample: Sample,
    source: Vertex,
    order: SearchOrder,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let paths = match sample.load()? {
        SampleGraph::Undirected(g) => search(&g, source, order)?,
        SampleGraph::Directed(g) => search(&g, source, order)?,
        other => {
            return Err(unsupported(
                sample,
                other.kind(),
                "traverse",
                "an unweighted graph",
            ));
        }
    };

    let report = TraverseOutput {
        sample: sample.name(),
        order,
        source,
        reached: paths.iter().filter(|p| p.path.is_some()).count(),
        paths,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&report, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Hops", "Path"]);
            for row in &report.paths {
                let hops = row
                    .path
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |p| (p.len() - 1).to_string());
                table.add_row(vec![
                    row.vertex.to_string(),
                    hops,
                    output::format_path(row.path.as_deref()),
                ]);
            }
            output::print_table(&table, quiet);
            output::status(
                &format!(
                    "Reached {} of {} vertices from {}",
                    report.reached,
                    report.paths.len(),
                    report.source
                ),
                quiet,
            );
        }
    }

    Ok(())
}
