//! Sample listing command.

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{GraphKind, Sample};

/// One bundled sample graph.
#[derive(Serialize)]
struct SampleOutput {
    name: &'static str,
    kind: GraphKind,
    vertex_count: usize,
    edge_count: usize,
}

/// Run the samples command.
pub fn run(format: OutputFormat, quiet: bool) -> Result<()> {
    let rows = Sample::ALL
        .into_iter()
        .map(|sample| -> Result<SampleOutput> {
            let graph = sample.load()?;
            Ok(SampleOutput {
                name: sample.name(),
                kind: graph.kind(),
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&rows, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Sample", "Kind", "Vertices", "Edges"]);
            for row in &rows {
                table.add_row(vec![
                    row.name.to_string(),
                    row.kind.label().to_string(),
                    row.vertex_count.to_string(),
                    row.edge_count.to_string(),
                ]);
            }
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}
