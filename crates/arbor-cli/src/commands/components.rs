//! Component listing command.

use anyhow::Result;
use arbor::{Components, ConnectedComponents, StronglyConnectedComponents, Vertex};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::sample::{Sample, SampleGraph, unsupported};

/// One component and its vertices.
#[derive(Serialize)]
struct ComponentOutput {
    id: usize,
    size: usize,
    members: Vec<Vertex>,
}

/// Component report.
#[derive(Serialize)]
struct ComponentsOutput {
    sample: &'static str,
    strong: bool,
    count: usize,
    components: Vec<ComponentOutput>,
}

fn describe(components: &dyn Components) -> Vec<ComponentOutput> {
    (0..components.count())
        .map(|id| {
            let members = components.members(id);
            ComponentOutput {
                id,
                size: members.len(),
                members,
            }
        })
        .collect()
}

/// Run the components command.
///
/// Undirected samples get connected components, directed samples strongly
/// connected ones.
pub fn run(sample: Sample, format: OutputFormat, quiet: bool) -> Result<()> {
    let (strong, components) = match sample.load()? {
        SampleGraph::Undirected(g) => (false, describe(&ConnectedComponents::new(&g)?)),
        SampleGraph::Directed(g) => (true, describe(&StronglyConnectedComponents::new(&g)?)),
        other => {
            return Err(unsupported(
                sample,
                other.kind(),
                "components",
                "an unweighted graph",
            ));
        }
    };

    let report = ComponentsOutput {
        sample: sample.name(),
        strong,
        count: components.len(),
        components,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&report, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Component", "Size", "Members"]);
            for component in &report.components {
                let members = component
                    .members
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                table.add_row(vec![
                    component.id.to_string(),
                    component.size.to_string(),
                    members,
                ]);
            }
            output::print_table(&table, quiet);
            let noun = if report.strong {
                "strongly connected components"
            } else {
                "connected components"
            };
            output::status(&format!("{} {noun}", report.count), quiet);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_three_components() {
        let graph = arbor::samples::three_components().unwrap();
        let components = describe(&ConnectedComponents::new(&graph).unwrap());

        let sizes: Vec<_> = components.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![7, 2, 4]);
    }

    #[test]
    fn test_runs_on_both_kinds() {
        assert!(run(Sample::ThreeComponents, OutputFormat::Json, true).is_ok());
        assert!(run(Sample::TinyDigraph, OutputFormat::Table, true).is_ok());
        assert!(run(Sample::TinyEwg, OutputFormat::Table, true).is_err());
    }
}
