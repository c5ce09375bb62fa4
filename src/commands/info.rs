//! `info` command: graph flags, counts and degrees

use std::path::Path;

use serde_json::json;

use starpath_core::error::Result;
use starpath_core::graph::{Degree, Graph, LoadReport};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::load_graph;

/// Execute the info command
pub fn execute(ctx: &CommandContext, graph_path: &Path) -> Result<()> {
    let (graph, report) = load_graph(ctx, graph_path)?;
    let degrees = graph
        .list_vertices()
        .map(|(index, _)| graph.degree(index))
        .collect::<Result<Vec<Degree>>>()?;

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx, &graph, &report, &degrees),
        OutputFormat::Json => {
            let vertices: Vec<_> = graph
                .list_vertices()
                .zip(&degrees)
                .map(|((index, vertex), degree)| {
                    json!({
                        "index": index,
                        "name": vertex.name,
                        "in_degree": degree.in_degree,
                        "out_degree": degree.out_degree,
                    })
                })
                .collect();
            let output = json!({
                "directed": graph.is_directed(),
                "weighted": graph.is_weighted(),
                "vertex_count": graph.len(),
                "edge_count": graph.edge_count(),
                "has_self_loop": graph.has_self_loop(),
                "load": report,
                "vertices": vertices,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, graph: &Graph, report: &LoadReport, degrees: &[Degree]) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!("directed:   {}", yes_no(graph.is_directed()));
    println!("weighted:   {}", yes_no(graph.is_weighted()));
    println!("vertices:   {}", graph.len());
    println!("edges:      {}", graph.edge_count());
    println!("self loops: {}", yes_no(graph.has_self_loop()));

    let skipped = report.vertices_skipped + report.edges_skipped;
    if skipped > 0 && !ctx.cli.quiet {
        println!(
            "skipped:    {} vertices, {} edges",
            report.vertices_skipped, report.edges_skipped
        );
    }

    if ctx.cli.quiet || graph.is_empty() {
        return;
    }
    println!();
    let width = graph.vertices().iter().map(|v| v.name.len()).max().unwrap_or(0);
    for ((index, vertex), degree) in graph.list_vertices().zip(degrees) {
        println!(
            "{index:>3}  {:<width$}  in {:<3} out {}",
            vertex.name, degree.in_degree, degree.out_degree
        );
    }
}
