//! `vertices` command: the vertex catalogue

use std::path::Path;

use serde_json::{json, Value};

use starpath_core::error::Result;
use starpath_core::graph::{Graph, Vertex};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::load_graph;

/// Execute the vertices command
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    by_category: bool,
    ranked: bool,
) -> Result<()> {
    let (graph, _report) = load_graph(ctx, graph_path)?;

    // (index, total degree) in display order
    let order: Vec<(usize, usize)> = if ranked {
        graph.most_connected()
    } else {
        graph
            .list_vertices()
            .map(|(index, _)| graph.degree(index).map(|d| (index, d.total())))
            .collect::<Result<_>>()?
    };

    match ctx.cli.format {
        OutputFormat::Human => {
            if by_category {
                for (category, count) in graph.count_by_category() {
                    println!("{category}: {count}");
                }
            } else {
                output_list(&graph, &order);
            }
            if !ctx.cli.quiet {
                output_extremes(&graph);
            }
        }
        OutputFormat::Json => {
            let mut output = json!({
                "brightest": graph.brightest().map(|i| extreme_json(&graph, i)),
                "faintest": graph.faintest().map(|i| extreme_json(&graph, i)),
            });
            if by_category {
                output["categories"] = json!(graph.count_by_category());
            } else {
                output["vertices"] = order
                    .iter()
                    .map(|&(index, degree)| vertex_json(&graph, index, degree))
                    .collect();
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn output_list(graph: &Graph, order: &[(usize, usize)]) {
    let width = graph.vertices().iter().map(|v| v.name.len()).max().unwrap_or(0);
    for &(index, degree) in order {
        let Ok(vertex) = graph.vertex(index) else {
            continue;
        };
        let magnitude = vertex
            .magnitude
            .map(|m| format!("mag {m:>6.2}"))
            .unwrap_or_default();
        let category = vertex.category.as_deref().unwrap_or("-");
        println!(
            "{index:>3}  {:<width$}  {magnitude:<10}  {category}  (degree {degree})",
            vertex.name
        );
    }
}

fn output_extremes(graph: &Graph) {
    let describe = |index: usize| match graph.vertex(index) {
        Ok(Vertex {
            name,
            magnitude: Some(m),
            ..
        }) => format!("{name} ({m})"),
        Ok(vertex) => vertex.name.clone(),
        Err(_) => format!("#{index}"),
    };
    if let Some(index) = graph.brightest() {
        println!("brightest: {}", describe(index));
    }
    if let Some(index) = graph.faintest() {
        println!("faintest:  {}", describe(index));
    }
}

fn vertex_json(graph: &Graph, index: usize, degree: usize) -> Value {
    let mut value = json!({ "index": index, "degree": degree });
    if let (Ok(vertex), Some(object)) = (graph.vertex(index), value.as_object_mut()) {
        object.insert("name".to_string(), json!(vertex.name));
        object.insert("magnitude".to_string(), json!(vertex.magnitude));
        object.insert("category".to_string(), json!(vertex.category));
    }
    value
}

fn extreme_json(graph: &Graph, index: usize) -> Value {
    json!({
        "index": index,
        "name": graph.vertex(index).map(|v| v.name.clone()).ok(),
        "magnitude": graph.vertex(index).ok().and_then(|v| v.magnitude),
    })
}
