//! Shared helpers for graph-reading commands

use std::path::Path;
use std::time::Instant;

use starpath_core::ensure_index;
use starpath_core::error::{Result, StarpathError};
use starpath_core::graph::{Graph, GraphDocument, LoadReport};

use crate::commands::dispatch::CommandContext;

/// Load a graph document and build it with the configured defaults
pub fn load_graph(ctx: &CommandContext, path: &Path) -> Result<(Graph, LoadReport)> {
    let start = Instant::now();
    let document = GraphDocument::load(path)?;
    let (graph, report) = document.build(&ctx.config.graph);

    tracing::debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.len(),
        edges = graph.edge_count(),
        "load_graph"
    );
    Ok((graph, report))
}

/// Resolve a vertex reference: a name first (case-insensitive), then a 0-based index
pub fn resolve_vertex(graph: &Graph, reference: &str) -> Result<usize> {
    if let Some(index) = graph.find_vertex(reference) {
        return Ok(index);
    }
    match reference.trim().parse::<usize>() {
        Ok(index) => {
            ensure_index!(index, graph.len());
            Ok(index)
        }
        Err(_) => Err(StarpathError::VertexNotFound {
            name: reference.trim().to_string(),
        }),
    }
}

/// Display name of a vertex, falling back to its index
pub fn vertex_label(graph: &Graph, index: usize) -> String {
    graph
        .vertex(index)
        .map(|v| v.name.clone())
        .unwrap_or_else(|_| format!("#{index}"))
}

/// Format a cost without float noise (`3`, `0.52`, `1.000001`)
pub fn format_cost(cost: f64) -> String {
    let fixed = format!("{cost:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
