use starpath_core::graph::Graph;
use starpath_core::search::SearchResult;

use super::Outcome;
use crate::cli::Cli;
use crate::commands::helpers::{format_cost, vertex_label};

/// Print each engine's paths, optimal ones marked with `*`
pub fn output_outcomes(
    cli: &Cli,
    graph: &Graph,
    source: usize,
    target: usize,
    outcomes: &[Outcome],
) {
    let from = vertex_label(graph, source);
    let to = vertex_label(graph, target);

    for (n, (algorithm, outcome)) in outcomes.iter().enumerate() {
        if n > 0 && !cli.quiet {
            println!();
        }
        match outcome {
            Err(e) => println!("{algorithm}: error: {e}"),
            Ok(result) if result.is_empty() => {
                println!("{algorithm}: no path from {from} to {to}");
            }
            Ok(result) => {
                if !cli.quiet {
                    println!(
                        "{algorithm}: {from} -> {to} ({} {}, min cost {})",
                        result.paths.len(),
                        if result.paths.len() == 1 { "path" } else { "paths" },
                        result.min_cost().map(format_cost).unwrap_or_default()
                    );
                }
                output_paths(graph, result);
            }
        }
    }
}

fn output_paths(graph: &Graph, result: &SearchResult) {
    for (i, entry) in result.paths.iter().enumerate() {
        let marker = if result.is_optimal(i) { '*' } else { ' ' };
        let route: Vec<String> = entry
            .vertices
            .iter()
            .map(|&v| vertex_label(graph, v))
            .collect();
        println!(
            "  {marker} {}  (cost {})",
            route.join(" -> "),
            format_cost(entry.cost)
        );
    }
}
