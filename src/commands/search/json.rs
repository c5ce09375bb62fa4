use serde_json::{json, Value};

use starpath_core::error::Result;
use starpath_core::graph::Graph;
use starpath_core::search::SearchResult;

use super::Outcome;
use crate::commands::helpers::vertex_label;

/// Print all outcomes as one JSON document
pub fn output_outcomes(
    graph: &Graph,
    source: usize,
    target: usize,
    outcomes: &[Outcome],
) -> Result<()> {
    let results: Vec<Value> = outcomes
        .iter()
        .map(|(algorithm, outcome)| match outcome {
            Ok(result) => result_json(graph, result),
            Err(e) => {
                let mut envelope = e.to_json();
                json!({
                    "algorithm": algorithm,
                    "error": envelope["error"].take(),
                })
            }
        })
        .collect();

    let output = json!({
        "source": endpoint_json(graph, source),
        "target": endpoint_json(graph, target),
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn endpoint_json(graph: &Graph, index: usize) -> Value {
    json!({
        "index": index,
        "name": vertex_label(graph, index),
    })
}

fn result_json(graph: &Graph, result: &SearchResult) -> Value {
    let paths: Vec<Value> = result
        .paths
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let names: Vec<String> = entry
                .vertices
                .iter()
                .map(|&v| vertex_label(graph, v))
                .collect();
            json!({
                "vertices": names,
                "indices": entry.vertices,
                "cost": entry.cost,
                "hops": entry.hops(),
                "optimal": result.is_optimal(i),
            })
        })
        .collect();

    json!({
        "algorithm": result.algorithm,
        "min_cost": result.min_cost(),
        "paths": paths,
    })
}
