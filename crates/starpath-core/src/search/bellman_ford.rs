use std::time::Instant;

use crate::error::{Result, StarpathError};
use crate::graph::Graph;
use crate::search::types::{Algorithm, SearchOptions, SearchResult};
use crate::search::{prepare, PathSearch};
use crate::trace_time;

/// Multi-path Bellman-Ford with negative-cycle detection.
///
/// Keeps a predecessor set per vertex: a strict improvement resets it to the new
/// predecessor, a tie adds to it. Fails with `NegativeCycleDetected` when an edge
/// can still be relaxed after `|V| - 1` rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord {
    options: SearchOptions,
}

impl BellmanFord {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

/// Walk predecessor sets backward from `current` to `source`.
///
/// `suffix` holds the path from `current` to the target in reverse order.
fn collect_paths(
    current: usize,
    source: usize,
    predecessors: &[Vec<usize>],
    suffix: &mut Vec<usize>,
    found: &mut Vec<Vec<usize>>,
) {
    if current == source {
        let mut path = suffix.clone();
        path.reverse();
        found.push(path);
        return;
    }
    for &pred in &predecessors[current] {
        // Zero-cost cycles can make predecessor sets cyclic
        if suffix.contains(&pred) {
            continue;
        }
        suffix.push(pred);
        collect_paths(pred, source, predecessors, suffix, found);
        suffix.pop();
    }
}

impl PathSearch for BellmanFord {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BellmanFord
    }

    #[tracing::instrument(skip(self, graph), fields(algorithm = "bellman-ford"))]
    fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchResult> {
        if let Some(trivial) = prepare(self.algorithm(), graph, source, target)? {
            return Ok(trivial);
        }
        let start = Instant::now();
        let options = &self.options;

        let n = graph.len();
        let edges: Vec<(usize, usize, f64)> = graph.edges().collect();
        let mut distance = vec![f64::INFINITY; n];
        distance[source] = 0.0;
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        let mut rounds = 0usize;
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for &(from, to, weight) in &edges {
                if distance[from].is_infinite() {
                    continue;
                }
                let candidate = distance[from] + weight;
                if options.improves(candidate, distance[to]) {
                    distance[to] = candidate;
                    predecessors[to] = vec![from];
                    changed = true;
                } else if options.ties(candidate, distance[to]) && !predecessors[to].contains(&from)
                {
                    predecessors[to].push(from);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let negative_cycle = edges.iter().any(|&(from, to, weight)| {
            distance[from].is_finite() && options.improves(distance[from] + weight, distance[to])
        });
        if negative_cycle {
            tracing::debug!(rounds, "bellman-ford found a negative cycle");
            return Err(StarpathError::NegativeCycleDetected);
        }

        let result = if distance[target].is_infinite() {
            SearchResult::empty(self.algorithm(), source, target)
        } else {
            let mut found = Vec::new();
            let mut suffix = vec![target];
            collect_paths(target, source, &predecessors, &mut suffix, &mut found);
            SearchResult::all_optimal(self.algorithm(), source, target, found, distance[target])
        };

        tracing::debug!(rounds, paths = result.paths.len(), "bellman-ford complete");
        trace_time!(start, "bellman_ford_search");
        Ok(result)
    }
}
