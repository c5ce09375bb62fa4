use std::time::Instant;

use crate::error::{Result, StarpathError};
use crate::graph::Graph;
use crate::heap::MinHeap;
use crate::search::types::{Algorithm, SearchOptions, SearchResult};
use crate::search::{prepare, PathSearch};
use crate::trace_time;

/// Multi-path Dijkstra.
///
/// Keeps, per vertex, the best distance and every distinct path prefix reaching
/// it at that distance. Requires non-negative weights: with
/// `reject_negative_weights` set (the default) a negative edge anywhere in the
/// graph fails the search before it starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    options: SearchOptions,
}

/// Per-vertex labels during the search
struct DijkstraState {
    distance: Vec<f64>,
    routes: Vec<Vec<Vec<usize>>>,
    settled: Vec<bool>,
    heap: MinHeap<usize>,
}

impl DijkstraState {
    fn new(n: usize, source: usize) -> Self {
        let mut distance = vec![f64::INFINITY; n];
        distance[source] = 0.0;
        let mut routes = vec![Vec::new(); n];
        routes[source] = vec![vec![source]];
        let mut heap = MinHeap::new();
        heap.push(0.0, source);
        Self {
            distance,
            routes,
            settled: vec![false; n],
            heap,
        }
    }

    fn extended_routes(&self, from: usize, next: usize) -> Vec<Vec<usize>> {
        self.routes[from]
            .iter()
            .map(|route| {
                let mut extended = Vec::with_capacity(route.len() + 1);
                extended.extend_from_slice(route);
                extended.push(next);
                extended
            })
            .collect()
    }

    /// Relax `current -> next`; returns true on a strict improvement
    fn relax(&mut self, current: usize, next: usize, weight: f64, options: &SearchOptions) -> bool {
        let candidate = self.distance[current] + weight;

        if options.improves(candidate, self.distance[next]) {
            self.distance[next] = candidate;
            self.routes[next] = self.extended_routes(current, next);
            self.heap.push(candidate, next);
            true
        } else if options.ties(candidate, self.distance[next]) {
            for route in self.extended_routes(current, next) {
                if !self.routes[next].contains(&route) {
                    self.routes[next].push(route);
                }
            }
            false
        } else {
            false
        }
    }
}

impl Dijkstra {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    fn check_weights(&self, graph: &Graph) -> Result<()> {
        if !self.options.reject_negative_weights {
            return Ok(());
        }
        match graph.edges().find(|&(_, _, weight)| weight < 0.0) {
            Some((from, to, weight)) => {
                Err(StarpathError::NegativeEdgeWeight { from, to, weight })
            }
            None => Ok(()),
        }
    }
}

impl PathSearch for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    #[tracing::instrument(skip(self, graph), fields(algorithm = "dijkstra"))]
    fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchResult> {
        if let Some(trivial) = prepare(self.algorithm(), graph, source, target)? {
            return Ok(trivial);
        }
        self.check_weights(graph)?;
        let start = Instant::now();

        let mut state = DijkstraState::new(graph.len(), source);
        let mut improvements = 0usize;

        while let Some((_, current)) = state.heap.pop() {
            if state.settled[current] {
                continue;
            }
            state.settled[current] = true;

            for (next, weight) in graph.neighbors(current) {
                if state.settled[next] {
                    continue;
                }
                if state.relax(current, next, weight, &self.options) {
                    improvements += 1;
                }
            }
        }

        let routes = std::mem::take(&mut state.routes[target]);
        let result = if routes.is_empty() {
            SearchResult::empty(self.algorithm(), source, target)
        } else {
            SearchResult::all_optimal(
                self.algorithm(),
                source,
                target,
                routes,
                state.distance[target],
            )
        };

        tracing::debug!(improvements, paths = result.paths.len(), "dijkstra complete");
        trace_time!(start, "dijkstra_search");
        Ok(result)
    }
}

#[cfg(test)]
mod tests;
