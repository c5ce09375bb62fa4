use std::time::Instant;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::types::{Algorithm, PathEntry, SearchOptions, SearchResult};
use crate::search::{prepare, PathSearch};
use crate::trace_time;

/// Exhaustive simple-path enumeration by backtracking.
///
/// Exponential in the worst case; meant for small, sparse graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst {
    options: SearchOptions,
}

impl DepthFirst {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

/// Backtracking state: the current branch and which vertices are on it
struct Walk<'a> {
    graph: &'a Graph,
    target: usize,
    on_path: Vec<bool>,
    path: Vec<usize>,
    found: Vec<PathEntry>,
}

impl Walk<'_> {
    fn visit(&mut self, current: usize, cost: f64) {
        if current == self.target {
            self.found.push(PathEntry::new(self.path.clone(), cost));
            return;
        }

        let graph = self.graph;
        for (next, weight) in graph.neighbors(current) {
            if self.on_path[next] {
                continue;
            }
            self.on_path[next] = true;
            self.path.push(next);
            self.visit(next, cost + weight);
            self.path.pop();
            self.on_path[next] = false;
        }
    }
}

impl PathSearch for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    #[tracing::instrument(skip(self, graph), fields(algorithm = "dfs"))]
    fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchResult> {
        if let Some(trivial) = prepare(self.algorithm(), graph, source, target)? {
            return Ok(trivial);
        }
        let start = Instant::now();

        let mut walk = Walk {
            graph,
            target,
            on_path: vec![false; graph.len()],
            path: vec![source],
            found: Vec::new(),
        };
        walk.on_path[source] = true;
        walk.visit(source, 0.0);

        let result = SearchResult::with_minimum(
            self.algorithm(),
            source,
            target,
            walk.found,
            &self.options,
        );
        tracing::debug!(
            paths = result.paths.len(),
            optimal = result.optimal.len(),
            "dfs complete"
        );
        trace_time!(start, "dfs_search");
        Ok(result)
    }
}
