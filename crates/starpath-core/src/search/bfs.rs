use std::collections::VecDeque;
use std::time::Instant;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::types::{Algorithm, PathEntry, SearchOptions, SearchResult};
use crate::search::{prepare, PathSearch};
use crate::trace_time;

/// Minimum-hop enumeration.
///
/// Every returned path has the minimum hop count; among those, the cheapest are
/// marked optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst {
    options: SearchOptions,
}

impl BreadthFirst {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

/// Queue entry carrying its whole path, which doubles as its cycle guard
struct Candidate {
    vertex: usize,
    path: Vec<usize>,
    cost: f64,
}

impl PathSearch for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    #[tracing::instrument(skip(self, graph), fields(algorithm = "bfs"))]
    fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchResult> {
        if let Some(trivial) = prepare(self.algorithm(), graph, source, target)? {
            return Ok(trivial);
        }
        let start = Instant::now();

        // Shortest path length (in vertices) seen reaching each vertex. A vertex
        // reached deeper than that cannot lie on a minimum-hop path.
        let mut depth = vec![usize::MAX; graph.len()];
        depth[source] = 1;

        let mut queue = VecDeque::new();
        queue.push_back(Candidate {
            vertex: source,
            path: vec![source],
            cost: 0.0,
        });

        let mut shortest = usize::MAX;
        let mut found: Vec<PathEntry> = Vec::new();
        let mut expanded = 0usize;

        while let Some(candidate) = queue.pop_front() {
            if candidate.path.len() > shortest {
                continue;
            }

            if candidate.vertex == target {
                if candidate.path.len() < shortest {
                    shortest = candidate.path.len();
                    found.clear();
                }
                found.push(PathEntry::new(candidate.path, candidate.cost));
                continue;
            }

            expanded += 1;
            let next_len = candidate.path.len() + 1;
            for (next, weight) in graph.neighbors(candidate.vertex) {
                if candidate.path.contains(&next) || depth[next] < next_len {
                    continue;
                }
                depth[next] = next_len;

                let mut path = candidate.path.clone();
                path.push(next);
                queue.push_back(Candidate {
                    vertex: next,
                    path,
                    cost: candidate.cost + weight,
                });
            }
        }

        let result =
            SearchResult::with_minimum(self.algorithm(), source, target, found, &self.options);
        tracing::debug!(
            expanded,
            paths = result.paths.len(),
            optimal = result.optimal.len(),
            "bfs complete"
        );
        trace_time!(start, "bfs_search");
        Ok(result)
    }
}
