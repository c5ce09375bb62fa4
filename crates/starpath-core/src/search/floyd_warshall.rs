use std::time::Instant;

use crate::error::{Result, StarpathError};
use crate::graph::Graph;
use crate::search::types::{Algorithm, SearchOptions, SearchResult};
use crate::search::{path_cost, prepare, PathSearch};
use crate::trace_time;

/// Multi-path Floyd-Warshall over every vertex pair
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall {
    options: SearchOptions,
}

/// All-pairs distance table with next-hop sets.
///
/// `next[i][j]` holds every immediate successor of `i` that starts a minimum-cost
/// path to `j`, so reconstruction can branch over all ties.
#[derive(Debug, Clone)]
pub struct AllPairs {
    dist: Vec<Vec<f64>>,
    next: Vec<Vec<Vec<usize>>>,
}

impl AllPairs {
    /// Run the O(n^3) dynamic program over `graph`
    pub fn compute(graph: &Graph, options: &SearchOptions) -> Self {
        let n = graph.len();
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next: Vec<Vec<Vec<usize>>> = vec![vec![Vec::new(); n]; n];

        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for (i, j, weight) in graph.edges() {
            if i == j {
                // A self-loop only matters when it is a negative cycle on its own
                if weight < 0.0 {
                    dist[i][i] = weight;
                }
                continue;
            }
            dist[i][j] = weight;
            next[i][j] = vec![j];
        }

        for k in 0..n {
            for i in 0..n {
                if i == k || dist[i][k].is_infinite() {
                    continue;
                }
                for j in 0..n {
                    if j == k || dist[k][j].is_infinite() {
                        continue;
                    }
                    let via = dist[i][k] + dist[k][j];
                    if options.improves(via, dist[i][j]) {
                        dist[i][j] = via;
                        next[i][j] = next[i][k].clone();
                    } else if options.ties(via, dist[i][j]) {
                        for hop in next[i][k].clone() {
                            if !next[i][j].contains(&hop) {
                                next[i][j].push(hop);
                            }
                        }
                    }
                }
            }
        }

        Self { dist, next }
    }

    /// Minimum cost from `from` to `to`, `None` when unreachable
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.dist
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Vertices lying on a negative cycle
    pub fn negative_cycle_vertices(&self) -> Vec<usize> {
        (0..self.dist.len())
            .filter(|&k| self.dist[k][k] < 0.0)
            .collect()
    }

    /// Every minimum-cost path from `from` to `to` by branching over next-hop sets.
    ///
    /// The number of paths can grow exponentially when ties compound.
    pub fn paths(&self, from: usize, to: usize) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        if from == to {
            found.push(vec![from]);
            return found;
        }
        if self.distance(from, to).is_none() {
            return found;
        }

        let mut path = vec![from];
        self.walk(from, to, &mut path, &mut found);
        found
    }

    fn walk(&self, current: usize, to: usize, path: &mut Vec<usize>, found: &mut Vec<Vec<usize>>) {
        if current == to {
            found.push(path.clone());
            return;
        }
        for &hop in &self.next[current][to] {
            // Zero-cost cycles can make next-hop sets cyclic
            if path.contains(&hop) {
                continue;
            }
            path.push(hop);
            self.walk(hop, to, path, found);
            path.pop();
        }
    }
}

impl FloydWarshall {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl PathSearch for FloydWarshall {
    fn algorithm(&self) -> Algorithm {
        Algorithm::FloydWarshall
    }

    #[tracing::instrument(skip(self, graph), fields(algorithm = "floyd-warshall"))]
    fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchResult> {
        if let Some(trivial) = prepare(self.algorithm(), graph, source, target)? {
            return Ok(trivial);
        }
        let start = Instant::now();

        let table = AllPairs::compute(graph, &self.options);
        trace_time!(start, "floyd_warshall_table");

        // A negative cycle reachable from source that can reach target makes the cost unbounded
        let unbounded = table.negative_cycle_vertices().into_iter().any(|k| {
            table.distance(source, k).is_some() && table.distance(k, target).is_some()
        });
        if unbounded {
            tracing::debug!("floyd-warshall found a negative cycle between endpoints");
            return Err(StarpathError::NegativeCycleDetected);
        }

        let result = match table.distance(source, target) {
            None => SearchResult::empty(self.algorithm(), source, target),
            Some(cost) => {
                let paths: Vec<Vec<usize>> = table
                    .paths(source, target)
                    .into_iter()
                    .filter(|path| self.options.ties(path_cost(graph, path), cost))
                    .collect();
                SearchResult::all_optimal(self.algorithm(), source, target, paths, cost)
            }
        };

        tracing::debug!(paths = result.paths.len(), "floyd-warshall complete");
        trace_time!(start, "floyd_warshall_search");
        Ok(result)
    }
}
