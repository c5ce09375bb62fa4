use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarpathError};

/// Default relative tolerance for cost ties
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// The five path enumeration strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Exhaustive simple-path enumeration
    Dfs,
    /// Minimum-hop enumeration
    Bfs,
    /// Multi-path Dijkstra (non-negative weights)
    #[default]
    Dijkstra,
    /// Multi-path all-pairs Floyd-Warshall
    FloydWarshall,
    /// Multi-path Bellman-Ford with negative-cycle detection
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::FloydWarshall,
        Algorithm::BellmanFord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::FloydWarshall => "floyd-warshall",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = StarpathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "floyd-warshall" | "floyd" => Ok(Algorithm::FloydWarshall),
            "bellman-ford" | "bellman" => Ok(Algorithm::BellmanFord),
            other => Err(StarpathError::unsupported(
                "algorithm",
                other,
                "dfs, bfs, dijkstra, floyd-warshall, bellman-ford",
            )),
        }
    }
}

/// Tuning shared by the engines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Relative tolerance used to decide that two costs tie
    pub tolerance: f64,
    /// Dijkstra fails with `NegativeEdgeWeight` instead of searching a graph with negative edges
    pub reject_negative_weights: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            reject_negative_weights: true,
        }
    }
}

impl SearchOptions {
    fn slack(&self, a: f64, b: f64) -> f64 {
        self.tolerance * 1f64.max(a.abs()).max(b.abs())
    }

    /// `a` and `b` are the same cost within tolerance
    pub fn ties(&self, a: f64, b: f64) -> bool {
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        (a - b).abs() <= self.slack(a, b)
    }

    /// `candidate` is strictly cheaper than `current` beyond tolerance
    pub fn improves(&self, candidate: f64, current: f64) -> bool {
        if candidate.is_infinite() || current.is_infinite() {
            return candidate < current;
        }
        candidate < current - self.slack(candidate, current)
    }
}

/// One discovered path and its total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    /// Vertex indices from source to target
    pub vertices: Vec<usize>,
    pub cost: f64,
}

impl PathEntry {
    pub fn new(vertices: Vec<usize>, cost: f64) -> Self {
        Self { vertices, cost }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Paths found by one engine between `source` and `target`.
///
/// An empty `paths` list means no path exists; it is not an error.
/// `optimal` holds indices into `paths`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub source: usize,
    pub target: usize,
    pub paths: Vec<PathEntry>,
    pub optimal: Vec<usize>,
}

impl SearchResult {
    pub fn empty(algorithm: Algorithm, source: usize, target: usize) -> Self {
        Self {
            algorithm,
            source,
            target,
            paths: Vec::new(),
            optimal: Vec::new(),
        }
    }

    /// Zero-cost single-vertex result for `source == target`
    pub fn trivial(algorithm: Algorithm, vertex: usize) -> Self {
        Self {
            algorithm,
            source: vertex,
            target: vertex,
            paths: vec![PathEntry::new(vec![vertex], 0.0)],
            optimal: vec![0],
        }
    }

    /// Every path shares the optimal `cost`
    pub fn all_optimal(
        algorithm: Algorithm,
        source: usize,
        target: usize,
        paths: Vec<Vec<usize>>,
        cost: f64,
    ) -> Self {
        let paths: Vec<PathEntry> = paths
            .into_iter()
            .map(|vertices| PathEntry::new(vertices, cost))
            .collect();
        let optimal = (0..paths.len()).collect();
        Self {
            algorithm,
            source,
            target,
            paths,
            optimal,
        }
    }

    /// Mark the entries tying for the minimum cost as optimal
    pub fn with_minimum(
        algorithm: Algorithm,
        source: usize,
        target: usize,
        paths: Vec<PathEntry>,
        options: &SearchOptions,
    ) -> Self {
        let min = paths
            .iter()
            .map(|p| p.cost)
            .min_by(|a, b| a.total_cmp(b));
        let optimal = match min {
            Some(min) => paths
                .iter()
                .enumerate()
                .filter(|(_, p)| options.ties(p.cost, min))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };
        Self {
            algorithm,
            source,
            target,
            paths,
            optimal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Cost of the optimal paths, `None` when no path exists
    pub fn min_cost(&self) -> Option<f64> {
        self.optimal.first().map(|&i| self.paths[i].cost)
    }

    pub fn is_optimal(&self, index: usize) -> bool {
        self.optimal.contains(&index)
    }

    pub fn optimal_paths(&self) -> impl Iterator<Item = &PathEntry> + '_ {
        self.optimal.iter().map(move |&i| &self.paths[i])
    }

    /// Turn an empty result into `NoPathFound`
    pub fn require_path(self) -> Result<Self> {
        if self.is_empty() {
            return Err(StarpathError::NoPathFound {
                from: self.source,
                to: self.target,
            });
        }
        Ok(self)
    }
}
