//! All-optimal-path search engines
//!
//! Each engine returns every path that ties at its optimum rather than a single witness:
//! - `dfs`: every simple path, minimum-cost subset marked optimal
//! - `bfs`: every minimum-hop path, minimum-cost subset marked optimal
//! - `dijkstra`: every minimum-cost path, non-negative weights only
//! - `floyd_warshall`: all-pairs tables with next-hop sets, then per-pair reconstruction
//! - `bellman_ford`: predecessor sets with negative-cycle detection
//!
//! All engines share the same preconditions: a non-empty graph, in-range endpoints,
//! and a zero-cost single-vertex result when `source == target`.

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod types;

pub use bellman_ford::BellmanFord;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{AllPairs, FloydWarshall};
pub use types::{Algorithm, PathEntry, SearchOptions, SearchResult, DEFAULT_TOLERANCE};

use crate::ensure_index;
use crate::error::{Result, StarpathError};
use crate::graph::Graph;

/// A path enumeration strategy.
///
/// Engines borrow the graph immutably for the whole search.
pub trait PathSearch {
    fn algorithm(&self) -> Algorithm;

    fn search(&self, graph: &Graph, source: usize, target: usize) -> Result<SearchResult>;
}

/// Build the engine for `algorithm`
pub fn engine(algorithm: Algorithm, options: SearchOptions) -> Box<dyn PathSearch> {
    match algorithm {
        Algorithm::Dfs => Box::new(DepthFirst::new(options)),
        Algorithm::Bfs => Box::new(BreadthFirst::new(options)),
        Algorithm::Dijkstra => Box::new(Dijkstra::new(options)),
        Algorithm::FloydWarshall => Box::new(FloydWarshall::new(options)),
        Algorithm::BellmanFord => Box::new(BellmanFord::new(options)),
    }
}

/// Run one engine between `source` and `target`
pub fn search(
    algorithm: Algorithm,
    graph: &Graph,
    source: usize,
    target: usize,
    options: SearchOptions,
) -> Result<SearchResult> {
    engine(algorithm, options).search(graph, source, target)
}

/// Shared preconditions.
///
/// Returns the trivial result when `source == target`, `None` when the engine
/// has to search.
pub(crate) fn prepare(
    algorithm: Algorithm,
    graph: &Graph,
    source: usize,
    target: usize,
) -> Result<Option<SearchResult>> {
    if graph.is_empty() {
        return Err(StarpathError::EmptyGraph);
    }
    ensure_index!(source, graph.len());
    ensure_index!(target, graph.len());

    if source == target {
        return Ok(Some(SearchResult::trivial(algorithm, source)));
    }
    Ok(None)
}

/// Sum of edge weights along `path`
pub fn path_cost(graph: &Graph, path: &[usize]) -> f64 {
    path.windows(2).map(|w| graph.get_edge(w[0], w[1])).sum()
}
