//! Cross-engine tests over generated and hand-built graphs

use std::collections::BTreeSet;

use starpath_core::error::StarpathError;
use starpath_core::graph::{Graph, Vertex};
use starpath_core::search::{
    path_cost, search, AllPairs, Algorithm, SearchOptions, SearchResult,
};

/// Small deterministic generator so failures are reproducible from the seed
struct Lcg(u64);

impl Lcg {
    fn step(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.step() % bound
    }
}

/// Random graph with integer weights in `1..=5`
fn random_graph(seed: u64) -> Graph {
    let mut rng = Lcg(seed);
    let n = 2 + rng.below(6) as usize;
    let directed = rng.below(2) == 0;
    let mut graph = Graph::new(directed, true);
    for i in 0..n {
        graph.add_vertex(Vertex::new(format!("v{i}"))).unwrap();
    }
    for from in 0..n {
        for to in 0..n {
            if from != to && rng.below(100) < 40 {
                graph.add_edge(from, to, (1 + rng.below(5)) as f64);
            }
        }
    }
    graph
}

fn run(algorithm: Algorithm, graph: &Graph, source: usize, target: usize) -> SearchResult {
    search(algorithm, graph, source, target, SearchOptions::default()).unwrap()
}

fn path_set(result: &SearchResult) -> BTreeSet<Vec<usize>> {
    result.paths.iter().map(|p| p.vertices.clone()).collect()
}

fn named(names: &[&str], directed: bool, edges: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::new(directed, true);
    for name in names {
        graph.add_vertex(Vertex::new(*name)).unwrap();
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }
    graph
}

// ============================================================================
// Properties on generated non-negative graphs
// ============================================================================

#[test]
fn test_dijkstra_and_bellman_ford_agree() {
    for seed in 0..150 {
        let graph = random_graph(seed);
        let n = graph.len();
        for source in 0..n {
            for target in 0..n {
                let dijkstra = run(Algorithm::Dijkstra, &graph, source, target);
                let bellman = run(Algorithm::BellmanFord, &graph, source, target);
                assert_eq!(
                    dijkstra.min_cost(),
                    bellman.min_cost(),
                    "seed {seed}: {source} -> {target}"
                );
                assert_eq!(
                    path_set(&dijkstra),
                    path_set(&bellman),
                    "seed {seed}: {source} -> {target}"
                );
            }
        }
    }
}

#[test]
fn test_floyd_warshall_cost_matches_dijkstra() {
    for seed in 0..150 {
        let graph = random_graph(seed);
        let table = AllPairs::compute(&graph, &SearchOptions::default());
        for source in 0..graph.len() {
            for target in 0..graph.len() {
                let dijkstra = run(Algorithm::Dijkstra, &graph, source, target);
                let floyd = run(Algorithm::FloydWarshall, &graph, source, target);
                assert_eq!(floyd.min_cost(), dijkstra.min_cost(), "seed {seed}");
                assert_eq!(table.distance(source, target), dijkstra.min_cost());
                assert_eq!(path_set(&floyd), path_set(&dijkstra), "seed {seed}");
            }
        }
    }
}

#[test]
fn test_bfs_paths_share_minimum_hop_count() {
    for seed in 0..150 {
        let graph = random_graph(seed);
        for source in 0..graph.len() {
            for target in 0..graph.len() {
                let bfs = run(Algorithm::Bfs, &graph, source, target);
                let dfs = run(Algorithm::Dfs, &graph, source, target);

                let hops: BTreeSet<usize> = bfs.paths.iter().map(|p| p.hops()).collect();
                assert!(hops.len() <= 1, "seed {seed}: mixed hop counts {hops:?}");

                // DFS sees every simple path, so it knows the true minimum hop count
                let fewest = dfs.paths.iter().map(|p| p.hops()).min();
                assert_eq!(hops.into_iter().next(), fewest, "seed {seed}");

                let expected: BTreeSet<Vec<usize>> = dfs
                    .paths
                    .iter()
                    .filter(|p| Some(p.hops()) == fewest)
                    .map(|p| p.vertices.clone())
                    .collect();
                assert_eq!(path_set(&bfs), expected, "seed {seed}");
            }
        }
    }
}

#[test]
fn test_dfs_optimal_subset_matches_dijkstra() {
    for seed in 0..150 {
        let graph = random_graph(seed);
        for source in 0..graph.len() {
            for target in 0..graph.len() {
                let dfs = run(Algorithm::Dfs, &graph, source, target);
                let dijkstra = run(Algorithm::Dijkstra, &graph, source, target);
                let best: BTreeSet<Vec<usize>> =
                    dfs.optimal_paths().map(|p| p.vertices.clone()).collect();
                assert_eq!(best, path_set(&dijkstra), "seed {seed}");
            }
        }
    }
}

#[test]
fn test_reported_costs_match_edge_weights() {
    for seed in 0..100 {
        let graph = random_graph(seed);
        let target = graph.len() - 1;
        for algorithm in Algorithm::ALL {
            let result = run(algorithm, &graph, 0, target);
            for entry in &result.paths {
                assert_eq!(entry.vertices.first(), Some(&0));
                assert_eq!(entry.vertices.last(), Some(&target));
                assert_eq!(path_cost(&graph, &entry.vertices), entry.cost, "{algorithm}");
            }
        }
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_abcd_dfs_scenario() {
    let graph = named(
        &["A", "B", "C", "D"],
        false,
        &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0), (2, 3, 1.0)],
    );
    let result = run(Algorithm::Dfs, &graph, 0, 3);

    assert_eq!(result.paths.len(), 2);
    let cheap = result
        .paths
        .iter()
        .position(|p| p.vertices == vec![0, 1, 2, 3])
        .unwrap();
    let direct = result
        .paths
        .iter()
        .position(|p| p.vertices == vec![0, 2, 3])
        .unwrap();
    assert_eq!(result.paths[cheap].cost, 3.0);
    assert_eq!(result.paths[direct].cost, 6.0);
    assert!(result.is_optimal(cheap));
    assert!(!result.is_optimal(direct));
}

#[test]
fn test_bellman_ford_negative_cycle_leaves_graph_usable() {
    let graph = named(&["A", "B"], true, &[(0, 1, 1.0), (1, 0, -3.0)]);
    let before = graph.clone();

    let err = search(
        Algorithm::BellmanFord,
        &graph,
        0,
        1,
        SearchOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, StarpathError::NegativeCycleDetected));
    assert_eq!(graph, before);

    let dfs = run(Algorithm::Dfs, &graph, 0, 1);
    assert_eq!(dfs.paths.len(), 1);
    assert_eq!(dfs.min_cost(), Some(1.0));
    let bfs = run(Algorithm::Bfs, &graph, 0, 1);
    assert_eq!(bfs.paths[0].vertices, vec![0, 1]);
}

#[test]
fn test_empty_graph_scenario() {
    for directed in [true, false] {
        let graph = Graph::new(directed, true);
        for algorithm in Algorithm::ALL {
            let err = search(algorithm, &graph, 0, 0, SearchOptions::default()).unwrap_err();
            assert!(matches!(err, StarpathError::EmptyGraph));
        }
    }
}

#[test]
fn test_source_equals_target_scenario() {
    let graph = random_graph(7);
    for vertex in 0..graph.len() {
        for algorithm in Algorithm::ALL {
            let result = run(algorithm, &graph, vertex, vertex);
            assert_eq!(result.paths.len(), 1);
            assert_eq!(result.paths[0].vertices, vec![vertex]);
            assert_eq!(result.paths[0].cost, 0.0);
            assert_eq!(result.optimal, vec![0]);
        }
    }
}

#[test]
fn test_search_after_vertex_removal_uses_shifted_indices() {
    let mut graph = named(
        &["Sun", "Mercury", "Venus", "Earth"],
        false,
        &[(0, 1, 0.4), (0, 2, 0.5), (0, 3, 1.0), (2, 3, 0.5)],
    );
    graph.remove_vertex(1).unwrap();

    let sun = graph.find_vertex("sun").unwrap();
    let earth = graph.find_vertex("earth").unwrap();
    assert_eq!((sun, earth), (0, 2));

    let result = run(Algorithm::Dijkstra, &graph, sun, earth);
    let routes: BTreeSet<Vec<String>> = result
        .paths
        .iter()
        .map(|p| {
            p.vertices
                .iter()
                .map(|&i| graph.vertex(i).unwrap().name.clone())
                .collect()
        })
        .collect();
    let expected: BTreeSet<Vec<String>> = [vec!["Sun", "Earth"], vec!["Sun", "Venus", "Earth"]]
        .into_iter()
        .map(|names| names.into_iter().map(String::from).collect())
        .collect();
    assert_eq!(routes, expected);
    assert_eq!(result.min_cost(), Some(1.0));
}

#[test]
fn test_require_path_on_disconnected_graph() {
    let graph = named(&["Sun", "Sirius"], false, &[]);
    for algorithm in Algorithm::ALL {
        let result = run(algorithm, &graph, 0, 1);
        assert!(matches!(
            result.require_path(),
            Err(StarpathError::NoPathFound { from: 0, to: 1 })
        ));
    }
}
