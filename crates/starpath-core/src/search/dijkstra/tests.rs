use super::*;
use crate::graph::Vertex;

fn named_graph(names: &[&str], directed: bool) -> Graph {
    let mut graph = Graph::new(directed, true);
    for name in names {
        graph.add_vertex(Vertex::new(*name)).unwrap();
    }
    graph
}

/// Test that equal-cost routes are all kept
#[test]
fn test_dijkstra_keeps_every_tied_route() {
    // s -> a -> t and s -> b -> t both cost 2; s -> t costs 3
    let mut graph = named_graph(&["s", "a", "b", "t"], true);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 3, 1.0);
    graph.add_edge(0, 2, 1.5);
    graph.add_edge(2, 3, 0.5);
    graph.add_edge(0, 3, 3.0);

    let result = Dijkstra::default().search(&graph, 0, 3).unwrap();

    assert_eq!(result.paths.len(), 2);
    assert_eq!(result.optimal, vec![0, 1]);
    assert!(result.paths.iter().all(|p| p.cost == 2.0));
    let mut routes: Vec<Vec<usize>> = result.paths.iter().map(|p| p.vertices.clone()).collect();
    routes.sort();
    assert_eq!(routes, vec![vec![0, 1, 3], vec![0, 2, 3]]);
}

/// Test that ties compound across consecutive diamonds
#[test]
fn test_dijkstra_compounding_ties() {
    // Two diamonds in series: 0 -> {1,2} -> 3 -> {4,5} -> 6, all unit weights
    let mut graph = named_graph(&["0", "1", "2", "3", "4", "5", "6"], false);
    for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6)] {
        graph.add_edge(from, to, 1.0);
    }

    let result = Dijkstra::default().search(&graph, 0, 6).unwrap();
    assert_eq!(result.paths.len(), 4);
    assert_eq!(result.min_cost(), Some(4.0));
}

/// Test that a strict improvement replaces the earlier route list
#[test]
fn test_dijkstra_improvement_replaces_routes() {
    let mut graph = named_graph(&["s", "m", "t"], true);
    graph.add_edge(0, 2, 10.0);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 1.0);

    let result = Dijkstra::default().search(&graph, 0, 2).unwrap();
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.paths[0].vertices, vec![0, 1, 2]);
    assert_eq!(result.paths[0].cost, 2.0);
}

/// Test that unreachable targets produce an empty result
#[test]
fn test_dijkstra_unreachable() {
    let mut graph = named_graph(&["a", "b", "c"], true);
    graph.add_edge(1, 0, 1.0);

    let result = Dijkstra::default().search(&graph, 0, 2).unwrap();
    assert!(result.is_empty());
}

/// Test that negative weights are rejected by default
#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut graph = named_graph(&["a", "b", "c"], true);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(2, 1, -2.0);

    let err = Dijkstra::default().search(&graph, 0, 1).unwrap_err();
    assert!(matches!(
        err,
        StarpathError::NegativeEdgeWeight {
            from: 2,
            to: 1,
            ..
        }
    ));
}

/// Test that the negative-weight guard can be disabled
#[test]
fn test_dijkstra_unguarded_still_searches() {
    let mut graph = named_graph(&["a", "b", "c"], true);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(2, 1, -2.0);

    let options = SearchOptions {
        reject_negative_weights: false,
        ..Default::default()
    };
    let result = Dijkstra::new(options).search(&graph, 0, 1).unwrap();
    assert_eq!(result.paths[0].vertices, vec![0, 1]);
}

/// Test that source == target short-circuits even on graphs with negative edges
#[test]
fn test_dijkstra_trivial_before_weight_check() {
    let mut graph = named_graph(&["a", "b"], true);
    graph.add_edge(0, 1, -1.0);

    let result = Dijkstra::default().search(&graph, 1, 1).unwrap();
    assert_eq!(result.paths[0].vertices, vec![1]);
    assert_eq!(result.paths[0].cost, 0.0);
}
