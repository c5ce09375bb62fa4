use super::*;
use crate::error::StarpathError;

fn assert_square(graph: &Graph) {
    assert_eq!(graph.matrix().len(), graph.len());
    for row in graph.matrix() {
        assert_eq!(row.len(), graph.len());
    }
}

fn assert_symmetric(graph: &Graph) {
    for u in 0..graph.len() {
        for v in 0..graph.len() {
            assert_eq!(graph.get_edge(u, v), graph.get_edge(v, u), "({u}, {v})");
        }
    }
}

fn planets(directed: bool) -> Graph {
    let mut graph = Graph::new(directed, true);
    for name in ["Mercury", "Venus", "Earth", "Mars"] {
        graph.add_vertex(Vertex::new(name)).unwrap();
    }
    graph
}

/// Test that add_vertex returns sequential indices and grows the matrix
#[test]
fn test_add_vertex_grows_matrix() {
    let mut graph = Graph::new(true, true);
    assert!(graph.is_empty());
    assert_eq!(graph.add_vertex(Vertex::new("Sun")).unwrap(), 0);
    assert_eq!(graph.add_vertex(Vertex::new("Moon")).unwrap(), 1);
    assert_eq!(graph.len(), 2);
    assert_square(&graph);
    assert!(graph.matrix().iter().flatten().all(|&w| w == 0.0));
}

/// Test that duplicate names are rejected case-insensitively without mutating
#[test]
fn test_add_vertex_duplicate_name() {
    let mut graph = planets(false);
    graph.add_edge(0, 1, 2.0);
    let before = graph.clone();

    let err = graph.add_vertex(Vertex::new("  eARTH ")).unwrap_err();
    assert!(matches!(err, StarpathError::DuplicateName { .. }));
    assert_eq!(graph, before);
}

/// Test that names are trimmed on insert
#[test]
fn test_add_vertex_trims_name() {
    let mut graph = Graph::new(false, true);
    graph.add_vertex(Vertex::new("  Pluto ")).unwrap();
    assert_eq!(graph.vertex(0).unwrap().name, "Pluto");
    assert_eq!(graph.find_vertex("PLUTO"), Some(0));
    assert_eq!(graph.find_vertex("Ceres"), None);
}

/// Test that the matrix stays square across add/remove sequences
#[test]
fn test_matrix_square_across_mutations() {
    let mut graph = Graph::new(true, true);
    for i in 0..6 {
        graph.add_vertex(Vertex::new(format!("v{i}"))).unwrap();
        assert_square(&graph);
    }
    for i in 0..5 {
        graph.add_edge(i, i + 1, (i + 1) as f64);
    }
    graph.remove_vertex(2).unwrap();
    assert_square(&graph);
    graph.remove_vertex(0).unwrap();
    assert_square(&graph);
    graph.add_vertex(Vertex::new("late")).unwrap();
    assert_square(&graph);
    while !graph.is_empty() {
        graph.remove_vertex(graph.len() - 1).unwrap();
        assert_square(&graph);
    }
}

/// Test that removal shifts higher indices down and keeps their edges
#[test]
fn test_remove_vertex_reindexes() {
    let mut graph = planets(true);
    graph.add_edge(2, 3, 0.5);
    graph.add_edge(0, 2, 1.5);

    let removed = graph.remove_vertex(1).unwrap();
    assert_eq!(removed.name, "Venus");

    // Earth and Mars moved from 2, 3 to 1, 2
    assert_eq!(graph.vertex(1).unwrap().name, "Earth");
    assert_eq!(graph.vertex(2).unwrap().name, "Mars");
    assert_eq!(graph.find_vertex("mars"), Some(2));
    assert_eq!(graph.get_edge(1, 2), 0.5);
    assert_eq!(graph.get_edge(0, 1), 1.5);

    // The old index 3 is now stale
    assert!(matches!(
        graph.vertex(3),
        Err(StarpathError::InvalidIndex { index: 3, len: 3 })
    ));
}

/// Test that removing an out-of-range vertex fails
#[test]
fn test_remove_vertex_invalid_index() {
    let mut graph = planets(false);
    assert!(matches!(
        graph.remove_vertex(4),
        Err(StarpathError::InvalidIndex { index: 4, len: 4 })
    ));
    assert_eq!(graph.len(), 4);
}

/// Test that update_vertex merges fields in place without touching edges
#[test]
fn test_update_vertex_merges() {
    let mut graph = planets(false);
    graph.add_edge(2, 3, 1.0);
    graph
        .update_vertex(2, VertexUpdate::new().magnitude(-3.99))
        .unwrap();
    graph
        .update_vertex(2, VertexUpdate::new().category("Solar System"))
        .unwrap();

    let earth = graph.vertex(2).unwrap();
    assert_eq!(earth.name, "Earth");
    assert_eq!(earth.magnitude, Some(-3.99));
    assert_eq!(earth.category.as_deref(), Some("Solar System"));
    assert_eq!(graph.get_edge(2, 3), 1.0);
}

/// Test that renames keep names unique but allow re-casing the same vertex
#[test]
fn test_update_vertex_rename_rules() {
    let mut graph = planets(false);
    assert!(matches!(
        graph.update_vertex(0, VertexUpdate::new().name("venus")),
        Err(StarpathError::DuplicateName { .. })
    ));
    graph
        .update_vertex(0, VertexUpdate::new().name("MERCURY"))
        .unwrap();
    assert_eq!(graph.vertex(0).unwrap().name, "MERCURY");
    assert!(matches!(
        graph.update_vertex(9, VertexUpdate::new()),
        Err(StarpathError::InvalidIndex { .. })
    ));
}

/// Test that add_edge tolerates invalid input as a no-op
#[test]
fn test_add_edge_tolerates_invalid_input() {
    let mut graph = planets(true);
    let before = graph.clone();
    graph.add_edge(0, 7, 1.0);
    graph.add_edge(7, 0, 1.0);
    graph.add_edge(0, 1, f64::NAN);
    graph.add_edge(0, 1, f64::INFINITY);
    assert_eq!(graph, before);
}

/// Test that undirected edges are mirrored through every mutation
#[test]
fn test_undirected_symmetry() {
    let mut graph = planets(false);
    graph.add_edge(0, 1, 1.0);
    assert_symmetric(&graph);
    graph.add_edge(3, 1, 2.5);
    assert_symmetric(&graph);
    graph.update_edge(1, 3, 4.0).unwrap();
    assert_symmetric(&graph);
    assert_eq!(graph.get_edge(3, 1), 4.0);
    graph.remove_edge(1, 0).unwrap();
    assert_symmetric(&graph);
    graph.remove_vertex(2).unwrap();
    assert_symmetric(&graph);
}

/// Test that directed edges are one-way
#[test]
fn test_directed_edges_one_way() {
    let mut graph = planets(true);
    graph.add_edge(0, 1, 3.0);
    assert_eq!(graph.get_edge(0, 1), 3.0);
    assert_eq!(graph.get_edge(1, 0), 0.0);
    assert_eq!(graph.edge(1, 0), None);
}

/// Test that unweighted graphs store 1.0 and refuse weight updates
#[test]
fn test_unweighted_graph() {
    let mut graph = Graph::new(false, false);
    graph.add_vertex(Vertex::new("a")).unwrap();
    graph.add_vertex(Vertex::new("b")).unwrap();
    graph.add_edge(0, 1, 42.0);
    assert_eq!(graph.get_edge(0, 1), 1.0);
    assert!(matches!(
        graph.update_edge(0, 1, 3.0),
        Err(StarpathError::UnweightedEdgeUpdate)
    ));
}

/// Test the update_edge failure modes
#[test]
fn test_update_edge_errors() {
    let mut graph = planets(true);
    graph.add_edge(0, 1, 1.0);
    assert!(matches!(
        graph.update_edge(1, 0, 2.0),
        Err(StarpathError::EdgeNotFound { from: 1, to: 0 })
    ));
    assert!(matches!(
        graph.update_edge(0, 5, 2.0),
        Err(StarpathError::InvalidIndex { index: 5, .. })
    ));
    assert!(matches!(
        graph.update_edge(0, 1, 0.0),
        Err(StarpathError::InvalidWeight { .. })
    ));
    graph.update_edge(0, 1, -2.0).unwrap();
    assert_eq!(graph.get_edge(0, 1), -2.0);
}

/// Test that remove_edge returns the weight and reports missing edges
#[test]
fn test_remove_edge() {
    let mut graph = planets(true);
    graph.add_edge(2, 3, 0.52);
    assert_eq!(graph.remove_edge(2, 3).unwrap(), 0.52);
    assert_eq!(graph.get_edge(2, 3), 0.0);
    assert!(matches!(
        graph.remove_edge(2, 3),
        Err(StarpathError::EdgeNotFound { .. })
    ));
    assert!(matches!(
        graph.remove_edge(2, 30),
        Err(StarpathError::InvalidIndex { .. })
    ));
}

/// Test get_edge on out-of-range indices
#[test]
fn test_get_edge_out_of_range_is_zero() {
    let graph = planets(true);
    assert_eq!(graph.get_edge(10, 0), 0.0);
    assert_eq!(graph.get_edge(0, 10), 0.0);
}

/// Test degree queries for directed and undirected graphs
#[test]
fn test_degrees() {
    let mut directed = planets(true);
    directed.add_edge(0, 1, 1.0);
    directed.add_edge(0, 2, 1.0);
    directed.add_edge(3, 0, 1.0);
    assert_eq!(
        directed.degree(0).unwrap(),
        Degree {
            in_degree: 1,
            out_degree: 2
        }
    );
    assert_eq!(directed.degree(0).unwrap().total(), 3);
    assert_eq!(directed.edge_count(), 3);

    let mut undirected = planets(false);
    undirected.add_edge(0, 1, 1.0);
    undirected.add_edge(0, 2, 1.0);
    for i in 0..undirected.len() {
        let degree = undirected.degree(i).unwrap();
        assert_eq!(degree.in_degree, degree.out_degree);
    }
    assert_eq!(undirected.edge_count(), 2);
    assert!(undirected.in_degree(4).is_err());
}

/// Test self-loop detection and counting
#[test]
fn test_self_loop() {
    let mut graph = planets(false);
    assert!(!graph.has_self_loop());
    graph.add_edge(1, 1, 2.0);
    assert!(graph.has_self_loop());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(1).unwrap().out_degree, 1);
}

/// Test listing and neighbor iteration
#[test]
fn test_list_vertices_and_neighbors() {
    let mut graph = planets(true);
    graph.add_edge(1, 3, 2.0);
    graph.add_edge(1, 0, 1.0);

    let names: Vec<(usize, &str)> = graph
        .list_vertices()
        .map(|(i, v)| (i, v.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![(0, "Mercury"), (1, "Venus"), (2, "Earth"), (3, "Mars")]
    );

    let neighbors: Vec<(usize, f64)> = graph.neighbors(1).collect();
    assert_eq!(neighbors, vec![(0, 1.0), (3, 2.0)]);
    let edges: Vec<(usize, usize, f64)> = graph.edges().collect();
    assert_eq!(edges, vec![(1, 0, 1.0), (1, 3, 2.0)]);
}

/// Test clear keeps flags
#[test]
fn test_clear() {
    let mut graph = planets(true);
    graph.add_edge(0, 1, 1.0);
    graph.clear();
    assert!(graph.is_empty());
    assert!(graph.matrix().is_empty());
    assert!(graph.is_directed());
    assert!(graph.is_weighted());
}
