//! Integration tests for `VertexGraph`.

use trellis::{GraphError, VertexGraph};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trellis=trace"))
        .with_test_writer()
        .try_init();
}

fn assert_valid_path(graph: &VertexGraph, path: &[usize], source: usize, target: usize) {
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&target));
    for hop in path.windows(2) {
        assert!(graph.has_edge(hop[0], hop[1]), "missing edge {} -> {}", hop[0], hop[1]);
    }
}

#[test]
fn test_edge_idempotence_and_self_loops() {
    init_tracing();
    let mut graph = VertexGraph::new();
    assert!(graph.add_edge(1, 2));
    assert!(graph.add_edge(1, 2));
    assert_eq!(graph.edge_count(), 1);

    assert!(!graph.add_edge(4, 4));
    assert!(!graph.add_undirected_edge(4, 4));
    assert_eq!(graph.edge_count(), 1);

    assert!(!graph.add_edge(0, 100));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_bfs_on_directed_chain() {
    let mut graph = VertexGraph::with_vertices(4);
    graph.add_edge(0, 1);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);

    assert_eq!(graph.iterative_bfs(0), Ok(vec![0, 1, 2, 3]));
    assert_eq!(graph.iterative_dfs(0), Ok(vec![0, 1, 2, 3]));
    assert_eq!(graph.iterative_bfs(3), Ok(vec![3]));
}

#[test]
fn test_shortest_path_picks_fewest_hops() {
    init_tracing();
    let mut graph = VertexGraph::with_vertices(5);
    for (a, b) in [(0, 1), (1, 2), (2, 3), (0, 4), (4, 3)] {
        assert!(graph.add_undirected_edge(a, b));
    }
    assert_eq!(graph.edge_count(), 10);

    let path = graph.shortest_path(0, 3).unwrap();
    assert_eq!(path.len(), 3);
    assert_valid_path(&graph, &path, 0, 3);

    let back = graph.shortest_path(3, 0).unwrap();
    assert_eq!(back.len(), 3);
    assert_valid_path(&graph, &back, 3, 0);
}

#[test]
fn test_unreachable_target() {
    let mut graph = VertexGraph::new();
    graph.add_undirected_edge(0, 1);
    graph.add_undirected_edge(1, 2);

    assert_eq!(graph.shortest_path(0, 99), Ok(vec![]));
    assert_eq!(graph.shortest_path(0, 0), Ok(vec![]));
}

#[test]
fn test_removed_edge_breaks_path() {
    let mut graph = VertexGraph::with_vertices(3);
    graph.add_undirected_edge(0, 1);
    graph.add_undirected_edge(1, 2);
    assert!(graph.remove_edge(1, 2));

    assert_eq!(graph.shortest_path(0, 2), Ok(vec![]));
    assert_eq!(graph.shortest_path(2, 0), Ok(vec![2, 1, 0]));
    assert_eq!(graph.iterative_bfs(0), Ok(vec![0, 1]));
}

#[test]
fn test_traversal_rejects_out_of_range_start() {
    init_tracing();
    let graph = VertexGraph::with_vertices(10);
    let err = graph.iterative_dfs(10).unwrap_err();
    assert_eq!(err, GraphError::VertexOutOfBounds { vertex: 10, bound: 10 });
    assert_eq!(
        err.to_string(),
        "vertex 10 out of bounds for a graph of 10 vertex ids"
    );
    assert!(graph.iterative_bfs(usize::MAX).is_err());
    assert!(graph.shortest_path(0, 11).is_err());
}

#[test]
fn test_dfs_handles_deep_chain() {
    let n = 200_000;
    let mut graph = VertexGraph::with_vertices(n);
    for v in 0..n - 1 {
        graph.add_edge(v, v + 1);
    }
    let order = graph.iterative_dfs(0).unwrap();
    assert_eq!(order.len(), n);
    assert_eq!(order.last(), Some(&(n - 1)));
}

#[test]
fn test_statistics_serialize() {
    let mut graph = VertexGraph::with_vertices(2);
    graph.add_undirected_edge(0, 1);
    let json = serde_json::to_value(graph.statistics()).unwrap();
    assert_eq!(json["vertex_count"], 2);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["max_degree"], 1);
}
