//! Phase 2 tests: Traversals, shortest paths, exact-distance frontiers.

use std::collections::{HashMap, HashSet, VecDeque};

use graph_walk::graph::{bfs_traverse, dfs_traverse, Graph, GraphBuilder};
use graph_walk::types::error::GraphError;

// ==================== Helper ====================

/// Directed sample: A->B, B->C, B->D, D->E, E->F, H->G.
fn build_sample() -> Graph {
    GraphBuilder::new()
        .vertices(["A", "B", "C", "D", "E", "F", "G", "H"])
        .edge("A", "B")
        .edge("B", "C")
        .edge("B", "D")
        .edge("D", "E")
        .edge("E", "F")
        .edge("H", "G")
        .build()
        .unwrap()
}

/// Undirected diamond with a tail: A-B, A-C, B-D, C-D, D-E.
fn build_diamond() -> Graph {
    GraphBuilder::new()
        .directed(false)
        .vertices(["A", "B", "C", "D", "E"])
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "D")
        .edge("C", "D")
        .edge("D", "E")
        .build()
        .unwrap()
}

/// Reference BFS depths for property checks.
fn depths_from(graph: &Graph, start: &str) -> HashMap<String, usize> {
    let mut depths = HashMap::new();
    let mut queue = VecDeque::new();
    depths.insert(start.to_string(), 0);
    queue.push_back(start.to_string());
    while let Some(id) = queue.pop_front() {
        let depth = depths[&id];
        let vertex = graph.get_vertex(&id).unwrap();
        for n in graph.neighbors(vertex) {
            if !depths.contains_key(n.id()) {
                depths.insert(n.id().to_string(), depth + 1);
                queue.push_back(n.id().to_string());
            }
        }
    }
    depths
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_fifo_order() {
    let graph = build_sample();
    assert_eq!(graph.bfs_order("A").unwrap(), vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_bfs_visits_each_vertex_once() {
    let graph = build_diamond();
    let mut visits: Vec<String> = Vec::new();
    graph
        .bfs_traversal("A", |v| visits.push(v.id().to_string()))
        .unwrap();

    assert_eq!(visits, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_bfs_handles_cycles() {
    let graph = GraphBuilder::new()
        .vertices(["1", "2", "3"])
        .edge("1", "2")
        .edge("2", "3")
        .edge("3", "1")
        .build()
        .unwrap();
    assert_eq!(graph.bfs_order("2").unwrap(), vec!["2", "3", "1"]);
}

#[test]
fn test_bfs_missing_start() {
    let graph = build_sample();
    let mut called = false;
    let result = bfs_traverse(&graph, "Z", |_| called = true);
    assert!(matches!(result, Err(GraphError::VertexNotFound(id)) if id == "Z"));
    assert!(!called);
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_preorder() {
    let graph = build_sample();
    assert_eq!(graph.dfs_order("A").unwrap(), vec!["A", "B", "C", "D", "E", "F"]);

    let graph = build_diamond();
    // A -> B -> D (via B) -> C (D's first unvisited neighbor) -> E
    assert_eq!(graph.dfs_order("A").unwrap(), vec!["A", "B", "D", "C", "E"]);
}

#[test]
fn test_dfs_differs_from_bfs() {
    let graph = GraphBuilder::new()
        .vertices(["root", "l", "r", "ll", "rl"])
        .edge("root", "l")
        .edge("root", "r")
        .edge("l", "ll")
        .edge("r", "rl")
        .build()
        .unwrap();

    assert_eq!(graph.dfs_order("root").unwrap(), vec!["root", "l", "ll", "r", "rl"]);
    assert_eq!(graph.bfs_order("root").unwrap(), vec!["root", "l", "r", "ll", "rl"]);
}

#[test]
fn test_dfs_marks_before_descending() {
    // A -> B, A -> C, B -> C: C is reached through B first and must not be
    // visited again when A's cursor reaches it.
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "C")
        .build()
        .unwrap();

    let mut visits = Vec::new();
    dfs_traverse(&graph, "A", |v| visits.push(v.id().to_string())).unwrap();
    assert_eq!(visits, vec!["A", "B", "C"]);
}

#[test]
fn test_dfs_deep_chain_does_not_overflow() {
    let mut graph = Graph::directed();
    let n = 200_000;
    for i in 0..n {
        graph.add_vertex(i.to_string()).unwrap();
    }
    for i in 1..n {
        graph.add_edge(&(i - 1).to_string(), &i.to_string()).unwrap();
    }

    let mut count = 0usize;
    graph.dfs_traversal("0", |_| count += 1).unwrap();
    assert_eq!(count, n);
}

#[test]
fn test_dfs_missing_start() {
    let graph = build_sample();
    assert!(matches!(
        graph.dfs_order("nope"),
        Err(GraphError::VertexNotFound(_))
    ));
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_path_sample() {
    let graph = build_sample();
    assert_eq!(
        graph.find_shortest_path("A", "F").unwrap(),
        Some(vec!["A", "B", "D", "E", "F"])
    );
}

#[test]
fn test_shortest_path_to_self() {
    let graph = build_sample();
    assert_eq!(graph.find_shortest_path("C", "C").unwrap(), Some(vec!["C"]));
}

#[test]
fn test_shortest_path_unreachable_is_none() {
    let graph = build_sample();
    assert_eq!(graph.find_shortest_path("A", "G").unwrap(), None);
    // Edges are one-way
    assert_eq!(graph.find_shortest_path("F", "A").unwrap(), None);
}

#[test]
fn test_shortest_path_missing_endpoint() {
    let graph = build_sample();
    assert!(matches!(
        graph.find_shortest_path("Z", "A"),
        Err(GraphError::VertexNotFound(id)) if id == "Z"
    ));
    assert!(matches!(
        graph.find_shortest_path("A", "Z"),
        Err(GraphError::VertexNotFound(id)) if id == "Z"
    ));
}

#[test]
fn test_shortest_path_tie_breaks_on_first_discovery() {
    let graph = build_diamond();
    // A-B-D and A-C-D are both length 2; B is discovered first.
    assert_eq!(
        graph.find_shortest_path("A", "E").unwrap(),
        Some(vec!["A", "B", "D", "E"])
    );
}

#[test]
fn test_shortest_path_prefers_fewer_edges() {
    let graph = GraphBuilder::new()
        .vertices(["S", "a", "b", "c", "T"])
        .edge("S", "a")
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "T")
        .edge("S", "T")
        .build()
        .unwrap();
    assert_eq!(graph.find_shortest_path("S", "T").unwrap(), Some(vec!["S", "T"]));
}

#[test]
fn test_shortest_path_length_matches_bfs_depth() {
    let graph = GraphBuilder::new()
        .directed(false)
        .vertices((0..12).map(|i| i.to_string()))
        .edge("0", "1")
        .edge("1", "2")
        .edge("2", "3")
        .edge("3", "4")
        .edge("0", "5")
        .edge("5", "6")
        .edge("6", "3")
        .edge("4", "7")
        .edge("7", "8")
        .edge("2", "8")
        .edge("9", "10")
        .build()
        .unwrap();

    let depths = depths_from(&graph, "0");
    for target in graph.get_vertices() {
        let path = graph.find_shortest_path("0", target.id()).unwrap();
        match depths.get(target.id()) {
            Some(&depth) => {
                let path = path.unwrap();
                assert_eq!(path.len(), depth + 1, "path to {}", target.id());
                assert_eq!(path.first(), Some(&"0"));
                assert_eq!(path.last(), Some(&target.id()));
                let unique: HashSet<&&str> = path.iter().collect();
                assert_eq!(unique.len(), path.len());
                for step in path.windows(2) {
                    let from = graph.get_vertex(step[0]).unwrap();
                    let to = graph.get_vertex(step[1]).unwrap();
                    assert!(from.has_neighbor(to.index()));
                }
            }
            None => assert!(path.is_none()),
        }
    }
}

// ==================== N-Away Tests ====================

#[test]
fn test_n_away_zero_is_start() {
    let graph = build_sample();
    assert_eq!(graph.find_vertices_n_away("B", 0).unwrap(), vec!["B"]);
}

#[test]
fn test_n_away_sample() {
    let graph = build_sample();
    assert_eq!(graph.find_vertices_n_away("A", 1).unwrap(), vec!["B"]);
    // Both C and D sit exactly two edges from A.
    assert_eq!(graph.find_vertices_n_away("A", 2).unwrap(), vec!["C", "D"]);
    assert_eq!(graph.find_vertices_n_away("A", 4).unwrap(), vec!["F"]);
}

#[test]
fn test_n_away_beyond_diameter_is_empty() {
    let graph = build_sample();
    assert!(graph.find_vertices_n_away("A", 5).unwrap().is_empty());
    assert!(graph.find_vertices_n_away("G", 1).unwrap().is_empty());
}

#[test]
fn test_n_away_is_exact_not_at_most() {
    let graph = build_diamond();
    // D is reachable in 2 from A via two paths; reported once.
    assert_eq!(graph.find_vertices_n_away("A", 2).unwrap(), vec!["D"]);
    // Undirected: the walk back to A must not count as distance 2.
    assert!(!graph.find_vertices_n_away("A", 2).unwrap().contains(&"A"));
    assert_eq!(graph.find_vertices_n_away("A", 3).unwrap(), vec!["E"]);
}

#[test]
fn test_n_away_excludes_shorter_routes() {
    // A->B, A->C, C->B: B is 1 away even though A->C->B has length 2.
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("A", "C")
        .edge("C", "B")
        .build()
        .unwrap();
    assert!(graph.find_vertices_n_away("A", 2).unwrap().is_empty());
}

#[test]
fn test_n_away_matches_bfs_depth() {
    let graph = build_diamond();
    let depths = depths_from(&graph, "B");
    for distance in 0..5 {
        let mut expected: Vec<&str> = depths
            .iter()
            .filter(|(_, d)| **d == distance)
            .map(|(id, _)| id.as_str())
            .collect();
        expected.sort_unstable();
        let mut found = graph.find_vertices_n_away("B", distance).unwrap();
        found.sort_unstable();
        assert_eq!(found, expected, "distance {}", distance);
    }
}

#[test]
fn test_n_away_missing_start() {
    let graph = build_sample();
    assert!(matches!(
        graph.find_vertices_n_away("Z", 1),
        Err(GraphError::VertexNotFound(_))
    ));
}
