//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::format::GraphReader;
use crate::graph::{Graph, GraphBuilder, TraversalDirection};
use crate::types::{Edge, GraphResult};

/// Vertices of the built-in sample graph, in insertion order.
pub const SAMPLE_VERTICES: [&str; 8] = ["A", "E", "B", "C", "D", "H", "G", "F"];

/// Edges of the built-in sample graph.
pub const SAMPLE_EDGES: [(&str, &str); 6] = [
    ("A", "B"),
    ("B", "C"),
    ("B", "D"),
    ("D", "E"),
    ("E", "F"),
    ("H", "G"),
];

/// The directed sample graph used when no file is given.
pub fn sample_graph() -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    builder.directed(true).vertices(SAMPLE_VERTICES);
    for (source, target) in SAMPLE_EDGES {
        builder.edge(source, target);
    }
    builder.build()
}

/// Load a graph from `path`, or the sample graph when no path is given.
pub fn load_graph(path: Option<&Path>) -> GraphResult<Graph> {
    match path {
        Some(path) => GraphReader::read_from_file(path),
        None => sample_graph(),
    }
}

/// Vertices and edges of a graph.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// Whether the graph is directed.
    pub directed: bool,
    /// Vertex ids in insertion order.
    pub vertices: Vec<String>,
    /// Every stored adjacency entry.
    pub edges: Vec<Edge>,
}

impl GraphSummary {
    /// Summarize a graph.
    pub fn of(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            vertices: graph
                .get_vertices()
                .iter()
                .map(|v| v.id().to_string())
                .collect(),
            edges: graph.edges(),
        }
    }
}

/// Everything the `report` command prints.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Vertices and edges.
    #[serde(flatten)]
    pub summary: GraphSummary,
    /// First vertex in insertion order, the start of every query.
    pub first: Option<String>,
    /// Last vertex in insertion order, the shortest-path target.
    pub last: Option<String>,
    /// BFS order from `first`.
    pub bfs: Vec<String>,
    /// Shortest path from `first` to `last`.
    pub shortest_path: Option<Vec<String>>,
    /// Vertices exactly two edges from `first`.
    pub two_away: Vec<String>,
    /// Whether the part reachable from `first` is bipartite.
    pub bipartite: Option<bool>,
    /// Components following stored adjacency.
    pub components: Vec<Vec<String>>,
}

fn owned(ids: Vec<&str>) -> Vec<String> {
    ids.into_iter().map(str::to_string).collect()
}

/// Run every query from the first vertex of the graph.
///
/// An empty graph yields a report with only the (empty) summary.
pub fn build_report(graph: &Graph) -> GraphResult<Report> {
    let summary = GraphSummary::of(graph);
    let vertices = graph.get_vertices();
    let (first, last) = match (vertices.first(), vertices.last()) {
        (Some(first), Some(last)) => (first.id(), last.id()),
        _ => {
            return Ok(Report {
                summary,
                first: None,
                last: None,
                bfs: Vec::new(),
                shortest_path: None,
                two_away: Vec::new(),
                bipartite: None,
                components: Vec::new(),
            })
        }
    };

    Ok(Report {
        bfs: owned(graph.bfs_order(first)?),
        shortest_path: graph.find_shortest_path(first, last)?.map(owned),
        two_away: owned(graph.find_vertices_n_away(first, 2)?),
        bipartite: Some(graph.is_bipartite(first)?),
        components: graph
            .get_connected_components()
            .into_iter()
            .map(owned)
            .collect(),
        first: Some(first.to_string()),
        last: Some(last.to_string()),
        summary,
    })
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn print_summary(summary: &GraphSummary) {
    println!("The vertices are: [{}] \n", summary.vertices.join(", "));
    println!("The edges are:");
    for edge in &summary.edges {
        println!("{}", edge);
    }
}

/// List vertices and edges.
pub fn cmd_info(graph: &Graph, json: bool) -> GraphResult<()> {
    let summary = GraphSummary::of(graph);
    if json {
        print_json(&summary);
    } else {
        println!(
            "{} graph, {} vertices, {} edges",
            if summary.directed { "Directed" } else { "Undirected" },
            graph.vertex_count(),
            graph.edge_count()
        );
        print_summary(&summary);
    }
    Ok(())
}

/// Breadth-first traversal.
pub fn cmd_bfs(graph: &Graph, start: &str, json: bool) -> GraphResult<()> {
    if json {
        print_json(&serde_json::json!({"start": start, "order": graph.bfs_order(start)?}));
    } else {
        println!("Performing BFS traversal...");
        graph.bfs_traversal(start, |v| println!("Processing vertex {}", v.id()))?;
    }
    Ok(())
}

/// Depth-first traversal.
pub fn cmd_dfs(graph: &Graph, start: &str, json: bool) -> GraphResult<()> {
    if json {
        print_json(&serde_json::json!({"start": start, "order": graph.dfs_order(start)?}));
    } else {
        println!("Performing DFS traversal...");
        graph.dfs_traversal(start, |v| println!("Visiting vertex {}", v.id()))?;
    }
    Ok(())
}

/// Shortest path between two vertices.
pub fn cmd_path(graph: &Graph, start: &str, target: &str, json: bool) -> GraphResult<()> {
    let path = graph.find_shortest_path(start, target)?;
    if json {
        print_json(&serde_json::json!({"start": start, "target": target, "path": path}));
    } else {
        println!("Finding shortest path from vertex {} to vertex {}...", start, target);
        match path {
            Some(path) => println!("[{}]", path.join(", ")),
            None => println!("No path from {} to {}", start, target),
        }
    }
    Ok(())
}

/// Vertices at an exact distance.
pub fn cmd_nearby(graph: &Graph, start: &str, distance: usize, json: bool) -> GraphResult<()> {
    let found = graph.find_vertices_n_away(start, distance)?;
    if json {
        print_json(&serde_json::json!({"start": start, "distance": distance, "vertices": found}));
    } else {
        println!("Finding all vertices distance {} away...", distance);
        println!("[{}]", found.join(", "));
    }
    Ok(())
}

/// Bipartiteness of the part reachable from `start`.
pub fn cmd_bipartite(graph: &Graph, start: &str, json: bool) -> GraphResult<()> {
    let bipartite = graph.is_bipartite(start)?;
    if json {
        print_json(&serde_json::json!({"start": start, "bipartite": bipartite}));
    } else {
        println!("Graph is {}Bipartite", if bipartite { "" } else { "not " });
    }
    Ok(())
}

/// Component partition.
pub fn cmd_components(graph: &Graph, direction: TraversalDirection, json: bool) -> GraphResult<()> {
    let components = graph.get_connected_components_by(direction);
    if json {
        print_json(&serde_json::json!({
            "direction": direction.name(),
            "components": components,
        }));
    } else {
        println!(
            "{} components ({} adjacency):",
            components.len(),
            direction.name()
        );
        for component in &components {
            println!("  [{}]", component.join(", "));
        }
    }
    Ok(())
}

/// The full walkthrough: summary, then every query from the first vertex.
pub fn cmd_report(graph: &Graph, json: bool) -> GraphResult<()> {
    let report = build_report(graph)?;
    if json {
        print_json(&report);
        return Ok(());
    }

    print_summary(&report.summary);
    let (Some(first), Some(last)) = (&report.first, &report.last) else {
        println!("Graph is empty; nothing to search");
        return Ok(());
    };

    println!("Performing BFS traversal...");
    for id in &report.bfs {
        println!("Processing vertex {}", id);
    }

    println!("Finding shortest path from vertex {} to vertex {}...", first, last);
    match &report.shortest_path {
        Some(path) => println!("[{}]", path.join(", ")),
        None => println!("No path"),
    }

    println!("Finding all vertices distance 2 away...");
    println!("[{}]", report.two_away.join(", "));

    let bipartite = report.bipartite.unwrap_or(false);
    println!("Graph is {}Bipartite", if bipartite { "" } else { "not " });

    println!("Connected components:");
    for component in &report.components {
        println!("  [{}]", component.join(", "));
    }
    Ok(())
}
