//! Reads the whitespace-token text format into an in-memory graph.
//!
//! ```text
//! D
//! A,B,C,D
//! (A,B) (B,C)
//! (C,D)
//! ```
//!
//! Token 0 is `D` for a directed graph; anything else (conventionally `G`)
//! means undirected. Token 1 is the comma-separated vertex list. Every
//! remaining token is an `(a,b)` edge. Line breaks carry no meaning.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{Edge, DIRECTED_MARKER};

/// Reader for text graph files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        let graph = Self::read_from_str(&text)?;
        log::debug!(
            "Loaded {} ({} vertices, {} edges)",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::read_from_str(&text)
    }

    /// Parse text into a Graph.
    pub fn read_from_str(text: &str) -> GraphResult<Graph> {
        let mut tokens = text.split_whitespace();

        let header = tokens.next().ok_or(GraphError::MissingHeader)?;
        let mut graph = Graph::new(header == DIRECTED_MARKER);

        let vertex_list = tokens.next().ok_or(GraphError::MissingVertices)?;
        for id in vertex_list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            graph.add_vertex(id)?;
        }

        for token in tokens {
            let edge = Edge::parse_token(token)
                .ok_or_else(|| GraphError::MalformedEdge(token.to_string()))?;
            graph.add_edge(&edge.source, &edge.target)?;
        }

        Ok(graph)
    }
}
