//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges are recorded as given and applied in order by
/// [`build`](Self::build), which surfaces the same errors as
/// [`Graph::add_vertex`] and [`Graph::add_edge`].
pub struct GraphBuilder {
    directed: bool,
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new builder for a directed graph.
    pub fn new() -> Self {
        Self {
            directed: true,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Choose between a directed and an undirected graph.
    pub fn directed(&mut self, directed: bool) -> &mut Self {
        self.directed = directed;
        self
    }

    /// Add a vertex.
    pub fn vertex(&mut self, id: impl Into<String>) -> &mut Self {
        self.vertices.push(id.into());
        self
    }

    /// Add several vertices.
    pub fn vertices<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.edges.push((source.into(), target.into()));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.directed);
        for id in &self.vertices {
            graph.add_vertex(id.as_str())?;
        }
        for (source, target) in &self.edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
