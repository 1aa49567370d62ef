//! Vertices and their arena handles.

use std::collections::HashSet;

use serde::Serialize;

/// Handle of a vertex inside the arena of its owning [`Graph`](crate::Graph).
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexIndex(usize);

impl VertexIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the vertex in the graph's insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named vertex and its outgoing adjacency.
///
/// Neighbor links are non-owning [`VertexIndex`] handles into the same graph,
/// kept in first-insertion order. Vertices are created by
/// [`Graph::add_vertex`](crate::Graph::add_vertex) and gain neighbors only
/// through [`Graph::add_edge`](crate::Graph::add_edge).
#[derive(Debug, Clone)]
pub struct Vertex {
    id: String,
    index: VertexIndex,
    neighbors: Vec<VertexIndex>,
    neighbor_set: HashSet<VertexIndex>,
    incoming: Vec<VertexIndex>,
    incoming_set: HashSet<VertexIndex>,
}

impl Vertex {
    pub(crate) fn new(id: String, index: VertexIndex) -> Self {
        Self {
            id,
            index,
            neighbors: Vec::new(),
            neighbor_set: HashSet::new(),
            incoming: Vec::new(),
            incoming_set: HashSet::new(),
        }
    }

    /// The vertex id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// This vertex's handle in its graph.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Outgoing neighbor handles, in the order they were first added.
    pub fn neighbors(&self) -> &[VertexIndex] {
        &self.neighbors
    }

    /// Handles of vertices that list this vertex as a neighbor.
    pub fn incoming(&self) -> &[VertexIndex] {
        &self.incoming
    }

    /// Number of outgoing neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `other` is an outgoing neighbor.
    pub fn has_neighbor(&self, other: VertexIndex) -> bool {
        self.neighbor_set.contains(&other)
    }

    /// Record an outgoing link. Returns false if it was already present.
    pub(crate) fn add_neighbor(&mut self, other: VertexIndex) -> bool {
        if !self.neighbor_set.insert(other) {
            return false;
        }
        self.neighbors.push(other);
        true
    }

    /// Record an incoming link.
    pub(crate) fn add_incoming(&mut self, other: VertexIndex) {
        if self.incoming_set.insert(other) {
            self.incoming.push(other);
        }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
