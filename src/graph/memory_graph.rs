//! Core graph structure — a vertex arena with id lookup.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexIndex};

/// An in-memory directed or undirected graph.
///
/// The graph exclusively owns its vertices. Adjacency is stored as
/// [`VertexIndex`] handles resolved through the arena, so cycles in the
/// graph never turn into ownership cycles. There is no removal API: once
/// added, every vertex stays live for the lifetime of the graph.
#[derive(Debug, Clone)]
pub struct Graph {
    /// All vertices, in insertion order.
    vertices: Vec<Vertex>,
    /// Lookup: vertex id -> arena position.
    index: HashMap<String, VertexIndex>,
    /// Fixed at construction.
    directed: bool,
    /// Number of stored adjacency entries.
    edge_count: usize,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            directed,
            edge_count: 0,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored adjacency entries.
    ///
    /// An undirected edge between two distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a new vertex and return its handle.
    ///
    /// Ids are unique: adding an id that is already present fails with
    /// [`GraphError::DuplicateVertex`] and leaves the existing vertex and its
    /// edges untouched.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> GraphResult<VertexIndex> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }

        let handle = VertexIndex::new(self.vertices.len());
        self.index.insert(id.clone(), handle);
        self.vertices.push(Vertex::new(id, handle));

        Ok(handle)
    }

    /// Get a vertex by id.
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.index.get(id).and_then(|&handle| self.vertex(handle))
    }

    /// Resolve a handle issued by this graph.
    pub fn vertex(&self, handle: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(handle.index())
    }

    /// Whether a vertex with this id exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up the handle for an id, failing with [`GraphError::VertexNotFound`].
    pub fn require(&self, id: &str) -> GraphResult<VertexIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(id.to_string()))
    }

    /// Add an edge from `source` to `target`.
    ///
    /// Both endpoints must already exist. In an undirected graph the reverse
    /// link is added as well. Self-loops are allowed and adding an existing
    /// edge again is a no-op.
    pub fn add_edge(&mut self, source: &str, target: &str) -> GraphResult<()> {
        let from = self.require(source)?;
        let to = self.require(target)?;

        self.link(from, to);
        if !self.directed {
            self.link(to, from);
        }

        log::trace!("Added edge {} -> {}", source, target);
        Ok(())
    }

    fn link(&mut self, from: VertexIndex, to: VertexIndex) {
        let added = self
            .vertices
            .get_mut(from.index())
            .is_some_and(|v| v.add_neighbor(to));
        if !added {
            return;
        }
        if let Some(v) = self.vertices.get_mut(to.index()) {
            v.add_incoming(from);
        }
        self.edge_count += 1;
    }

    /// All vertices, in insertion order.
    pub fn get_vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterate over the resolved outgoing neighbors of a vertex.
    pub fn neighbors<'a>(&'a self, vertex: &'a Vertex) -> impl Iterator<Item = &'a Vertex> + 'a {
        vertex
            .neighbors()
            .iter()
            .filter_map(move |&handle| self.vertex(handle))
    }

    /// Every stored adjacency entry, grouped by source in insertion order.
    pub fn edges(&self) -> Vec<Edge> {
        self.vertices
            .iter()
            .flat_map(|v| {
                self.neighbors(v)
                    .map(move |n| Edge::new(v.id(), n.id()))
            })
            .collect()
    }

    /// Ids of the given handles, in order.
    pub(crate) fn ids_of(&self, handles: &[VertexIndex]) -> Vec<&str> {
        handles
            .iter()
            .filter_map(|&h| self.vertex(h).map(Vertex::id))
            .collect()
    }

    /// A `Display` adapter that renders a vertex with its neighbor ids,
    /// e.g. `A adjacent to [B, C]`.
    pub fn display_vertex<'a>(&'a self, vertex: &'a Vertex) -> VertexDisplay<'a> {
        VertexDisplay {
            graph: self,
            vertex,
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}

/// Renders a vertex together with its neighbor ids.
pub struct VertexDisplay<'a> {
    graph: &'a Graph,
    vertex: &'a Vertex,
}

impl std::fmt::Display for VertexDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.graph.ids_of(self.vertex.neighbors());
        write!(f, "{} adjacent to [{}]", self.vertex.id(), ids.join(", "))
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Graph with vertices: [")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.display_vertex(v))?;
        }
        write!(f, "]")
    }
}
