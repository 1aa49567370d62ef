//! Graph traversal algorithms (BFS and DFS).

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, Vertex, VertexIndex};

use super::Graph;

/// Which stored links count as adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Follow outgoing edges (source -> target), i.e. adjacency as stored.
    Forward,
    /// Follow incoming edges (target <- source).
    Backward,
    /// Follow edges in both directions.
    Both,
}

impl TraversalDirection {
    /// Parse a direction from its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "forward" | "out" => Some(Self::Forward),
            "backward" | "in" => Some(Self::Backward),
            "both" | "undirected" => Some(Self::Both),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Both => "both",
        }
    }
}

/// Handles adjacent to `vertex` under `direction`, outgoing links first.
pub(crate) fn adjacent(
    vertex: &Vertex,
    direction: TraversalDirection,
) -> impl Iterator<Item = VertexIndex> + '_ {
    let forward: &[VertexIndex] = match direction {
        TraversalDirection::Forward | TraversalDirection::Both => vertex.neighbors(),
        TraversalDirection::Backward => &[],
    };
    let backward: &[VertexIndex] = match direction {
        TraversalDirection::Backward | TraversalDirection::Both => vertex.incoming(),
        TraversalDirection::Forward => &[],
    };
    forward.iter().chain(backward.iter()).copied()
}

/// Breadth-first traversal from `start_id`.
///
/// Every vertex reachable from the start is passed to `visit` exactly once,
/// in FIFO order. A vertex is marked seen when it is enqueued, so it can
/// never be queued twice even when several paths lead to it.
pub fn bfs_traverse<F>(graph: &Graph, start_id: &str, mut visit: F) -> GraphResult<()>
where
    F: FnMut(&Vertex),
{
    let start = graph.require(start_id)?;

    let mut seen: HashSet<VertexIndex> = HashSet::new();
    let mut queue: VecDeque<VertexIndex> = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(vertex) = graph.vertex(current) else {
            continue;
        };

        log::debug!("Processing vertex {}", vertex.id());
        visit(vertex);

        for &neighbor in vertex.neighbors() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(())
}

/// Depth-first traversal from `start_id`, in pre-order.
///
/// Visits a vertex, then descends into each of its not-yet-visited
/// neighbors in adjacency order. A neighbor is marked visited right before
/// it is descended into. Uses an explicit stack of `(vertex, next neighbor)`
/// frames instead of recursion, so depth is bounded only by memory.
pub fn dfs_traverse<F>(graph: &Graph, start_id: &str, mut visit: F) -> GraphResult<()>
where
    F: FnMut(&Vertex),
{
    let start = graph.require(start_id)?;

    let mut visited: HashSet<VertexIndex> = HashSet::new();
    let mut stack: Vec<(&Vertex, usize)> = Vec::new();

    visited.insert(start);
    if let Some(vertex) = graph.vertex(start) {
        log::debug!("Visiting vertex {}", vertex.id());
        visit(vertex);
        stack.push((vertex, 0));
    }

    while let Some((vertex, cursor)) = stack.last_mut() {
        let Some(&next) = vertex.neighbors().get(*cursor) else {
            stack.pop();
            continue;
        };
        *cursor += 1;

        if !visited.insert(next) {
            continue;
        }
        if let Some(child) = graph.vertex(next) {
            log::debug!("Visiting vertex {}", child.id());
            visit(child);
            stack.push((child, 0));
        }
    }

    Ok(())
}

impl Graph {
    /// Breadth-first traversal; see [`bfs_traverse`].
    pub fn bfs_traversal<F>(&self, start_id: &str, visit: F) -> GraphResult<()>
    where
        F: FnMut(&Vertex),
    {
        bfs_traverse(self, start_id, visit)
    }

    /// Depth-first traversal; see [`dfs_traverse`].
    pub fn dfs_traversal<F>(&self, start_id: &str, visit: F) -> GraphResult<()>
    where
        F: FnMut(&Vertex),
    {
        dfs_traverse(self, start_id, visit)
    }

    /// Ids in breadth-first visitation order.
    pub fn bfs_order(&self, start_id: &str) -> GraphResult<Vec<&str>> {
        let mut order = Vec::new();
        bfs_traverse(self, start_id, |v| order.push(v.index()))?;
        Ok(self.ids_of(&order))
    }

    /// Ids in depth-first (pre-order) visitation order.
    pub fn dfs_order(&self, start_id: &str) -> GraphResult<Vec<&str>> {
        let mut order = Vec::new();
        dfs_traverse(self, start_id, |v| order.push(v.index()))?;
        Ok(self.ids_of(&order))
    }
}
