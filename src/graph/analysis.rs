//! Structural analysis: two-coloring and component partitioning.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, VertexIndex};

use super::traversal::{adjacent, TraversalDirection};
use super::Graph;

impl Graph {
    /// Check whether the part of the graph reachable from `vertex_id` can be
    /// two-colored with no edge joining same-colored vertices.
    ///
    /// Walks outgoing edges layer by layer, giving each layer the opposite
    /// color of the one before. Seeing a neighbor that already carries the
    /// current layer's color is a conflict and returns `false` at once.
    /// Vertices are marked visited when they are dequeued, so a vertex can
    /// sit in the queue more than once before its first expansion; extra
    /// copies are dropped without being expanded again.
    ///
    /// Only the reachable part is checked. On a directed graph that means
    /// vertices reachable along edge direction, not the whole weakly
    /// connected component.
    pub fn is_bipartite(&self, vertex_id: &str) -> GraphResult<bool> {
        let start = self.require(vertex_id)?;

        let mut queue: VecDeque<VertexIndex> = VecDeque::new();
        let mut visited: HashSet<VertexIndex> = HashSet::new();
        let mut red: HashSet<VertexIndex> = HashSet::new();
        let mut blue: HashSet<VertexIndex> = HashSet::new();

        queue.push_back(start);
        red.insert(start);

        let mut layer = 0usize;
        while !queue.is_empty() {
            let (color, opposite) = if layer % 2 == 0 {
                (&red, &mut blue)
            } else {
                (&blue, &mut red)
            };

            for _ in 0..queue.len() {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                if !visited.insert(current) {
                    continue;
                }
                let Some(vertex) = self.vertex(current) else {
                    continue;
                };

                for &neighbor in vertex.neighbors() {
                    if !visited.contains(&neighbor) {
                        queue.push_back(neighbor);
                    }
                    if color.contains(&neighbor) {
                        log::debug!(
                            "Coloring conflict between {} and {:?}",
                            vertex.id(),
                            self.vertex(neighbor).map(|v| v.id())
                        );
                        return Ok(false);
                    }
                    opposite.insert(neighbor);
                }
            }

            layer += 1;
        }

        Ok(true)
    }

    /// Partition every vertex into components, following adjacency as stored.
    ///
    /// On an undirected graph these are the connected components. On a
    /// directed graph each component is the set of not-yet-claimed vertices
    /// reachable from its seed, so the result depends on seed order; use
    /// [`get_connected_components_by`](Self::get_connected_components_by)
    /// with [`TraversalDirection::Both`] for weakly connected components.
    pub fn get_connected_components(&self) -> Vec<Vec<&str>> {
        self.get_connected_components_by(TraversalDirection::Forward)
    }

    /// Partition every vertex into components under the given adjacency
    /// relation.
    ///
    /// Seeds are taken in vertex insertion order: each new component starts
    /// from the first vertex not yet claimed and grows breadth-first. Ids
    /// within a component are in discovery order. Every vertex lands in
    /// exactly one component.
    pub fn get_connected_components_by(&self, direction: TraversalDirection) -> Vec<Vec<&str>> {
        let mut claimed: HashSet<VertexIndex> = HashSet::with_capacity(self.vertex_count());
        let mut components: Vec<Vec<&str>> = Vec::new();

        for seed in self.get_vertices() {
            if !claimed.insert(seed.index()) {
                continue;
            }

            let mut component: Vec<VertexIndex> = Vec::new();
            let mut queue: VecDeque<VertexIndex> = VecDeque::new();
            queue.push_back(seed.index());

            while let Some(current) = queue.pop_front() {
                component.push(current);
                let Some(vertex) = self.vertex(current) else {
                    continue;
                };
                for neighbor in adjacent(vertex, direction) {
                    if claimed.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }

            log::trace!(
                "Component from {} has {} vertices",
                seed.id(),
                component.len()
            );
            components.push(self.ids_of(&component));
        }

        components
    }
}
