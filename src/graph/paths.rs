//! Path and distance queries: shortest path and exact-distance frontiers.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphResult, VertexIndex};

use super::Graph;

impl Graph {
    /// Find a minimum-edge-count path from `start_id` to `target_id`.
    ///
    /// Returns the ids along the path, both endpoints included, or `None`
    /// when the target is unreachable. When several shortest paths exist the
    /// one discovered first in BFS order wins. Fails if either id is absent.
    pub fn find_shortest_path(
        &self,
        start_id: &str,
        target_id: &str,
    ) -> GraphResult<Option<Vec<&str>>> {
        let start = self.require(start_id)?;
        let target = self.require(target_id)?;

        // Each discovered vertex maps to the vertex it was first reached from.
        let mut reached_from: HashMap<VertexIndex, Option<VertexIndex>> = HashMap::new();
        let mut queue: VecDeque<VertexIndex> = VecDeque::new();

        reached_from.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            for &neighbor in vertex.neighbors() {
                if let Entry::Vacant(slot) = reached_from.entry(neighbor) {
                    slot.insert(Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        if !reached_from.contains_key(&target) {
            log::debug!("No path from {} to {}", start_id, target_id);
            return Ok(None);
        }

        let mut path = vec![target];
        let mut cursor = target;
        while let Some(&Some(previous)) = reached_from.get(&cursor) {
            path.push(previous);
            cursor = previous;
        }
        path.reverse();

        Ok(Some(self.ids_of(&path)))
    }

    /// Find every vertex whose shortest distance from `start_id` is exactly
    /// `target_distance` edges.
    ///
    /// Runs `target_distance` rounds of frontier expansion. Each round
    /// expands only the vertices that were in the frontier when the round
    /// began; a vertex expanded in an earlier round is never expanded again
    /// and never reported. Results are deduplicated and come back in
    /// frontier order. Distance 0 yields just the start vertex; a distance
    /// past the reachable diameter yields an empty list.
    pub fn find_vertices_n_away(
        &self,
        start_id: &str,
        target_distance: usize,
    ) -> GraphResult<Vec<&str>> {
        let start = self.require(start_id)?;

        let mut frontier: Vec<VertexIndex> = vec![start];
        let mut visited: HashSet<VertexIndex> = HashSet::new();

        for round in 0..target_distance {
            let mut next: Vec<VertexIndex> = Vec::new();
            let mut queued: HashSet<VertexIndex> = HashSet::new();

            for &current in &frontier {
                if !visited.insert(current) {
                    continue;
                }
                let Some(vertex) = self.vertex(current) else {
                    continue;
                };
                for &neighbor in vertex.neighbors() {
                    if !visited.contains(&neighbor) && queued.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }

            log::trace!("Round {}: frontier of {}", round + 1, next.len());
            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }

        let found: Vec<VertexIndex> = frontier
            .into_iter()
            .filter(|h| !visited.contains(h))
            .collect();

        Ok(self.ids_of(&found))
    }
}
