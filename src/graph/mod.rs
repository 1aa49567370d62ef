//! In-memory graph operations — the core data structure and its algorithms.

pub mod analysis;
pub mod builder;
pub mod memory_graph;
pub mod paths;
pub mod traversal;

pub use builder::GraphBuilder;
pub use memory_graph::{Graph, VertexDisplay};
pub use traversal::{bfs_traverse, dfs_traverse, TraversalDirection};
