//! graph-walk — in-memory directed and undirected graphs with traversal and
//! structural analysis.
//!
//! A [`Graph`] owns its [`Vertex`] arena and answers breadth- and depth-first
//! traversals, shortest-path and exact-distance queries, bipartiteness
//! checks and component partitions. Graphs can be built in code, through
//! [`GraphBuilder`], or loaded from the text format with [`GraphReader`].

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::GraphReader;
pub use graph::{bfs_traverse, dfs_traverse, Graph, GraphBuilder, TraversalDirection, VertexDisplay};
pub use types::{Edge, GraphError, GraphResult, Vertex, VertexIndex};
