//! All data types for the graph-walk library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexIndex};

/// Header token that marks a directed graph in the text format.
pub const DIRECTED_MARKER: &str = "D";
