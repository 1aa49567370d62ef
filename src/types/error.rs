//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur in the graph-walk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex id passed to an operation is not in the graph.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// A vertex with this id already exists.
    #[error("Vertex {0:?} already exists")]
    DuplicateVertex(String),

    /// Input contained no tokens at all.
    #[error("Graph input is empty: expected a 'D' or 'G' header")]
    MissingHeader,

    /// Input had a header but no vertex list.
    #[error("Graph input has no vertex list after the header")]
    MissingVertices,

    /// An edge token was not of the form `(a,b)`.
    #[error("Malformed edge token: {0:?}")]
    MalformedEdge(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
