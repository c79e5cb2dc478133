//! Error types for graph loading, solving and the surrounding tooling.

use std::path::PathBuf;

use thiserror::Error;

use crate::{Mask, VertexId};

/// Result type alias used throughout the crate.
pub type CoverResult<T> = Result<T, CoverError>;

#[derive(Error, Debug)]
pub enum CoverError {
    /// A line of a graph or cover file could not be parsed.
    #[error("line {line}: cannot parse {content:?}")]
    Parse { line: usize, content: String },

    /// A cover file declares a size that disagrees with its vertex lines.
    #[error("cover declares size {declared} but lists {listed} vertices")]
    CoverSizeMismatch { declared: usize, listed: usize },

    #[error("vertex {0} is adjacent to itself")]
    SelfLoop(VertexId),

    /// `v` is listed as a neighbour of `u` but not the other way round.
    #[error("adjacency is not symmetric: {v} is a neighbour of {u} but not vice versa")]
    AsymmetricAdjacency { u: VertexId, v: VertexId },

    #[error("vertex {0} appears in the adjacency but not in the vertex list")]
    UnknownVertex(VertexId),

    #[error("vertex {0} is listed more than once")]
    DuplicateVertex(VertexId),

    /// Contract violation: an edge was requested from an edge-free subset.
    #[error("no edge inside subset {subset:#b}")]
    NoEdgeInSubset { subset: Mask },

    #[error("graph has {vertices} vertices, at most {max} are supported")]
    TooManyVertices { vertices: usize, max: usize },

    /// The 2^n entry DP table could not be allocated.
    #[error("cannot allocate DP table with {entries} entries: {source}")]
    TableAllocation {
        entries: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    /// Reconstruction produced something that is not an optimal cover.
    #[error("reconstructed cover is invalid: {0}")]
    InvalidCover(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoverError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoverError::Io {
            path: path.into(),
            source,
        }
    }
}
