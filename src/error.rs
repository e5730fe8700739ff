//! Error types for the cube model.

use crate::face::Face;

/// Errors surfaced to callers of the cube model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    /// A face or direction identifier was not recognised.
    #[error("invalid argument: unknown {what} `{value}`")]
    InvalidArgument { what: &'static str, value: String },
}

impl CubeError {
    pub(crate) fn invalid(what: &'static str, value: impl Into<String>) -> Self {
        CubeError::InvalidArgument {
            what,
            value: value.into(),
        }
    }
}

/// A defect in the static adjacency table, reported by
/// [`AdjacencyTable::validate`](crate::adjacency::AdjacencyTable::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("adjacency table entry for {face} is malformed: {reason}")]
pub struct TableError {
    pub face: Face,
    pub reason: String,
}
