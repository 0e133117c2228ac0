//! Mesh validation errors.

use thiserror::Error;

/// Error raised by [`crate::FaceList::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("face {index} of '{owner}' has {count} vertices, need at least 3")]
    DegenerateFace {
        owner: String,
        index: usize,
        count: usize,
    },

    #[error("face {index} of '{owner}' contains a non-finite vertex")]
    NonFiniteVertex { owner: String, index: usize },
}

impl MeshError {
    pub fn degenerate_face(owner: impl Into<String>, index: usize, count: usize) -> Self {
        Self::DegenerateFace {
            owner: owner.into(),
            index,
            count,
        }
    }

    pub fn non_finite_vertex(owner: impl Into<String>, index: usize) -> Self {
        Self::NonFiniteVertex {
            owner: owner.into(),
            index,
        }
    }
}
