//! # Mesh Errors
//!
//! Error types for drafting, triangle solving and primitive construction.

use thiserror::Error;

/// Errors that can occur while drafting or validating a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// SAS input that cannot form a triangle.
    #[error("Degenerate triangle: {message}")]
    DegenerateTriangle {
        /// What made the triangle degenerate.
        message: String,
    },

    /// A pen-down drafting operation found no selected vertex to extrude.
    #[error("No active vertex for turtle operation `{operation}`")]
    NoActiveVertex {
        /// The turtle operation that was attempted.
        operation: &'static str,
    },

    /// A solid that is not closed, or whose faces cannot be wound consistently.
    #[error("Non-manifold result: {message}")]
    NonManifold {
        /// Which check failed.
        message: String,
    },

    /// Geometry parameters that would collapse a primitive.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What was degenerate.
        message: String,
    },

    /// Indices that do not refer to valid mesh elements.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What was invalid.
        message: String,
    },
}

impl MeshError {
    /// Creates a degenerate triangle error.
    pub fn degenerate_triangle(message: impl Into<String>) -> Self {
        Self::DegenerateTriangle {
            message: message.into(),
        }
    }

    /// Creates a no-active-vertex error for the named operation.
    pub fn no_active_vertex(operation: &'static str) -> Self {
        Self::NoActiveVertex { operation }
    }

    /// Creates a non-manifold error.
    pub fn non_manifold(message: impl Into<String>) -> Self {
        Self::NonManifold {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
