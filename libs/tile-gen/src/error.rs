//! # Tile Errors
//!
//! Error types for tile generation.

use thiserror::Error;
use tile_mesh::MeshError;

/// Errors raised while generating a tile.
#[derive(Debug, Error)]
pub enum TileError {
    /// Drafting or solving failed; the whole tile is abandoned.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// An edge is too short to carry a clip cutter. Recovered by skipping
    /// the edge.
    #[error("edge {edge} is {length:.3} long, clip cutters need {minimum:.3}")]
    InsufficientEdgeLength {
        /// Edge name.
        edge: String,
        /// Usable length of the edge.
        length: f64,
        /// Required length.
        minimum: f64,
    },

    /// A triangular or curved-floor tile was handed no triangle dimensions.
    #[error("{shape} tiles need triangle dimensions")]
    MissingDimensions {
        /// Tile shape that needed them.
        shape: &'static str,
    },

    /// Tile properties describe an impossible tile.
    #[error("invalid tile properties: {message}")]
    InvalidProperties {
        /// What is wrong.
        message: String,
    },

    /// No piece of the assembly has this name.
    #[error("no piece named '{name}'")]
    UnknownPiece {
        /// Requested name.
        name: String,
    },

    /// A tile request could not be parsed.
    #[error("invalid tile request: {0}")]
    Config(#[from] serde_json::Error),
}

impl TileError {
    /// Creates an insufficient edge length error.
    pub fn insufficient_edge(edge: impl Into<String>, length: f64, minimum: f64) -> Self {
        Self::InsufficientEdgeLength {
            edge: edge.into(),
            length,
            minimum,
        }
    }

    /// Creates an invalid properties error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidProperties {
            message: message.into(),
        }
    }

    /// Creates an unknown piece error.
    pub fn unknown_piece(name: impl Into<String>) -> Self {
        Self::UnknownPiece { name: name.into() }
    }
}
