//! # Tile Mesh
//!
//! Polygon meshes and the cursor-driven drafting kernel that tile pieces
//! are built with.
//!
//! ## Architecture
//!
//! ```text
//! Cursor → Turtle (extrude / arc / bridge / fill) → Mesh
//!                     ↑
//!          triangle (SAS solver) · primitives
//!
//! Mesh − Mesh → ops::difference (BSP)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tile_mesh::primitives::triangular_prism;
//!
//! let (mesh, dims) = triangular_prism(3.0, 4.0, 90.0, 1.0).unwrap();
//! assert!((dims.a - 5.0).abs() < 1e-9);
//! assert!(mesh.check_manifold().is_ok());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod triangle;
pub mod turtle;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{difference, difference_all, subdivide};
pub use triangle::{solve_triangle, solve_triangle_at, TriangleDimensions, TriangleEdge, TriangleSide};
pub use turtle::{Cursor, Turtle};
