//! # Tile Gen
//!
//! Modular tile generation on top of [`tile_mesh`]: printed pieces,
//! trimmers, OpenLOCK cutters and the assembly joining them.
//!
//! ## Architecture
//!
//! ```text
//! TileProperties (JSON) → resolved()
//!        │
//!        ├─→ tiles     base / core / slabs   (turtle primitives)
//!        ├─→ trimmers  one per bounding face
//!        └─→ cutters   clips · slot · side sockets
//!                 │
//!                 ▼
//!          TileAssembly { pieces, modifiers } → evaluate (BSP difference)
//! ```
//!
//! The library installs no `tracing` subscriber; hosts install their own.
//!
//! ## Usage
//!
//! ```rust
//! use tile_gen::{build_tile, GeometryRole, ProceduralPrototypes, TileProperties};
//!
//! let props = TileProperties::from_json(r#"{
//!     "tile_name": "tri",
//!     "shape": {
//!         "type": "triangular",
//!         "leg_1": 4.0, "leg_2": 4.0, "angle": 60.0,
//!         "tile_height": 0.374
//!     }
//! }"#).unwrap();
//!
//! let tile = build_tile(&props, &ProceduralPrototypes).unwrap();
//! assert!(tile.dimensions.is_some());
//! assert_eq!(tile.pieces_with_role(GeometryRole::Trimmer).count(), 5);
//! ```

pub mod assembly;
pub mod cutters;
pub mod error;
pub mod piece;
pub mod properties;
pub mod tiles;
pub mod trimmers;

pub use assembly::{build_tile, BooleanModifier, TileAssembly};
pub use cutters::{
    generate_clip_cutters, generate_slot_cutter, generate_wall_side_cutters, PrototypeLibrary,
    ProceduralPrototypes,
};
pub use error::TileError;
pub use piece::{link_pair, GeometryRole, TilePiece};
pub use properties::{Blueprint, TileProperties, TileShape};
pub use tiles::{build_body, TileBody};
pub use trimmers::generate_trimmers;
