//! # Config Crate
//!
//! Centralized configuration constants for the tile generator.
//! Tolerances, trimmer margins and the OpenLOCK clip/slot dimensions are
//! defined here so that the mesh kernel and the tile generators agree on
//! every hand-tuned number.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_CLIP_EDGE_LENGTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001;
//! assert!(value.abs() < EPSILON);
//!
//! // Edges shorter than the minimum never receive clip cutters
//! let edge = 1.9;
//! assert!(edge < MIN_CLIP_EDGE_LENGTH);
//! ```
//!
//! ## Units
//!
//! All lengths are in scene units (inches for OpenLOCK tiles), all angles in
//! degrees unless a name says otherwise.

pub mod constants;

#[cfg(test)]
mod tests;
