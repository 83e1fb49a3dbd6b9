//! # Mesh Operations
//!
//! Boolean evaluation of drafted pieces and surface refinement.

pub mod boolean;
pub mod subdivide;

pub use boolean::{difference, difference_all};
pub use subdivide::subdivide;
