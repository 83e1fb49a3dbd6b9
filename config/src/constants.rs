//! # Configuration Constants
//!
//! Centralized constants for the tile generator. All geometry tolerances,
//! trimmer paddings and OpenLOCK interlock dimensions are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Trimmers**: Buffers, margins and hand-tuned nudges for trim volumes
//! - **Clips**: Clip cutter placement along base edges
//! - **Slots**: OpenLOCK base slot cutter
//! - **OpenLOCK**: Standard base and core dimensions

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex coincidence.
///
/// Used when deciding whether a drawn path returned to its start vertex and
/// when checking face planarity.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// let drift: f64 = 1e-9;
/// assert!(drift < VERTEX_MERGE_EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Tolerance, in degrees, on the angle sum of a solved triangle.
///
/// # Example
///
/// ```rust
/// use config::constants::ANGLE_SUM_TOLERANCE;
///
/// let sum = 60.0 + 60.0 + 60.0;
/// assert!((sum - 180.0_f64).abs() <= ANGLE_SUM_TOLERANCE);
/// ```
pub const ANGLE_SUM_TOLERANCE: f64 = 1e-6;

/// Plane classification tolerance used by the BSP boolean kernel.
///
/// Coarser than [`EPSILON`] so that faces of stacked tile pieces that share
/// a plane up to rounding noise are treated as coplanar.
pub const BSP_EPSILON: f64 = 1e-5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of chords used to discretize curved tiles.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_SEGMENTS;
/// assert!(DEFAULT_CURVE_SEGMENTS >= 1);
/// ```
pub const DEFAULT_CURVE_SEGMENTS: u32 = 8;

// =============================================================================
// TRIMMER CONSTANTS
// =============================================================================

/// Default distance between a raw blank and the intended tile silhouette.
pub const DEFAULT_TRIM_BUFFER: f64 = 0.001;

/// Tangential overshoot of a trimmer past the blank on each side.
///
/// Two margins make up the extra unit every trimmer carries along its
/// face (`2 × buffer + 1` in total).
///
/// # Example
///
/// ```rust
/// use config::constants::TRIMMER_MARGIN;
/// assert_eq!(2.0 * TRIMMER_MARGIN, 1.0);
/// ```
pub const TRIMMER_MARGIN: f64 = 0.5;

/// Thickness of a trimmer beyond the buffer, measured outward from its
/// trimming face.
pub const TRIMMER_DEPTH: f64 = 0.5;

/// Extra sweep, in degrees, added to bent trimmers of curved walls.
pub const CURVED_TRIM_ARC_PADDING: f64 = 12.5;

/// Largest sweep, in degrees, a bent trimmer may take.
///
/// # Example
///
/// ```rust
/// use config::constants::{CURVED_TRIM_ARC_PADDING, MAX_TRIM_ARC};
///
/// let arc: f64 = 355.0;
/// let padded = (arc + CURVED_TRIM_ARC_PADDING).min(MAX_TRIM_ARC);
/// assert_eq!(padded, MAX_TRIM_ARC);
/// ```
pub const MAX_TRIM_ARC: f64 = 359.999;

/// Inward nudge of the first corner-wall leg trimmer across the leg.
pub const CORNER_LEG_TRIM_NUDGE: f64 = 0.25;

/// Outward growth of the top and bottom triangular trimmers, on top of the
/// trim buffer.
pub const TRIANGLE_Z_TRIM_NUDGE: f64 = 0.25;

// =============================================================================
// CLIP CUTTER CONSTANTS
// =============================================================================

/// Edges shorter than this never receive clip cutters.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_CLIP_EDGE_LENGTH;
/// assert!(1.9 < MIN_CLIP_EDGE_LENGTH);
/// assert!(2.1 >= MIN_CLIP_EDGE_LENGTH);
/// ```
pub const MIN_CLIP_EDGE_LENGTH: f64 = 2.0;

/// Clearance reserved at an edge end whose corner is 90° or wider.
pub const CLIP_CLEARANCE_OBTUSE: f64 = 0.5;

/// Clearance reserved at an edge end whose corner is narrower than 90°.
pub const CLIP_CLEARANCE_ACUTE: f64 = 1.0;

/// Perpendicular inset of a clip cutter array from its edge.
pub const CLIP_INSET: f64 = 0.25;

/// Spacing between repeated clip cutter units along an edge.
pub const CLIP_PITCH: f64 = 1.0;

/// Length of one clip cutter unit along its edge.
pub const CLIP_CUTTER_LENGTH: f64 = 0.5;

/// Depth of one clip cutter unit into the base, measured from the edge.
pub const CLIP_CUTTER_DEPTH: f64 = 0.4;

/// Height of one clip cutter unit.
pub const CLIP_CUTTER_HEIGHT: f64 = 0.1;

/// Height of the clip channel floor above the base bottom.
pub const CLIP_CUTTER_ELEVATION: f64 = 0.07;

/// Curved floors smaller than this radius carry no clip cutters.
pub const MIN_CURVED_CLIP_RADIUS: f64 = 1.0;

// =============================================================================
// SLOT CUTTER CONSTANTS
// =============================================================================

/// Distance kept between each slot end and the base end.
///
/// # Example
///
/// ```rust
/// use config::constants::SLOT_END_MARGIN;
///
/// let base_x = 2.0;
/// let slot_x = base_x - 2.0 * SLOT_END_MARGIN;
/// assert!((slot_x - 1.528_f64).abs() < 1e-12);
/// ```
pub const SLOT_END_MARGIN: f64 = 0.236;

/// Width of the OpenLOCK base slot.
pub const SLOT_WIDTH: f64 = 0.197;

/// Height of the OpenLOCK base slot.
pub const SLOT_HEIGHT: f64 = 0.25;

/// Offset of the slot's near face from the base centerline.
pub const SLOT_FACE_OFFSET: f64 = 0.014;

/// Overshoot of a cutter past the face it opens so the two never
/// coincide.
pub const Z_FIGHT_OFFSET: f64 = 0.01;

// =============================================================================
// OPENLOCK CONSTANTS
// =============================================================================

/// Depth of an OpenLOCK wall base.
pub const OPENLOCK_WALL_BASE_Y: f64 = 0.5;

/// Height of an OpenLOCK wall base.
pub const OPENLOCK_WALL_BASE_Z: f64 = 0.2756;

/// Depth of an OpenLOCK wall core.
///
/// # Example
///
/// ```rust
/// use config::constants::{OPENLOCK_WALL_BASE_Y, OPENLOCK_WALL_CORE_Y};
/// assert!(OPENLOCK_WALL_CORE_Y < OPENLOCK_WALL_BASE_Y);
/// ```
pub const OPENLOCK_WALL_CORE_Y: f64 = 0.3149;

/// Height of an OpenLOCK floor base.
pub const OPENLOCK_FLOOR_BASE_Z: f64 = 0.2756;

/// Overall height of an OpenLOCK floor tile.
pub const OPENLOCK_FLOOR_TILE_Z: f64 = 0.374;

/// Thickness of the displacement slab laid over a wall core.
pub const DISPLACEMENT_SLAB_THICKNESS: f64 = 0.004;

/// Midpoint subdivision passes applied to displacement slabs. Each pass
/// splits every triangle into four.
pub const DISPLACEMENT_SUBDIVISIONS: u32 = 2;

/// Walls lower than this carry no side clip cutters.
pub const WALL_SIDE_CUTTER_MIN_HEIGHT: f64 = 1.0;

/// Height of the first wall side cutter above the tile bottom.
pub const WALL_SIDE_CUTTER_ELEVATION: f64 = 0.63;

/// Vertical spacing of repeated wall side cutters.
pub const WALL_SIDE_CUTTER_PITCH: f64 = 2.0;

/// Vertical offset of the second wall side cutter series.
pub const WALL_SIDE_CUTTER_STAGGER: f64 = 0.75;

/// Depth of a wall side cutter into the core end.
pub const WALL_SIDE_CUTTER_DEPTH: f64 = 0.25;

/// Width and height of a wall side cutter.
pub const WALL_SIDE_CUTTER_SIZE: f64 = 0.197;

// =============================================================================
// HELPERS
// =============================================================================

/// Returns true if `value` is within [`EPSILON`] of zero.
///
/// ```rust
/// use config::constants::approx_zero;
/// assert!(approx_zero(0.1 + 0.2 - 0.3));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
