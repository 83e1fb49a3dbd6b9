//! # Tests for Config Constants

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(VERTEX_MERGE_EPSILON >= EPSILON);
}

#[test]
fn test_bsp_epsilon_coarser_than_merge() {
    assert!(BSP_EPSILON > VERTEX_MERGE_EPSILON);
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-3));
}

// =============================================================================
// TRIMMER TESTS
// =============================================================================

#[test]
fn test_trimmer_padding_is_one_unit() {
    assert_eq!(2.0 * TRIMMER_MARGIN, 1.0);
}

#[test]
fn test_trim_arc_cap_below_full_turn() {
    assert!(MAX_TRIM_ARC < 360.0);
    assert!(CURVED_TRIM_ARC_PADDING > 0.0);
}

#[test]
fn test_default_buffer_is_small() {
    assert!(DEFAULT_TRIM_BUFFER > 0.0);
    assert!(DEFAULT_TRIM_BUFFER < TRIMMER_DEPTH);
}

// =============================================================================
// CLIP AND SLOT TESTS
// =============================================================================

#[test]
fn test_clip_clearances_ordered() {
    assert!(CLIP_CLEARANCE_OBTUSE < CLIP_CLEARANCE_ACUTE);
    assert!(2.0 * CLIP_CLEARANCE_ACUTE <= MIN_CLIP_EDGE_LENGTH);
}

#[test]
fn test_clip_unit_fits_pitch() {
    assert!(CLIP_CUTTER_LENGTH <= CLIP_PITCH);
    assert!(CLIP_INSET < CLIP_CUTTER_DEPTH);
}

#[test]
fn test_clip_fits_inside_floor_base() {
    assert!(CLIP_CUTTER_ELEVATION + CLIP_CUTTER_HEIGHT < OPENLOCK_FLOOR_BASE_Z);
}

#[test]
fn test_slot_fits_inside_wall_base() {
    assert!(SLOT_FACE_OFFSET + SLOT_WIDTH < OPENLOCK_WALL_BASE_Y / 2.0);
    assert!(SLOT_HEIGHT - Z_FIGHT_OFFSET < OPENLOCK_WALL_BASE_Z);
}

// =============================================================================
// OPENLOCK TESTS
// =============================================================================

#[test]
fn test_floor_base_below_tile_height() {
    assert!(OPENLOCK_FLOOR_BASE_Z < OPENLOCK_FLOOR_TILE_Z);
}

#[test]
fn test_displacement_slab_fits_beside_core() {
    let preview = (OPENLOCK_WALL_BASE_Y - OPENLOCK_WALL_CORE_Y) / 2.0;
    assert!(DISPLACEMENT_SLAB_THICKNESS < preview);
}

#[test]
fn test_displacement_is_subdivided() {
    assert!(DISPLACEMENT_SUBDIVISIONS >= 1);
}
