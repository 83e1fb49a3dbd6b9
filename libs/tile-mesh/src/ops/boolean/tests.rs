//! # Boolean Difference Tests

use super::*;
use crate::primitives::{cuboid, curved_slab, triangular_prism};
use approx::assert_relative_eq;

fn cube_at(size: f64, min: DVec3) -> Mesh {
    let mut mesh = cuboid(DVec3::splat(size)).unwrap();
    mesh.translate(min);
    mesh
}

#[test]
fn test_difference_corner_bite() {
    let block = cube_at(4.0, DVec3::ZERO);
    let bite = cube_at(2.0, DVec3::splat(3.0));
    let result = difference(&block, &bite);
    assert_relative_eq!(result.volume(), 64.0 - 1.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 4.0, epsilon = 1e-9);
}

#[test]
fn test_difference_slices_off_a_side() {
    let block = cube_at(4.0, DVec3::ZERO);
    let mut slab = cuboid(DVec3::new(2.0, 6.0, 6.0)).unwrap();
    slab.translate(DVec3::new(3.0, -1.0, -1.0));
    let result = difference(&block, &slab);
    assert_relative_eq!(result.volume(), 48.0, epsilon = 1e-9);
    assert_relative_eq!(result.dimensions().x, 3.0, epsilon = 1e-9);
}

#[test]
fn test_difference_through_hole() {
    let block = cube_at(4.0, DVec3::ZERO);
    let mut drill = cuboid(DVec3::new(1.0, 1.0, 6.0)).unwrap();
    drill.translate(DVec3::new(1.5, 1.5, -1.0));
    let result = difference(&block, &drill);
    assert_relative_eq!(result.volume(), 64.0 - 4.0, epsilon = 1e-9);
}

#[test]
fn test_difference_disjoint_returns_base() {
    let block = cube_at(1.0, DVec3::ZERO);
    let far = cube_at(1.0, DVec3::splat(5.0));
    let result = difference(&block, &far);
    assert_eq!(result.vertex_count(), block.vertex_count());
    assert_relative_eq!(result.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_difference_swallowed_is_empty() {
    let small = cube_at(1.0, DVec3::splat(1.0));
    let big = cube_at(4.0, DVec3::ZERO);
    let result = difference(&small, &big);
    assert!(result.volume().abs() < 1e-9);
}

#[test]
fn test_difference_with_empty_operands() {
    let block = cube_at(1.0, DVec3::ZERO);
    assert_eq!(difference(&block, &Mesh::new()).face_count(), 6);
    assert!(difference(&Mesh::new(), &block).is_empty());
}

#[test]
fn test_difference_prism_corner() {
    let (prism, _) = triangular_prism(4.0, 4.0, 90.0, 1.0).unwrap();
    let mut bite = cuboid(DVec3::new(1.0, 1.0, 3.0)).unwrap();
    bite.translate(DVec3::new(-0.5, -0.5, -1.0));
    let result = difference(&prism, &bite);
    assert_relative_eq!(result.volume(), 8.0 - 0.25, epsilon = 1e-9);
}

#[test]
fn test_difference_curved_slab_end() {
    let slab = curved_slab(10.0, 90.0, 2.0, 2.0, 8).unwrap();
    let full = slab.volume();
    let mut cap = cuboid(DVec3::new(4.0, 1.0, 4.0)).unwrap();
    cap.translate(DVec3::new(-1.0, 9.0, -1.0));
    let result = difference(&slab, &cap);
    assert!(result.volume() < full);
    assert!(result.volume() > full * 0.5);
    assert!(result.bounding_box().1.y < 10.0);
}

#[test]
fn test_difference_all_applies_in_order() {
    let block = cube_at(4.0, DVec3::ZERO);
    let a = cube_at(2.0, DVec3::new(3.0, 3.0, 3.0));
    let b = cube_at(2.0, DVec3::new(-1.0, -1.0, -1.0));
    let result = difference_all(&block, [&a, &b]);
    assert_relative_eq!(result.volume(), 62.0, epsilon = 1e-9);
}

#[test]
fn test_difference_welds_shared_vertices() {
    let block = cube_at(4.0, DVec3::ZERO);
    let bite = cube_at(2.0, DVec3::splat(3.0));
    let result = difference(&block, &bite);
    let (min, max) = result.bounding_box();
    let distinct_corners = result
        .vertices()
        .iter()
        .filter(|v| (**v - min).length() < 1e-9 || (**v - max).length() < 1e-9)
        .count();
    assert_eq!(distinct_corners, 1);
}
