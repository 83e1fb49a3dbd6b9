//! # BSP Tree
//!
//! Binary space partitioning tree over convex polygons, after Evan
//! Wallace's csg.js.
//!
//! Each node owns a dividing plane, the polygons lying in it, and optional
//! front and back subtrees. A missing back subtree means "inside the solid",
//! a missing front subtree means "outside".
//!
//! All traversals run on explicit work stacks so deep trees built from
//! finely segmented curves cannot overflow the call stack.

use std::mem;

use super::plane::Plane;
use super::polygon::{Polygon, SplitResult};

/// A node in the BSP tree.
#[derive(Debug, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a tree from polygons, using the first polygon at each node as
    /// the splitter.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = BspNode::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree, splitting them down to the leaves.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let mut polys = polys.into_iter();
            let plane = match node.plane {
                Some(plane) => plane,
                None => match polys.next() {
                    Some(first) => {
                        let plane = first.plane;
                        node.plane = Some(plane);
                        node.polygons.push(first);
                        plane
                    }
                    None => continue,
                },
            };

            let mut out = SplitResult::default();
            for poly in polys {
                poly.split(&plane, &mut out);
            }
            node.polygons.append(&mut out.coplanar_front);
            node.polygons.append(&mut out.coplanar_back);

            if !out.front.is_empty() {
                let front = node.front.get_or_insert_with(Box::default);
                stack.push((&mut **front, out.front));
            }
            if !out.back.is_empty() {
                let back = node.back.get_or_insert_with(Box::default);
                stack.push((&mut **back, out.back));
            }
        }
    }

    /// Turns the solid inside out: flips every polygon and plane and swaps
    /// the subtrees.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = node.plane.as_mut() {
                plane.flip();
            }
            mem::swap(&mut node.front, &mut node.back);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut out = SplitResult::default();
            for poly in polys {
                poly.split(&plane, &mut out);
            }
            let mut front = out.front;
            front.append(&mut out.coplanar_front);
            let mut back = out.back;
            back.append(&mut out.coplanar_back);

            match node.front.as_deref() {
                Some(child) => stack.push((child, front)),
                None => result.extend(front),
            }
            // no back subtree: solid interior, discard
            if let Some(child) = node.back.as_deref() {
                stack.push((child, back));
            }
        }

        result
    }

    /// Clips every polygon of this tree against `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(mem::take(&mut node.polygons));
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collects the polygons of the whole tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
        }

        result
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}
