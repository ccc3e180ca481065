//! # Mesh Data Structure
//!
//! Core triangle mesh representation: point positions plus index triples.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with points and index triples.
///
/// All geometry uses f64 internally; the document layer embeds the values
/// as-is, so no precision is lost between generation and serialization.
///
/// # Example
///
/// ```rust
/// use ifcx_mesh::TriangleMesh;
/// use glam::DVec3;
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_point(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_point(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_point(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Point positions (f64 for precision)
    points: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(point_count: usize, triangle_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point and returns its index.
    pub fn add_point(&mut self, position: DVec3) -> u32 {
        let index = self.points.len() as u32;
        self.points.push(position);
        index
    }

    /// Adds a triangle by point indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the points.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: u32) -> DVec3 {
        self.points[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.points.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.points[0];
        let mut max = self.points[0];

        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are within the point list
    /// - Each triangle references three distinct points
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let point_count = self.points.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= point_count || tri[1] >= point_count || tri[2] >= point_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
        }

        true
    }

    /// Exports triangle indices as a flat u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...]; the length is
    /// always a multiple of 3.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }

    /// Exports points as [x, y, z] coordinate triples.
    ///
    /// This is the shape the document layer stores under the geometry
    /// attribute block's `points` key.
    pub fn points_xyz(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| [p.x, p.y, p.z]).collect()
    }
}
