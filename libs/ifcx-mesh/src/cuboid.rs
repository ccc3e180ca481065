//! # Cuboid Primitive
//!
//! Generates an axis-aligned box mesh between two corner points.

use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use glam::DVec3;

/// Creates an axis-aligned cuboid mesh spanning `min` to `max`.
///
/// # Arguments
///
/// * `min` - Corner with the smallest coordinates
/// * `max` - Corner with the largest coordinates
///
/// # Returns
///
/// A mesh with 8 points and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use ifcx_mesh::generate_cuboid;
/// use glam::DVec3;
///
/// let mesh = generate_cuboid(DVec3::ZERO, DVec3::new(0.2, 3.0, 3.0)).unwrap();
/// assert_eq!(mesh.point_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn generate_cuboid(min: DVec3, max: DVec3) -> Result<TriangleMesh, MeshError> {
    let extent = max - min;
    if extent.x <= 0.0 || extent.y <= 0.0 || extent.z <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "cuboid extents must be positive: {:?}",
            extent
        )));
    }

    let mut mesh = TriangleMesh::with_capacity(8, 12);

    // Bottom face (z = min.z)
    let v0 = mesh.add_point(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_point(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_point(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_point(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_point(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_point(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_point(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_point(DVec3::new(min.x, max.y, max.z));

    // 12 triangles, counter-clockwise winding for outward normals

    // Bottom face (z = min.z)
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top face (z = max.z)
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front face (y = min.y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back face (y = max.y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left face (x = min.x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right face (x = max.x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
