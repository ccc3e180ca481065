//! # Sphere Primitive
//!
//! Generates a closed sphere mesh using latitude/longitude tessellation
//! with explicit pole points.

use crate::error::MeshError;
use crate::mesh::TriangleMesh;
use config::constants::{MIN_LATITUDE_BANDS, MIN_LONGITUDE_BANDS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `latitude_bands` - Number of latitude subdivisions (pole to pole)
/// * `longitude_bands` - Number of longitude subdivisions around the axis
/// * `radius` - The radius of the sphere
///
/// # Returns
///
/// A closed mesh with `(latitude_bands - 1) * longitude_bands + 2` points.
///
/// # Algorithm
///
/// - One point at the north pole, one at the south pole
/// - `latitude_bands - 1` interior rings of `longitude_bands` points each,
///   ring `i` at polar angle `PI * i / latitude_bands`
/// - Fan triangles from each pole to its adjacent ring
/// - Two triangles per quad cell between consecutive rings, with the
///   longitude index wrapping modulo `longitude_bands`
///
/// Pole-adjacent triangles are kept as generated; no deduplication or
/// normalization pass runs afterwards. The generator is deterministic:
/// identical inputs produce bit-identical output.
///
/// # Example
///
/// ```rust
/// use ifcx_mesh::generate_sphere;
///
/// let mesh = generate_sphere(4, 6, 1.0).unwrap();
/// assert_eq!(mesh.point_count(), 20);
/// assert!(mesh.validate());
/// ```
pub fn generate_sphere(
    latitude_bands: u32,
    longitude_bands: u32,
    radius: f64,
) -> Result<TriangleMesh, MeshError> {
    if latitude_bands < MIN_LATITUDE_BANDS {
        return Err(MeshError::invalid_parameter(format!(
            "latitude_bands must be at least {}: {}",
            MIN_LATITUDE_BANDS, latitude_bands
        )));
    }

    if longitude_bands < MIN_LONGITUDE_BANDS {
        return Err(MeshError::invalid_parameter(format!(
            "longitude_bands must be at least {}: {}",
            MIN_LONGITUDE_BANDS, longitude_bands
        )));
    }

    if radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "radius must be positive: {}",
            radius
        )));
    }

    let lat = latitude_bands as usize;
    let lon = longitude_bands as usize;
    let point_count = (lat - 1) * lon + 2;
    let triangle_count = 2 * lon + (lat.saturating_sub(2)) * lon * 2;
    let mut mesh = TriangleMesh::with_capacity(point_count, triangle_count);

    // North pole
    let top = mesh.add_point(DVec3::new(0.0, 0.0, radius));

    // Interior rings, top to bottom
    for i in 1..lat {
        let theta = PI * i as f64 / lat as f64;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for j in 0..lon {
            let phi = 2.0 * PI * j as f64 / lon as f64;
            let x = radius * sin_theta * phi.cos();
            let y = radius * sin_theta * phi.sin();
            let z = radius * cos_theta;
            mesh.add_point(DVec3::new(x, y, z));
        }
    }

    // South pole
    let bottom = mesh.add_point(DVec3::new(0.0, 0.0, -radius));

    // Top cap: fan from the north pole to the first ring
    for j in 0..lon as u32 {
        let b = 1 + j;
        let c = 1 + (j + 1) % lon as u32;
        mesh.add_triangle(top, b, c);
    }

    // Middle bands: two triangles per quad cell between consecutive rings
    for i in 1..lat.saturating_sub(1) {
        for j in 0..lon {
            let current = (1 + (i - 1) * lon + j) as u32;
            let next_ring = current + lon as u32;
            let current_next = (1 + (i - 1) * lon + (j + 1) % lon) as u32;
            let next_ring_next = current_next + lon as u32;

            mesh.add_triangle(current, next_ring, current_next);
            mesh.add_triangle(current_next, next_ring, next_ring_next);
        }
    }

    // Bottom cap: fan from the south pole to the last ring, reversed winding
    let offset = (1 + (lat - 2) * lon) as u32;
    for j in 0..lon as u32 {
        let b = offset + (j + 1) % lon as u32;
        let c = offset + j;
        mesh.add_triangle(bottom, b, c);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sphere_point_count_formula() {
        for (lat, lon) in [(2, 3), (4, 6), (20, 40), (7, 13)] {
            let mesh = generate_sphere(lat, lon, 1.0).unwrap();
            assert_eq!(
                mesh.point_count(),
                ((lat - 1) * lon + 2) as usize,
                "lat={} lon={}",
                lat,
                lon
            );
        }
    }

    #[test]
    fn test_sphere_worked_example() {
        let mesh = generate_sphere(4, 6, 1.0).unwrap();
        assert_eq!(mesh.point_count(), 20);
        assert_eq!(mesh.triangle_count(), 36);
        let indices = mesh.indices_u32();
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|&i| (i as usize) < mesh.point_count()));
    }

    #[test]
    fn test_sphere_validates() {
        let mesh = generate_sphere(20, 40, 5.0).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_minimal_configuration() {
        // Two bands: a single interior ring fanned to both poles
        let mesh = generate_sphere(2, 3, 1.0).unwrap();
        assert_eq!(mesh.point_count(), 5);
        assert_eq!(mesh.triangle_count(), 6);
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_is_watertight() {
        // Every directed edge must have a reverse-oriented partner,
        // and no directed edge may appear twice.
        let mesh = generate_sphere(6, 8, 2.0).unwrap();
        let mut edges = HashSet::new();
        for tri in mesh.triangles() {
            for k in 0..3 {
                let a = tri[k];
                let b = tri[(k + 1) % 3];
                assert!(edges.insert((a, b)), "duplicate directed edge {:?}", (a, b));
            }
        }
        for &(a, b) in &edges {
            assert!(edges.contains(&(b, a)), "open edge {:?}", (a, b));
        }
    }

    #[test]
    fn test_sphere_euler_characteristic() {
        let mesh = generate_sphere(5, 9, 1.0).unwrap();
        let v = mesh.point_count() as i64;
        let f = mesh.triangle_count() as i64;
        let e = f * 3 / 2; // each undirected edge shared by two triangles
        assert_eq!(v - e + f, 2);
    }

    #[test]
    fn test_sphere_deterministic() {
        let a = generate_sphere(12, 24, 3.5).unwrap();
        let b = generate_sphere(12, 24, 3.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sphere_bounding_box() {
        let radius = 5.0;
        let mesh = generate_sphere(16, 32, radius).unwrap();
        let (min, max) = mesh.bounding_box();

        assert!(min.z >= -radius - 1e-9 && max.z <= radius + 1e-9);
        // Poles are exact
        assert_eq!(max.z, radius);
        assert_eq!(min.z, -radius);
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(generate_sphere(4, 6, 0.0).is_err());
        assert!(generate_sphere(4, 6, -1.0).is_err());
    }

    #[test]
    fn test_sphere_too_few_bands() {
        assert!(generate_sphere(1, 6, 1.0).is_err());
        assert!(generate_sphere(4, 2, 1.0).is_err());
    }

    #[test]
    fn test_sphere_error_kind() {
        let err = generate_sphere(4, 6, -1.0).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { .. }));
    }
}
