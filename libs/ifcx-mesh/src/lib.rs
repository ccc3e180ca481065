//! # IFCX Mesh
//!
//! Procedural triangle mesh generation for IFCX scene documents.
//! Produces point lists and triangle index lists that the document layer
//! embeds verbatim into geometry attribute blocks.
//!
//! ## Architecture
//!
//! ```text
//! ifcx-mesh (TriangleMesh) → ifcx-doc (geometry attribute block)
//! ```
//!
//! All generators are deterministic and side-effect free: identical inputs
//! yield bit-identical output.
//!
//! ## Usage
//!
//! ```rust
//! use ifcx_mesh::generate_sphere;
//!
//! let mesh = generate_sphere(4, 6, 1.0).unwrap();
//! assert_eq!(mesh.point_count(), 20);
//! ```

pub mod cuboid;
pub mod error;
pub mod mesh;
pub mod sphere;

pub use cuboid::generate_cuboid;
pub use error::MeshError;
pub use mesh::TriangleMesh;
pub use sphere::generate_sphere;
