//! # Geometry Attribute Blocks
//!
//! Typed form of the mesh attribute block embedded in override nodes.
//! Attribute blocks are free-form JSON in general; the block stored under
//! [`config::constants::MESH_ATTRIBUTE_KEY`] must match this shape and is
//! validated before the document is written.

use crate::error::DocumentError;
use ifcx_mesh::TriangleMesh;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The minimal mesh shape carried inside a geometry attribute block.
///
/// Wire form:
///
/// ```text
/// { "faceVertexIndices": [int...], "points": [[x, y, z]...] }
/// ```
///
/// # Example
///
/// ```rust
/// use ifcx_doc::MeshAttribute;
/// use ifcx_mesh::generate_sphere;
///
/// let mesh = generate_sphere(4, 6, 1.0).unwrap();
/// let block = MeshAttribute::from(&mesh);
/// assert_eq!(block.points.len(), 20);
/// assert!(block.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshAttribute {
    /// Flattened triangle indices, three per face
    pub face_vertex_indices: Vec<u32>,
    /// Point positions as coordinate triples
    pub points: Vec<[f64; 3]>,
}

impl MeshAttribute {
    /// Validates the block against the mesh invariants.
    ///
    /// - the index list length must be a multiple of 3
    /// - every index must be below the point count
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.face_vertex_indices.len() % 3 != 0 {
            return Err(DocumentError::malformed_geometry(format!(
                "index count {} is not a multiple of 3",
                self.face_vertex_indices.len()
            )));
        }

        let point_count = self.points.len();
        for &index in &self.face_vertex_indices {
            if index as usize >= point_count {
                return Err(DocumentError::IndexOutOfBounds { index, point_count });
            }
        }

        Ok(())
    }

    /// Serializes the block into an attribute value.
    pub fn to_value(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parses a block back out of an attribute value.
    ///
    /// Shape mismatches surface as `MalformedGeometry` rather than a raw
    /// serialization error, since the value came from inside a document.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        serde_json::from_value(value.clone())
            .map_err(|err| DocumentError::malformed_geometry(err.to_string()))
    }
}

impl From<&TriangleMesh> for MeshAttribute {
    fn from(mesh: &TriangleMesh) -> Self {
        Self {
            face_vertex_indices: mesh.indices_u32(),
            points: mesh.points_xyz(),
        }
    }
}
