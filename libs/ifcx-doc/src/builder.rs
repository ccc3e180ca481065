//! # Document Builder
//!
//! Fluent assembly of a document from nodes and generated meshes.
//! The builder accumulates nodes in order and runs whole-document
//! validation once at the end, so a half-built scene can never be
//! serialized.

use crate::attribute::MeshAttribute;
use crate::document::Document;
use crate::error::DocumentResult;
use crate::ident::Ident;
use crate::node::{Node, Prim};
use config::constants::MESH_ATTRIBUTE_KEY;
use ifcx_mesh::TriangleMesh;

/// Accumulates top-level nodes and produces a validated [`Document`].
///
/// # Example
///
/// ```rust
/// use ifcx_doc::{DocumentBuilder, Ident, Prim};
/// use ifcx_mesh::generate_sphere;
///
/// let sphere_id = Ident::generate();
/// let mesh = generate_sphere(4, 6, 1.0).unwrap();
/// let doc = DocumentBuilder::new()
///     .disclaimer("sample")
///     .node(Prim::class(sphere_id.clone()).with_type("UsdGeom:Mesh"))
///     .over_with_mesh(&sphere_id, &mesh)
///     .unwrap()
///     .finish()
///     .unwrap();
/// assert_eq!(doc.nodes().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
}

impl DocumentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a disclaimer record.
    pub fn disclaimer(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::disclaimer(text));
        self
    }

    /// Appends any node.
    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Appends an override embedding mesh geometry under the designated
    /// attribute-block key.
    ///
    /// The mesh is converted to its wire shape and validated immediately,
    /// so an out-of-bounds index surfaces here rather than at write time.
    pub fn over_with_mesh(
        mut self,
        target: &Ident,
        mesh: &TriangleMesh,
    ) -> DocumentResult<Self> {
        let block = MeshAttribute::from(mesh);
        block.validate()?;
        self.nodes.push(
            Prim::over(target.clone())
                .with_attribute(MESH_ATTRIBUTE_KEY, block.to_value()?)
                .into(),
        );
        Ok(self)
    }

    /// Validates the accumulated nodes and yields the document.
    pub fn finish(self) -> DocumentResult<Document> {
        let document = Document::from_nodes(self.nodes);
        document.validate()?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use glam::DVec3;
    use ifcx_mesh::generate_sphere;

    fn ident(text: &str) -> Ident {
        Ident::new(text).unwrap()
    }

    #[test]
    fn test_builder_orders_nodes() {
        let doc = DocumentBuilder::new()
            .disclaimer("first")
            .node(Prim::class(ident("A")))
            .finish()
            .unwrap();
        assert!(matches!(doc.nodes()[0], Node::Disclaimer(_)));
        assert!(doc.nodes()[1].as_prim().is_some());
    }

    #[test]
    fn test_builder_embeds_mesh_under_designated_key() {
        let sphere_id = ident("SphereMesh");
        let mesh = generate_sphere(4, 6, 1.0).unwrap();
        let doc = DocumentBuilder::new()
            .node(Prim::class(sphere_id.clone()).with_type("UsdGeom:Mesh"))
            .over_with_mesh(&sphere_id, &mesh)
            .unwrap()
            .finish()
            .unwrap();

        let over = doc.nodes()[1].as_prim().unwrap();
        let block =
            MeshAttribute::from_value(&over.attributes[MESH_ATTRIBUTE_KEY]).unwrap();
        assert_eq!(block.points.len(), 20);
        assert_eq!(block.face_vertex_indices.len() % 3, 0);
    }

    #[test]
    fn test_builder_rejects_invalid_mesh_early() {
        let mut mesh = TriangleMesh::new();
        mesh.add_point(DVec3::ZERO);
        mesh.add_point(DVec3::X);
        mesh.add_point(DVec3::Y);
        mesh.add_triangle(0, 1, 7);

        let result = DocumentBuilder::new()
            .node(Prim::class(ident("Broken")))
            .over_with_mesh(&ident("Broken"), &mesh);
        assert!(matches!(
            result,
            Err(DocumentError::IndexOutOfBounds { index: 7, .. })
        ));
    }

    #[test]
    fn test_builder_finish_rejects_duplicates() {
        let result = DocumentBuilder::new()
            .node(Prim::class(ident("Wall")))
            .node(Prim::class(ident("Wall")))
            .finish();
        assert!(matches!(result, Err(DocumentError::DuplicateName { .. })));
    }
}
