//! # Document
//!
//! The ordered node sequence that becomes a single JSON artifact.
//! A document is built once per run, validated as a whole, written once,
//! and then discarded; nothing mutates it after the write.

use crate::attribute::MeshAttribute;
use crate::error::{DocumentError, DocumentResult};
use crate::ident::Ident;
use crate::node::{Node, Prim, PrimKind};
use config::constants::MESH_ATTRIBUTE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An ordered sequence of top-level nodes, serialized as one JSON array.
///
/// # Example
///
/// ```rust
/// use ifcx_doc::{Document, Ident, Node, Prim};
///
/// let mut doc = Document::new();
/// doc.push(Node::disclaimer("sample"));
/// doc.push(Prim::class(Ident::new("SurfaceMesh").unwrap()).into());
/// assert!(doc.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from an existing node sequence.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Returns the top-level nodes in order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Appends a top-level node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Validates the entire tree.
    ///
    /// Checks, in order:
    /// - top-level class/def names are unique document-wide
    /// - sibling declaration names are unique within every children list
    /// - every override target and every inherited reference resolves to
    ///   a top-level declaration
    /// - every geometry attribute block matches the minimal mesh shape
    ///   with all indices in bounds
    ///
    /// Serialization never starts until this passes, so a failing
    /// document leaves no partial artifact.
    pub fn validate(&self) -> DocumentResult<()> {
        let mut declared: HashSet<&Ident> = HashSet::new();
        for prim in self.nodes.iter().filter_map(Node::as_prim) {
            if prim.kind.is_declaration() && !declared.insert(&prim.name) {
                return Err(DocumentError::duplicate_name(prim.name.as_str()));
            }
        }

        for prim in self.nodes.iter().filter_map(Node::as_prim) {
            if prim.kind == PrimKind::Over && !declared.contains(&prim.name) {
                return Err(DocumentError::unresolved(prim.name.as_str()));
            }
            check_sibling_names(&prim.children)?;
            check_prim(prim, &declared)?;
        }

        Ok(())
    }

    /// Serializes the validated document to pretty-printed JSON.
    pub fn to_json_string(&self) -> DocumentResult<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }

    /// Parses a document back from JSON text and re-validates it.
    pub fn from_json_str(text: &str) -> DocumentResult<Self> {
        let document: Self = serde_json::from_str(text)?;
        document.validate()?;
        Ok(document)
    }

    /// Writes the document to a file in a single all-or-nothing step.
    ///
    /// The whole tree is validated and serialized in memory before the
    /// output handle is touched; any failure aborts with no partial
    /// artifact on disk.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let json = self.to_json_string()?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Checks that sibling declarations within a children list have unique
/// names, recursing into nested lists.
fn check_sibling_names(children: &[Node]) -> DocumentResult<()> {
    let mut seen: HashSet<&Ident> = HashSet::new();
    for prim in children.iter().filter_map(Node::as_prim) {
        if prim.kind.is_declaration() && !seen.insert(&prim.name) {
            return Err(DocumentError::duplicate_name(prim.name.as_str()));
        }
        check_sibling_names(&prim.children)?;
    }
    Ok(())
}

/// Checks references and geometry blocks for one prim and its subtree.
fn check_prim(prim: &Prim, declared: &HashSet<&Ident>) -> DocumentResult<()> {
    for reference in &prim.inherits {
        if !declared.contains(reference.target()) {
            return Err(DocumentError::unresolved(reference.target().as_str()));
        }
    }

    if let Some(value) = prim.attributes.get(MESH_ATTRIBUTE_KEY) {
        MeshAttribute::from_value(value)?.validate()?;
    }

    for child in prim.children.iter().filter_map(Node::as_prim) {
        check_prim(child, declared)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ident(text: &str) -> Ident {
        Ident::new(text).unwrap()
    }

    #[test]
    fn test_empty_document_is_valid() {
        assert!(Document::new().validate().is_ok());
    }

    #[test]
    fn test_duplicate_top_level_name_rejected() {
        let doc = Document::from_nodes(vec![
            Prim::class(ident("Wall")).into(),
            Prim::class(ident("Wall")).into(),
        ]);
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_duplicate_sibling_name_rejected() {
        let doc = Document::from_nodes(vec![Prim::class(ident("Window"))
            .with_child(Prim::def(ident("Body")))
            .with_child(Prim::def(ident("Body")))
            .into()]);
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_same_child_name_in_different_scopes_allowed() {
        let doc = Document::from_nodes(vec![
            Prim::class(ident("A"))
                .with_child(Prim::def(ident("Body")))
                .into(),
            Prim::class(ident("B"))
                .with_child(Prim::def(ident("Body")))
                .into(),
        ]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_over_does_not_declare() {
        // Multiple overrides on one declared target are allowed.
        let doc = Document::from_nodes(vec![
            Prim::class(ident("Wall")).into(),
            Prim::over(ident("Wall"))
                .with_attribute("ifc5:properties", json!({"IsExternal": 1}))
                .into(),
            Prim::over(ident("Wall"))
                .with_attribute("ifc5:class", json!({"code": "IfcWall"}))
                .into(),
        ]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_over_with_undeclared_target_rejected() {
        let doc = Document::from_nodes(vec![Prim::over(ident("Ghost")).into()]);
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn test_dangling_inherit_rejected() {
        let doc = Document::from_nodes(vec![Prim::def(ident("Surface"))
            .with_inherit(ident("SurfaceMesh"))
            .into()]);
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn test_forward_reference_allowed() {
        // Declaration order does not matter for reference resolution.
        let doc = Document::from_nodes(vec![
            Prim::def(ident("Surface"))
                .with_inherit(ident("SurfaceMesh"))
                .into(),
            Prim::class(ident("SurfaceMesh")).into(),
        ]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_bad_geometry_block_rejected() {
        let doc = Document::from_nodes(vec![
            Prim::class(ident("Sphere")).into(),
            Prim::over(ident("Sphere"))
                .with_attribute(
                    MESH_ATTRIBUTE_KEY,
                    json!({
                        "faceVertexIndices": [0, 1, 9],
                        "points": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
                    }),
                )
                .into(),
        ]);
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::IndexOutOfBounds { index: 9, .. })
        ));
    }

    #[test]
    fn test_invalid_document_writes_nothing() {
        let doc = Document::from_nodes(vec![
            Prim::class(ident("Wall")).into(),
            Prim::class(ident("Wall")).into(),
        ]);
        let path = std::env::temp_dir().join("ifcx_doc_test_no_partial.ifcx");
        let _ = fs::remove_file(&path);
        assert!(doc.write_to_file(&path).is_err());
        assert!(!path.exists(), "failed build must not leave an artifact");
    }

    #[test]
    fn test_json_round_trip() {
        let doc = Document::from_nodes(vec![
            Node::disclaimer("sample"),
            Prim::class(ident("SurfaceMesh"))
                .with_type("UsdGeom:Mesh")
                .into(),
            Prim::def(ident("Surface"))
                .with_inherit(ident("SurfaceMesh"))
                .into(),
        ]);
        let json = doc.to_json_string().unwrap();
        let back = Document::from_json_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_serializes_as_top_level_array() {
        let doc = Document::from_nodes(vec![Node::disclaimer("sample")]);
        let json = doc.to_json_string().unwrap();
        assert!(json.trim_start().starts_with('['));
    }
}
