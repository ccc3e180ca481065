//! # Node Tree
//!
//! Typed nodes making up a scene document: class and def declarations,
//! overrides that attach attribute data to declared names, and the
//! free-standing disclaimer record.
//!
//! The serialized shape matches the document wire contract:
//!
//! ```text
//! {"disclaimer": "..."}
//! {"def": "class", "name": ..., "type": ..., "children": [...]}
//! {"def": "def",   "name": ..., "inherits": ["</...>"]}
//! {"def": "over",  "name": ..., "attributes": {...}}
//! ```

use crate::ident::{Ident, NodeRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One entry in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Free-standing disclaimer text
    Disclaimer(Disclaimer),
    /// A class, def, or over record
    Prim(Prim),
}

impl Node {
    /// Creates a disclaimer node.
    pub fn disclaimer(text: impl Into<String>) -> Self {
        Self::Disclaimer(Disclaimer {
            disclaimer: text.into(),
        })
    }

    /// Returns the prim if this node is one.
    pub fn as_prim(&self) -> Option<&Prim> {
        match self {
            Self::Prim(prim) => Some(prim),
            Self::Disclaimer(_) => None,
        }
    }
}

impl From<Prim> for Node {
    fn from(prim: Prim) -> Self {
        Self::Prim(prim)
    }
}

/// Disclaimer record carrying free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub disclaimer: String,
}

/// The kind of a prim record, serialized under the `def` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimKind {
    /// Declares a reusable prototype
    Class,
    /// Declares a concrete node, optionally inheriting from classes
    Def,
    /// Attaches attribute data to a previously declared name
    Over,
}

impl PrimKind {
    /// Returns true for kinds that declare a name (class and def).
    #[inline]
    pub fn is_declaration(self) -> bool {
        matches!(self, Self::Class | Self::Def)
    }
}

/// A class, def, or over record.
///
/// Empty collections are skipped on serialization so the artifact carries
/// only the keys the original format emits.
///
/// # Example
///
/// ```rust
/// use ifcx_doc::{Ident, Prim};
///
/// let site = Ident::new("My_Site").unwrap();
/// let prim = Prim::class(Ident::generate())
///     .with_type("UsdGeom:Xform")
///     .with_child(Prim::def(site));
/// assert_eq!(prim.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prim {
    /// Record kind, wire key `def`
    #[serde(rename = "def")]
    pub kind: PrimKind,
    /// Name, unique within its declaration scope
    pub name: Ident,
    /// Semantic role tag, e.g. `UsdGeom:Mesh`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_tag: Option<String>,
    /// Ordered child nodes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Node>,
    /// References to inherited declarations
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub inherits: Vec<NodeRef>,
    /// Typed attribute blocks keyed by block name
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub attributes: BTreeMap<String, Value>,
}

impl Prim {
    fn new(kind: PrimKind, name: Ident) -> Self {
        Self {
            kind,
            name,
            type_tag: None,
            children: Vec::new(),
            inherits: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Creates a class declaration.
    pub fn class(name: Ident) -> Self {
        Self::new(PrimKind::Class, name)
    }

    /// Creates a def declaration.
    pub fn def(name: Ident) -> Self {
        Self::new(PrimKind::Def, name)
    }

    /// Creates an override targeting a declared name.
    pub fn over(target: Ident) -> Self {
        Self::new(PrimKind::Over, target)
    }

    /// Sets the semantic type tag.
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends an inherited reference.
    pub fn with_inherit(mut self, reference: impl Into<NodeRef>) -> Self {
        self.inherits.push(reference.into());
        self
    }

    /// Inserts an attribute block.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}
