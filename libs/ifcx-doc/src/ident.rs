//! # Identifiers and References
//!
//! Validated node identifiers and the textual references that point at
//! them. Equality and hashing are structural, which makes duplicate-name
//! detection a plain set-membership check.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix used for generated identifiers.
const GENERATED_PREFIX: &str = "N";

/// A validated node identifier.
///
/// Identifiers are non-empty and restricted to ASCII alphanumerics and
/// underscores, so they survive the `</name>` reference syntax unescaped.
///
/// # Example
///
/// ```rust
/// use ifcx_doc::Ident;
///
/// let name = Ident::new("WallMaterial").unwrap();
/// assert_eq!(name.as_str(), "WallMaterial");
/// assert!(Ident::new("has spaces").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ident(String);

impl Ident {
    /// Creates an identifier, rejecting text outside the allowed charset.
    pub fn new(text: impl Into<String>) -> Result<Self, DocumentError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DocumentError::invalid_identifier(text));
        }
        if !text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(DocumentError::invalid_identifier(text));
        }
        Ok(Self(text))
    }

    /// Generates a fresh collision-free identifier.
    ///
    /// Uses a random UUID in hex form behind a fixed prefix, so repeated
    /// calls never collide in practice and the result always passes
    /// identifier validation.
    pub fn generate() -> Self {
        Self(format!(
            "{}{}",
            GENERATED_PREFIX,
            Uuid::new_v4().simple()
        ))
    }

    /// Derives a new identifier by appending a suffix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ifcx_doc::Ident;
    ///
    /// let base = Ident::new("Wall1").unwrap();
    /// let body = base.suffixed("_Body").unwrap();
    /// assert_eq!(body.as_str(), "Wall1_Body");
    /// ```
    pub fn suffixed(&self, suffix: &str) -> Result<Self, DocumentError> {
        Self::new(format!("{}{}", self.0, suffix))
    }

    /// Returns the identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ident {
    type Error = DocumentError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Ident> for String {
    fn from(ident: Ident) -> Self {
        ident.0
    }
}

/// A textual reference from one node to another by name.
///
/// Serializes in the fixed wire form `</identifier>`.
///
/// # Example
///
/// ```rust
/// use ifcx_doc::{Ident, NodeRef};
///
/// let target = Ident::new("SurfaceMesh").unwrap();
/// let reference = NodeRef::from(target);
/// assert_eq!(reference.to_string(), "</SurfaceMesh>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeRef(Ident);

impl NodeRef {
    /// Returns the identifier this reference points at.
    #[inline]
    pub fn target(&self) -> &Ident {
        &self.0
    }
}

impl From<Ident> for NodeRef {
    fn from(ident: Ident) -> Self {
        Self(ident)
    }
}

impl From<&Ident> for NodeRef {
    fn from(ident: &Ident) -> Self {
        Self(ident.clone())
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "</{}>", self.0)
    }
}

impl TryFrom<String> for NodeRef {
    type Error = DocumentError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let inner = text
            .strip_prefix("</")
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| DocumentError::invalid_identifier(text.clone()))?;
        Ok(Self(Ident::new(inner)?))
    }
}

impl From<NodeRef> for String {
    fn from(reference: NodeRef) -> Self {
        reference.to_string()
    }
}
