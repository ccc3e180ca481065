//! # Document Errors
//!
//! Error types for document construction, validation, and serialization.
//! Every error is fatal to the current build attempt; nothing is retried
//! and no partial artifact is written.

use thiserror::Error;

/// Errors that can occur while building or writing a scene document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Two declarations share a name within the same scope
    #[error("Duplicate name: {name}")]
    DuplicateName { name: String },

    /// A reference or override target does not resolve to a declaration
    #[error("Unresolved reference: {name}")]
    UnresolvedReference { name: String },

    /// A triangle index exceeds the point count of its geometry block
    #[error("Index out of bounds: {index} (point count: {point_count})")]
    IndexOutOfBounds { index: u32, point_count: usize },

    /// A geometry attribute block does not match the minimal mesh shape
    #[error("Malformed geometry: {message}")]
    MalformedGeometry { message: String },

    /// Identifier text outside the allowed character set
    #[error("Invalid identifier: {text:?}")]
    InvalidIdentifier { text: String },

    /// Mesh generation rejected its inputs
    #[error(transparent)]
    Mesh(#[from] ifcx_mesh::MeshError),

    /// JSON serialization of the document failed
    #[error("Serialization failed: {0}")]
    SerializationFailure(#[from] serde_json::Error),

    /// Writing the output artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocumentError {
    /// Creates a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Creates an unresolved reference error.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedReference { name: name.into() }
    }

    /// Creates a malformed geometry error.
    pub fn malformed_geometry(message: impl Into<String>) -> Self {
        Self::MalformedGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(text: impl Into<String>) -> Self {
        Self::InvalidIdentifier { text: text.into() }
    }
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocumentError::duplicate_name("WallMaterial");
        assert!(err.to_string().contains("WallMaterial"));

        let err = DocumentError::IndexOutOfBounds {
            index: 20,
            point_count: 20,
        };
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentError>();
    }
}
