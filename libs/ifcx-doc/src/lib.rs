//! # IFCX Document
//!
//! Scene document model for IFCX exports: a typed node tree (classes,
//! defs, overrides, disclaimers) with validated identifiers, geometry
//! attribute blocks backed by `ifcx-mesh`, and one-shot JSON
//! serialization.
//!
//! ## Architecture
//!
//! ```text
//! ifcx-mesh (TriangleMesh) → ifcx-doc (Document) → output artifact (.ifcx)
//! ```
//!
//! A document is assembled in memory, validated as a whole, then written
//! in a single step. Any validation failure aborts before the output
//! handle is opened, so a failed build leaves no partial artifact.
//!
//! ## Usage
//!
//! ```rust
//! use ifcx_doc::{DocumentBuilder, Ident, Prim};
//! use ifcx_mesh::generate_sphere;
//!
//! let sphere_id = Ident::generate();
//! let mesh = generate_sphere(20, 40, 1.0)?;
//! let doc = DocumentBuilder::new()
//!     .node(Prim::class(sphere_id.clone()).with_type("UsdGeom:Mesh"))
//!     .over_with_mesh(&sphere_id, &mesh)?
//!     .finish()?;
//! # Ok::<(), ifcx_doc::DocumentError>(())
//! ```

pub mod attribute;
pub mod builder;
pub mod document;
pub mod error;
pub mod ident;
pub mod node;

pub use attribute::MeshAttribute;
pub use builder::DocumentBuilder;
pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use ident::{Ident, NodeRef};
pub use node::{Disclaimer, Node, Prim, PrimKind};
