//! # Configuration Constants
//!
//! Centralized constants for the IFCX export pipeline: tessellation
//! parameters, precision values, and the attribute keys that make up the
//! document's wire contract.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Sphere resolution floors and defaults
//! - **Document**: Attribute-block keys recognized by the document layer

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of latitude bands for sphere tessellation.
///
/// Two bands is the smallest closed configuration: one interior ring
/// fanned to both poles.
pub const MIN_LATITUDE_BANDS: u32 = 2;

/// Minimum number of longitude bands for sphere tessellation.
///
/// Fewer than three points around a ring cannot enclose any area.
pub const MIN_LONGITUDE_BANDS: u32 = 3;

/// Default latitude resolution used by the sample exporter.
pub const DEFAULT_LATITUDE_BANDS: u32 = 20;

/// Default longitude resolution used by the sample exporter.
pub const DEFAULT_LONGITUDE_BANDS: u32 = 40;

/// Default sphere radius used by the sample exporter.
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

// =============================================================================
// DOCUMENT CONSTANTS
// =============================================================================

/// Attribute-block key under which mesh geometry is embedded in an
/// override node.
///
/// Blocks stored under this key must match the minimal mesh shape
/// (`faceVertexIndices` + `points`) and are validated before the
/// document is written.
///
/// # Example
///
/// ```rust
/// use config::constants::MESH_ATTRIBUTE_KEY;
///
/// assert_eq!(MESH_ATTRIBUTE_KEY, "UsdGeom:Mesh");
/// ```
pub const MESH_ATTRIBUTE_KEY: &str = "UsdGeom:Mesh";

/// Attribute key holding the flattened triangle index list inside a
/// mesh block.
pub const MESH_INDICES_KEY: &str = "faceVertexIndices";

/// Attribute key holding the point list inside a mesh block.
pub const MESH_POINTS_KEY: &str = "points";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
