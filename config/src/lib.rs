//! # Config Crate
//!
//! Centralized configuration constants for the IFCX export pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_LATITUDE_BANDS, MIN_LONGITUDE_BANDS, EPSILON};
//!
//! // Use the tessellation floors when validating sphere parameters
//! let latitude_bands: u32 = 20;
//! assert!(latitude_bands >= MIN_LATITUDE_BANDS);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
