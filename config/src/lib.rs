//! # Config Crate
//!
//! Centralized configuration constants for the die-line pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, BASE_GAP, HINGE_STEPS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Corner flaps sit one material gap away from the side panels
//! let thickness = 5.0;
//! let flap_inset = BASE_GAP + thickness;
//! assert_eq!(flap_inset, 7.0);
//!
//! // Hinge fillets tessellate the crease sweep
//! assert_eq!(HINGE_STEPS, 6);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimeters Everywhere**: Every length constant is in mm
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
