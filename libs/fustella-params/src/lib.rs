//! # Fustella Params
//!
//! The parameter record driving the die-line engine. A `ParamSet` is a flat,
//! fully-resolved description of one box: base dimensions, per-group panel
//! shapes, reinforcement doublers, the platform sub-assembly and the corner
//! glue flaps. The external editor produces one `ParamSet` per edit and the
//! geometry pipeline rebuilds everything downstream from it.
//!
//! All lengths are millimeters. Values here are *raw* editor input; geometric
//! clamping happens in the outline builder so that both projections read the
//! same resolved numbers.
//!
//! ## Usage
//!
//! ```rust
//! use fustella_params::{ParamSet, PanelShape};
//!
//! let mut p = ParamSet::default();
//! p.fianchi.shape = PanelShape::Rect;
//! p.platform.active = false;
//! assert_eq!(p.length, 400.0);
//! ```

pub mod params;

pub use params::{lenient, ParamSet, PanelShape, PlatformParams, SideParams};
