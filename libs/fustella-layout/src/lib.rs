//! # Fustella Layout
//!
//! The 2D flat-layout projector: walks the panel tree, composes each
//! panel's flat pose from its attachment record and emits the die-line as
//! placed polygons plus cut, crease and glue-band overlays, all in one
//! positive coordinate space.
//!
//! ## Architecture
//!
//! ```text
//! fustella-tree (Panel) -> diagram::project -> Diagram -> 2D renderer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fustella_layout::project;
//! use fustella_params::ParamSet;
//! use fustella_tree::build_tree;
//!
//! let params = ParamSet::default();
//! let tree = build_tree(&params);
//! let diagram = project(&tree, Some(&params));
//! assert_eq!(diagram.polygons.len(), tree.panel_count());
//! ```

pub mod diagram;
pub mod glue;

pub use diagram::{project, Diagram, GlueLine, PlacedPolygon};
