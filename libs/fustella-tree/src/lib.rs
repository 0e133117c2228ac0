//! # Fustella Tree
//!
//! The panel hierarchy: a rooted tree (root = base panel) where every other
//! panel stores its outline, its attachment to the parent and a mutable fold
//! angle. The tree is rebuilt from scratch on every parameter change and is
//! the single model both projections read.
//!
//! ## Architecture
//!
//! ```text
//! fustella-params (ParamSet) -> fustella-tree (Panel) -> projectors
//! ```
//!
//! One [`Attachment`] record per panel drives both the 2D layout
//! (`pivot`/`rot_z_deg` as flat placement) and the 3D fold (`pivot` as the
//! hinge point, `rot_z_deg` as the fixed pre-rotation, plus fold axis and
//! sign), which makes the two projections coincide at fold angle zero by
//! construction.
//!
//! ## Usage
//!
//! ```rust
//! use fustella_params::ParamSet;
//! use fustella_tree::{build_tree, PanelKind};
//!
//! let tree = build_tree(&ParamSet::default());
//! assert_eq!(tree.kind, PanelKind::Fondo);
//! assert!(tree.panel_count() > 1);
//! ```

pub mod angles;
pub mod attachment;
pub mod builder;
pub mod panel;

pub use angles::apply_angles;
pub use attachment::{AttachEdge, Attachment, FoldAxis};
pub use builder::build_tree;
pub use panel::{Panel, PanelKind};
