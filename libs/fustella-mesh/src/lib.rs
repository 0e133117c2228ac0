//! # Fustella Mesh
//!
//! The 3D fold projector: walks the panel tree at its current fold angles
//! and emits world-space faces for the folded assembly. Each panel
//! contributes its printed front, its reverse back, one quad per outline
//! edge for the material thickness, and a ruled hinge strip that keeps
//! partial folds visually closed.
//!
//! ## Architecture
//!
//! ```text
//! fustella-tree (Panel + fold angles) -> project -> FaceList -> 3D renderer
//! ```
//!
//! The renderer owns camera, lighting and draw order; this crate's contract
//! stops at geometric face generation.
//!
//! ## Usage
//!
//! ```rust
//! use fustella_mesh::{project, FaceRole};
//! use fustella_params::ParamSet;
//! use fustella_tree::build_tree;
//!
//! let tree = build_tree(&ParamSet::default());
//! let faces = project(&tree);
//! assert!(faces.iter().any(|f| f.role == FaceRole::Front));
//! assert!(faces.validate().is_ok());
//! ```

pub mod error;
pub mod face;
pub mod project;

pub use error::MeshError;
pub use face::{Face, FaceList, FaceRole};
pub use project::{project, world_to_local, world_transform};
