//! # Fustella Outline
//!
//! Flat outline construction for every panel kind: closed local-frame
//! polygons whose boundary edges are classified as CUT (die-cut) or CREASE
//! (scored fold line), plus internal crease segments for reinforcement
//! doublers.
//!
//! ## Local frame
//!
//! Every panel outline lives in a corner-origin frame: the attachment edge
//! (the fold line shared with the parent) runs along `y = 0` from `x = 0` to
//! `x = width`, and the panel body extends into negative `y`. The base panel
//! is the one exception: it spans `[0, length] x [0, width]` and all four of
//! its edges are creases.
//!
//! ## Failure policy
//!
//! Builders never fail and never panic. Out-of-range parameters are clamped
//! (idempotently) by [`resolve::SideSpec`], and degenerate dimensions produce
//! degenerate but closed, non-self-intersecting polygons.
//!
//! ## Usage
//!
//! ```rust
//! use fustella_outline::panels::rect_panel;
//! use fustella_outline::EdgeClass;
//!
//! let outline = rect_panel(400.0, 100.0);
//! assert_eq!(outline.vertex_count(), 4);
//! assert_eq!(outline.crease_count(), 1);
//! assert_eq!(outline.edge_class(3), EdgeClass::Crease);
//! ```

pub mod outline;
pub mod panels;
pub mod resolve;
pub mod round;

pub use outline::{EdgeClass, Outline, Segment};
pub use resolve::{FlapStep, NotchSpec, SideSpec};
pub use round::{round_corners, round_corners_default};
