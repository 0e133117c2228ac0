//! # Panel Outline Builders
//!
//! One pure builder function per panel kind. All builders emit a closed,
//! non-self-intersecting polygon in the corner-origin local frame and
//! classify every boundary edge.

mod end;
mod flap;
mod rect;
mod side;

pub use end::end_panel;
pub use flap::corner_flap;
pub use rect::{base, rect_panel};
pub use side::side_panel;
