//! # Rectangular Outlines
//!
//! The base panel and the plain rectangular panels (sides and ends in rect
//! mode, fascia units, platform flaps, reinforcement doublers).

use crate::outline::{EdgeClass, Outline};
use glam::DVec2;

/// Base ("fondo") outline: `[0, length] x [0, width]`.
///
/// Every base edge carries a fold, so all four edges are CREASE.
pub fn base(length: f64, width: f64) -> Outline {
    let l = length.max(0.0);
    let w = width.max(0.0);
    let mut b = Outline::begin(DVec2::ZERO);
    b.crease_to(DVec2::new(l, 0.0));
    b.crease_to(DVec2::new(l, w));
    b.crease_to(DVec2::new(0.0, w));
    b.close(EdgeClass::Crease)
}

/// Plain rectangular panel: attachment edge CREASE, other three CUT.
///
/// # Example
///
/// ```rust
/// use fustella_outline::panels::rect_panel;
///
/// let o = rect_panel(100.0, 40.0);
/// assert_eq!(o.vertex_count(), 4);
/// assert_eq!(o.crease_count(), 1);
/// ```
pub fn rect_panel(width: f64, height: f64) -> Outline {
    let w = width.max(0.0);
    let h = height.max(0.0);
    let mut b = Outline::begin(DVec2::ZERO);
    b.cut_to(DVec2::new(0.0, -h));
    b.cut_to(DVec2::new(w, -h));
    b.cut_to(DVec2::new(w, 0.0));
    b.close(EdgeClass::Crease)
}
