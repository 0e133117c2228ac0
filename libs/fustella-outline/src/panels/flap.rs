//! # Corner Glue Flap Outline
//!
//! The interior flaps connecting side and end panels at each corner. A flap
//! attaches to the end panel but must clear the side panel by an assembly
//! gap, so its base edge spans only part of the attachment edge; against a
//! horseshoe side panel the flap outline mirrors the shoulder step so it
//! tucks under the U-cutout cleanly.

use crate::outline::{EdgeClass, Outline};
use crate::resolve::FlapStep;
use config::constants::BASE_GAP;
use glam::DVec2;

/// Builds a corner glue flap outline.
///
/// The local x axis runs along the end panel's side edge (`width` is the
/// end panel height), the flap body extends `height` (the flap length F)
/// away from it. The base edge spans `[gap, width - gap_outer]` where
/// `gap = BASE_GAP + thickness` and the outer gap only applies when the
/// platform assembly occupies the far corner. The base edge is the only
/// CREASE.
///
/// When `step` is present and the flap is longer than the side panel's
/// shoulder, the outer edge steps down by the side panel's cutout depth at
/// `y = -shoulder`, producing a 6-vertex outline.
pub fn corner_flap(
    width: f64,
    height: f64,
    thickness: f64,
    platform_active: bool,
    step: Option<&FlapStep>,
) -> Outline {
    let f = height.max(0.0);
    let gap = BASE_GAP + thickness.max(0.0);
    let gap_outer = if platform_active { gap } else { 0.0 };

    let u_inner = gap;
    let mut u_outer = width - gap_outer;
    if u_outer < u_inner {
        u_outer = u_inner + 1.0;
    }

    let mut b = Outline::begin(DVec2::new(u_inner, 0.0));
    b.cut_to(DVec2::new(u_inner, -f));

    match step {
        Some(s) if f > s.shoulder => {
            let u_outer_low = (u_outer - s.cut_depth).clamp(u_inner, u_outer);
            let shoulder = s.shoulder.clamp(0.0, f);
            b.cut_to(DVec2::new(u_outer_low, -f));
            b.cut_to(DVec2::new(u_outer_low, -shoulder));
            b.cut_to(DVec2::new(u_outer, -shoulder));
        }
        _ => {
            b.cut_to(DVec2::new(u_outer, -f));
        }
    }

    b.cut_to(DVec2::new(u_outer, 0.0));
    b.close(EdgeClass::Crease)
}
