//! # End Panel Outline
//!
//! The panels attached to the base's short edges. Same horseshoe and
//! doubler construction as the side panels, but no platform notches:
//! instead, when the platform is active, the far-edge spans covered by the
//! attached fascia units become fold lines.

use crate::outline::{EdgeClass, Outline};
use crate::resolve::SideSpec;
use glam::DVec2;

/// Builds an end panel outline.
///
/// `platform_active` reclassifies the far-edge spans that carry fascia
/// units as CREASE: the outer leg segments for a horseshoe panel (the two
/// shoulder-mounted units fold there), or the whole far edge for a plain
/// panel (one full-width unit). The knife never runs along a fold.
pub fn end_panel(width: f64, height: f64, spec: &SideSpec, platform_active: bool) -> Outline {
    let w = width.max(0.0);
    let h = height.max(0.0);
    let sh = spec.shoulder;
    let hl = spec.h_low;

    let far = |b: &mut crate::outline::OutlineBuilder, p: DVec2| {
        if platform_active {
            b.crease_to(p);
        } else {
            b.cut_to(p);
        }
    };

    let mut b = Outline::begin(DVec2::ZERO);
    b.cut_to(DVec2::new(0.0, -h));

    if spec.ferro {
        far(&mut b, DVec2::new(sh, -h));
        b.cut_to(DVec2::new(sh, -hl));
        if spec.reinforced {
            let g = spec.r_gap;
            let tab_top = -(hl + spec.r_h);
            b.cut_to(DVec2::new(sh + g, -hl));
            b.cut_to(DVec2::new(sh + g, tab_top));
            b.cut_to(DVec2::new(w - sh - g, tab_top));
            b.cut_to(DVec2::new(w - sh - g, -hl));
            b.cut_to(DVec2::new(w - sh, -hl));
            b.internal_crease(DVec2::new(sh + g, -hl), DVec2::new(w - sh - g, -hl));
        } else {
            b.cut_to(DVec2::new(w - sh, -hl));
        }
        b.cut_to(DVec2::new(w - sh, -h));
        far(&mut b, DVec2::new(w, -h));
    } else {
        far(&mut b, DVec2::new(w, -h));
    }

    b.cut_to(DVec2::new(w, 0.0));
    b.close(EdgeClass::Crease)
}
