//! # Side Panel Outline
//!
//! The long panels attached to the base's long edges: optional horseshoe
//! profile, optional reinforcement doubler tab, optional platform corner
//! notches.

use crate::outline::{EdgeClass, Outline};
use crate::resolve::{NotchSpec, SideSpec};
use glam::DVec2;

/// Builds a side panel outline.
///
/// The boundary runs down the left edge, across the far edge (detouring
/// through the U-profile and the doubler tab when present), and back up the
/// right edge; the closing edge along `y = 0` is the attachment CREASE.
/// When `notch` is given, both far corners are truncated to clear the
/// platform assembly folded from the adjacent end panels.
///
/// Vertex counts: 4 plain, 8 horseshoe, 12 horseshoe + doubler, plus 2 per
/// notched corner.
///
/// # Example
///
/// ```rust
/// use fustella_outline::panels::side_panel;
/// use fustella_outline::SideSpec;
/// use fustella_params::ParamSet;
///
/// let p = ParamSet::default();
/// let spec = SideSpec::resolve(p.length, p.fianchi.h, &p.fianchi, None);
/// let o = side_panel(p.length, p.fianchi.h, &spec, None);
/// assert_eq!(o.vertex_count(), 12);
/// assert_eq!(o.internal_creases().len(), 1);
/// ```
pub fn side_panel(width: f64, height: f64, spec: &SideSpec, notch: Option<&NotchSpec>) -> Outline {
    let w = width.max(0.0);
    let h = height.max(0.0);
    let sh = spec.shoulder;
    let hl = spec.h_low;

    let mut b = Outline::begin(DVec2::ZERO);

    // Left edge, with the platform notch truncating the far corner.
    if let Some(n) = notch {
        b.cut_to(DVec2::new(0.0, -(h - n.h)));
        b.cut_to(DVec2::new(n.w, -(h - n.h)));
        b.cut_to(DVec2::new(n.w, -h));
    } else {
        b.cut_to(DVec2::new(0.0, -h));
    }

    let right_target = match notch {
        Some(n) => w - n.w,
        None => w,
    };

    // Far edge.
    if spec.ferro {
        b.cut_to(DVec2::new(sh, -h));
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
        b.cut_to(DVec2::new(right_target, -h));
    } else {
        b.cut_to(DVec2::new(right_target, -h));
    }

    // Right edge.
    if let Some(n) = notch {
        b.cut_to(DVec2::new(w - n.w, -(h - n.h)));
        b.cut_to(DVec2::new(w, -(h - n.h)));
        b.cut_to(DVec2::new(w, 0.0));
    } else {
        b.cut_to(DVec2::new(w, 0.0));
    }

    b.close(EdgeClass::Crease)
}
