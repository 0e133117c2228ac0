//! # Tree Builder
//!
//! Assembles the full panel hierarchy from one parameter record. The tree
//! is rebuilt from scratch on every edit; fold angles start at zero and are
//! pushed in afterwards by the angle map.
//!
//! Hierarchy for the full reference box:
//!
//! ```text
//! Fondo
//! ├── Fianco_T / Fianco_B          (side panels, platform notches)
//! │   └── Reinf                    (doubler, when reinforced)
//! └── Testata_L / Testata_R        (end panels)
//!     ├── Lembo_L / Lembo_R        (corner glue flaps)
//!     ├── Reinf                    (doubler, when reinforced)
//!     └── Fascia (1 or 2 units)    (platform, when active)
//!         └── Ext                  (platform extension flap)
//! ```

use crate::attachment::{AttachEdge, Attachment, ParentFrame};
use crate::panel::{Panel, PanelKind};
use fustella_outline::panels::{base, corner_flap, end_panel, rect_panel, side_panel};
use fustella_outline::{FlapStep, NotchSpec, SideSpec};
use fustella_params::ParamSet;

/// Builds the complete panel tree for one parameter record.
///
/// Degenerate inputs never panic: dimensions are clamped by the outline
/// builders and features whose clamped geometry vanishes (zero-width
/// doubler tab, collapsed cutout) are dropped from the tree.
pub fn build_tree(params: &ParamSet) -> Panel {
    let l = params.length.max(0.0);
    let w = params.width.max(0.0);
    let t = params.thickness.max(0.0);

    let mut root = Panel::new("Fondo", PanelKind::Fondo, l, w, t, base(l, w));
    let root_frame = ParentFrame {
        width: l,
        height: w,
        is_root: true,
        shoulder: 0.0,
        h_low: 0.0,
    };

    // Side panels on the long edges.
    let notch = params
        .platform
        .active
        .then(|| NotchSpec::resolve(params.fianchi.h, &params.platform));
    let f_spec = SideSpec::resolve(l, params.fianchi.h, &params.fianchi, notch.as_ref());
    for (suffix, edge) in [("T", AttachEdge::Top), ("B", AttachEdge::Bottom)] {
        let fianco = build_group_panel(
            format!("Fianco_{suffix}"),
            PanelKind::Fianchi,
            l,
            params.fianchi.h,
            t,
            &f_spec,
            side_panel(l, params.fianchi.h, &f_spec, notch.as_ref()),
        );
        root.children
            .push(attach(fianco, Attachment::resolve(edge, &root_frame, 0.0)));
    }

    // End panels on the short edges, inset by the material on each side so
    // they fold up inside the side panels.
    let wt = (w - 2.0 * t).max(0.0);
    let t_spec = SideSpec::resolve(wt, params.testate.h, &params.testate, None);
    for (suffix, edge) in [("L", AttachEdge::Left), ("R", AttachEdge::Right)] {
        let mut testata = build_group_panel(
            format!("Testata_{suffix}"),
            PanelKind::Testate,
            wt,
            params.testate.h,
            t,
            &t_spec,
            end_panel(wt, params.testate.h, &t_spec, params.platform.active),
        );
        add_corner_flaps(&mut testata, params, &f_spec);
        if params.platform.active {
            add_platform(&mut testata, params, &t_spec);
        }
        root.children
            .push(attach(testata, Attachment::resolve(edge, &root_frame, 0.0)));
    }

    root
}

/// Builds a side or end panel carrying its resolved spec values, with the
/// doubler child already attached when the resolved values keep it.
fn build_group_panel(
    name: String,
    kind: PanelKind,
    width: f64,
    height: f64,
    thickness: f64,
    spec: &SideSpec,
    outline: fustella_outline::Outline,
) -> Panel {
    let mut panel = Panel::new(name, kind, width, height, thickness, outline);
    panel.shoulder = spec.shoulder;
    panel.h_low = spec.h_low;

    if spec.reinforced {
        let tab_w = spec.tab_width(width);
        let reinf = Panel::new(
            format!("{}_Reinf", panel.name),
            PanelKind::Reinf,
            tab_w,
            spec.r_h,
            thickness,
            rect_panel(tab_w, spec.r_h),
        );
        let frame = frame_of(&panel);
        panel.children.push(attach(
            reinf,
            Attachment::resolve(AttachEdge::ReinfAttach, &frame, 0.0),
        ));
    }

    panel
}

/// Adds the two corner glue flaps to an end panel, stepped to tuck under a
/// horseshoe side panel.
fn add_corner_flaps(testata: &mut Panel, params: &ParamSet, fianchi_spec: &SideSpec) {
    let step = FlapStep::from_side(fianchi_spec, params.fianchi.h);
    let frame = frame_of(testata);
    for (suffix, edge) in [("L", AttachEdge::Left), ("R", AttachEdge::Right)] {
        let lembo = Panel::new(
            format!("{}_Lembo_{suffix}", testata.name),
            PanelKind::Lembi,
            testata.height,
            params.flap_len,
            params.thickness,
            corner_flap(
                testata.height,
                params.flap_len,
                params.thickness,
                params.platform.active,
                step.as_ref(),
            ),
        );
        testata
            .children
            .push(attach(lembo, Attachment::resolve(edge, &frame, 0.0)));
    }
}

/// Adds the platform fascia units and their extension flaps to an end panel.
///
/// A horseshoe end panel with reinforcement carries two independent units,
/// one on each shoulder leg; the unit is wider than the shoulder by the
/// material thickness, so the leg seat is shifted by half the difference to
/// keep it centered. Every other profile carries one full-width unit.
fn add_platform(testata: &mut Panel, params: &ParamSet, spec: &SideSpec) {
    let t = params.thickness.max(0.0);
    let fascia_h = params.platform.fascia_h.max(0.0);
    let flap_w = params.platform.flap_w.max(0.0);
    let frame = frame_of(testata);

    let split = spec.ferro && spec.reinforced;
    let units: Vec<(String, AttachEdge, f64, f64, Vec<AttachEdge>)> = if split {
        let fascia_w = spec.shoulder + t;
        let offset = (fascia_w - spec.shoulder) / 2.0;
        vec![
            (
                format!("{}_Fascia_L", testata.name),
                AttachEdge::LegLeft,
                fascia_w,
                offset,
                vec![AttachEdge::Left],
            ),
            (
                format!("{}_Fascia_R", testata.name),
                AttachEdge::LegRight,
                fascia_w,
                offset,
                vec![AttachEdge::Right],
            ),
        ]
    } else {
        vec![(
            format!("{}_Fascia", testata.name),
            AttachEdge::Bottom,
            params.width.max(0.0),
            0.0,
            vec![AttachEdge::Left, AttachEdge::Right],
        )]
    };

    for (name, edge, width, offset, ext_edges) in units {
        let mut fascia = Panel::new(
            name,
            PanelKind::Fasce,
            width,
            fascia_h,
            t,
            rect_panel(width, fascia_h),
        );
        let fascia_frame = frame_of(&fascia);
        for ext_edge in ext_edges {
            let suffix = match ext_edge {
                AttachEdge::Left => "L",
                _ => "R",
            };
            let ext = Panel::new(
                format!("{}_Ext_{suffix}", fascia.name),
                PanelKind::Ext,
                fascia_h,
                flap_w,
                t,
                rect_panel(fascia_h, flap_w),
            );
            fascia.children.push(attach(
                ext,
                Attachment::resolve(ext_edge, &fascia_frame, 0.0),
            ));
        }
        testata
            .children
            .push(attach(fascia, Attachment::resolve(edge, &frame, offset)));
    }
}

fn attach(mut panel: Panel, attachment: Attachment) -> Panel {
    panel.attachment = Some(attachment);
    panel
}

fn frame_of(panel: &Panel) -> ParentFrame {
    ParentFrame {
        width: panel.width,
        height: panel.height,
        is_root: panel.kind == PanelKind::Fondo,
        shoulder: panel.shoulder,
        h_low: panel.h_low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fustella_params::{PanelShape, ParamSet};

    #[test]
    fn test_reference_box_structure() {
        let tree = build_tree(&ParamSet::default());
        assert_eq!(tree.kind, PanelKind::Fondo);
        assert_eq!(tree.children.len(), 4);

        let fianco = tree.find("Fianco_T").unwrap();
        assert_eq!(fianco.width, 400.0);
        assert_eq!(fianco.children.len(), 1); // doubler

        let testata = tree.find("Testata_L").unwrap();
        // Inset by the material thickness on each side
        assert_eq!(testata.width, 290.0);
        // 2 lembi + doubler + 2 fascia units
        assert_eq!(testata.children.len(), 5);
    }

    #[test]
    fn test_plain_box_has_nine_panels() {
        let mut p = ParamSet::default();
        p.fianchi.shape = PanelShape::Rect;
        p.fianchi.reinforced = false;
        p.testate.shape = PanelShape::Rect;
        p.testate.reinforced = false;
        p.platform.active = false;

        let tree = build_tree(&p);
        // Base + 2 sides + 2 ends + 4 flaps
        assert_eq!(tree.panel_count(), 9);
    }

    #[test]
    fn test_split_fascia_units_on_ferro_reinforced_end() {
        let p = ParamSet::default();
        let tree = build_tree(&p);
        let testata = tree.find("Testata_L").unwrap();

        let fasce: Vec<_> = testata
            .children
            .iter()
            .filter(|c| c.kind == PanelKind::Fasce)
            .collect();
        assert_eq!(fasce.len(), 2);
        // Unit width = parent shoulder + thickness; shoulder = (290 - 180) / 2
        for f in &fasce {
            assert_eq!(f.width, 60.0);
            assert_eq!(f.children.len(), 1);
            assert_eq!(f.children[0].kind, PanelKind::Ext);
        }
        // Leg seat shifted by half the width difference
        let left = testata.find("Testata_L_Fascia_L").unwrap();
        let pivot = left.attachment.as_ref().unwrap().pivot;
        assert_eq!(pivot.x, 55.0 / 2.0 - 2.5);
    }

    #[test]
    fn test_full_width_fascia_on_rect_end() {
        let mut p = ParamSet::default();
        p.testate.shape = PanelShape::Rect;
        let tree = build_tree(&p);
        let testata = tree.find("Testata_R").unwrap();

        let fasce: Vec<_> = testata
            .children
            .iter()
            .filter(|c| c.kind == PanelKind::Fasce)
            .collect();
        assert_eq!(fasce.len(), 1);
        assert_eq!(fasce[0].width, 300.0);
        // One extension flap on each outer edge
        assert_eq!(fasce[0].children.len(), 2);
    }

    #[test]
    fn test_doubler_dropped_when_tab_vanishes() {
        let mut p = ParamSet::default();
        p.fianchi.cutout_w = 0.0;
        let tree = build_tree(&p);
        let fianco = tree.find("Fianco_T").unwrap();
        assert!(fianco.children.is_empty());
    }

    #[test]
    fn test_all_fold_angles_start_at_zero() {
        let tree = build_tree(&ParamSet::default());
        tree.walk(&mut |p| assert_eq!(p.fold_angle_deg, 0.0));
    }

    #[test]
    fn test_only_root_lacks_attachment() {
        let tree = build_tree(&ParamSet::default());
        let mut roots = 0;
        tree.walk(&mut |p| {
            if p.attachment.is_none() {
                roots += 1;
                assert_eq!(p.kind, PanelKind::Fondo);
            }
        });
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_unique_panel_names() {
        let tree = build_tree(&ParamSet::default());
        let mut names = Vec::new();
        tree.walk(&mut |p| names.push(p.name.clone()));
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }
}
