//! # Flat Diagram Projection
//!
//! Walks the panel tree once, composing each panel's flat pose from its
//! attachment record, and collects placed polygons plus the cut, crease and
//! glue overlays. The finished diagram is translated so everything sits in
//! positive coordinates, with the applied offset reported alongside.

use crate::glue::{band_positions, probe_segments};
use config::constants::LAYOUT_MARGIN;
use fustella_outline::{EdgeClass, NotchSpec, Segment, SideSpec};
use fustella_params::ParamSet;
use fustella_tree::{Panel, PanelKind};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// One panel outline placed in diagram space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPolygon {
    pub name: String,
    pub kind: PanelKind,
    pub points: Vec<DVec2>,
}

/// One glue-band span with its band rank (0 = outermost).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlueLine {
    pub segment: Segment,
    pub rank: usize,
}

/// The complete flat die-line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub polygons: Vec<PlacedPolygon>,
    pub cuts: Vec<Segment>,
    pub creases: Vec<Segment>,
    pub glue_lines: Vec<GlueLine>,
    /// Translation applied to move the diagram into positive space.
    pub offset: DVec2,
}

// =============================================================================
// POSE COMPOSITION
// =============================================================================

/// Accumulated flat pose: maps a panel's recentered local frame into
/// diagram space.
#[derive(Debug, Clone, Copy)]
struct Pose {
    pos: DVec2,
    rot_deg: f64,
}

impl Pose {
    const IDENTITY: Pose = Pose {
        pos: DVec2::ZERO,
        rot_deg: 0.0,
    };

    /// Places a local point, recentering the panel on its attachment edge
    /// midpoint first. The root is never recentered.
    fn place(&self, center_x: f64, p: DVec2) -> DVec2 {
        let (s, c) = self.rot_deg.to_radians().sin_cos();
        let q = DVec2::new(p.x - center_x, p.y);
        DVec2::new(q.x * c - q.y * s, q.x * s + q.y * c) + self.pos
    }
}

// =============================================================================
// PROJECTION
// =============================================================================

/// Projects the tree into a flat diagram.
///
/// When `params` is given the glue-band overlay is computed as well; the
/// overlay is presentation-adjacent and renderers that do not draw glue
/// hints pass `None`.
pub fn project(tree: &Panel, params: Option<&ParamSet>) -> Diagram {
    let mut diagram = Diagram {
        polygons: Vec::new(),
        cuts: Vec::new(),
        creases: Vec::new(),
        glue_lines: Vec::new(),
        offset: DVec2::ZERO,
    };

    place_panel(tree, Pose::IDENTITY, 0.0, &mut diagram);

    if let Some(p) = params {
        add_glue_lines(&mut diagram, p);
    }

    apply_offset(&mut diagram);
    diagram
}

fn place_panel(panel: &Panel, pose: Pose, center_x: f64, out: &mut Diagram) {
    let points: Vec<DVec2> = panel
        .outline
        .points()
        .iter()
        .map(|p| pose.place(center_x, *p))
        .collect();

    for (seg, class) in panel.outline.segments() {
        let placed = Segment::new(pose.place(center_x, seg.a), pose.place(center_x, seg.b));
        match class {
            EdgeClass::Cut => out.cuts.push(placed),
            EdgeClass::Crease => out.creases.push(placed),
        }
    }
    for seg in panel.outline.internal_creases() {
        out.creases.push(Segment::new(
            pose.place(center_x, seg.a),
            pose.place(center_x, seg.b),
        ));
    }

    out.polygons.push(PlacedPolygon {
        name: panel.name.clone(),
        kind: panel.kind,
        points,
    });

    for child in &panel.children {
        if let Some(att) = &child.attachment {
            let child_pose = Pose {
                pos: pose.place(center_x, att.pivot),
                rot_deg: pose.rot_deg + att.rot_z_deg,
            };
            place_panel(child, child_pose, child.width / 2.0, out);
        }
    }
}

// =============================================================================
// GLUE OVERLAY
// =============================================================================

fn add_glue_lines(diagram: &mut Diagram, params: &ParamSet) {
    let w = params.width.max(0.0);
    let h_f = params.fianchi.h.max(0.0);

    let notch = params
        .platform
        .active
        .then(|| NotchSpec::resolve(params.fianchi.h, &params.platform));
    let spec = SideSpec::resolve(
        params.length.max(0.0),
        params.fianchi.h,
        &params.fianchi,
        notch.as_ref(),
    );

    let reinf_extent = spec.reinforced.then(|| spec.h_low + spec.r_h);
    let flap_extent = params.platform.active.then(|| params.platform.flap_w.max(0.0));
    let split_zone = spec
        .ferro
        .then(|| (spec.shoulder, params.length.max(0.0) - spec.shoulder));

    let top = band_positions(0.0, -h_f, reinf_extent.map(|e| -e), flap_extent.map(|e| -e));
    let bottom = band_positions(
        w,
        w + h_f,
        reinf_extent.map(|e| w + e),
        flap_extent.map(|e| w + e),
    );

    for rank in 0..top.len() {
        for y in [top[rank], bottom[rank]] {
            for segment in probe_segments(y, &diagram.polygons, split_zone) {
                diagram.glue_lines.push(GlueLine { segment, rank });
            }
        }
    }
}

// =============================================================================
// GLOBAL OFFSET
// =============================================================================

fn apply_offset(diagram: &mut Diagram) {
    let mut min = DVec2::splat(f64::INFINITY);
    for poly in &diagram.polygons {
        for p in &poly.points {
            min = min.min(*p);
        }
    }
    if !min.is_finite() {
        return;
    }

    let offset = DVec2::splat(LAYOUT_MARGIN) - min;
    diagram.offset = offset;

    for poly in &mut diagram.polygons {
        for p in &mut poly.points {
            *p += offset;
        }
    }
    for seg in diagram.cuts.iter_mut().chain(diagram.creases.iter_mut()) {
        seg.a += offset;
        seg.b += offset;
    }
    for line in &mut diagram.glue_lines {
        line.segment.a += offset;
        line.segment.b += offset;
    }
}
