//! # Attachment Rules
//!
//! One record per non-root panel describing how it hangs off its parent.
//! The same record drives both projections: the 2D layout reads the pivot
//! and in-plane rotation, the 3D fold reads the pivot as the hinge point and
//! adds the fold axis and sign. Keeping a single source for both is what
//! makes the flat diagram and the unfolded 3D model coincide.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Which parent edge a child hangs off.
///
/// Root edges are named in the base panel's frame (`Top` faces negative y).
/// Non-root parents only ever carry children on their far edge (`Bottom`)
/// or side edges, plus the platform-specific leg and doubler seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachEdge {
    Top,
    Bottom,
    Left,
    Right,
    /// Left leg of a horseshoe parent (platform fascia seat).
    LegLeft,
    /// Right leg of a horseshoe parent (platform fascia seat).
    LegRight,
    /// Doubler seat at the parent's reduced-height line.
    ReinfAttach,
}

/// Fold rotation axis, in the parent's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldAxis {
    X,
    Y,
}

/// Resolved attachment of a child to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Parent edge the child hangs off.
    pub edge: AttachEdge,
    /// Hinge point in the parent's local frame.
    pub pivot: DVec2,
    /// Fixed in-plane rotation of the child about the pivot, degrees.
    pub rot_z_deg: f64,
    /// Axis the fold angle rotates about, after the in-plane rotation.
    pub fold_axis: FoldAxis,
    /// Sign applied to the fold angle.
    pub fold_sign: f64,
}

/// Geometry of the parent needed to resolve an attachment.
///
/// Root parents use the base frame (outline spans `[0,w] x [0,h]`); all
/// other parents use the standard panel frame (`[0,w] x [-h,0]`).
#[derive(Debug, Clone, Copy)]
pub struct ParentFrame {
    pub width: f64,
    pub height: f64,
    pub is_root: bool,
    /// Resolved shoulder of the parent (leg seats).
    pub shoulder: f64,
    /// Resolved reduced height of the parent (doubler seat).
    pub h_low: f64,
}

impl Attachment {
    /// Resolves the pivot, in-plane rotation and fold axis for a child on
    /// the given parent edge.
    ///
    /// `custom_offset` shifts leg seats along the attachment edge; it is
    /// ignored for every other edge.
    pub fn resolve(edge: AttachEdge, parent: &ParentFrame, custom_offset: f64) -> Attachment {
        let w = parent.width;
        let h = parent.height;

        let (pivot, rot_z_deg, fold_axis, fold_sign) = if parent.is_root {
            match edge {
                AttachEdge::Top => (DVec2::new(w / 2.0, 0.0), 0.0, FoldAxis::X, -1.0),
                AttachEdge::Bottom => (DVec2::new(w / 2.0, h), 180.0, FoldAxis::X, 1.0),
                AttachEdge::Left => (DVec2::new(0.0, h / 2.0), -90.0, FoldAxis::Y, 1.0),
                AttachEdge::Right => (DVec2::new(w, h / 2.0), 90.0, FoldAxis::Y, -1.0),
                _ => (DVec2::new(w / 2.0, 0.0), 0.0, FoldAxis::X, -1.0),
            }
        } else {
            match edge {
                AttachEdge::Bottom => (DVec2::new(w / 2.0, -h), 0.0, FoldAxis::X, -1.0),
                AttachEdge::Left => (DVec2::new(0.0, -h / 2.0), -90.0, FoldAxis::Y, 1.0),
                AttachEdge::Right => (DVec2::new(w, -h / 2.0), 90.0, FoldAxis::Y, -1.0),
                AttachEdge::LegLeft => (
                    DVec2::new(parent.shoulder / 2.0 - custom_offset, -h),
                    0.0,
                    FoldAxis::X,
                    -1.0,
                ),
                AttachEdge::LegRight => (
                    DVec2::new(w - parent.shoulder / 2.0 + custom_offset, -h),
                    0.0,
                    FoldAxis::X,
                    -1.0,
                ),
                AttachEdge::ReinfAttach => (
                    DVec2::new(w / 2.0, -parent.h_low),
                    0.0,
                    FoldAxis::X,
                    -1.0,
                ),
                AttachEdge::Top => (DVec2::new(w / 2.0, 0.0), 0.0, FoldAxis::X, -1.0),
            }
        };

        Attachment {
            edge,
            pivot,
            rot_z_deg,
            fold_axis,
            fold_sign,
        }
    }
}
