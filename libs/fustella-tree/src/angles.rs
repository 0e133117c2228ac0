//! # Animation Angle Map
//!
//! The animation driver owns phase sequencing and interpolation; the tree
//! only exposes named channels keyed by [`PanelKind`]. Pushing a map writes
//! the fold angle of every panel whose kind appears in it and leaves the
//! rest untouched, so a driver can ramp one channel at a time.
//!
//! Doubler panels fold flat back onto their parent face, so their channel
//! typically targets a flat 180 degrees rather than a right angle.

use crate::panel::{Panel, PanelKind};
use std::collections::HashMap;

/// Applies a named-channel angle map to the whole tree.
///
/// The root's channel is accepted but has no visible effect: the base
/// panel has no attachment to fold about.
pub fn apply_angles(tree: &mut Panel, angles: &HashMap<PanelKind, f64>) {
    tree.walk_mut(&mut |p| {
        if let Some(a) = angles.get(&p.kind) {
            p.fold_angle_deg = *a;
        }
    });
}
