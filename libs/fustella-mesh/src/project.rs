//! # Fold Projection
//!
//! Top-down traversal composing each panel's world matrix from its
//! attachment record: the fixed in-plane rotation first, then the fold
//! rotation about the hinge axis, then the translation to the pivot, all
//! relative to the parent's accumulated matrix. Face generation per panel
//! gives the front and back outlines, one quad per outline edge, and a
//! ruled hinge strip sweeping the fold from flat to the current angle.

use crate::face::{Face, FaceList, FaceRole};
use config::constants::HINGE_STEPS;
use fustella_tree::{FoldAxis, Panel};
use glam::{DMat4, DVec3};

/// Local-to-parent matrix for a panel at the given fold angle.
///
/// The trailing translation recenters the panel on its attachment edge
/// midpoint, so child pivots expressed in this panel's own frame compose
/// correctly through the returned matrix. The root maps identically.
fn local_matrix(panel: &Panel, angle_deg: f64) -> DMat4 {
    let att = match &panel.attachment {
        Some(att) => att,
        None => return DMat4::IDENTITY,
    };

    let fold = (angle_deg * att.fold_sign).to_radians();
    let fold_rot = match att.fold_axis {
        FoldAxis::X => DMat4::from_rotation_x(fold),
        FoldAxis::Y => DMat4::from_rotation_y(fold),
    };

    DMat4::from_translation(DVec3::new(att.pivot.x, att.pivot.y, 0.0))
        * fold_rot
        * DMat4::from_rotation_z(att.rot_z_deg.to_radians())
        * DMat4::from_translation(DVec3::new(-panel.width / 2.0, 0.0, 0.0))
}

/// Projects the whole tree into a world-space face list at the current
/// fold angles.
pub fn project(tree: &Panel) -> FaceList {
    let mut faces = FaceList::default();
    project_panel(tree, DMat4::IDENTITY, &mut faces);
    faces
}

fn project_panel(panel: &Panel, parent: DMat4, out: &mut FaceList) {
    let world = parent * local_matrix(panel, panel.fold_angle_deg);

    let pts = panel.outline.points();
    let front: Vec<DVec3> = pts
        .iter()
        .map(|p| world.transform_point3(DVec3::new(p.x, p.y, 0.0)))
        .collect();
    let back: Vec<DVec3> = pts
        .iter()
        .map(|p| world.transform_point3(DVec3::new(p.x, p.y, -panel.thickness)))
        .collect();

    out.push(Face {
        vertices: front.clone(),
        role: FaceRole::Front,
        owner: panel.name.clone(),
    });
    // Reversed so the back face winds outward.
    out.push(Face {
        vertices: back.iter().rev().copied().collect(),
        role: FaceRole::Back,
        owner: panel.name.clone(),
    });

    let n = pts.len();
    for i in 0..n {
        let j = (i + 1) % n;
        out.push(Face {
            vertices: vec![front[i], front[j], back[j], back[i]],
            role: FaceRole::Side,
            owner: panel.name.clone(),
        });
    }

    if panel.attachment.is_some() {
        hinge_strip(panel, parent, out);
    }

    for child in &panel.children {
        project_panel(child, world, out);
    }
}

/// Fills the crease with a ruled strip: the two back-corner endpoints of
/// the attachment edge are swept through intermediate fold angles and
/// consecutive samples joined into quads. At partial angles this covers
/// the wedge the panel thickness would otherwise leave open.
fn hinge_strip(panel: &Panel, parent: DMat4, out: &mut FaceList) {
    let left = DVec3::new(panel.width, 0.0, -panel.thickness);
    let right = DVec3::new(0.0, 0.0, -panel.thickness);

    let mut prev: Option<(DVec3, DVec3)> = None;
    for i in 0..=HINGE_STEPS {
        let t = i as f64 / HINGE_STEPS as f64;
        let step = parent * local_matrix(panel, panel.fold_angle_deg * t);
        let l = step.transform_point3(left);
        let r = step.transform_point3(right);
        if let Some((pl, pr)) = prev {
            out.push(Face {
                vertices: vec![pl, l, r, pr],
                role: FaceRole::Hinge,
                owner: panel.name.clone(),
            });
        }
        prev = Some((l, r));
    }
}

/// World matrix of the named panel at the current fold angles.
pub fn world_transform(tree: &Panel, name: &str) -> Option<DMat4> {
    fn walk(panel: &Panel, parent: DMat4, name: &str) -> Option<DMat4> {
        let world = parent * local_matrix(panel, panel.fold_angle_deg);
        if panel.name == name {
            return Some(world);
        }
        panel.children.iter().find_map(|c| walk(c, world, name))
    }
    walk(tree, DMat4::IDENTITY, name)
}

/// Maps a world-space point into the named panel's local frame.
pub fn world_to_local(tree: &Panel, name: &str, point: DVec3) -> Option<DVec3> {
    world_transform(tree, name).map(|m| m.inverse().transform_point3(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::HINGE_STEPS;
    use fustella_layout::project as project_2d;
    use fustella_params::{PanelShape, ParamSet};
    use fustella_tree::{apply_angles, build_tree, PanelKind};
    use std::collections::HashMap;

    fn plain_box() -> ParamSet {
        let mut p = ParamSet::default();
        p.fianchi.shape = PanelShape::Rect;
        p.fianchi.reinforced = false;
        p.testate.shape = PanelShape::Rect;
        p.testate.reinforced = false;
        p.platform.active = false;
        p
    }

    fn owner_front<'a>(faces: &'a FaceList, name: &str) -> &'a Face {
        faces
            .iter()
            .find(|f| f.owner == name && f.role == FaceRole::Front)
            .unwrap()
    }

    #[test]
    fn test_flat_tree_lies_in_plane() {
        let tree = build_tree(&plain_box());
        let faces = project(&tree);
        for face in faces.iter().filter(|f| f.role == FaceRole::Front) {
            for v in &face.vertices {
                assert_relative_eq!(v.z, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_side_panel_stands_up_at_ninety_degrees() {
        let mut tree = build_tree(&plain_box());
        let mut map = HashMap::new();
        map.insert(PanelKind::Fianchi, 90.0);
        apply_angles(&mut tree, &map);

        let faces = project(&tree);
        let front = owner_front(&faces, "Fianco_T");
        let mut max_z: f64 = 0.0;
        for v in &front.vertices {
            // The whole panel rotates onto the base edge plane
            assert_relative_eq!(v.y, 0.0, epsilon = 1e-9);
            assert!(v.z > -1e-9);
            max_z = max_z.max(v.z);
        }
        assert_relative_eq!(max_z, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_opposite_panels_fold_toward_each_other() {
        let mut tree = build_tree(&plain_box());
        let mut map = HashMap::new();
        map.insert(PanelKind::Fianchi, 90.0);
        map.insert(PanelKind::Testate, 90.0);
        apply_angles(&mut tree, &map);

        let faces = project(&tree);
        for name in ["Fianco_T", "Fianco_B", "Testata_L", "Testata_R"] {
            let front = owner_front(&faces, name);
            for v in &front.vertices {
                assert!(v.z > -1e-9, "{name} folded below the base plane");
            }
        }
    }

    #[test]
    fn test_cross_projection_coincides_at_zero_fold() {
        let params = ParamSet::default();
        let tree = build_tree(&params);
        let faces = project(&tree);
        let diagram = project_2d(&tree, None);

        for poly in &diagram.polygons {
            let front = owner_front(&faces, &poly.name);
            assert_eq!(front.vertices.len(), poly.points.len());
            for (v3, v2) in front.vertices.iter().zip(&poly.points) {
                let flat = *v2 - diagram.offset;
                assert_relative_eq!(v3.x, flat.x, epsilon = 1e-9);
                assert_relative_eq!(v3.y, flat.y, epsilon = 1e-9);
                assert_relative_eq!(v3.z, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_hinge_strip_quad_count() {
        let tree = build_tree(&plain_box());
        let faces = project(&tree);
        let hinges = faces
            .iter()
            .filter(|f| f.owner == "Fianco_T" && f.role == FaceRole::Hinge)
            .count();
        assert_eq!(hinges, HINGE_STEPS);
    }

    #[test]
    fn test_face_roles_per_panel() {
        let tree = build_tree(&plain_box());
        let faces = project(&tree);
        let base_sides = faces
            .iter()
            .filter(|f| f.owner == "Fondo" && f.role == FaceRole::Side)
            .count();
        assert_eq!(base_sides, 4);
        // Root has no hinge
        assert!(!faces
            .iter()
            .any(|f| f.owner == "Fondo" && f.role == FaceRole::Hinge));
    }

    #[test]
    fn test_full_mesh_validates() {
        let mut tree = build_tree(&ParamSet::default());
        let mut map = HashMap::new();
        map.insert(PanelKind::Fianchi, 90.0);
        map.insert(PanelKind::Testate, 90.0);
        map.insert(PanelKind::Lembi, 90.0);
        map.insert(PanelKind::Reinf, 180.0);
        apply_angles(&mut tree, &map);
        assert!(project(&tree).validate().is_ok());
    }

    #[test]
    fn test_world_to_local_round_trip() {
        let mut tree = build_tree(&plain_box());
        let mut map = HashMap::new();
        map.insert(PanelKind::Fianchi, 37.0);
        apply_angles(&mut tree, &map);

        let local = DVec3::new(12.0, -34.0, 0.0);
        let m = world_transform(&tree, "Fianco_T").unwrap();
        let world = m.transform_point3(local);
        let back = world_to_local(&tree, "Fianco_T", world).unwrap();
        assert_relative_eq!(back.x, local.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, local.y, epsilon = 1e-9);
        assert_relative_eq!(back.z, local.z, epsilon = 1e-9);
    }

    #[test]
    fn test_world_transform_missing_panel() {
        let tree = build_tree(&plain_box());
        assert!(world_transform(&tree, "nope").is_none());
    }
}
