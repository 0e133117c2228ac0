//! # World-Space Faces
//!
//! Flat face list produced by the fold projector. Rendering (culling,
//! depth sort, lighting) belongs to the consumer; the contract here stops
//! at geometric faces in world space with a material role and owner tag.

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Material role of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceRole {
    /// Outline at local z = 0, the printed cardboard face.
    Front,
    /// Outline at local z = -thickness, the reverse face.
    Back,
    /// One quad per outline edge, the material's cut thickness.
    Side,
    /// Ruled strip filling the crease at partial fold angles.
    Hinge,
}

/// One polygonal face in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<DVec3>,
    pub role: FaceRole,
    /// Name of the panel this face belongs to.
    pub owner: String,
}

/// The projector's output: an ordered flat list of faces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceList {
    faces: Vec<Face>,
}

impl FaceList {
    pub fn push(&mut self, face: Face) {
        self.faces.push(face);
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    /// Fan-triangulates every face into a flat `f32` position buffer
    /// (three coordinates per vertex, three vertices per triangle).
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for face in &self.faces {
            if face.vertices.len() < 3 {
                continue;
            }
            let v0 = face.vertices[0];
            for w in face.vertices[1..].windows(2) {
                for v in [v0, w[0], w[1]] {
                    out.push(v.x as f32);
                    out.push(v.y as f32);
                    out.push(v.z as f32);
                }
            }
        }
        out
    }

    /// Checks every face for renderability: at least a triangle, all
    /// coordinates finite.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (index, face) in self.faces.iter().enumerate() {
            if face.vertices.len() < 3 {
                return Err(MeshError::degenerate_face(
                    &face.owner,
                    index,
                    face.vertices.len(),
                ));
            }
            if face.vertices.iter().any(|v| !v.is_finite()) {
                return Err(MeshError::non_finite_vertex(&face.owner, index));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(owner: &str) -> Face {
        Face {
            vertices: vec![
                DVec3::ZERO,
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            role: FaceRole::Front,
            owner: owner.into(),
        }
    }

    #[test]
    fn test_quad_fans_into_two_triangles() {
        let mut list = FaceList::default();
        list.push(quad("a"));
        let buf = list.vertices_f32();
        assert_eq!(buf.len(), 2 * 3 * 3);
    }

    #[test]
    fn test_validate_accepts_quads() {
        let mut list = FaceList::default();
        list.push(quad("a"));
        assert!(list.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_face() {
        let mut list = FaceList::default();
        let mut f = quad("a");
        f.vertices.truncate(2);
        list.push(f);
        assert_eq!(
            list.validate(),
            Err(MeshError::degenerate_face("a", 0, 2))
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut list = FaceList::default();
        let mut f = quad("a");
        f.vertices[1].z = f64::NAN;
        list.push(f);
        assert!(matches!(
            list.validate(),
            Err(MeshError::NonFiniteVertex { .. })
        ));
    }
}
