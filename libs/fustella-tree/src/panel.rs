//! # Panel Node
//!
//! One rigid panel in the hierarchy. Panels own their children; the
//! projectors pass parent state down the traversal, so no parent pointers
//! are stored and the tree is plain serializable data.

use crate::attachment::Attachment;
use fustella_outline::Outline;
use serde::{Deserialize, Serialize};

/// Structural role of a panel. Doubles as the animation channel id: the
/// angle map keys panels by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    /// The base; root of the tree, never folds.
    Fondo,
    /// Side panels on the base's long edges.
    Fianchi,
    /// End panels on the base's short edges.
    Testate,
    /// Interior corner glue flaps.
    Lembi,
    /// Platform fascia units.
    Fasce,
    /// Platform extension flaps.
    Ext,
    /// Reinforcement doublers.
    Reinf,
}

/// A rigid panel with its flat outline and its place in the fold hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Unique name within the tree (e.g. `Fianco_T`, `Testata_L_Reinf`).
    pub name: String,
    /// Structural role / animation channel.
    pub kind: PanelKind,
    /// Nominal width (along the attachment edge).
    pub width: f64,
    /// Nominal height (away from the attachment edge).
    pub height: f64,
    /// Material thickness.
    pub thickness: f64,
    /// Flat outline in the panel's local frame.
    pub outline: Outline,
    /// Attachment to the parent; `None` only for the root.
    pub attachment: Option<Attachment>,
    /// Current fold angle in degrees. Mutated by the angle map between
    /// rebuilds, reset to 0 on every rebuild.
    pub fold_angle_deg: f64,
    /// Resolved shoulder width (leg attachments of children read this).
    pub shoulder: f64,
    /// Resolved reduced height (doubler attachments of children read this).
    pub h_low: f64,
    /// Owned children.
    pub children: Vec<Panel>,
}

impl Panel {
    /// Creates a detached panel with no children and fold angle zero.
    pub fn new(
        name: impl Into<String>,
        kind: PanelKind,
        width: f64,
        height: f64,
        thickness: f64,
        outline: Outline,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            width,
            height,
            thickness,
            outline,
            attachment: None,
            fold_angle_deg: 0.0,
            shoulder: 0.0,
            h_low: 0.0,
            children: Vec::new(),
        }
    }

    /// True for the tree root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.attachment.is_none()
    }

    /// Depth-first visit of this panel and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Panel)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Depth-first mutable visit.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Panel)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// Total number of panels in this subtree.
    pub fn panel_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }

    /// Finds a panel by name in this subtree.
    pub fn find(&self, name: &str) -> Option<&Panel> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fustella_outline::panels::rect_panel;

    fn leaf(name: &str) -> Panel {
        Panel::new(name, PanelKind::Lembi, 10.0, 5.0, 1.0, rect_panel(10.0, 5.0))
    }

    #[test]
    fn test_new_panel_is_root_until_attached() {
        let p = leaf("a");
        assert!(p.is_root());
        assert_eq!(p.fold_angle_deg, 0.0);
    }

    #[test]
    fn test_walk_visits_all() {
        let mut root = leaf("root");
        let mut mid = leaf("mid");
        mid.children.push(leaf("deep"));
        root.children.push(mid);
        root.children.push(leaf("side"));

        let mut names = Vec::new();
        root.walk(&mut |p| names.push(p.name.clone()));
        assert_eq!(names, ["root", "mid", "deep", "side"]);
        assert_eq!(root.panel_count(), 4);
    }

    #[test]
    fn test_find_by_name() {
        let mut root = leaf("root");
        root.children.push(leaf("child"));
        assert!(root.find("child").is_some());
        assert!(root.find("missing").is_none());
    }
}
