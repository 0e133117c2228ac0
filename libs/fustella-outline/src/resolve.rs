//! # Parameter Resolution
//!
//! Pure compute-and-clamp helpers turning raw editor parameters into the
//! resolved values the outline builders consume. Both projections read the
//! same resolved numbers, so the clamping rules live here and nowhere else.
//!
//! Clamping is idempotent: resolving the same inputs twice yields identical
//! values, and a resolved spec re-fed through its own bounds is a fixpoint.

use config::constants::{NOTCH_HEIGHT_MARGIN, SHOULDER_NOTCH_CLEARANCE};
use fustella_params::{PlatformParams, SideParams};
use serde::{Deserialize, Serialize};

// =============================================================================
// PLATFORM NOTCH
// =============================================================================

/// Resolved platform notch dimensions for a side panel corner.
///
/// The notch clears the fascia + flap assembly folded from the adjacent end
/// panel: its horizontal extent covers the fascia height, its depth covers
/// the flap width, each padded by the platform gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchSpec {
    /// Horizontal extent measured from the panel's vertical edge.
    pub w: f64,
    /// Vertical extent measured from the panel's far edge.
    pub h: f64,
}

impl NotchSpec {
    /// Resolves the notch for a panel of the given full height.
    ///
    /// A notch deeper than the panel is clamped to leave
    /// [`NOTCH_HEIGHT_MARGIN`] of material at the fold line.
    pub fn resolve(panel_height: f64, platform: &PlatformParams) -> Self {
        let w = (platform.fascia_h + platform.gap).max(0.0);
        let mut h = (platform.flap_w + platform.gap).max(0.0);
        if h > panel_height {
            h = (panel_height - NOTCH_HEIGHT_MARGIN).max(0.0);
        }
        Self { w, h }
    }
}

// =============================================================================
// SIDE / END GROUP RESOLUTION
// =============================================================================

/// Resolved, clamped shape values for one panel of a side or end group.
///
/// # Example
///
/// ```rust
/// use fustella_outline::SideSpec;
/// use fustella_params::ParamSet;
///
/// let p = ParamSet::default();
/// let spec = SideSpec::resolve(p.length, p.fianchi.h, &p.fianchi, None);
/// // shoulder = (400 - 220) / 2
/// assert_eq!(spec.shoulder, 90.0);
/// assert_eq!(spec.h_low, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideSpec {
    /// Whether the panel carries the horseshoe profile.
    pub ferro: bool,
    /// Shoulder width on each side of the cutout.
    pub shoulder: f64,
    /// Reduced height under the cutout.
    pub h_low: f64,
    /// Whether the doubler tab survives clamping.
    pub reinforced: bool,
    /// Doubler tab height.
    pub r_h: f64,
    /// Gap between the tab and each shoulder.
    pub r_gap: f64,
}

impl SideSpec {
    /// Resolves a panel group against the panel's actual dimensions.
    ///
    /// `notch` is the platform notch carved into this panel, when present;
    /// a horseshoe shoulder is widened so the U-cutout clears it.
    ///
    /// Clamping rules:
    /// - `h_low` into `[0, height]`;
    /// - `shoulder = max(0, (width - cutout_w) / 2)`, raised to
    ///   `notch.w + SHOULDER_NOTCH_CLEARANCE` next to a notch, then capped
    ///   at `width / 2 - 1` so the two shoulders never meet;
    /// - `r_h` into `[0, min(h_low - 1, height - h_low)]` so the tab stays
    ///   strictly inside the panel;
    /// - `r_gap` into `[0, (width - 2 * shoulder) / 2 - 1]` so the two gaps
    ///   never overlap.
    ///
    /// A doubler whose clamped tab width `width - 2 * (shoulder + r_gap)`
    /// vanishes is dropped entirely (`reinforced = false`).
    pub fn resolve(
        width: f64,
        height: f64,
        params: &SideParams,
        notch: Option<&NotchSpec>,
    ) -> Self {
        let ferro = params.shape.is_ferro();

        let h_low = params.h_low.clamp(0.0, height.max(0.0));

        let mut shoulder = ((width - params.cutout_w) / 2.0).max(0.0);
        if let Some(n) = notch {
            let min_shoulder = n.w + SHOULDER_NOTCH_CLEARANCE;
            if ferro && shoulder < min_shoulder {
                shoulder = min_shoulder;
            }
        }
        if shoulder * 2.0 > width {
            shoulder = (width / 2.0 - 1.0).max(0.0);
        }

        let r_h_max = (h_low - 1.0).min(height - h_low).max(0.0);
        let r_h = params.r_h.clamp(0.0, r_h_max);

        let r_gap_max = ((width - 2.0 * shoulder) / 2.0 - 1.0).max(0.0);
        let r_gap = params.r_gap.clamp(0.0, r_gap_max);

        let tab_w = width - 2.0 * (shoulder + r_gap);
        let reinforced = params.reinforced && ferro && tab_w > 0.0 && r_h > 0.0;

        Self {
            ferro,
            shoulder,
            h_low,
            reinforced,
            r_h,
            r_gap,
        }
    }

    /// Width of the doubler tab for a panel of the given width.
    #[inline]
    pub fn tab_width(&self, width: f64) -> f64 {
        (width - 2.0 * (self.shoulder + self.r_gap)).max(0.0)
    }
}

// =============================================================================
// CORNER FLAP STEP
// =============================================================================

/// Shoulder step carved into a corner glue flap so it tucks under a
/// horseshoe side panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlapStep {
    /// Shoulder width of the adjoining side panel.
    pub shoulder: f64,
    /// Height lost under the side panel's U-cutout
    /// (`side_h - side_h_low`).
    pub cut_depth: f64,
}

impl FlapStep {
    /// Builds the step description from a resolved side spec, if the side
    /// panel actually has a horseshoe profile with a real cutout.
    pub fn from_side(spec: &SideSpec, side_height: f64) -> Option<Self> {
        if !spec.ferro {
            return None;
        }
        let cut_depth = (side_height - spec.h_low).max(0.0);
        if cut_depth <= 0.0 || spec.shoulder <= 0.0 {
            return None;
        }
        Some(Self {
            shoulder: spec.shoulder,
            cut_depth,
        })
    }
}
