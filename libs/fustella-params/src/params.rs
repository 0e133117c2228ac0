//! # Parameter Record
//!
//! Fully-resolved parameter types for one box design. No expressions, no
//! units, no validation state: the record carries whatever the editor typed,
//! and the outline builder clamps at the point of use.

use serde::{Deserialize, Serialize};

// =============================================================================
// PANEL SHAPE
// =============================================================================

/// Outer profile of a side or end panel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelShape {
    /// Plain rectangle.
    Rect,
    /// Horseshoe ("ferro di cavallo"): the far edge steps down to a lower
    /// height between two shoulders.
    Ferro,
}

impl PanelShape {
    /// Returns true for the horseshoe profile.
    #[inline]
    pub fn is_ferro(self) -> bool {
        matches!(self, PanelShape::Ferro)
    }
}

// =============================================================================
// GROUP PARAMETERS
// =============================================================================

/// Parameters shared by one panel group (the two side panels or the two
/// end panels).
///
/// The cutout width is the canonical input; the shoulder width is always
/// derived as `(panel_width - cutout_w) / 2` by the outline resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideParams {
    /// Full panel height.
    pub h: f64,
    /// Outer profile.
    pub shape: PanelShape,
    /// Reduced height under the U-cutout (horseshoe only).
    pub h_low: f64,
    /// Width of the central cutout between the two shoulders.
    pub cutout_w: f64,
    /// Whether the reinforcement doubler tab is present.
    pub reinforced: bool,
    /// Doubler tab height.
    pub r_h: f64,
    /// Gap between the doubler tab and each shoulder.
    pub r_gap: f64,
}

/// Platform / fascia sub-assembly parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformParams {
    /// Whether the platform assembly is generated at all.
    pub active: bool,
    /// Fascia strip height.
    pub fascia_h: f64,
    /// Width of each platform extension flap.
    pub flap_w: f64,
    /// Clearance around the fascia/flap assembly inside the side-panel notch.
    pub gap: f64,
}

// =============================================================================
// PARAM SET
// =============================================================================

/// One complete box description.
///
/// # Example
///
/// ```rust
/// use fustella_params::ParamSet;
///
/// let p = ParamSet::default();
/// assert!(p.fianchi.shape.is_ferro());
/// assert_eq!(p.flap_len, 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    /// Base length (L): the long base edges carry the side panels.
    pub length: f64,
    /// Base width (W): the short base edges carry the end panels.
    pub width: f64,
    /// Material thickness.
    pub thickness: f64,
    /// Side panel group ("fianchi").
    pub fianchi: SideParams,
    /// End panel group ("testate").
    pub testate: SideParams,
    /// Platform / fascia feature.
    pub platform: PlatformParams,
    /// Interior corner glue flap length (F).
    pub flap_len: f64,
}

impl Default for ParamSet {
    /// The reference box the original editor seeds its form with.
    fn default() -> Self {
        Self {
            length: 400.0,
            width: 300.0,
            thickness: 5.0,
            fianchi: SideParams {
                h: 100.0,
                shape: PanelShape::Ferro,
                h_low: 60.0,
                cutout_w: 220.0,
                reinforced: true,
                r_h: 40.0,
                r_gap: 2.0,
            },
            testate: SideParams {
                h: 100.0,
                shape: PanelShape::Ferro,
                h_low: 60.0,
                cutout_w: 180.0,
                reinforced: true,
                r_h: 30.0,
                r_gap: 2.0,
            },
            platform: PlatformParams {
                active: true,
                fascia_h: 35.0,
                flap_w: 40.0,
                gap: 2.0,
            },
            flap_len: 120.0,
        }
    }
}

// =============================================================================
// EDITOR BOUNDARY PARSING
// =============================================================================

/// Parses a live-edited numeric field, treating anything unparseable as zero.
///
/// Parameter fields are edited character by character, so transient states
/// (empty string, lone minus sign, partial exponent) are expected and must
/// degrade to a harmless value rather than surface an error.
///
/// # Example
///
/// ```rust
/// use fustella_params::lenient;
///
/// assert_eq!(lenient("120"), 120.0);
/// assert_eq!(lenient("12.5"), 12.5);
/// assert_eq!(lenient(""), 0.0);
/// assert_eq!(lenient("-"), 0.0);
/// ```
pub fn lenient(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_box() {
        let p = ParamSet::default();
        assert_eq!(p.length, 400.0);
        assert_eq!(p.width, 300.0);
        assert_eq!(p.thickness, 5.0);
        assert_eq!(p.fianchi.cutout_w, 220.0);
        assert_eq!(p.testate.cutout_w, 180.0);
        assert!(p.platform.active);
    }

    #[test]
    fn test_shape_is_ferro() {
        assert!(PanelShape::Ferro.is_ferro());
        assert!(!PanelShape::Rect.is_ferro());
    }

    #[test]
    fn test_lenient_parses_numbers() {
        assert_eq!(lenient("42"), 42.0);
        assert_eq!(lenient(" 3.25 "), 3.25);
        assert_eq!(lenient("-10"), -10.0);
    }

    #[test]
    fn test_lenient_absorbs_partial_input() {
        assert_eq!(lenient(""), 0.0);
        assert_eq!(lenient("-"), 0.0);
        assert_eq!(lenient("1e"), 0.0);
        assert_eq!(lenient("abc"), 0.0);
    }

    #[test]
    fn test_paramset_serde_round_trip() {
        let p = ParamSet::default();
        let json = serde_json::to_string(&p).unwrap();
        let back: ParamSet = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
