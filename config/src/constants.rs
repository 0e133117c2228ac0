//! # Configuration Constants
//!
//! Centralized constants for the die-line pipeline. All clamping margins,
//! glue-band layout parameters, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Clearances**: Material gaps and clamping margins
//! - **Glue Bands**: Probe-line layout for glue hinting
//! - **Tessellation**: Hinge fillet and corner rounding defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when matching projected vertices between the
/// flat layout and the folded assembly at fold angle zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon below which a horizontal probe line treats a polygon edge as flat.
///
/// Edge-crossing tests in the glue-band scan skip edges whose vertical
/// extent is smaller than this, avoiding division by a near-zero delta.
pub const PROBE_FLAT_EPSILON: f64 = 1e-5;

// =============================================================================
// CLEARANCE CONSTANTS (mm)
// =============================================================================

/// Base assembly gap between a corner flap and the adjacent side panel.
///
/// The flap inset from the end-panel corner is `BASE_GAP + thickness`, so
/// the flap tucks inside the side panel without binding.
///
/// # Example
///
/// ```rust
/// use config::constants::BASE_GAP;
///
/// let thickness = 5.0;
/// assert_eq!(BASE_GAP + thickness, 7.0);
/// ```
pub const BASE_GAP: f64 = 2.0;

/// Extra shoulder width required beyond the platform notch.
///
/// When a horseshoe side panel also carries a platform notch, the shoulder
/// must reach at least `notch_w + SHOULDER_NOTCH_CLEARANCE` or the U-cutout
/// would open into the notch.
pub const SHOULDER_NOTCH_CLEARANCE: f64 = 5.0;

/// Margin kept when a platform notch would swallow the full panel height.
///
/// A notch deeper than the panel is clamped to `height - NOTCH_HEIGHT_MARGIN`.
pub const NOTCH_HEIGHT_MARGIN: f64 = 5.0;

// =============================================================================
// GLUE BAND CONSTANTS (mm)
// =============================================================================

/// Number of glue probe bands per side of the base.
pub const GLUE_BAND_COUNT: usize = 4;

/// Margin trimmed from each end of a glue span.
///
/// Glue must stop short of cut edges so the nozzle never rides off the
/// material; the same margin separates shoulder spans from the U-cutout.
pub const GLUE_MARGIN: f64 = 5.0;

/// Offset of the first band of a group past its governing outline limit.
pub const GLUE_BAND_OFFSET: f64 = 5.0;

/// Offset of the second band of a group past the first.
pub const GLUE_BAND_STEP: f64 = 15.0;

/// Bands closer than this are merged into one candidate ordinate.
pub const GLUE_MERGE_TOLERANCE: f64 = 2.0;

/// Minimum spacing enforced between consecutive glue bands.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_BAND_SPACING;
///
/// let prev: f64 = 310.0;
/// let curr: f64 = 317.0; // too close
/// let adjusted = if (curr - prev).abs() < MIN_BAND_SPACING {
///     prev + MIN_BAND_SPACING
/// } else {
///     curr
/// };
/// assert_eq!(adjusted, 320.0);
/// ```
pub const MIN_BAND_SPACING: f64 = 10.0;

/// Minimum distance kept between the innermost band and the base edge.
pub const BASE_EDGE_CLEARANCE: f64 = 15.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of interpolation steps in a hinge fillet sweep.
///
/// The fillet samples `HINGE_STEPS + 1` angles between zero and the current
/// fold angle and joins consecutive samples into quads, so partially folded
/// panels show a curved crease instead of a broken flat hinge.
pub const HINGE_STEPS: usize = 6;

/// Default corner rounding radius for presentation outlines (mm).
pub const ROUND_RADIUS_DEFAULT: f64 = 2.0;

/// Default Bezier subdivision count per rounded corner.
pub const ROUND_STEPS_DEFAULT: usize = 3;

/// Corners with less room than this radius are left sharp (mm).
pub const MIN_ROUND_RADIUS: f64 = 0.1;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Margin around the flat die-line when shifting it into positive space (mm).
///
/// # Example
///
/// ```rust
/// use config::constants::LAYOUT_MARGIN;
///
/// let bbox_min = -137.0;
/// let offset = LAYOUT_MARGIN - bbox_min;
/// assert_eq!(offset, 187.0);
/// ```
pub const LAYOUT_MARGIN: f64 = 50.0;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Natural fold target for reinforcement doublers (degrees).
///
/// Doublers fold flat back onto their parent face, so their channel ramps
/// to 180 where the structural panels stop at 90.
pub const DOUBLER_FLAT_ANGLE: f64 = 180.0;
