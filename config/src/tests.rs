//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_probe_flat_epsilon_larger_than_epsilon() {
    assert!(
        PROBE_FLAT_EPSILON >= EPSILON,
        "PROBE_FLAT_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// CLEARANCE TESTS
// =============================================================================

#[test]
fn test_base_gap_matches_reference_tooling() {
    // Reference die assumes a 2 mm assembly gap
    assert_eq!(BASE_GAP, 2.0);
}

#[test]
fn test_shoulder_clearance_positive() {
    assert!(SHOULDER_NOTCH_CLEARANCE > 0.0);
}

#[test]
fn test_notch_margin_positive() {
    assert!(NOTCH_HEIGHT_MARGIN > 0.0);
}

// =============================================================================
// GLUE BAND TESTS
// =============================================================================

#[test]
fn test_glue_band_count_is_four() {
    // Two band groups of two bands each per side
    assert_eq!(GLUE_BAND_COUNT, 4);
}

#[test]
fn test_glue_band_step_exceeds_offset() {
    assert!(GLUE_BAND_STEP > GLUE_BAND_OFFSET);
}

#[test]
fn test_band_spacing_exceeds_merge_tolerance() {
    // Otherwise merged bands could immediately violate spacing
    assert!(MIN_BAND_SPACING > GLUE_MERGE_TOLERANCE);
}

#[test]
fn test_base_clearance_at_least_band_spacing() {
    assert!(BASE_EDGE_CLEARANCE >= MIN_BAND_SPACING);
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_hinge_steps_at_least_two() {
    // One quad would render the hinge as a flat break
    assert!(HINGE_STEPS >= 2);
}

#[test]
fn test_round_radius_exceeds_minimum() {
    assert!(ROUND_RADIUS_DEFAULT > MIN_ROUND_RADIUS);
}

#[test]
fn test_round_steps_positive() {
    assert!(ROUND_STEPS_DEFAULT >= 1);
}

// =============================================================================
// LAYOUT / ANIMATION TESTS
// =============================================================================

#[test]
fn test_layout_margin_positive() {
    assert!(LAYOUT_MARGIN > 0.0);
}

#[test]
fn test_doubler_angle_is_flat() {
    assert_eq!(DOUBLER_FLAT_ANGLE, 180.0);
}
