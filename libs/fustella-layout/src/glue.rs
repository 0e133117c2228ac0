//! # Glue-Band Overlay
//!
//! Visual hints for where glue beads may run on the flattened blank. Four
//! horizontal bands per side of the base, positioned by a priority cascade
//! (doubler band first, then the platform-flap band), then clipped against
//! the actual panel polygons by a probe-line scan.

use crate::diagram::PlacedPolygon;
use config::constants::{
    BASE_EDGE_CLEARANCE, GLUE_BAND_COUNT, GLUE_BAND_OFFSET, GLUE_BAND_STEP, GLUE_MARGIN,
    GLUE_MERGE_TOLERANCE, MIN_BAND_SPACING, PROBE_FLAT_EPSILON,
};
use fustella_outline::Segment;
use fustella_tree::PanelKind;
use glam::DVec2;

/// Computes the four band positions for one side of the base.
///
/// All limits are y coordinates in diagram space: `inner` is the base edge,
/// `fianco` the side panel's outer extent, `reinf` the doubler extent (when
/// reinforced) and `flap` the platform flap extent (when active). The sign
/// of `inner - fianco` fixes which way "inward" points.
///
/// Cascade: two candidates past the outermost covered limit, two past the
/// flap limit, merged when closer than [`GLUE_MERGE_TOLERANCE`], padded
/// back to four, re-spaced to [`MIN_BAND_SPACING`] and finally clamped so
/// the innermost band keeps [`BASE_EDGE_CLEARANCE`] from the base edge.
pub fn band_positions(inner: f64, fianco: f64, reinf: Option<f64>, flap: Option<f64>) -> [f64; 4] {
    let dir = if inner > fianco { 1.0 } else { -1.0 };

    let outer = reinf.unwrap_or(fianco);
    let mut candidates = vec![
        outer + GLUE_BAND_OFFSET * dir,
        outer + (GLUE_BAND_OFFSET + GLUE_BAND_STEP) * dir,
    ];
    if let Some(f) = flap {
        candidates.push(f + GLUE_BAND_OFFSET * dir);
        candidates.push(f + (GLUE_BAND_OFFSET + GLUE_BAND_STEP) * dir);
    }
    while candidates.len() < GLUE_BAND_COUNT {
        let last = candidates[candidates.len() - 1];
        candidates.push(last + GLUE_BAND_STEP * dir);
    }

    // Outermost first.
    if dir > 0.0 {
        candidates.sort_by(f64::total_cmp);
    } else {
        candidates.sort_by(|a, b| f64::total_cmp(b, a));
    }

    let mut merged: Vec<f64> = vec![candidates[0]];
    for c in &candidates[1..] {
        let last = merged[merged.len() - 1];
        if (c - last).abs() > GLUE_MERGE_TOLERANCE {
            merged.push(*c);
        }
    }
    merged.truncate(GLUE_BAND_COUNT);
    while merged.len() < GLUE_BAND_COUNT {
        let last = merged[merged.len() - 1];
        merged.push(last + GLUE_BAND_STEP * dir);
    }

    for i in 1..GLUE_BAND_COUNT {
        if (merged[i] - merged[i - 1]).abs() < MIN_BAND_SPACING {
            merged[i] = merged[i - 1] + MIN_BAND_SPACING * dir;
        }
    }

    // The innermost band never crosses the base-edge clearance; push the
    // earlier bands back outward when the clamp collapses the spacing.
    let safe = inner - BASE_EDGE_CLEARANCE * dir;
    if (merged[3] - safe) * dir > 0.0 {
        merged[3] = safe;
        if (merged[3] - merged[2]).abs() < MIN_BAND_SPACING {
            merged[2] = merged[3] - MIN_BAND_SPACING * dir;
            if (merged[2] - merged[1]).abs() < MIN_BAND_SPACING {
                merged[1] = merged[2] - MIN_BAND_SPACING * dir;
            }
        }
    }

    [merged[0], merged[1], merged[2], merged[3]]
}

fn eligible(kind: PanelKind) -> bool {
    matches!(
        kind,
        PanelKind::Fianchi | PanelKind::Testate | PanelKind::Ext | PanelKind::Reinf
    )
}

/// Intersects one horizontal probe line with the eligible panel polygons
/// and returns the clipped glue spans.
///
/// Each polygon contributes the even-odd spans of the probe crossing its
/// boundary, shrunk by [`GLUE_MARGIN`] on both ends. On horseshoe side
/// panels a span crossing `split_zone` (the central cutout's x extent) is
/// split into two shoulder-only spans so no bead runs over the void.
pub fn probe_segments(
    y: f64,
    polygons: &[PlacedPolygon],
    split_zone: Option<(f64, f64)>,
) -> Vec<Segment> {
    let mut out = Vec::new();

    for poly in polygons.iter().filter(|p| eligible(p.kind)) {
        let pts = &poly.points;
        let n = pts.len();
        let mut xs: Vec<f64> = Vec::new();
        for i in 0..n {
            let p1 = pts[i];
            let p2 = pts[(i + 1) % n];
            let crosses = (p1.y < y && y <= p2.y) || (p2.y < y && y <= p1.y);
            if crosses && (p2.y - p1.y).abs() > PROBE_FLAT_EPSILON {
                let t = (y - p1.y) / (p2.y - p1.y);
                xs.push(p1.x + t * (p2.x - p1.x));
            }
        }
        xs.sort_by(f64::total_cmp);

        for pair in xs.chunks_exact(2) {
            let x_start = pair[0] + GLUE_MARGIN;
            let x_end = pair[1] - GLUE_MARGIN;
            if x_start >= x_end {
                continue;
            }

            match split_zone {
                Some((z0, z1)) if poly.kind == PanelKind::Fianchi => {
                    let left_end = x_end.min(z0 - GLUE_MARGIN);
                    if x_start < left_end {
                        out.push(Segment::new(
                            DVec2::new(x_start, y),
                            DVec2::new(left_end, y),
                        ));
                    }
                    let right_start = x_start.max(z1 + GLUE_MARGIN);
                    if right_start < x_end {
                        out.push(Segment::new(
                            DVec2::new(right_start, y),
                            DVec2::new(x_end, y),
                        ));
                    }
                }
                _ => out.push(Segment::new(DVec2::new(x_start, y), DVec2::new(x_end, y))),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_top_side_bands() {
        // Doubler extent coincides with the panel extent (60 + 40 = 100)
        let ys = band_positions(0.0, -100.0, Some(-100.0), Some(-40.0));
        assert_eq!(ys, [-95.0, -80.0, -35.0, -20.0]);
    }

    #[test]
    fn test_reference_bottom_side_bands() {
        let ys = band_positions(300.0, 400.0, Some(400.0), Some(340.0));
        assert_eq!(ys, [395.0, 380.0, 335.0, 320.0]);
    }

    #[test]
    fn test_bands_without_flap_pad_to_four() {
        let ys = band_positions(0.0, -100.0, None, None);
        assert_eq!(ys, [-95.0, -80.0, -65.0, -50.0]);
    }

    #[test]
    fn test_innermost_band_respects_base_clearance() {
        // A very short panel pushes every candidate past the base edge
        let ys = band_positions(0.0, -20.0, None, None);
        assert_eq!(ys[3], -15.0);
    }

    #[test]
    fn test_bands_keep_minimum_spacing() {
        let ys = band_positions(0.0, -100.0, Some(-100.0), Some(-98.0));
        for pair in ys.windows(2) {
            assert!(pair[1] - pair[0] >= MIN_BAND_SPACING - 1e-9);
        }
    }

    #[test]
    fn test_probe_pairs_and_clips() {
        let square = PlacedPolygon {
            name: "p".into(),
            kind: PanelKind::Fianchi,
            points: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(100.0, 0.0),
                DVec2::new(100.0, -50.0),
                DVec2::new(0.0, -50.0),
            ],
        };
        let segs = probe_segments(-25.0, &[square], None);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].a, DVec2::new(5.0, -25.0));
        assert_eq!(segs[0].b, DVec2::new(95.0, -25.0));
    }

    #[test]
    fn test_probe_splits_over_cutout_zone() {
        let square = PlacedPolygon {
            name: "p".into(),
            kind: PanelKind::Fianchi,
            points: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(400.0, 0.0),
                DVec2::new(400.0, -50.0),
                DVec2::new(0.0, -50.0),
            ],
        };
        let segs = probe_segments(-25.0, &[square], Some((90.0, 310.0)));
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].b.x, 85.0);
        assert_eq!(segs[1].a.x, 315.0);
    }

    #[test]
    fn test_probe_skips_ineligible_kinds() {
        let flap = PlacedPolygon {
            name: "p".into(),
            kind: PanelKind::Lembi,
            points: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(100.0, 0.0),
                DVec2::new(100.0, -50.0),
                DVec2::new(0.0, -50.0),
            ],
        };
        assert!(probe_segments(-25.0, &[flap], None).is_empty());
    }

    #[test]
    fn test_probe_misses_polygon_above_line() {
        let square = PlacedPolygon {
            name: "p".into(),
            kind: PanelKind::Testate,
            points: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(100.0, 0.0),
                DVec2::new(100.0, -50.0),
                DVec2::new(0.0, -50.0),
            ],
        };
        assert!(probe_segments(-60.0, &[square], None).is_empty());
    }
}
