use crate::geometry::{CubicBezier, PathSegment};
use crate::math::Point2;

use super::envelope::{solve_concave, solve_convex};
use super::{PathApproximation, SplitKind, SplitPoint};

/// Split parameters closer than this are treated as one.
const SPLIT_EPSILON: f64 = 1e-6;

/// Approximates a path by envelope polygons, one sub-arc at a time.
///
/// For every cubic segment the driver computes the inflection and
/// critical parameters, picks the split parameters (see
/// [`split_parameters`]), classifies each split as convex or concave and
/// runs the matching envelope branch. Straight segments contribute their
/// endpoint directly. Polygons are concatenated with the duplicated seam
/// vertex dropped.
pub struct ApproximatePath<'a> {
    segments: &'a [PathSegment],
}

impl<'a> ApproximatePath<'a> {
    /// Creates a new `ApproximatePath` operation.
    #[must_use]
    pub fn new(segments: &'a [PathSegment]) -> Self {
        Self { segments }
    }

    /// Executes the approximation, returning the stitched polyline and
    /// the split diagnostics.
    ///
    /// Never fails: every geometric degeneracy inside the envelope
    /// builder resolves to a defined fallback.
    #[must_use]
    pub fn execute(&self) -> PathApproximation {
        let mut result = PathApproximation::default();
        for segment in self.segments {
            match *segment {
                PathSegment::Line { end, .. } => result.polyline.push(end),
                PathSegment::Cubic { p0, p1, p2, p3 } => {
                    let curve = CubicBezier::from_points(p0, p1, p2, p3);
                    approximate_curve(&curve, &mut result);
                }
            }
        }
        result
    }
}

fn approximate_curve(curve: &CubicBezier, result: &mut PathApproximation) {
    let inflection = curve.inflection_point();
    for t in split_parameters(curve, inflection) {
        let kind = if curve.is_convex_at(t) {
            SplitKind::Convex
        } else {
            SplitKind::Concave
        };
        result.splits.push(SplitPoint {
            t,
            point: curve.point_at(t),
            kind,
        });
        let polygon = match kind {
            SplitKind::Convex => solve_convex(curve, t, inflection),
            SplitKind::Concave => solve_concave(curve, t, inflection),
        };
        append_polygon(&mut result.polyline, polygon);
    }
}

/// Chooses the parameters to refine envelopes at.
///
/// Starts from the deduplicated critical parameters. A critical
/// parameter sitting on the inflection itself would address a
/// zero-length sub-arc and is dropped. When an inflection exists, both
/// of its sides must be covered, so a side without a critical parameter
/// receives its sub-interval midpoint; without an inflection an empty
/// set degenerates to the curve midpoint.
fn split_parameters(curve: &CubicBezier, inflection: Option<f64>) -> Vec<f64> {
    let mut splits = curve.critical_points();
    splits.sort_by(f64::total_cmp);
    splits.dedup_by(|a, b| (*a - *b).abs() < SPLIT_EPSILON);

    match inflection {
        Some(ti) => {
            splits.retain(|t| (t - ti).abs() > SPLIT_EPSILON);
            if !splits.iter().any(|t| *t < ti) {
                splits.insert(0, ti / 2.0);
            }
            if !splits.iter().any(|t| *t > ti) {
                splits.push((ti + 1.0) / 2.0);
            }
        }
        None => {
            if splits.is_empty() {
                splits.push(0.5);
            }
        }
    }
    splits
}

/// Appends a polygon to the running polyline, skipping the first vertex
/// after the first polygon: consecutive sub-arcs share their boundary
/// point.
fn append_polygon(polyline: &mut Vec<Point2>, polygon: Vec<Point2>) {
    let skip = usize::from(!polyline.is_empty());
    polyline.extend(polygon.into_iter().skip(skip));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    fn close(p: Point2, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
    }

    #[test]
    fn line_segments_pass_their_endpoints_through() {
        let segments = [
            PathSegment::Line {
                start: Point2::new(0.0, 0.0),
                end: Point2::new(10.0, 0.0),
            },
            PathSegment::Line {
                start: Point2::new(10.0, 0.0),
                end: Point2::new(10.0, 5.0),
            },
        ];
        let result = ApproximatePath::new(&segments).execute();
        assert_eq!(result.polyline.len(), 2);
        assert!(close(result.polyline[0], 10.0, 0.0));
        assert!(close(result.polyline[1], 10.0, 5.0));
        assert!(result.splits.is_empty());
    }

    #[test]
    fn s_curve_polyline_spans_the_whole_curve() {
        init_tracing();
        let segments = [PathSegment::Cubic {
            p0: Point2::new(0.0, 0.0),
            p1: Point2::new(0.0, 100.0),
            p2: Point2::new(100.0, 0.0),
            p3: Point2::new(100.0, 100.0),
        }];
        let result = ApproximatePath::new(&segments).execute();

        let first = result.polyline.first().unwrap();
        let last = result.polyline.last().unwrap();
        assert!(close(*first, 0.0, 0.0), "first={first:?}");
        assert!(close(*last, 100.0, 100.0), "last={last:?}");
        assert!(
            result.polyline.len() > 4,
            "expected more than 2 intermediate vertices, got {:?}",
            result.polyline
        );
    }

    #[test]
    fn s_curve_visits_both_sides_of_the_inflection() {
        let segments = [PathSegment::Cubic {
            p0: Point2::new(0.0, 0.0),
            p1: Point2::new(0.0, 100.0),
            p2: Point2::new(100.0, 0.0),
            p3: Point2::new(100.0, 100.0),
        }];
        let result = ApproximatePath::new(&segments).execute();
        assert!(result.splits.iter().any(|s| s.t < 0.5));
        assert!(result.splits.iter().any(|s| s.t > 0.5));
        assert!(result.splits.iter().any(|s| s.kind == SplitKind::Concave));
        assert!(result.splits.iter().any(|s| s.kind == SplitKind::Convex));
    }

    #[test]
    fn collinear_curve_degenerates_to_its_chord() {
        let segments = [PathSegment::Cubic {
            p0: Point2::new(0.0, 0.0),
            p1: Point2::new(1.0, 1.0),
            p2: Point2::new(2.0, 2.0),
            p3: Point2::new(3.0, 3.0),
        }];
        let result = ApproximatePath::new(&segments).execute();
        assert_eq!(result.polyline.len(), 2, "polyline={:?}", result.polyline);
        assert!(close(result.polyline[0], 0.0, 0.0));
        assert!(close(result.polyline[1], 3.0, 3.0));
    }

    #[test]
    fn seam_vertices_are_not_duplicated() {
        let segments = [PathSegment::Cubic {
            p0: Point2::new(0.0, 0.0),
            p1: Point2::new(0.0, 100.0),
            p2: Point2::new(100.0, 0.0),
            p3: Point2::new(100.0, 100.0),
        }];
        let result = ApproximatePath::new(&segments).execute();
        for pair in result.polyline.windows(2) {
            assert!(
                (pair[0] - pair[1]).norm() > 1e-9,
                "duplicate consecutive vertex {pair:?}"
            );
        }
    }

    #[test]
    fn line_then_curve_concatenates_in_order() {
        let segments = [
            PathSegment::Line {
                start: Point2::new(-20.0, 0.0),
                end: Point2::new(0.0, 0.0),
            },
            PathSegment::Cubic {
                p0: Point2::new(0.0, 0.0),
                p1: Point2::new(50.0, 0.0),
                p2: Point2::new(50.0, 100.0),
                p3: Point2::new(100.0, 100.0),
            },
        ];
        let result = ApproximatePath::new(&segments).execute();
        assert!(close(result.polyline[0], 0.0, 0.0));
        assert!(close(*result.polyline.last().unwrap(), 100.0, 100.0));
        assert!(result.polyline.len() > 3);
    }

    #[test]
    fn midpoint_split_when_no_critical_points() {
        // Gentle arc with monotone coordinates and no inflection in range.
        let segments = [PathSegment::Cubic {
            p0: Point2::new(0.0, 0.0),
            p1: Point2::new(0.0, 50.0),
            p2: Point2::new(50.0, 100.0),
            p3: Point2::new(100.0, 100.0),
        }];
        let result = ApproximatePath::new(&segments).execute();
        assert_eq!(result.splits.len(), 1);
        assert_relative_eq!(result.splits[0].t, 0.5);
        assert_eq!(result.splits[0].kind, SplitKind::Concave);
    }

    #[test]
    fn split_diagnostics_sit_on_the_curve() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(0.0, 100.0);
        let p2 = Point2::new(100.0, 0.0);
        let p3 = Point2::new(100.0, 100.0);
        let segments = [PathSegment::Cubic { p0, p1, p2, p3 }];
        let curve = CubicBezier::from_points(p0, p1, p2, p3);
        let result = ApproximatePath::new(&segments).execute();
        for split in &result.splits {
            assert!((curve.point_at(split.t) - split.point).norm() < 1e-9);
        }
    }
}
