use tracing::debug;

use crate::geometry::{CubicBezier, ImplicitLine};
use crate::math::roots::find_root;
use crate::math::Point2;

/// Side lines and anchor points framing one convexity-homogeneous sub-arc.
///
/// Without an inflection the frame spans the whole curve: the control
/// chords `P0P1` / `P2P3` as sides, the curve endpoints as anchors. An
/// inflection parameter splits the curve at its inflection point; the
/// near side keeps its chord while the far side is replaced by the
/// tangent at the inflection.
struct ArcFrame {
    side1: ImplicitLine,
    side2: ImplicitLine,
    start: Point2,
    end: Point2,
}

impl ArcFrame {
    fn build(curve: &CubicBezier, t: f64, inflection: Option<f64>) -> Option<Self> {
        let [p0, p1, p2, p3] = curve.control_points();
        match inflection {
            None => Some(Self {
                side1: ImplicitLine::from_points(p0, p1).ok()?,
                side2: ImplicitLine::from_points(p2, p3).ok()?,
                start: p0,
                end: p3,
            }),
            Some(ti) => {
                let pivot = curve.point_at(ti);
                let pivot_tangent = curve.tangent_at(ti).ok()?;
                if t < ti {
                    Some(Self {
                        side1: ImplicitLine::from_points(p0, p1).ok()?,
                        side2: pivot_tangent,
                        start: p0,
                        end: pivot,
                    })
                } else {
                    Some(Self {
                        side1: pivot_tangent,
                        side2: ImplicitLine::from_points(p2, p3).ok()?,
                        start: pivot,
                        end: p3,
                    })
                }
            }
        }
    }
}

/// Anchor points of the sub-arc addressed by `t`, computable even when
/// the side lines degenerate.
fn anchors(curve: &CubicBezier, t: f64, inflection: Option<f64>) -> (Point2, Point2) {
    let [p0, _, _, p3] = curve.control_points();
    match inflection {
        Some(ti) if t < ti => (p0, curve.point_at(ti)),
        Some(ti) => (curve.point_at(ti), p3),
        None => (p0, p3),
    }
}

/// Intersects a base line with two side lines, forming the quadrilateral
/// `[start, side1∩base, side2∩base, end]`.
///
/// Returns `None` when the base is parallel to either side.
#[must_use]
pub fn trapezoid(
    side1: &ImplicitLine,
    side2: &ImplicitLine,
    base: &ImplicitLine,
    start: Point2,
    end: Point2,
) -> Option<[Point2; 4]> {
    let v1 = side1.intersect(base)?;
    let v2 = side2.intersect(base)?;
    Some([start, v1, v2, end])
}

/// Builds the base trapezoid from the tangent at `t`, retrying with the
/// mid-curve tangent when the first base fails to span both sides.
fn base_trapezoid(
    curve: &CubicBezier,
    t: f64,
    frame: &ArcFrame,
) -> Option<(ImplicitLine, [Point2; 4])> {
    for base_t in [t, 0.5] {
        match curve.tangent_at(base_t) {
            Ok(base) => {
                if let Some(quad) = trapezoid(&frame.side1, &frame.side2, &base, frame.start, frame.end)
                {
                    return Some((base, quad));
                }
                debug!(t = base_t, "base tangent parallel to a side line");
            }
            Err(err) => debug!(t = base_t, %err, "no tangent for base line"),
        }
    }
    None
}

/// Envelope polygon for a convex (left-turning) sub-arc.
///
/// Starts from the base trapezoid, then pulls the tangents at the two
/// normal-foot parameters of its inner vertices and splices the
/// resulting sub-trapezoids into a hexagon hugging the outward bulge.
/// Degenerate geometry falls back to the base trapezoid or, ultimately,
/// the two-point `[start, end]` segment; the result is never empty.
#[must_use]
pub fn solve_convex(curve: &CubicBezier, t: f64, inflection: Option<f64>) -> Vec<Point2> {
    let (start, end) = anchors(curve, t, inflection);
    let Some(frame) = ArcFrame::build(curve, t, inflection) else {
        return vec![start, end];
    };
    let Some((base, quad)) = base_trapezoid(curve, t, &frame) else {
        return vec![start, end];
    };

    let feet = (
        find_root(curve.normal_residual(quad[1]), 0.0, 1.0),
        find_root(curve.normal_residual(quad[2]), 0.0, 1.0),
    );
    let (Ok(n1), Ok(n2)) = feet else {
        debug!("normal-foot solver failed on convex sub-arc");
        return vec![start, end];
    };

    let hexagon = (|| {
        let t1 = curve.tangent_at(n1).ok()?;
        let t2 = curve.tangent_at(n2).ok()?;
        Some(vec![
            start,
            frame.side1.intersect(&t1)?,
            base.intersect(&t1)?,
            base.intersect(&t2)?,
            t2.intersect(&frame.side2)?,
            end,
        ])
    })();
    hexagon.unwrap_or_else(|| {
        debug!("convex refinement degenerate; keeping base trapezoid");
        quad.to_vec()
    })
}

/// Envelope polygon for a concave (right-turning) sub-arc.
///
/// The curve bulges inward relative to the chords, so the trapezoid's
/// inner vertices are projected onto the curve through their normal
/// feet, giving a quadrilateral. Without a bounding inflection a second
/// refinement intersects the tangents at those feet with each other and
/// the side lines and projects again, yielding a seven-point polygon.
/// Every degenerate step falls back to the two-point `[start, end]`.
#[must_use]
pub fn solve_concave(curve: &CubicBezier, t: f64, inflection: Option<f64>) -> Vec<Point2> {
    let (start, end) = anchors(curve, t, inflection);
    let Some(frame) = ArcFrame::build(curve, t, inflection) else {
        return vec![start, end];
    };
    let Some((_, quad)) = base_trapezoid(curve, t, &frame) else {
        return vec![start, end];
    };

    let feet = (
        find_root(curve.normal_residual(quad[1]), 0.0, 1.0),
        find_root(curve.normal_residual(quad[2]), 0.0, 1.0),
    );
    let (Ok(nt1), Ok(nt2)) = feet else {
        debug!("normal-foot solver failed on concave sub-arc");
        return vec![start, end];
    };
    let n1 = curve.point_at(nt1);
    let n2 = curve.point_at(nt2);

    if inflection.is_some() {
        return vec![start, n1, n2, end];
    }

    let heptagon = (|| {
        let t1 = curve.tangent_at(nt1).ok()?;
        let t2 = curve.tangent_at(nt2).ok()?;
        let o1 = frame.side1.intersect(&t1)?;
        let o2 = t1.intersect(&t2)?;
        let o3 = t2.intersect(&frame.side2)?;
        let nn1 = curve.point_at(find_root(curve.normal_residual(o1), 0.0, 1.0).ok()?);
        let nn2 = curve.point_at(find_root(curve.normal_residual(o2), 0.0, 1.0).ok()?);
        let nn3 = curve.point_at(find_root(curve.normal_residual(o3), 0.0, 1.0).ok()?);
        Some(vec![start, nn1, n1, nn2, n2, nn3, end])
    })();
    heptagon.unwrap_or_else(|| {
        debug!("concave refinement degenerate; falling back to chord");
        vec![start, end]
    })
}
