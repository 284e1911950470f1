use tracing::warn;

use crate::error::{GeometryError, Result};
use crate::math::polynomial::Polynomial;
use crate::math::roots::solve_quadratic;
use crate::math::{to_complex, to_point, Complex64, Point2, Vector2, TOLERANCE};

use super::ImplicitLine;

/// A cubic Bézier curve in power-basis form.
///
/// Built from four control points `P0..P3`; the derived coefficients are
/// `A = -P0 + 3(P1 - P2) + P3`, `B = 3(P0 - 2P1 + P2)`, `C = 3(P1 - P0)`,
/// `D = P0`, so the curve is `P(t) = A·t³ + B·t² + C·t + D` for
/// `t ∈ [0, 1]`. Coordinates are carried as complex scalars
/// (`re` = x, `im` = y). Immutable once constructed.
#[derive(Debug, Clone, Copy)]
pub struct CubicBezier {
    control: [Point2; 4],
    a: Complex64,
    b: Complex64,
    c: Complex64,
    d: Complex64,
}

impl CubicBezier {
    /// Builds the curve from its four control points.
    #[must_use]
    pub fn from_points(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        let (z0, z1, z2, z3) = (
            to_complex(&p0),
            to_complex(&p1),
            to_complex(&p2),
            to_complex(&p3),
        );
        Self {
            control: [p0, p1, p2, p3],
            a: -z0 + (z1 - z2) * 3.0 + z3,
            b: (z0 - z1 * 2.0 + z2) * 3.0,
            c: (z1 - z0) * 3.0,
            d: z0,
        }
    }

    /// Returns the four control points.
    #[must_use]
    pub fn control_points(&self) -> [Point2; 4] {
        self.control
    }

    /// Cubic coefficient `A`.
    #[must_use]
    pub fn a(&self) -> Complex64 {
        self.a
    }

    /// Quadratic coefficient `B`.
    #[must_use]
    pub fn b(&self) -> Complex64 {
        self.b
    }

    /// Linear coefficient `C`.
    #[must_use]
    pub fn c(&self) -> Complex64 {
        self.c
    }

    /// Constant coefficient `D` (the start point).
    #[must_use]
    pub fn d(&self) -> Complex64 {
        self.d
    }

    /// The curve position as a complex-valued cubic polynomial.
    #[must_use]
    pub fn position(&self) -> Polynomial<Complex64> {
        Polynomial::cubic(self.a, self.b, self.c, self.d)
    }

    /// The x component of the position polynomial.
    #[must_use]
    pub fn position_x(&self) -> Polynomial<f64> {
        Polynomial::cubic(self.a.re, self.b.re, self.c.re, self.d.re)
    }

    /// The y component of the position polynomial.
    #[must_use]
    pub fn position_y(&self) -> Polynomial<f64> {
        Polynomial::cubic(self.a.im, self.b.im, self.c.im, self.d.im)
    }

    /// The first derivative (velocity) polynomial.
    #[must_use]
    pub fn velocity(&self) -> Polynomial<Complex64> {
        self.position().derivative()
    }

    /// The x component of the velocity polynomial.
    #[must_use]
    pub fn velocity_x(&self) -> Polynomial<f64> {
        self.position_x().derivative()
    }

    /// The y component of the velocity polynomial.
    #[must_use]
    pub fn velocity_y(&self) -> Polynomial<f64> {
        self.position_y().derivative()
    }

    /// The second derivative (acceleration) polynomial.
    #[must_use]
    pub fn acceleration(&self) -> Polynomial<Complex64> {
        self.position().second_derivative()
    }

    /// The x component of the acceleration polynomial.
    #[must_use]
    pub fn acceleration_x(&self) -> Polynomial<f64> {
        self.position_x().second_derivative()
    }

    /// The y component of the acceleration polynomial.
    #[must_use]
    pub fn acceleration_y(&self) -> Polynomial<f64> {
        self.position_y().second_derivative()
    }

    /// Evaluates the curve position at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        to_point(self.position().eval(t))
    }

    /// Evaluates the velocity vector at `t`.
    #[must_use]
    pub fn velocity_at(&self, t: f64) -> Vector2 {
        let v = self.velocity().eval(t);
        Vector2::new(v.re, v.im)
    }

    /// Evaluates the acceleration vector at `t`.
    #[must_use]
    pub fn acceleration_at(&self, t: f64) -> Vector2 {
        let a = self.acceleration().eval(t);
        Vector2::new(a.re, a.im)
    }

    /// Classifies local convexity at `t`.
    ///
    /// Computes the 2D cross product of velocity and acceleration,
    /// `vx·ay − vy·ax`. Positive means left-turning (convex); a vanishing
    /// cross product (momentarily flat curvature) also classifies as
    /// convex. The sign can differ on either side of an inflection point,
    /// so callers must re-test per sub-arc.
    #[must_use]
    pub fn is_convex_at(&self, t: f64) -> bool {
        let v = self.velocity_at(t);
        let a = self.acceleration_at(t);
        v.x * a.y - v.y * a.x >= 0.0
    }

    /// The tangent line at `t`.
    ///
    /// Built from the curve point and an auxiliary point offset by the
    /// velocity, which covers vertical (`vx = 0`), horizontal (`vy = 0`)
    /// and general-slope tangents uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVelocity`] at a cusp, where the
    /// tangent direction is undefined.
    pub fn tangent_at(&self, t: f64) -> Result<ImplicitLine> {
        let v = self.velocity_at(t);
        if v.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVelocity { t }.into());
        }
        let p = self.point_at(t);
        ImplicitLine::from_points(p, p + v)
    }

    /// The normal-foot residual for an external point.
    ///
    /// Returns `t ↦ (P(t) − point) · P'(t)`; a root of this function is a
    /// parameter whose curve normal passes through `point`. The residual
    /// is a degree-5 polynomial with no closed-form root, so callers hand
    /// it to [`crate::math::roots::find_root`].
    #[must_use]
    pub fn normal_residual(&self, point: Point2) -> impl Fn(f64) -> f64 {
        let x = self.position_x();
        let y = self.position_y();
        let vx = self.velocity_x();
        let vy = self.velocity_y();
        move |t| (x.eval(t) - point.x) * vx.eval(t) + (y.eval(t) - point.y) * vy.eval(t)
    }

    /// The parameter in the open interval `(0, 1)` where curvature
    /// changes sign, if any.
    ///
    /// Solves `3(Bx·Ay − By·Ax)·t² + 3(Cx·Ay − Cy·Ax)·t + (Cx·By − Cy·Bx) = 0`,
    /// the numerator of the curvature cross product. A cubic admits at
    /// most one curvature sign change; two in-range roots are anomalous
    /// and resolved by taking the smallest.
    #[must_use]
    pub fn inflection_point(&self) -> Option<f64> {
        let qa = 3.0 * (self.b.re * self.a.im - self.b.im * self.a.re);
        let qb = 3.0 * (self.c.re * self.a.im - self.c.im * self.a.re);
        let qc = self.c.re * self.b.im - self.c.im * self.b.re;

        let in_range: Vec<f64> = solve_quadratic(qa, qb, qc)
            .into_iter()
            .filter(|t| in_open_unit_interval(*t))
            .collect();
        if in_range.len() > 1 {
            warn!(
                roots = ?in_range,
                "multiple inflection parameters on one cubic; keeping the smallest"
            );
        }
        in_range.first().copied()
    }

    /// Parameters in the open interval `(0, 1)` where the x or y velocity
    /// vanishes (coordinate-wise extrema).
    ///
    /// An x-root where the y velocity also vanishes is a cusp or
    /// axis-parallel degeneracy and is discarded (symmetrically for
    /// y-roots), so no zero-length sub-arc is produced downstream.
    #[must_use]
    pub fn critical_points(&self) -> Vec<f64> {
        let vx = self.velocity_x();
        let vy = self.velocity_y();

        let mut result = Vec::new();
        for t in solve_quadratic(3.0 * self.a.re, 2.0 * self.b.re, self.c.re) {
            if in_open_unit_interval(t) && vy.eval(t).abs() > TOLERANCE {
                result.push(t);
            }
        }
        for t in solve_quadratic(3.0 * self.a.im, 2.0 * self.b.im, self.c.im) {
            if in_open_unit_interval(t) && vx.eval(t).abs() > TOLERANCE {
                result.push(t);
            }
        }
        result
    }
}

fn in_open_unit_interval(t: f64) -> bool {
    t > TOLERANCE && t < 1.0 - TOLERANCE
}
