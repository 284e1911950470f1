use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A 2D line in implicit form `a·x + b·y = c`, built from two points.
///
/// The defining points are retained for diagnostics; the coefficients
/// alone drive every computation.
#[derive(Debug, Clone, Copy)]
pub struct ImplicitLine {
    a: f64,
    b: f64,
    c: f64,
    p1: Point2,
    p2: Point2,
}

impl ImplicitLine {
    /// Builds the line through `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentPoints`] when the points
    /// coincide and no unique line exists.
    pub fn from_points(p1: Point2, p2: Point2) -> Result<Self> {
        if (p1 - p2).norm() < TOLERANCE {
            return Err(GeometryError::CoincidentPoints { x: p1.x, y: p1.y }.into());
        }
        Ok(Self {
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: -(p1.x * p2.y - p2.x * p1.y),
            p1,
            p2,
        })
    }

    /// Returns the implicit coefficients `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Returns the two points the line was built from.
    #[must_use]
    pub fn defining_points(&self) -> (Point2, Point2) {
        (self.p1, self.p2)
    }

    /// Intersects two lines by Cramer's rule.
    ///
    /// Returns `None` when the lines are parallel or coincident (zero
    /// determinant); an expected geometric case, not an error.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Point2> {
        let d = self.a * other.b - self.b * other.a;
        if d.abs() < TOLERANCE {
            return None;
        }
        let d_x = self.c * other.b - self.b * other.c;
        let d_y = self.a * other.c - self.c * other.a;
        Some(Point2::new(d_x / d, d_y / d))
    }

    /// Signed residual of a point against the line equation.
    ///
    /// Zero (within tolerance) means the point lies on the line.
    #[must_use]
    pub fn residual(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y - self.c
    }
}
