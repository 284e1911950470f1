use crate::error::{Result, SolverError};

use super::TOLERANCE;

/// Convergence tolerance for the iterative root finder.
pub const ROOT_TOLERANCE: f64 = 1e-9;

/// Iteration cap for the iterative root finder.
pub const MAX_ITERATIONS: u32 = 64;

/// Solves `k·t + b = 0`.
///
/// Returns `None` when `k` is (numerically) zero and the equation has no
/// unique solution.
#[must_use]
pub fn solve_linear(k: f64, b: f64) -> Option<f64> {
    if k.abs() < TOLERANCE {
        return None;
    }
    Some(-b / k)
}

/// Solves `a·t² + b·t + c = 0` over the reals.
///
/// Degenerates to [`solve_linear`] when `a` is zero. Returns an empty
/// vector when no real root exists; two roots come back in ascending
/// order (a double root is reported twice).
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < TOLERANCE {
        return solve_linear(b, c).into_iter().collect();
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let d = discriminant.sqrt();
    let mut r1 = (-b + d) / (2.0 * a);
    let mut r2 = (-b - d) / (2.0 * a);
    if r1 > r2 {
        std::mem::swap(&mut r1, &mut r2);
    }
    vec![r1, r2]
}

/// Finds `t` with `f(t) = 0` by the secant method from two seed points.
///
/// The seeds are conventionally the parameter interval ends `0` and `1`;
/// the iteration is free to leave the interval while converging. Equal
/// residuals at the two current points stall the secant update (the
/// slope is zero), so the iterate steps to their midpoint instead and
/// the iteration continues. A point is accepted only when its residual
/// is below [`ROOT_TOLERANCE`]; a shrinking step with a large residual
/// keeps iterating until the cap.
///
/// # Errors
///
/// Returns [`SolverError::NoConvergence`] when the iteration cap is
/// reached, and [`SolverError::NonFinite`] when an iterate escapes to
/// infinity or NaN.
pub fn find_root<F>(f: F, x0: f64, x1: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let mut x0 = x0;
    let mut x1 = x1;
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    if f0.abs() < ROOT_TOLERANCE {
        return Ok(x0);
    }
    if f1.abs() < ROOT_TOLERANCE {
        return Ok(x1);
    }

    for _ in 0..MAX_ITERATIONS {
        let slope = f1 - f0;
        let x2 = if slope.abs() < f64::EPSILON {
            0.5 * (x0 + x1)
        } else {
            x1 - f1 * (x1 - x0) / slope
        };
        if !x2.is_finite() {
            return Err(SolverError::NonFinite.into());
        }
        let f2 = f(x2);
        if f2.abs() < ROOT_TOLERANCE {
            return Ok(x2);
        }
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
    }

    Err(SolverError::NoConvergence {
        iterations: MAX_ITERATIONS,
        last: x1,
    }
    .into())
}
