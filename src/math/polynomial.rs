use nalgebra::ComplexField;

/// A polynomial of degree at most 3 over a real or complex scalar field.
///
/// Coefficients are stored highest degree first: `[c3, c2, c1, c0]` with
/// `p(t) = c3·t³ + c2·t² + c1·t + c0`. Lower-degree polynomials (such as
/// derivatives) zero the leading slots rather than dropping them, so
/// index-based coefficient access stays uniform across degrees.
///
/// The scalar type is either `f64` or [`crate::math::Complex64`]; mixing
/// fields within one polynomial is impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<T: ComplexField<RealField = f64> + Copy> {
    coeffs: [T; 4],
}

impl<T: ComplexField<RealField = f64> + Copy> Polynomial<T> {
    /// Creates a cubic polynomial `c3·t³ + c2·t² + c1·t + c0`.
    #[must_use]
    pub fn cubic(c3: T, c2: T, c1: T, c0: T) -> Self {
        Self {
            coeffs: [c3, c2, c1, c0],
        }
    }

    /// Returns the coefficient of `t^(3 - i)`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[must_use]
    pub fn coefficient(&self, i: usize) -> T {
        self.coeffs[i]
    }

    /// Evaluates the polynomial at `t` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, t: f64) -> T {
        let t = T::from_real(t);
        self.coeffs.iter().fold(T::zero(), |acc, &c| acc * t + c)
    }

    /// Returns the first derivative: `[0, 3·c3, 2·c2, c1]`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let [c3, c2, c1, _] = self.coeffs;
        Self {
            coeffs: [
                T::zero(),
                c3 * T::from_real(3.0),
                c2 * T::from_real(2.0),
                c1,
            ],
        }
    }

    /// Returns the second derivative: `[0, 0, 6·c3, 2·c2]`.
    #[must_use]
    pub fn second_derivative(&self) -> Self {
        self.derivative().derivative()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Complex64;

    #[test]
    fn eval_real_cubic() {
        // p(t) = 2t³ - t² + 3t + 5
        let p = Polynomial::cubic(2.0, -1.0, 3.0, 5.0);
        assert!((p.eval(0.0) - 5.0).abs() < 1e-12);
        assert!((p.eval(1.0) - 9.0).abs() < 1e-12);
        assert!((p.eval(2.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn eval_complex_cubic() {
        let p = Polynomial::cubic(
            Complex64::new(1.0, 1.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, -1.0),
            Complex64::new(0.0, 3.0),
        );
        // p(2) = 8(1+i) + 2(2-i) + 3i = (8+4, 8-2+3) = (12, 9)
        let v = p.eval(2.0);
        assert!((v.re - 12.0).abs() < 1e-12);
        assert!((v.im - 9.0).abs() < 1e-12);
    }

    #[test]
    fn zero_leading_coefficients_do_not_affect_evaluation() {
        let quadratic = Polynomial::cubic(0.0, 4.0, -2.0, 1.0);
        assert!((quadratic.eval(3.0) - 31.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_coefficients() {
        let p = Polynomial::cubic(2.0, -1.0, 3.0, 5.0);
        let d = p.derivative();
        assert!((d.coefficient(0)).abs() < 1e-12);
        assert!((d.coefficient(1) - 6.0).abs() < 1e-12);
        assert!((d.coefficient(2) + 2.0).abs() < 1e-12);
        assert!((d.coefficient(3) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn second_derivative_coefficients() {
        let p = Polynomial::cubic(2.0, -1.0, 3.0, 5.0);
        let dd = p.second_derivative();
        assert!((dd.coefficient(0)).abs() < 1e-12);
        assert!((dd.coefficient(1)).abs() < 1e-12);
        assert!((dd.coefficient(2) - 12.0).abs() < 1e-12);
        assert!((dd.coefficient(3) + 2.0).abs() < 1e-12);
    }
}
