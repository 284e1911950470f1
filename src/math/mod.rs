pub mod polynomial;
pub mod roots;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Complex scalar encoding a 2D coordinate (`re` = x, `im` = y).
pub type Complex64 = nalgebra::Complex<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Packs a point into its complex encoding.
#[must_use]
pub fn to_complex(p: &Point2) -> Complex64 {
    Complex64::new(p.x, p.y)
}

/// Unpacks a complex coordinate into a point.
#[must_use]
pub fn to_point(z: Complex64) -> Point2 {
    Point2::new(z.re, z.im)
}
