//! Polygonal envelope approximation of vector paths.
//!
//! Each cubic segment of a path is wrapped in a small polygon that
//! contains the curve (a trapezoid refined into a hexagon or heptagon
//! depending on local convexity); straight segments pass through
//! unchanged. The per-segment polygons are stitched into one polyline.

mod envelope;
mod path;

pub use envelope::{solve_concave, solve_convex, trapezoid};
pub use path::ApproximatePath;

use crate::math::Point2;

/// Local convexity classification of a split point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    /// Left-turning: the curve bulges away from its control chords.
    Convex,
    /// Right-turning: the curve bulges toward its control chords.
    Concave,
}

/// A split parameter the driver refined an envelope at, with its
/// on-curve location and convexity class.
///
/// Callers may render these as markers or ignore them.
#[derive(Debug, Clone, Copy)]
pub struct SplitPoint {
    /// Curve parameter of the split.
    pub t: f64,
    /// Curve position at the split parameter.
    pub point: Point2,
    /// Convexity classification used to pick the envelope branch.
    pub kind: SplitKind,
}

/// Result of approximating a path: the stitched envelope polyline plus
/// the split diagnostics gathered along the way.
#[derive(Debug, Clone, Default)]
pub struct PathApproximation {
    /// The ordered vertices of the concatenated envelope polygons.
    pub polyline: Vec<Point2>,
    /// One entry per envelope refinement, in processing order.
    pub splits: Vec<SplitPoint>,
}
