use crate::math::Point2;

/// One segment of an externally-parsed vector path.
///
/// The path loader (outside this crate) hands segments over as typed
/// records; straight lines and cubic curves are the only two cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// A straight line between two endpoints.
    Line {
        start: Point2,
        end: Point2,
    },
    /// A cubic Bézier curve with four control points.
    Cubic {
        p0: Point2,
        p1: Point2,
        p2: Point2,
        p3: Point2,
    },
}

impl PathSegment {
    /// The point the segment starts at.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Line { start, .. } => *start,
            Self::Cubic { p0, .. } => *p0,
        }
    }

    /// The point the segment ends at.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Line { end, .. } => *end,
            Self::Cubic { p3, .. } => *p3,
        }
    }
}
