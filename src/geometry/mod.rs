mod cubic;
mod line;
mod segment;

pub use cubic::CubicBezier;
pub use line::ImplicitLine;
pub use segment::PathSegment;
