use thiserror::Error;

/// Top-level error type for the bezhull crate.
#[derive(Debug, Error)]
pub enum BezhullError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Errors related to geometric constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot build a line from coincident points ({x}, {y})")]
    CoincidentPoints { x: f64, y: f64 },

    #[error("zero velocity at t = {t}; tangent direction is undefined")]
    ZeroVelocity { t: f64 },
}

/// Errors reported by the numeric root finder.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("root finder did not converge after {iterations} iterations (last t = {last})")]
    NoConvergence { iterations: u32, last: f64 },

    #[error("root finder produced a non-finite iterate")]
    NonFinite,
}

/// Convenience type alias for results using [`BezhullError`].
pub type Result<T> = std::result::Result<T, BezhullError>;
