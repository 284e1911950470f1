pub mod approximate;
pub mod error;
pub mod geometry;
pub mod math;

pub use error::{BezhullError, Result};
