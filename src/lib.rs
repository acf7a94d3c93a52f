pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod search;
pub mod topology;

pub use error::{CurvenetError, Result};
