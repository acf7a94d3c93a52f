pub mod distance;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum gap allowed between consecutive curves when joining a path.
pub const JOIN_TOLERANCE: f64 = 0.001;
