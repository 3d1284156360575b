//! Constants used when building and simplifying expressions.

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// How close a constant must be to [`E`] for `ln` to fold it to `1`.
pub const E_TOLERANCE: f64 = 1e-10;
