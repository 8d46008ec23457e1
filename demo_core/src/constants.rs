//! # Named Constants
//!
//! Compile-time constants shared by both drivers. US customary units
//! throughout (feet, seconds, pounds), matching the course material.

use once_cell::sync::Lazy;

/// Gravitational acceleration in ft/s² (negative: acts downward)
pub const A_Y: f64 = -32.2;

/// Miles to kilometers conversion factor
pub const KMS_PER_MILE: f64 = 1.609;

/// Capacity of every sample table (time/height/velocity, point loads)
pub const MAX_SAMPLES: usize = 11;

/// Upper bound of the demo's raw random integers, `[0, RAND_MAX]`
pub const RAND_MAX: i32 = 32_767;

/// Last odd denominator used in the Gregory-Leibniz series for pi
pub const LEIBNIZ_LAST_DENOMINATOR: u32 = 19_999;

/// Pi approximated by the Gregory-Leibniz series, computed on first use
pub static APPROXIMATE_PI: Lazy<f64> = Lazy::new(crate::fundamentals::arithmetic::approximate_pi);

// Hard-coded inputs for the `/v1` physics variants
/// Initial height for `/1D /v1` (ft)
pub const DEFAULT_Y_INIT_FT: f64 = 100.0;
/// Launch speed for `/2D /v1` (ft/s)
pub const DEFAULT_V_INIT_FTPS: f64 = 100.0;
/// Launch angle for `/2D /v1` (radians, roughly 45°)
pub const DEFAULT_THETA_RAD: f64 = 0.785;
/// Point load for `/beam /v1` (lb)
pub const DEFAULT_LOAD_LB: f64 = 100.0;
/// Span for `/beam /v1` (ft)
pub const DEFAULT_SPAN_FT: f64 = 10.0;
/// Load position for `/beam /v1` (ft from the left support)
pub const DEFAULT_LOAD_POSITION_FT: f64 = 6.0;
