//! # Simply-Supported Beam Reactions
//!
//! Support reactions for a simply-supported beam (pin at x=0, roller at x=L)
//! under a single point load or a distributed load modelled as `n` equal
//! point loads spaced evenly from support to support.
//!
//! ```text
//!        W
//!        ↓
//!    ────┬────────────
//!    △   a            △
//!   R1  ←───────L────→ R2
//! ```
//!
//! ## Sign Conventions
//!
//! - Loads: positive downward
//! - Reactions: positive upward
//!
//! ## Example
//!
//! ```rust
//! use demo_core::physics::beam::simply_supported_point_load;
//!
//! let reactions = simply_supported_point_load(100.0, 10.0, 6.0).unwrap();
//! assert!((reactions.r1_lb - 40.0).abs() < 1e-9);
//! assert!((reactions.r2_lb - 60.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DemoError, DemoResult};
use crate::physics::validate_sample_count;

/// Calculate reactions for point load P at position a on span L
///
/// # Formulas (static equilibrium)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
///
/// # Returns
/// (R1, R2) - Left and right reactions (positive upward)
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// One point load and the reactions it produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamReactions {
    /// Applied load W (lb)
    pub load_lb: f64,
    /// Span L (ft)
    pub span_ft: f64,
    /// Load position a, measured from the left support (ft)
    pub position_ft: f64,
    /// Left reaction R1 (lb)
    pub r1_lb: f64,
    /// Right reaction R2 (lb)
    pub r2_lb: f64,
}

/// A distributed load approximated by discrete point loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoadResult {
    /// Span L (ft)
    pub span_ft: f64,
    /// Each point load with its own reactions, left to right
    pub points: Vec<BeamReactions>,
    /// Sum of all point loads (lb)
    pub total_load_lb: f64,
    /// Sum of left reactions (lb)
    pub r1_lb: f64,
    /// Sum of right reactions (lb)
    pub r2_lb: f64,
}

fn validate_span(span_ft: f64) -> DemoResult<()> {
    if !span_ft.is_finite() || span_ft <= 0.0 {
        tracing::warn!(span_ft, "rejected beam span");
        return Err(DemoError::invalid_input(
            "L",
            span_ft.to_string(),
            "Beam length must be positive",
        ));
    }
    Ok(())
}

fn validate_load(load_lb: f64) -> DemoResult<()> {
    if !load_lb.is_finite() {
        return Err(DemoError::invalid_input("W", load_lb.to_string(), "Load must be a finite number"));
    }
    Ok(())
}

/// Reactions for a single point load `w` at `a` on span `l`.
///
/// The load must sit on the span, `0 <= a <= l`.
pub fn simply_supported_point_load(w: f64, l: f64, a: f64) -> DemoResult<BeamReactions> {
    validate_load(w)?;
    validate_span(l)?;
    if !(0.0..=l).contains(&a) {
        tracing::warn!(a, l, "load position off the span");
        return Err(DemoError::invalid_input(
            "a",
            a.to_string(),
            format!("Load location must be between 0 and {} ft", l),
        ));
    }

    let (r1, r2) = point_load_reactions(w, a, l);
    tracing::debug!(w, l, a, r1, r2, "point load reactions");
    Ok(BeamReactions {
        load_lb: w,
        span_ft: l,
        position_ft: a,
        r1_lb: r1,
        r2_lb: r2,
    })
}

/// Reactions for `n` point loads of `w` each, placed at `i·L/(n-1)`.
///
/// The first and last loads sit directly over the supports.
///
/// ```rust
/// use demo_core::physics::beam::simply_supported_distributed;
///
/// let result = simply_supported_distributed(100.0, 10.0, 11).unwrap();
/// assert_eq!(result.points.len(), 11);
/// assert!((result.total_load_lb - 1100.0).abs() < 1e-9);
/// assert!((result.r1_lb - 550.0).abs() < 1e-9);
/// ```
pub fn simply_supported_distributed(w: f64, l: f64, n: usize) -> DemoResult<DistributedLoadResult> {
    validate_load(w)?;
    validate_span(l)?;
    validate_sample_count("n", n)?;

    let spacing = l / (n - 1) as f64;
    let points: Vec<BeamReactions> = (0..n)
        .map(|index| {
            // Pin the last load to the right support exactly.
            let a = if index == n - 1 { l } else { index as f64 * spacing };
            let (r1, r2) = point_load_reactions(w, a, l);
            BeamReactions {
                load_lb: w,
                span_ft: l,
                position_ft: a,
                r1_lb: r1,
                r2_lb: r2,
            }
        })
        .collect();

    let total_load_lb = points.iter().map(|p| p.load_lb).sum();
    let r1_lb = points.iter().map(|p| p.r1_lb).sum();
    let r2_lb = points.iter().map(|p| p.r2_lb).sum();
    tracing::debug!(n, total_load_lb, r1_lb, r2_lb, "distributed load reactions");

    Ok(DistributedLoadResult {
        span_ft: l,
        points,
        total_load_lb,
        r1_lb,
        r2_lb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SAMPLES;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_point_load_midspan_reactions() {
        // 10 ft beam, 1000 lb at midspan
        let (r1, r2) = point_load_reactions(1000.0, 5.0, 10.0);
        assert!(approx_eq(r1, 500.0), "R1 = {}", r1);
        assert!(approx_eq(r2, 500.0), "R2 = {}", r2);
    }

    #[test]
    fn test_classroom_point_load() {
        // W=100, L=10, a=6
        let result = simply_supported_point_load(100.0, 10.0, 6.0).unwrap();
        assert!(approx_eq(result.r1_lb, 40.0), "R1 = {} (expected 40)", result.r1_lb);
        assert!(approx_eq(result.r2_lb, 60.0), "R2 = {} (expected 60)", result.r2_lb);
    }

    #[test]
    fn test_equilibrium_holds() {
        let result = simply_supported_point_load(250.0, 12.0, 3.5).unwrap();
        // Vertical forces and moments about the left support
        assert!(approx_eq(result.r1_lb + result.r2_lb, 250.0));
        assert!(approx_eq(result.r2_lb * 12.0, 250.0 * 3.5));
    }

    #[test]
    fn test_load_over_support() {
        let left = simply_supported_point_load(100.0, 10.0, 0.0).unwrap();
        assert!(approx_eq(left.r1_lb, 100.0));
        assert!(approx_eq(left.r2_lb, 0.0));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(simply_supported_point_load(100.0, 0.0, 0.0).is_err());
        assert!(simply_supported_point_load(100.0, -10.0, 1.0).is_err());
        assert!(simply_supported_point_load(100.0, 10.0, 10.5).is_err());
        assert!(simply_supported_point_load(100.0, 10.0, -0.1).is_err());
        assert!(simply_supported_point_load(f64::NAN, 10.0, 5.0).is_err());
    }

    #[test]
    fn test_distributed_is_symmetric() {
        let result = simply_supported_distributed(100.0, 10.0, 11).unwrap();
        assert!(approx_eq(result.r1_lb, result.r2_lb));
        assert!(approx_eq(result.r1_lb + result.r2_lb, result.total_load_lb));
        assert!(approx_eq(result.points[0].position_ft, 0.0));
        assert!(approx_eq(result.points[10].position_ft, 10.0));
        assert!(approx_eq(result.points[5].position_ft, 5.0));
    }

    #[test]
    fn test_distributed_sample_count_bounds() {
        assert!(simply_supported_distributed(100.0, 10.0, 1).is_err());
        assert!(simply_supported_distributed(100.0, 10.0, MAX_SAMPLES + 1).is_err());
        assert!(simply_supported_distributed(100.0, 10.0, 2).is_ok());
    }
}
