//! # Projectile Motion
//!
//! Constant-acceleration kinematics with gravity [`A_Y`] = -32.2 ft/s².
//!
//! ## 1D free fall
//!
//! Dropped from rest at height `y0`:
//!
//! ```text
//! t_final = √(-2·y0 / a)
//! y(t)    = y0 + ½·a·t²
//! v(t)    = a·t
//! ```
//!
//! ## 2D projectile
//!
//! Launched from ground level at speed `v0` and angle `θ`:
//!
//! ```text
//! vx      = v0·cos θ          (constant)
//! vy0     = v0·sin θ
//! t_final = -2·vy0 / a
//! x(t)    = vx·t
//! y(t)    = vy0·t + ½·a·t²
//! vy(t)   = vy0 + a·t
//! ```
//!
//! ## Example
//!
//! ```rust
//! use demo_core::physics::projectile::free_fall_table;
//!
//! let table = free_fall_table(100.0, 11).unwrap();
//! let first = table.samples[0];
//! assert_eq!((first.time_s, first.height_ft, first.velocity_ftps), (0.0, 100.0, 0.0));
//! assert!(table.samples[10].height_ft.abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::A_Y;
use crate::errors::{DemoError, DemoResult};
use crate::physics::validate_sample_count;

// =============================================================================
// 1D FREE FALL
// =============================================================================

/// Time for a body dropped from rest at `y_init` to reach the ground
#[inline]
pub fn time_to_impact(y_init: f64) -> f64 {
    (-2.0 * y_init / A_Y).sqrt()
}

/// Height at time `t` for a body dropped from rest at `y_init`
#[inline]
pub fn free_fall_height(y_init: f64, t: f64) -> f64 {
    y_init + 0.5 * A_Y * t.powi(2)
}

/// Vertical velocity at time `t` for a body dropped from rest
#[inline]
pub fn free_fall_velocity(t: f64) -> f64 {
    A_Y * t
}

/// Start and end state of a free fall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeFallFinal {
    pub y_init_ft: f64,
    pub y_final_ft: f64,
    pub t_final_s: f64,
    pub v_y_final_ftps: f64,
}

/// One row of a free-fall table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeFallSample {
    pub time_s: f64,
    pub height_ft: f64,
    pub velocity_ftps: f64,
}

/// Evenly spaced samples from release to impact.
///
/// Holds at most `MAX_SAMPLES` rows; immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeFallTable {
    pub y_init_ft: f64,
    pub samples: Vec<FreeFallSample>,
}

impl FreeFallTable {
    /// The last row as a start/end summary.
    pub fn final_state(&self) -> FreeFallFinal {
        let last = self.samples.last().copied().unwrap_or(FreeFallSample {
            time_s: 0.0,
            height_ft: self.y_init_ft,
            velocity_ftps: 0.0,
        });
        FreeFallFinal {
            y_init_ft: self.y_init_ft,
            y_final_ft: last.height_ft,
            t_final_s: last.time_s,
            v_y_final_ftps: last.velocity_ftps,
        }
    }
}

fn validate_height(y_init: f64) -> DemoResult<()> {
    if !y_init.is_finite() || y_init <= 0.0 {
        tracing::warn!(y_init, "rejected initial height");
        return Err(DemoError::invalid_input(
            "y_init",
            y_init.to_string(),
            "Initial height must be positive",
        ));
    }
    Ok(())
}

/// Final state of a body dropped from `y_init` feet.
pub fn free_fall_final(y_init: f64) -> DemoResult<FreeFallFinal> {
    validate_height(y_init)?;

    let t_final = time_to_impact(y_init);
    tracing::debug!(y_init, t_final, "free fall");
    Ok(FreeFallFinal {
        y_init_ft: y_init,
        y_final_ft: free_fall_height(y_init, t_final),
        t_final_s: t_final,
        v_y_final_ftps: free_fall_velocity(t_final),
    })
}

/// `n` evenly spaced samples of a fall from `y_init` feet.
pub fn free_fall_table(y_init: f64, n: usize) -> DemoResult<FreeFallTable> {
    validate_height(y_init)?;
    validate_sample_count("n", n)?;

    let t_final = time_to_impact(y_init);
    let t_delta = t_final / (n - 1) as f64;
    let samples = (0..n)
        .map(|index| {
            let t = t_delta * index as f64;
            FreeFallSample {
                time_s: t,
                height_ft: free_fall_height(y_init, t),
                velocity_ftps: free_fall_velocity(t),
            }
        })
        .collect();

    Ok(FreeFallTable {
        y_init_ft: y_init,
        samples,
    })
}

// =============================================================================
// 2D PROJECTILE
// =============================================================================

/// Launch conditions for a 2D projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Launch speed (ft/s)
    pub v_init_ftps: f64,
    /// Launch angle above horizontal (radians)
    pub theta_rad: f64,
}

impl Launch {
    /// Horizontal velocity component, constant in flight
    pub fn v_x(&self) -> f64 {
        self.v_init_ftps * self.theta_rad.cos()
    }

    /// Initial vertical velocity component
    pub fn v_y_init(&self) -> f64 {
        self.v_init_ftps * self.theta_rad.sin()
    }

    /// Flight time until the projectile returns to launch height
    pub fn flight_time(&self) -> f64 {
        -2.0 * self.v_y_init() / A_Y
    }

    /// State at time `t`
    pub fn sample_at(&self, t: f64) -> Projectile2DSample {
        let v_y_init = self.v_y_init();
        Projectile2DSample {
            time_s: t,
            x_ft: self.v_x() * t,
            v_x_ftps: self.v_x(),
            y_ft: v_y_init * t + 0.5 * A_Y * t.powi(2),
            v_y_ftps: v_y_init + A_Y * t,
        }
    }

    fn validate(&self) -> DemoResult<()> {
        if !self.v_init_ftps.is_finite() || self.v_init_ftps <= 0.0 {
            tracing::warn!(v_init = self.v_init_ftps, "rejected launch speed");
            return Err(DemoError::invalid_input(
                "v_init",
                self.v_init_ftps.to_string(),
                "Launch velocity must be positive",
            ));
        }
        if !self.theta_rad.is_finite() || self.v_y_init() <= 0.0 {
            tracing::warn!(theta = self.theta_rad, "rejected launch angle");
            return Err(DemoError::invalid_input(
                "theta",
                self.theta_rad.to_string(),
                "Launch angle must point upward (sin θ > 0)",
            ));
        }
        Ok(())
    }
}

/// One row of a 2D projectile table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile2DSample {
    pub time_s: f64,
    pub x_ft: f64,
    pub v_x_ftps: f64,
    pub y_ft: f64,
    pub v_y_ftps: f64,
}

/// Launch conditions plus the state at landing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile2DFinal {
    pub launch: Launch,
    pub landing: Projectile2DSample,
}

/// Evenly spaced samples from launch to landing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile2DTable {
    pub launch: Launch,
    pub samples: Vec<Projectile2DSample>,
}

impl Projectile2DTable {
    /// Launch conditions and the last row.
    pub fn final_state(&self) -> Projectile2DFinal {
        let landing = self
            .samples
            .last()
            .copied()
            .unwrap_or_else(|| self.launch.sample_at(0.0));
        Projectile2DFinal {
            launch: self.launch,
            landing,
        }
    }
}

/// Landing state of a projectile launched at `v_init` ft/s and `theta` radians.
pub fn projectile_2d_final(v_init: f64, theta: f64) -> DemoResult<Projectile2DFinal> {
    let launch = Launch {
        v_init_ftps: v_init,
        theta_rad: theta,
    };
    launch.validate()?;

    let t_final = launch.flight_time();
    tracing::debug!(v_init, theta, t_final, "2D projectile");
    Ok(Projectile2DFinal {
        launch,
        landing: launch.sample_at(t_final),
    })
}

/// `n` evenly spaced samples of the flight.
pub fn projectile_2d_table(v_init: f64, theta: f64, n: usize) -> DemoResult<Projectile2DTable> {
    let launch = Launch {
        v_init_ftps: v_init,
        theta_rad: theta,
    };
    launch.validate()?;
    validate_sample_count("n", n)?;

    let t_delta = launch.flight_time() / (n - 1) as f64;
    let samples = (0..n)
        .map(|index| launch.sample_at(t_delta * index as f64))
        .collect();

    Ok(Projectile2DTable { launch, samples })
}
