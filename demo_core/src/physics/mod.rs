//! # Physics Formulas
//!
//! Closed-form kinematics and statics used by the physics driver.
//!
//! - [`projectile`] - 1D free fall and 2D projectile motion under constant gravity
//! - [`beam`] - Simply-supported beam reactions
//! - [`report`] - Console tables for the results
//!
//! Every formula validates its inputs and returns a [`DemoError`] instead of
//! computing garbage; nothing here prints except [`report`].

pub mod beam;
pub mod projectile;
pub mod report;

pub use beam::{simply_supported_distributed, simply_supported_point_load, BeamReactions, DistributedLoadResult};
pub use projectile::{
    free_fall_final, free_fall_table, projectile_2d_final, projectile_2d_table, FreeFallFinal, FreeFallTable,
    Projectile2DFinal, Projectile2DTable,
};

use crate::constants::MAX_SAMPLES;
use crate::errors::{DemoError, DemoResult};

/// Sample tables need both endpoints and must fit in `MAX_SAMPLES` slots.
pub(crate) fn validate_sample_count(field: &str, n: usize) -> DemoResult<()> {
    if !(2..=MAX_SAMPLES).contains(&n) {
        tracing::warn!(n, max = MAX_SAMPLES, "rejected sample count");
        return Err(DemoError::invalid_input(
            field,
            n.to_string(),
            format!("Number of points must be between 2 and {}", MAX_SAMPLES),
        ));
    }
    Ok(())
}
