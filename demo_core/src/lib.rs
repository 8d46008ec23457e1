//! # demo_core - Course Demonstration Routines
//!
//! `demo_core` holds everything the two course drivers run: the
//! fundamentals demos (arithmetic, loops, calculators, record types) and
//! the physics formulas (free fall, 2D projectiles, simply-supported beams)
//! with their report tables. The drivers only parse arguments and pick a
//! routine.
//!
//! ## Design Philosophy
//!
//! - **Writer-Based**: Routines print through `std::io::Write`, never to stdout directly
//! - **Seedable**: Randomness is passed in as an `rand::Rng`
//! - **Rich Errors**: Invalid inputs come back as [`DemoError`] values, not panics
//! - **Serializable**: Record and result types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use demo_core::physics::simply_supported_point_load;
//!
//! let reactions = simply_supported_point_load(100.0, 10.0, 6.0).unwrap();
//! assert!((reactions.r1_lb - 40.0).abs() < 1e-9);
//!
//! let json = serde_json::to_string(&reactions).unwrap();
//! assert!(json.contains("r2_lb"));
//! ```
//!
//! ## Modules
//!
//! - [`fundamentals`] - Fundamentals driver routines
//! - [`physics`] - Projectile and beam formulas plus report tables
//! - [`records`] - Vehicle, cross-section and user record types
//! - [`console`] - Token-based prompting over any reader/writer
//! - [`constants`] - Shared physical and program constants
//! - [`settings`] - Optional JSON settings for file names and game tuning
//! - [`errors`] - Structured error types

pub mod console;
pub mod constants;
pub mod errors;
pub mod fundamentals;
pub mod physics;
pub mod records;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use console::Console;
pub use errors::{DemoError, DemoResult};
pub use settings::{DemoSettings, SETTINGS_FILE};
