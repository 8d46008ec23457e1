//! # Fundamentals
//!
//! Routines behind the fundamentals driver. Each one writes to a caller
//! supplied writer (or a [`Console`](crate::console::Console) when it needs
//! input), so the same code runs against stdout or an in-memory buffer.
//!
//! - [`greeting`] - Author profile and course greeting
//! - [`arithmetic`] - Operators, integer division, formatting and casts
//! - [`loops`] - `for`/`while` demos and the guessing game
//! - [`calculator`] - One-shot and chained calculators
//! - [`typedefs`] - Record demos (vehicle, cross sections, users, free fall)

pub mod arithmetic;
pub mod calculator;
pub mod greeting;
pub mod loops;
pub mod typedefs;

pub use calculator::{add, divide, multiply, subtract, Calculator, Operation};
pub use loops::{for_loops_03, rand_range, GuessOutcome};
