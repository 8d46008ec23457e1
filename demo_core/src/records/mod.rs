//! # Records
//!
//! Flat value types used by the typedefs demos.
//!
//! - [`vehicle`] - Car with a nested engine, built interactively
//! - [`cross_section`] - Shape tag with named inputs (formulas not computed)
//! - [`user`] - User properties with comma-separated file I/O

pub mod cross_section;
pub mod user;
pub mod vehicle;

pub use cross_section::{CrossSection, SectionInput, SectionShape};
pub use user::{export_record, import_record, open_record_file, RecordMode, UserProperties, UserStatus};
pub use vehicle::{Engine, Vehicle};
