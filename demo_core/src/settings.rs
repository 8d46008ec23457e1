//! # Run-time Settings
//!
//! Knobs the fundamentals driver reads once at start-up. Everything has a
//! default matching the classroom setup; an optional JSON file can override
//! any subset of fields.
//!
//! ```json
//! {
//!   "record_file": "example_01.csv",
//!   "modified_record_file": "example_01_modified.csv",
//!   "log_file": "log.csv",
//!   "guess_attempts": 3,
//!   "starting_balance": 1000.0
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DemoError, DemoResult};

/// Default settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "demo_settings.json";

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// File written by `/get_user_properties_parametric`
    pub record_file: String,

    /// File written after an imported record has its status flipped
    pub modified_record_file: String,

    /// Running log that every imported record is appended to
    pub log_file: String,

    /// Number of tries in the guessing game
    pub guess_attempts: u32,

    /// Starting balance for the spending simulations in `/while_loops_01`
    pub starting_balance: f64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            record_file: "example_01.csv".to_string(),
            modified_record_file: "example_01_modified.csv".to_string(),
            log_file: "log.csv".to_string(),
            guess_attempts: 3,
            starting_balance: 1000.0,
        }
    }
}

impl DemoSettings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error so a typo does not silently fall back.
    pub fn load(path: &Path) -> DemoResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(DemoSettings::default());
            }
            Err(e) => {
                return Err(DemoError::file_error("read settings", path.display().to_string(), e.to_string()));
            }
        };

        let settings: DemoSettings = serde_json::from_str(&text)?;
        if settings.guess_attempts == 0 {
            return Err(DemoError::invalid_input(
                "guess_attempts",
                "0",
                "The guessing game needs at least one try",
            ));
        }
        Ok(settings)
    }
}
