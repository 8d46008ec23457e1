//! # User Properties Record
//!
//! A flat four-field record stored one per line as
//!
//! ```text
//! id, first_name, last_name, status
//! ```
//!
//! No header, no quoting, no escaping: a field containing a comma will not
//! survive a round trip. Whitespace after each comma is skipped; trailing
//! whitespace inside a field is kept. Files are opened fresh for each read or write
//! ([`open_record_file`]); `Write` truncates and `Append` appends.
//!
//! ## Example
//!
//! ```rust
//! use demo_core::records::user::{export_record, import_record, UserProperties, UserStatus};
//!
//! let record = UserProperties::new("chattada", "Chattada", "Viriyaphap", UserStatus::Active);
//!
//! let mut buffer = Vec::new();
//! export_record(&mut buffer, &record).unwrap();
//! assert_eq!(buffer, b"chattada, Chattada, Viriyaphap, 1\n");
//!
//! let mut parsed = UserProperties::default();
//! import_record(&mut buffer.as_slice(), &mut parsed).unwrap();
//! assert_eq!(parsed, record);
//! ```

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DemoError, DemoResult};

/// Account status, stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Unknown = 0,
    Active = 1,
    Inactive = 2,
}

impl UserStatus {
    /// Every status in code order.
    pub const ALL: [UserStatus; 3] = [UserStatus::Unknown, UserStatus::Active, UserStatus::Inactive];

    /// Integer code written to files.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Status for an integer code; codes outside 0..=2 read as `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => UserStatus::Active,
            2 => UserStatus::Inactive,
            0 => UserStatus::Unknown,
            other => {
                tracing::warn!(code = other, "status code out of range, treating as unknown");
                UserStatus::Unknown
            }
        }
    }

    /// Lowercase label, as listed in the typedefs_03 banner.
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Unknown => "unknown",
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

/// One user record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProperties {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub status: UserStatus,
}

impl UserProperties {
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        UserProperties {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            status,
        }
    }

    /// Parse one `id, first, last, status` line.
    ///
    /// Fields are split on commas with leading whitespace skipped; the status
    /// must be an integer.
    pub fn parse_line(line: &str) -> DemoResult<Self> {
        let mut fields = line.trim_end_matches(['\r', '\n']).splitn(4, ',');
        let mut next_field = |name: &str| {
            fields
                .next()
                .map(str::trim_start)
                .ok_or_else(|| DemoError::missing_field(name))
        };

        let user_id = next_field("user_id")?.to_string();
        let first_name = next_field("first_name")?.to_string();
        let last_name = next_field("last_name")?.to_string();
        let status_text = next_field("status")?.trim_end();
        let code: i32 = status_text
            .parse()
            .map_err(|_| DemoError::invalid_input("status", status_text, "Status must be an integer"))?;

        Ok(UserProperties {
            user_id,
            first_name,
            last_name,
            status: UserStatus::from_code(code),
        })
    }
}

impl fmt::Display for UserProperties {
    /// Serialized record line, without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.user_id,
            self.first_name,
            self.last_name,
            self.status.code()
        )
    }
}

/// How a record file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    Read,
    /// Create or truncate
    Write,
    /// Create or append
    Append,
}

/// Open a record file for a single read or write.
///
/// A file that cannot be opened is the "invalid handle" case; the caller
/// reports the error and moves on.
pub fn open_record_file(path: &Path, mode: RecordMode) -> DemoResult<File> {
    let mut options = OpenOptions::new();
    match mode {
        RecordMode::Read => options.read(true),
        RecordMode::Write => options.write(true).create(true).truncate(true),
        RecordMode::Append => options.append(true).create(true),
    };
    options.open(path).map_err(|e| {
        tracing::warn!(path = %path.display(), ?mode, error = %e, "cannot open record file");
        DemoError::file_error(format!("open ({:?})", mode).to_lowercase(), path.display().to_string(), e.to_string())
    })
}

/// Read the next record line from `input` into `record`.
pub fn import_record<R: BufRead>(input: &mut R, record: &mut UserProperties) -> DemoResult<()> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DemoError::missing_field("user_id"));
    }
    *record = UserProperties::parse_line(&line)?;
    Ok(())
}

/// Write `record` to `output` as one line.
pub fn export_record<W: Write>(output: &mut W, record: &UserProperties) -> DemoResult<()> {
    writeln!(output, "{}", record)?;
    Ok(())
}

/// Open `path`, read its first record, close it.
pub fn import_record_file(path: &Path) -> DemoResult<UserProperties> {
    let file = open_record_file(path, RecordMode::Read)?;
    let mut reader = BufReader::new(file);
    let mut record = UserProperties::default();
    import_record(&mut reader, &mut record)?;
    Ok(record)
}

/// Open `path` in `mode`, write one record, close it.
pub fn export_record_file(path: &Path, mode: RecordMode, record: &UserProperties) -> DemoResult<()> {
    let mut file = open_record_file(path, mode)?;
    export_record(&mut file, record)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> UserProperties {
        UserProperties::new("chattada", "Chattada", "Viriyaphap", UserStatus::Active)
    }

    #[test]
    fn test_round_trip_in_memory() {
        for status in UserStatus::ALL {
            let record = UserProperties::new("u1", "Ada", "Lovelace", status);
            let mut buffer = Vec::new();
            export_record(&mut buffer, &record).unwrap();

            let mut parsed = UserProperties::default();
            import_record(&mut buffer.as_slice(), &mut parsed).unwrap();
            assert_eq!(parsed, record);
        }
    }

    #[test]
    fn test_parse_tolerates_spacing() {
        let parsed = UserProperties::parse_line("id7,Grace,  Hopper, 2 \r\n").unwrap();
        assert_eq!(parsed, UserProperties::new("id7", "Grace", "Hopper", UserStatus::Inactive));
    }

    #[test]
    fn test_trailing_field_spaces_round_trip() {
        let record = UserProperties::new("id7 ", "Grace  ", "Hopper ", UserStatus::Active);
        let parsed = UserProperties::parse_line(&record.to_string()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            UserProperties::parse_line("id, first").unwrap_err(),
            DemoError::missing_field("last_name")
        );
        assert_eq!(
            UserProperties::parse_line("id, first, last, x").unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_out_of_range_status_reads_unknown() {
        let parsed = UserProperties::parse_line("id, a, b, 7").unwrap();
        assert_eq!(parsed.status, UserStatus::Unknown);
    }

    #[test]
    fn test_embedded_comma_breaks_round_trip() {
        let record = UserProperties::new("id", "Smith, Jr", "X", UserStatus::Active);
        let parsed = UserProperties::parse_line(&record.to_string());
        assert_ne!(parsed.ok(), Some(record));
    }

    #[test]
    fn test_write_truncates_and_append_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        export_record_file(&path, RecordMode::Write, &sample()).unwrap();
        export_record_file(&path, RecordMode::Write, &sample()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);

        export_record_file(&path, RecordMode::Append, &sample()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "chattada, Chattada, Viriyaphap, 1\nchattada, Chattada, Viriyaphap, 1\n"
        );

        assert_eq!(import_record_file(&path).unwrap(), sample());
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_record_file(&dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_empty_file_is_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        assert_eq!(import_record_file(&path).unwrap_err(), DemoError::missing_field("user_id"));
    }
}
