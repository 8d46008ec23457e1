//! # Fundamentals Demo Driver
//!
//! Runs one language-fundamentals routine from `demo_core::fundamentals`
//! per invocation, chosen by a slash flag (`/get_info`, `/for_loops_03`,
//! `/typedefs_03 /h`, ...). Run with `/h` for the full list.
//!
//! An optional `demo_settings.json` in the working directory overrides the
//! record file names, the guessing-game tries and the starting balance.

mod dispatch;

use std::env;
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use demo_core::{Console, DemoError, DemoSettings, SETTINGS_FILE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

fn init_tracing() {
    let level = if env::var_os("DEMO_VERBOSE").is_some() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// `Error: ...`, followed by the error as pretty JSON when `with_json` is set.
fn write_error<W: Write>(out: &mut W, error: &DemoError, with_json: bool) -> io::Result<()> {
    writeln!(out, "Error: {}", error)?;
    if with_json {
        if let Ok(json) = serde_json::to_string_pretty(error) {
            writeln!(out)?;
            writeln!(out, "Error JSON:")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

fn report_error(error: &DemoError) {
    let with_json = env::var_os("DEMO_ERROR_JSON").is_some();
    let _ = write_error(&mut io::stderr().lock(), error, with_json);
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let settings = DemoSettings::load(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
        report_error(&e);
        DemoSettings::default()
    });

    let seed = Utc::now().timestamp_millis().unsigned_abs();
    let mut rng = StdRng::seed_from_u64(seed);

    let command = dispatch::parse(&args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let outcome = dispatch::write_arguments(&mut console, &args)
        .and_then(|()| dispatch::run(&mut console, &command, &settings, &mut rng));
    let _ = console.flush();
    if let Err(e) = outcome {
        report_error(&e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_text(with_json: bool) -> String {
        let error = DemoError::invalid_input("y_init", "-5", "Height must be positive");
        let mut out = Vec::new();
        write_error(&mut out, &error, with_json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            error_text(false),
            "Error: Invalid input for 'y_init': -5 - Height must be positive\n"
        );
    }

    #[test]
    fn test_error_json_dump() {
        let text = error_text(true);
        assert!(text.starts_with("Error: Invalid input for 'y_init'"));
        assert!(text.contains("\n\nError JSON:\n{"));
        assert!(text.contains("\"type\": \"InvalidInput\""), "{}", text);
        assert!(text.contains("\"field\": \"y_init\""), "{}", text);
    }
}
