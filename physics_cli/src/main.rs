//! # Physics Demo Driver
//!
//! Command-line front end for the projectile and beam calculators in
//! `demo_core::physics`. Run with `/h` (or no arguments) for the usage
//! screen.
//!
//! Diagnostics go to stderr through `tracing`; set `DEMO_VERBOSE` to see
//! debug output and `DEMO_ERROR_JSON` to get errors as JSON as well.

mod dispatch;

use std::env;
use std::io::{self, Write};

use demo_core::{Console, DemoError};
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

    let command = dispatch::parse(&args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let outcome = dispatch::write_arguments(&mut console, &args)
        .and_then(|()| dispatch::run(&mut console, &command));
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
