//! # Console
//!
//! Prompt-and-read helper used by every interactive routine.
//!
//! Values are read as whitespace-separated tokens, so `3 4` on one line
//! answers two prompts, the same way `scanf("%d")` consumes input. A token
//! that does not convert to the requested type is reported and the prompt
//! waits for another token. End of input is an error, never a spin.
//!
//! `Console` implements [`Write`], so routines print with `writeln!`.
//!
//! Command-line numbers go through [`leading_f64`] and [`leading_i32`]
//! instead: like `atof`/`atoi` they convert the longest numeric prefix and
//! fall back to zero.
//!
//! ```rust
//! use std::io::Write;
//! use demo_core::console::Console;
//!
//! let mut console = Console::new("12.5\n".as_bytes(), Vec::new());
//! let miles: f64 = console.prompt("Enter the distance in miles:").unwrap();
//! writeln!(console, "{:.1}", miles * 2.0).unwrap();
//!
//! assert_eq!(console.output_text(), "Enter the distance in miles:\n25.0\n");
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::errors::{DemoError, DemoResult};

/// Interactive console over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `message` on its own line and read one value of type `T`.
    pub fn prompt<T: FromStr>(&mut self, message: &str) -> DemoResult<T> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        loop {
            let token = self.next_token(message)?;
            match token.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::warn!(token = %token, prompt = message, "entry did not convert");
                    writeln!(self.output, "Warning: '{}' is not a valid entry, try again:", token)?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Print `message` and read a single character (the first of the next token).
    pub fn prompt_char(&mut self, message: &str) -> DemoResult<char> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let token = self.next_token(message)?;
        if token.chars().count() > 1 {
            tracing::debug!(token = %token, "keeping only the first character");
        }
        token
            .chars()
            .next()
            .ok_or_else(|| DemoError::input_closed(message))
    }

    fn next_token(&mut self, prompt: &str) -> DemoResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DemoError::input_closed(prompt));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Longest `[+-]digits[.digits][e[+-]digits]` prefix of `text`.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(sign_len);
    let mut mantissa_digits = end - sign_len;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        mantissa_digits += fraction_end - (end + 1);
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_start = end + 1 + usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_end = digits_from(exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }
    &text[..end]
}

/// `atof`: leading whitespace skipped, the longest numeric prefix
/// converted, 0.0 when there is none (`"100ft"` is 100.0).
pub fn leading_f64(text: &str) -> f64 {
    float_prefix(text.trim_start()).parse().unwrap_or(0.0)
}

/// `atoi`: leading whitespace skipped, optional sign and digits converted,
/// 0 when there are none. Out-of-range values saturate.
pub fn leading_i32(text: &str) -> i32 {
    let text = text.trim_start();
    let sign_len = usize::from(matches!(text.as_bytes().first(), Some(b'+' | b'-')));
    let digits = text.as_bytes()[sign_len..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return 0;
    }

    let prefix = &text[..sign_len + digits];
    match prefix.parse::<i32>() {
        Ok(value) => value,
        Err(_) if prefix.starts_with('-') => i32::MIN,
        Err(_) => i32::MAX,
    }
}

impl<R: BufRead> Console<R, Vec<u8>> {
    /// Everything written so far, as text. Handy for tests.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_span_lines() {
        let mut console = Console::new("1 2\n3\n".as_bytes(), Vec::new());
        let a: i32 = console.prompt("a").unwrap();
        let b: i32 = console.prompt("b").unwrap();
        let c: i32 = console.prompt("c").unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_bad_token_reprompts() {
        let mut console = Console::new("abc\n7\n".as_bytes(), Vec::new());
        let value: i32 = console.prompt("Enter a number:").unwrap();
        assert_eq!(value, 7);
        assert!(console.output_text().contains("Warning: 'abc' is not a valid entry"));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        let err = console.prompt::<f64>("height").unwrap_err();
        assert_eq!(err, DemoError::input_closed("height"));
    }

    #[test]
    fn test_leading_f64_takes_numeric_prefix() {
        assert_eq!(leading_f64("100ft"), 100.0);
        assert_eq!(leading_f64("  -2.5e2x"), -250.0);
        assert_eq!(leading_f64("3.e"), 3.0);
        assert_eq!(leading_f64(".5"), 0.5);
        assert_eq!(leading_f64("tall"), 0.0);
        assert_eq!(leading_f64("-."), 0.0);
        assert_eq!(leading_f64(""), 0.0);
    }

    #[test]
    fn test_leading_i32_takes_digits() {
        assert_eq!(leading_i32("233"), 233);
        assert_eq!(leading_i32(" -9abc"), -9);
        assert_eq!(leading_i32("+7"), 7);
        assert_eq!(leading_i32("3.7"), 3);
        assert_eq!(leading_i32("x1"), 0);
        assert_eq!(leading_i32("99999999999"), i32::MAX);
        assert_eq!(leading_i32("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_prompt_char_takes_first_character() {
        let mut console = Console::new("\nVee\n".as_bytes(), Vec::new());
        assert_eq!(console.prompt_char("orientation").unwrap(), 'V');
    }
}
