//! # Arithmetic, Formatting and Conversions
//!
//! Fixed-output demos of operators, integer division/remainder semantics,
//! width/precision formatting and numeric casts.
//!
//! Integer `/` truncates toward zero and `%` takes the sign of the dividend:
//!
//! ```rust
//! assert_eq!(16 / -3, -5);
//! assert_eq!(-16 / 3, -5);
//! assert_eq!(-16 / -3, 5);
//! assert_eq!(-15 % 7, -1);
//! assert_eq!(15 % -7, 1);
//! ```

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::constants::{APPROXIMATE_PI, KMS_PER_MILE, LEIBNIZ_LAST_DENOMINATOR};
use crate::errors::DemoResult;

const RULE: &str = "========================================";

/// Operand pairs shown by `/integer_division`, including the negative cases.
pub const DIVISION_CASES: [(i32, i32); 16] = [
    (3, 15),
    (4, 15),
    (5, 15),
    (6, 15),
    (7, 15),
    (8, 15),
    (14, 15),
    (15, 15),
    (15, 3),
    (16, 3),
    (17, 3),
    (18, 3),
    (16, -3),
    (-16, 3),
    (-16, -3),
    (0, 4),
];

/// Operand pairs shown by `/integer_remainder`.
pub const REMAINDER_CASES: [(i32, i32); 13] = [
    (3, 15),
    (4, 5),
    (5, 5),
    (6, 5),
    (7, 5),
    (8, 5),
    (5, 3),
    (5, 4),
    (15, 5),
    (15, 6),
    (15, -7),
    (-15, 7),
    (-15, -7),
];

/// Miles to kilometers.
pub fn miles_to_kilometers(miles: f64) -> f64 {
    KMS_PER_MILE * miles
}

/// Pi from the Gregory-Leibniz series `4·(1 - 1/3 + 1/5 - ...)`.
///
/// Sums terms up to `1/LEIBNIZ_LAST_DENOMINATOR`, which is good to about
/// four decimal places.
pub fn approximate_pi() -> f64 {
    let sum: f64 = (1..=LEIBNIZ_LAST_DENOMINATOR)
        .step_by(2)
        .enumerate()
        .map(|(term, denominator)| {
            let sign = if term % 2 == 0 { 1.0 } else { -1.0 };
            sign / f64::from(denominator)
        })
        .sum();
    4.0 * sum
}

/// `/Figure_2_1`: convert a distance entered in miles.
pub fn figure_2_1<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<()> {
    let miles: f64 = console.prompt("Enter the distance in miles:")?;
    writeln!(console, "That equals {:.4} kilometers.", miles_to_kilometers(miles))?;
    Ok(())
}

/// `/arithmetic_operators`
pub fn arithmetic_operators<W: Write>(out: &mut W) -> DemoResult<()> {
    let a_int: i32 = 10;
    let b_int: i32 = 3;
    let a_double: f64 = 10.0;
    let b_double: f64 = 3.0;

    writeln!(out, "Fundamentals: Demonstration of Arithmetic Operators")?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "{} + {} = {}", a_int, b_int, a_int + b_int)?;
    writeln!(out, "{:.6} + {:.6} = {:.6}", a_double, b_double, a_double + b_double)?;
    writeln!(out, "{} + {:.6} = {:.6}", a_int, b_double, f64::from(a_int) + b_double)?;
    writeln!(out, "{:.6} + {} = {:.6}", a_double, b_int, a_double + f64::from(b_int))?;

    writeln!(out, "{} - {} = {}", a_int, b_int, a_int - b_int)?;
    writeln!(out, "{:.6} - {:.6} = {:.6}", a_double, b_double, a_double - b_double)?;
    writeln!(out, "{} - {:.6} = {:.6}", a_int, b_double, f64::from(a_int) - b_double)?;
    writeln!(out, "{:.6} - {} = {:.6}", a_double, b_int, a_double - f64::from(b_int))?;

    writeln!(out, "{} * {} = {}", a_int, b_int, a_int * b_int)?;
    writeln!(out, "{:.6} * {:.6} = {:.6}", a_double, b_double, a_double * b_double)?;
    writeln!(out, "{} * {:.6} = {:.6}", a_int, b_double, f64::from(a_int) * b_double)?;
    writeln!(out, "{:.6} * {} = {:.6}", a_double, b_int, a_double * f64::from(b_int))?;

    writeln!(out, "{} / {} = {}", a_int, b_int, a_int / b_int)?;
    writeln!(out, "{:.6} / {:.6} = {:.6}", a_double, b_double, a_double / b_double)?;
    writeln!(out, "{} / {:.6} = {:.6}", a_int, b_double, f64::from(a_int) / b_double)?;
    writeln!(out, "{:.6} / {} = {:.6}", a_double, b_int, a_double / f64::from(b_int))?;

    writeln!(out, "{} % {} = {}", a_int, b_int, a_int % b_int)?;

    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/integer_division`
pub fn integer_division<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "Fundamentals: Results of Integer Division")?;
    writeln!(out, "{}", RULE)?;
    for (a, b) in DIVISION_CASES {
        writeln!(out, "{} / {} = {}", a, b, a / b)?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/integer_remainder`
pub fn integer_remainder<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "Fundamentals: Results of Integer Remainder")?;
    writeln!(out, "{}", RULE)?;
    for (a, b) in REMAINDER_CASES {
        writeln!(out, "{} % {} = {}", a, b, a % b)?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/formatting_integers`: 234 and -234 at several field widths.
pub fn formatting_integers<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "Fundamentals: Examples of Formatting Type Integer Values")?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "{:4}", 234)?;
    writeln!(out, "{:5}", 234)?;
    writeln!(out, "{:6}", 234)?;
    writeln!(out, "{:1}", 234)?;

    writeln!(out, "{:4}", -234)?;
    writeln!(out, "{:5}", -234)?;
    writeln!(out, "{:6}", -234)?;
    writeln!(out, "{:2}", -234)?;

    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/formatting_doubles`: approximated pi at several widths and precisions.
pub fn formatting_doubles<W: Write>(out: &mut W) -> DemoResult<()> {
    let pi = *APPROXIMATE_PI;

    writeln!(out, "Fundamentals: Examples of Formatting Type Double Values")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:.6}", pi)?;
    writeln!(out, "{:16.6}", pi)?;
    writeln!(out, "{:16.8}", pi)?;
    writeln!(out, "{:16.12}", pi)?;
    writeln!(out, "{:5.2}", pi)?;
    writeln!(out, "{:3.2}", pi)?;
    writeln!(out, "{:5.3}", pi)?;
    writeln!(out, "{:4.2}", 0.1234)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/type_casts`: int/float and char/int conversions, with truncation.
pub fn type_casts<W: Write>(out: &mut W) -> DemoResult<()> {
    let int_a: i32 = 5;
    let int_b: i32 = 6;
    let double_a: f64 = 5.0;
    let double_b: f64 = 6.0;
    let char_a = 'G';

    writeln!(out, "Fundamentals: Examples of Use of Type Casts")?;
    writeln!(out, "{}", RULE)?;

    // int -> double
    writeln!(out, "{} --> {:.6}", 5, f64::from(5_i32))?;
    writeln!(out, "{} --> {:.6}", int_a, f64::from(int_a))?;
    writeln!(out, "{} + {} --> {:.6}", int_a, int_b, f64::from(int_a + int_b))?;

    // double -> int truncates toward zero
    writeln!(out, "{:.6} --> {}", double_a, double_a as i32)?;
    writeln!(out, "{:.6} + {:.6} --> {}", double_a, double_b, (double_a + double_b) as i32)?;

    let int_a = (double_a + double_b) as i32;
    writeln!(out, "int_a: {}", int_a)?;
    let int_b = (double_b / double_a) as i32;
    writeln!(out, "int_b: {}", int_b)?;
    let int_b = (5.0_f64 / 3.0) as i32;
    writeln!(out, "int_b: {}", int_b)?;
    writeln!(out, "1.9999 --> {}", 1.9999_f64 as i32)?;

    // char <-> code point
    writeln!(out, "{} --> {}", char_a, u32::from(char_a))?;
    writeln!(out, "{} --> {}", 97, char::from(97_u8))?;

    writeln!(out, "{}", RULE)?;
    Ok(())
}
