//! # Calculators
//!
//! Two menu-driven calculators over `f64`. `calculator_v1` does one
//! operation; `calculator_v2` keeps a running result that becomes the left
//! operand of the next operation.
//!
//! ```rust
//! use demo_core::fundamentals::calculator::{Calculator, Operation};
//!
//! let mut calc = Calculator::new(2.0);
//! calc.apply(Operation::Add, 3.0);
//! calc.apply(Operation::Multiply, 4.0);
//! assert_eq!(calc.result(), 20.0);
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::console::Console;
use crate::errors::DemoResult;

const RULE: &str = "===================================";

pub fn add(first: f64, second: f64) -> f64 {
    first + second
}

pub fn subtract(first: f64, second: f64) -> f64 {
    first - second
}

pub fn multiply(first: f64, second: f64) -> f64 {
    first * second
}

/// `first / second`, or 0.0 when `second` is exactly zero.
pub fn divide(first: f64, second: f64) -> f64 {
    if second == 0.0 {
        0.0
    } else {
        first / second
    }
}

/// The four menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Menu number 1-4 to operation.
    pub fn from_option(option: i32) -> Option<Self> {
        match option {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            4 => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn evaluate(self, first: f64, second: f64) -> f64 {
        match self {
            Operation::Add => add(first, second),
            Operation::Subtract => subtract(first, second),
            Operation::Multiply => multiply(first, second),
            Operation::Divide => divide(first, second),
        }
    }
}

/// Running result for `calculator_v2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    accumulator: f64,
}

impl Calculator {
    pub fn new(first: f64) -> Self {
        Calculator { accumulator: first }
    }

    /// Apply `operation` with `second` on the right; the result is kept.
    pub fn apply(&mut self, operation: Operation, second: f64) -> f64 {
        self.accumulator = operation.evaluate(self.accumulator, second);
        self.accumulator
    }

    pub fn result(&self) -> f64 {
        self.accumulator
    }
}

fn write_operation<W: Write>(out: &mut W, operation: Operation, first: f64, second: f64, result: f64) -> DemoResult<()> {
    writeln!(out, "{:.4} {} {:.4} = {:.4}", first, operation.symbol(), second, result)?;
    Ok(())
}

/// Options menu shared by `calculator_v2` (and its `9 - help` option).
pub fn help_calculator<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Options:")?;
    writeln!(out, " 1 - addition")?;
    writeln!(out, " 2 - subtraction")?;
    writeln!(out, " 3 - multiplication")?;
    writeln!(out, " 4 - division")?;
    writeln!(out, " 9 - help")?;
    writeln!(out, " 0 - exit")?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/calculator_v1`: one operation on two values.
pub fn calculator_v1<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<f64> {
    writeln!(console, "Welcome to calculator_v1!")?;
    writeln!(console, "{}", RULE)?;
    writeln!(console, "Allows the user to enter two values")?;
    writeln!(console, "and an operation!")?;
    writeln!(console, "{}", RULE)?;
    writeln!(console, "Options:")?;
    writeln!(console, " 1 - addition")?;
    writeln!(console, " 2 - subtraction")?;
    writeln!(console, " 3 - multiplication")?;
    writeln!(console, " 4 - division")?;
    writeln!(console, "{}", RULE)?;

    let operation = loop {
        let option: i32 = console.prompt("Please enter an option (1-4)")?;
        match Operation::from_option(option) {
            Some(operation) => break operation,
            None => writeln!(console, "Warning: Invalid option!")?,
        }
    };

    let first: f64 = console.prompt("Please enter the first value:")?;
    let second = loop {
        let second: f64 = console.prompt("Please enter the second value:")?;
        if operation == Operation::Divide && second == 0.0 {
            writeln!(console, "Please enter a non-zero value!")?;
        } else {
            break second;
        }
    };

    let result = operation.evaluate(first, second);
    write_operation(console, operation, first, second, result)?;
    Ok(result)
}

/// `/calculator_v2`: chained operations until option 0.
///
/// The first pass reads two values; every later pass reads only the right
/// operand and reuses the previous result on the left.
pub fn calculator_v2<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<f64> {
    writeln!(console, "Welcome to calculator_v2!")?;
    writeln!(console, "{}", RULE)?;
    writeln!(console, "Allows the user to enter two values")?;
    writeln!(console, "and an operation!")?;
    help_calculator(console)?;

    let first: f64 = console.prompt("Please enter the first value:")?;
    let mut calculator = Calculator::new(first);

    loop {
        let mut second: f64 = console.prompt("Please enter the second value:")?;

        let operation = loop {
            let option: i32 = console.prompt("Please enter an option (1-4) or 9 - help or 0 - exit")?;
            if option == 0 {
                debug!(result = calculator.result(), "calculator_v2 exit");
                return Ok(calculator.result());
            }
            match Operation::from_option(option) {
                Some(operation) => break operation,
                None => help_calculator(console)?,
            }
        };

        while operation == Operation::Divide && second == 0.0 {
            second = console.prompt("Warning: Please enter a non-zero second value!")?;
        }

        let left = calculator.result();
        let result = calculator.apply(operation, second);
        write_operation(console, operation, left, second, result)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_is_zero() {
        assert_eq!(divide(5.0, 0.0), 0.0);
        assert_eq!(divide(-5.0, -0.0), 0.0);
        assert_eq!(divide(5.0, 2.0), 2.5);
    }

    #[test]
    fn test_calculator_is_left_fold() {
        let steps = [
            (Operation::Add, 3.0),
            (Operation::Subtract, 1.5),
            (Operation::Multiply, 4.0),
            (Operation::Divide, 2.0),
        ];
        let mut calc = Calculator::new(10.0);
        for (operation, value) in steps {
            calc.apply(operation, value);
        }
        let folded = steps.iter().fold(10.0, |acc, (op, value)| op.evaluate(acc, *value));
        assert_eq!(calc.result(), folded);
        assert_eq!(calc.result(), 23.0);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Operation::from_option(4), Some(Operation::Divide));
        assert_eq!(Operation::from_option(0), None);
        assert_eq!(Operation::from_option(9), None);
    }

    #[test]
    fn test_v1_reprompts_option_and_divisor() {
        let mut console = Console::new("7 4 9 0 3\n".as_bytes(), Vec::new());
        let result = calculator_v1(&mut console).unwrap();
        let text = console.output_text();
        assert_eq!(result, 3.0);
        assert!(text.contains("Warning: Invalid option!"));
        assert!(text.contains("Please enter a non-zero value!"));
        assert!(text.ends_with("9.0000 / 3.0000 = 3.0000\n"));
    }

    #[test]
    fn test_v2_chains_results() {
        // 2 + 3 = 5, then 5 * 4 = 20, then help, then exit
        let mut console = Console::new("2 3 1 4 3 1 9 0\n".as_bytes(), Vec::new());
        let result = calculator_v2(&mut console).unwrap();
        let text = console.output_text();
        assert_eq!(result, 20.0);
        assert!(text.contains("2.0000 + 3.0000 = 5.0000\n"));
        assert!(text.contains("5.0000 * 4.0000 = 20.0000\n"));
        // menu at start plus once for option 9
        assert_eq!(text.matches("Options:\n").count(), 2);
        assert_eq!(text.matches(" 0 - exit\n").count(), 2);
    }

    #[test]
    fn test_v2_zero_divisor_reprompted() {
        let mut console = Console::new("8 0 4 2 1 0\n".as_bytes(), Vec::new());
        let result = calculator_v2(&mut console).unwrap();
        assert_eq!(result, 4.0);
        assert!(console.output_text().contains("Warning: Please enter a non-zero second value!"));
    }
}
