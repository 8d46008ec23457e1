//! Argument parsing and routine selection for the fundamentals driver.

use std::io::{BufRead, Write};

use demo_core::console::leading_i32;
use demo_core::fundamentals::{arithmetic, calculator, greeting, loops, typedefs};
use demo_core::fundamentals::greeting::Enrollment;
use demo_core::{Console, DemoResult, DemoSettings};
use rand::Rng;
use tracing::debug;

/// One routine per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    GetInfo,
    Figure2_1,
    ArithmeticOperators,
    IntegerDivision,
    IntegerRemainder,
    FormattingIntegers,
    FormattingDoubles,
    TypeCasts,
    Interactive01,
    Parametric01Prompt,
    Parametric01(Enrollment),
    ForLoops01,
    ForLoops02,
    ForLoops03Prompt,
    ForLoops03 { start: i32, increment: i32, end: i32 },
    WhileLoops01,
    WhileLoops02,
    CalculatorV1,
    CalculatorV2,
    Typedefs01,
    Typedefs02,
    /// Carries the whole argument list for its own sub-dispatch
    Typedefs03(Vec<String>),
    Typedefs04,
}

/// Map the full argument list (program name first) to a command.
///
/// The flag is compared case-insensitively. `/parametric_01` and
/// `/for_loops_03` pick their mode from the argument count; every other
/// flag ignores trailing arguments.
pub fn parse(args: &[String]) -> Command {
    let flag = args.get(1).map(|arg| arg.to_lowercase());

    match (flag.as_deref(), args) {
        (None | Some("/h" | "/?"), _) => Command::Help,
        (Some("/get_info"), _) => Command::GetInfo,
        (Some("/figure_2_1"), _) => Command::Figure2_1,
        (Some("/arithmetic_operators"), _) => Command::ArithmeticOperators,
        (Some("/integer_division"), _) => Command::IntegerDivision,
        (Some("/integer_remainder"), _) => Command::IntegerRemainder,
        (Some("/formatting_integers"), _) => Command::FormattingIntegers,
        (Some("/formatting_doubles"), _) => Command::FormattingDoubles,
        (Some("/type_casts"), _) => Command::TypeCasts,
        (Some("/interactive_01"), _) => Command::Interactive01,
        (Some("/parametric_01"), [_, _, first, last, department, number]) => Command::Parametric01(Enrollment {
            first_name: first.clone(),
            last_name: last.clone(),
            course_department: department.clone(),
            course_number: leading_i32(number),
        }),
        (Some("/parametric_01"), [_, _]) => Command::Parametric01Prompt,
        (Some("/for_loops_01"), _) => Command::ForLoops01,
        (Some("/for_loops_02"), _) => Command::ForLoops02,
        (Some("/for_loops_03"), [_, _]) => Command::ForLoops03Prompt,
        (Some("/for_loops_03"), [_, _, start, increment, end]) => Command::ForLoops03 {
            start: leading_i32(start),
            increment: leading_i32(increment),
            end: leading_i32(end),
        },
        (Some("/while_loops_01"), _) => Command::WhileLoops01,
        (Some("/while_loops_02"), _) => Command::WhileLoops02,
        (Some("/calculator_v1"), _) => Command::CalculatorV1,
        (Some("/calculator_v2"), _) => Command::CalculatorV2,
        (Some("/typedefs_01"), _) => Command::Typedefs01,
        (Some("/typedefs_02"), _) => Command::Typedefs02,
        (Some("/typedefs_03"), _) => Command::Typedefs03(args.to_vec()),
        (Some("/typedefs_04"), _) => Command::Typedefs04,
        _ => Command::Help,
    }
}

/// Usage screen.
pub fn write_help<W: Write>(out: &mut W) -> DemoResult<()> {
    let usage = [
        ("/h", "calls help"),
        ("/get_info", "calls get_info"),
        ("/Figure_2_1", "calls Figure_2_1"),
        ("/arithmetic_operators", "calls arithmetic_operators"),
        ("/integer_division", "calls integer_division"),
        ("/integer_remainder", "calls integer_remainder"),
        ("/formatting_integers", "calls formatting_integers"),
        ("/formatting_doubles", "calls formatting_doubles"),
        ("/type_casts", "calls type_casts"),
        ("/interactive_01", "calls interactive_01"),
        ("/parametric_01", "calls parametric_01"),
        ("/parametric_01 Chattada Viriyaphap EE 233", "calls parametric_01 using cmd line args"),
        ("/for_loops_01", "calls for_loops_01"),
        ("/for_loops_02", "calls for_loops_02"),
        ("/for_loops_03", "calls for_loops_03"),
        ("/for_loops_03 0 1 9", "calls for_loops_03 using cmd line args"),
        ("/while_loops_01", "calls while_loops_01"),
        ("/while_loops_02", "calls while_loops_02"),
        ("/calculator_v1", "calls calculator_v1"),
        ("/calculator_v2", "calls calculator_v2"),
        ("/typedefs_01", "calls typedefs_01"),
        ("/typedefs_02", "calls typedefs_02"),
        ("/typedefs_03", "calls typedefs_03"),
        ("/typedefs_04", "calls typedefs_04"),
    ];

    writeln!(out, "Usage:")?;
    for (invocation, action) in usage {
        writeln!(out, "    fundamentals_demo {:<28} ... {}", invocation, action)?;
    }
    Ok(())
}

/// Startup echo of the raw argument list.
pub fn write_arguments<W: Write>(out: &mut W, args: &[String]) -> DemoResult<()> {
    writeln!(out, "argc: {}", args.len())?;
    for (index, arg) in args.iter().enumerate() {
        writeln!(out, "argv[ {} ] has the value of {}", index, arg)?;
    }
    Ok(())
}

fn report_loop_count<W: Write>(out: &mut W, count: usize) -> DemoResult<()> {
    writeln!(out, "Congratulations! Your loop ran {} times!", count)?;
    Ok(())
}

/// Run one command against the console.
pub fn run<R, W, G>(console: &mut Console<R, W>, command: &Command, settings: &DemoSettings, rng: &mut G) -> DemoResult<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    debug!(?command, "dispatch");

    match command {
        Command::Help => write_help(console)?,
        Command::GetInfo => greeting::get_info(console)?,
        Command::Figure2_1 => arithmetic::figure_2_1(console)?,
        Command::ArithmeticOperators => arithmetic::arithmetic_operators(console)?,
        Command::IntegerDivision => arithmetic::integer_division(console)?,
        Command::IntegerRemainder => arithmetic::integer_remainder(console)?,
        Command::FormattingIntegers => arithmetic::formatting_integers(console)?,
        Command::FormattingDoubles => arithmetic::formatting_doubles(console)?,
        Command::TypeCasts => arithmetic::type_casts(console)?,
        Command::Interactive01 => greeting::interactive_01(console)?,
        Command::Parametric01Prompt => {
            let enrollment = Enrollment::prompt(console)?;
            greeting::parametric_01(console, &enrollment)?;
        }
        Command::Parametric01(enrollment) => greeting::parametric_01(console, enrollment)?,
        Command::ForLoops01 => loops::for_loops_01(console)?,
        Command::ForLoops02 => loops::for_loops_02(console)?,
        Command::ForLoops03Prompt => {
            let start = console.prompt("Please enter a starting integer:")?;
            let increment = console.prompt("Please enter an increment integer:")?;
            let end = console.prompt("Please enter an ending integer:")?;
            let count = loops::for_loops_03(console, start, increment, end)?;
            report_loop_count(console, count)?;
        }
        Command::ForLoops03 { start, increment, end } => {
            let count = loops::for_loops_03(console, *start, *increment, *end)?;
            report_loop_count(console, count)?;
        }
        Command::WhileLoops01 => loops::while_loops_01(console, rng, settings.starting_balance)?,
        Command::WhileLoops02 => {
            loops::while_loops_02(console, rng, settings.guess_attempts)?;
        }
        Command::CalculatorV1 => {
            calculator::calculator_v1(console)?;
        }
        Command::CalculatorV2 => {
            calculator::calculator_v2(console)?;
        }
        Command::Typedefs01 => {
            typedefs::typedefs_01(console)?;
        }
        Command::Typedefs02 => typedefs::typedefs_02(console)?,
        Command::Typedefs03(args) => typedefs::typedefs_03(console, args, settings)?,
        Command::Typedefs04 => {
            typedefs::typedefs_04(console)?;
        }
    }
    Ok(())
}
