//! # Loops
//!
//! `for`/`while` demos, the spending simulations and the guessing game.
//! Randomness comes from a caller-supplied [`rand::Rng`] so tests can seed it.
//!
//! ```rust
//! use demo_core::fundamentals::loops::for_loops_03;
//!
//! let mut out = Vec::new();
//! assert_eq!(for_loops_03(&mut out, 0, 2, 10).unwrap(), 6);
//! assert_eq!(for_loops_03(&mut out, 10, 1, 0).unwrap(), 0);
//! ```

use std::f64::consts::PI;
use std::io::{BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::console::Console;
use crate::constants::RAND_MAX;
use crate::errors::{DemoError, DemoResult};

const RULE: &str = "======================================";

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> DemoResult<i32> {
    if min > max {
        return Err(DemoError::invalid_input(
            "max",
            max.to_string(),
            format!("Maximum must not be less than minimum {}", min),
        ));
    }
    Ok(rng.random_range(min..=max))
}

/// `rand()`-style draw in `[0, RAND_MAX]`.
fn draw<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(0..=RAND_MAX)
}

/// `/for_loops_01`: ascending, descending, fractional and empty loops.
pub fn for_loops_01<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "index      value")?;
    writeln!(out, "{}", RULE)?;
    for index in 0..=9 {
        writeln!(out, "{}          {}", index, 2 * index)?;
    }
    writeln!(out, "{}\n", RULE)?;

    writeln!(out, "index      value")?;
    writeln!(out, "{}", RULE)?;
    for index in (0..=9).rev() {
        writeln!(out, "{}          {}", index, 2 * index)?;
    }
    writeln!(out, "{}\n", RULE)?;

    // 0.0 to 2.0 in tenths, stepped by integer count
    writeln!(out, "current      value")?;
    writeln!(out, "{}", RULE)?;
    for step in 0..=20 {
        let current = f64::from(step) * 0.1;
        writeln!(out, "{:.2}          {:.2}", current, current.powi(2))?;
    }
    writeln!(out, "{}\n", RULE)?;

    let stop = 0;
    writeln!(out, "index      value")?;
    writeln!(out, "{}", RULE)?;
    for index in 0..stop {
        writeln!(out, "{}          {}", index, 2 * index)?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// `/for_loops_02`: nested loops and a comma-separated product table.
pub fn for_loops_02<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "index          value")?;
    writeln!(out, "{}", RULE)?;
    for outer in 1..=12 {
        for inner in 1..=10 {
            writeln!(out, "{}, {}          {}", outer, inner, outer * inner)?;
        }
    }
    writeln!(out, "{}\n", RULE)?;

    writeln!(out, "current          value")?;
    writeln!(out, "{}", RULE)?;
    for outer in 0..10 {
        let current_outer = f64::from(outer);
        for quarter in 0..8 {
            let current_inner = f64::from(quarter) * PI / 4.0;
            writeln!(
                out,
                "{:.4}, {:.4}          {:.4}",
                current_outer,
                current_inner,
                current_outer * current_inner
            )?;
        }
    }
    writeln!(out, "{}\n", RULE)?;

    for row in 1..=12 {
        let cells: Vec<String> = (1..=10).map(|column| (row * column).to_string()).collect();
        writeln!(out, "{}", cells.join(","))?;
    }
    Ok(())
}

/// `/for_loops_03`: walk `start` to `end` (inclusive) by `increment`.
///
/// Returns how many times the loop body ran. A zero increment, or one
/// pointing away from `end`, prints a warning and runs nothing.
pub fn for_loops_03<W: Write>(out: &mut W, start: i32, increment: i32, end: i32) -> DemoResult<usize> {
    if increment == 0 {
        writeln!(out, "Warning: Increment must be non-zero (or you will get an infinite loop)!")?;
        return Ok(0);
    }
    if increment < 0 && end > start {
        writeln!(out, "Warning: Increment is negative but the end is greater than the start!")?;
        return Ok(0);
    }
    if increment > 0 && end < start {
        writeln!(out, "Warning: Increment is positive but the end is less than the start!")?;
        return Ok(0);
    }

    let mut count = 0;
    let mut index = i64::from(start);
    let (end, increment) = (i64::from(end), i64::from(increment));

    writeln!(out, "index      value")?;
    writeln!(out, "{}", RULE)?;
    while (increment > 0 && index <= end) || (increment < 0 && index >= end) {
        writeln!(out, "{}          {}", index, 2 * index)?;
        count += 1;
        index += increment;
    }
    writeln!(out, "{}", RULE)?;

    debug!(count, "for_loops_03 finished");
    Ok(count)
}

/// `/while_loops_01`: counters, raw random values and two spending runs.
///
/// The first run keeps buying until the balance goes negative; the second
/// stops before a purchase it cannot afford.
pub fn while_loops_01<W: Write, R: Rng + ?Sized>(out: &mut W, rng: &mut R, starting_balance: f64) -> DemoResult<()> {
    writeln!(out, "index      value")?;
    writeln!(out, "{}", RULE)?;
    let mut index = 0;
    while index <= 9 {
        writeln!(out, "{}          {}", index, 2 * index)?;
        index += 1;
    }
    writeln!(out, "{}\n", RULE)?;

    writeln!(out, "index      value")?;
    writeln!(out, "{}", RULE)?;
    let mut index = 0;
    while index <= 9 {
        writeln!(out, "{}          {}", index, draw(rng))?;
        index += 1;
    }
    writeln!(out, "{}\n", RULE)?;

    let mut balance = starting_balance;
    let mut count = 0;
    writeln!(out, "count      value            balance")?;
    writeln!(out, "{}", RULE)?;
    while balance > 0.0 {
        let purchase = f64::from(draw(rng)) / 100.0;
        balance -= purchase;
        count += 1;
        writeln!(out, "{}          {:.2}            {:.2}", count, purchase, balance)?;
    }
    writeln!(out, "{}\n", RULE)?;

    let mut balance = starting_balance;
    let mut count = 0;
    writeln!(out, "count      value            balance")?;
    writeln!(out, "{}", RULE)?;
    loop {
        let purchase = f64::from(draw(rng)) / 100.0;
        if purchase >= balance {
            break;
        }
        balance -= purchase;
        count += 1;
        writeln!(out, "{}          {:.2}            {:.2}", count, purchase, balance)?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// How a guessing game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Won { tries: u32 },
    Lost { chosen: i32 },
}

/// `/while_loops_02`: guess a number between two user-chosen bounds.
pub fn while_loops_02<R, W, G>(console: &mut Console<R, W>, rng: &mut G, attempts: u32) -> DemoResult<GuessOutcome>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(console, "Let's play a guessing game!  Pick two integers.")?;
    writeln!(console, "I'll pick one in between them.")?;
    writeln!(console, "I'll give you {} guesses to figure out my integer!", attempts)?;
    writeln!(console, "Let's go!!!\n")?;

    let first: i32 = console.prompt("Please enter the minimum integer value")?;
    let second = loop {
        let second: i32 = console.prompt("Please enter the maximum integer value")?;
        if second > first {
            break second;
        }
    };

    let chosen = rand_range(rng, first, second)?;
    debug!(first, second, "guessing game target drawn");

    for tries in 1..=attempts {
        writeln!(console, "Please guess the value that I have picked!")?;
        let guess: i32 = console.prompt(&format!("Try #{} of {}", tries, attempts))?;
        if guess == chosen {
            writeln!(console, "Congratulations! You guessed the correct number!")?;
            writeln!(console, "Wanna play again?")?;
            return Ok(GuessOutcome::Won { tries });
        } else if guess < chosen {
            writeln!(console, "Nope! Number is too low!")?;
        } else {
            writeln!(console, "Nope! Number is too high!")?;
        }
    }

    writeln!(
        console,
        "You did not guess correctly within the number of tries :( the correct number is {} ... Wanna play again?",
        chosen
    )?;
    Ok(GuessOutcome::Lost { chosen })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> DemoResult<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_rand_range_stays_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let value = rand_range(&mut rng, -3, 3).unwrap();
            assert!((-3..=3).contains(&value));
        }
        assert_eq!(rand_range(&mut rng, 5, 5).unwrap(), 5);
        assert!(rand_range(&mut rng, 6, 5).is_err());
    }

    #[test]
    fn test_for_loops_03_counts() {
        let mut out = Vec::new();
        assert_eq!(for_loops_03(&mut out, 0, 1, 9).unwrap(), 10);
        assert_eq!(for_loops_03(&mut out, 9, -3, 0).unwrap(), 4);
        assert_eq!(for_loops_03(&mut out, 5, 1, 5).unwrap(), 1);
    }

    #[test]
    fn test_for_loops_03_warnings() {
        let mut out = Vec::new();
        assert_eq!(for_loops_03(&mut out, 0, 0, 10).unwrap(), 0);
        assert_eq!(for_loops_03(&mut out, 0, -1, 10).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Warning: Increment must be non-zero"));
        assert!(text.contains("Warning: Increment is negative but the end is greater than the start!"));
        assert!(!text.contains("index      value"));
    }

    #[test]
    fn test_for_loops_01_fraction_table_reaches_two() {
        let text = render(for_loops_01);
        assert!(text.contains("2.00          4.00\n"));
        assert!(text.contains("9          18\n"));
    }

    #[test]
    fn test_for_loops_02_product_rows() {
        let text = render(for_loops_02);
        assert!(text.contains("12, 10          120\n"));
        assert!(text.contains("1,2,3,4,5,6,7,8,9,10\n"));
        assert!(text.contains("12,24,36,48,60,72,84,96,108,120\n"));
    }

    #[test]
    fn test_while_loops_01_second_run_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(42);
        let text = render(|out| while_loops_01(out, &mut rng, 1000.0));
        let last_run = text.rsplit("count      value            balance").next().unwrap();
        for line in last_run.lines().filter(|l| !l.is_empty() && !l.starts_with('=')) {
            let balance: f64 = line.split_whitespace().last().unwrap().parse().unwrap();
            assert!(balance >= 0.0, "negative balance in {:?}", line);
        }
    }

    #[test]
    fn test_guessing_game_lost_reveals_number() {
        let mut rng = StdRng::seed_from_u64(1);
        // max re-prompted once, then three wrong guesses out of range
        let mut console = Console::new("1 0 10 -5 -5 -5\n".as_bytes(), Vec::new());
        let outcome = while_loops_02(&mut console, &mut rng, 3).unwrap();
        let text = console.output_text();

        assert!(matches!(outcome, GuessOutcome::Lost { chosen } if (1..=10).contains(&chosen)));
        assert_eq!(text.matches("Please enter the maximum integer value").count(), 2);
        assert_eq!(text.matches("Nope! Number is too low!").count(), 3);
        assert!(text.contains("Try #3 of 3"));
    }

    #[test]
    fn test_guessing_game_win_on_narrow_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut console = Console::new("4 5 9 5 4\n".as_bytes(), Vec::new());
        let outcome = while_loops_02(&mut console, &mut rng, 3).unwrap();
        assert!(console.output_text().contains("Nope! Number is too high!"));
        match outcome {
            GuessOutcome::Won { tries } => assert!(tries == 2 || tries == 3),
            GuessOutcome::Lost { chosen } => panic!("lost with {} in range", chosen),
        }
    }

    #[test]
    fn test_guessing_game_input_closed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut console = Console::new("1 2\n".as_bytes(), Vec::new());
        let err = while_loops_02(&mut console, &mut rng, 3).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_CLOSED");
    }
}
