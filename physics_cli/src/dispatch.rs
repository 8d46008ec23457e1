//! Argument parsing and routine selection for the physics driver.
//!
//! Every invocation names a problem (`/1D`, `/2D`, `/beam`), a variant
//! (`/v1`..`/v4`) and, for v2-v4, an input mode: `/i` prompts for values,
//! `/p` takes them from the remaining arguments.

use std::io::{BufRead, Write};

use demo_core::console::leading_f64;
use demo_core::constants::{
    DEFAULT_LOAD_LB, DEFAULT_LOAD_POSITION_FT, DEFAULT_SPAN_FT, DEFAULT_THETA_RAD, DEFAULT_V_INIT_FTPS,
    DEFAULT_Y_INIT_FT, MAX_SAMPLES,
};
use demo_core::physics::report::{
    write_beam_summary, write_distributed_beam, write_free_fall_report, write_free_fall_summary,
    write_projectile_2d_report, write_projectile_2d_summary,
};
use demo_core::physics::{
    free_fall_final, free_fall_table, projectile_2d_final, projectile_2d_table, simply_supported_distributed,
    simply_supported_point_load,
};
use demo_core::{Console, DemoResult};
use tracing::debug;

/// Report variant selected by `/v1`..`/v4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Built-in inputs, full report
    V1,
    /// Full report
    V2,
    /// Summary only
    V3,
    /// Summary plus an `n`-row table
    V4,
}

/// Where a routine's inputs come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<T> {
    Defaults,
    Prompt,
    Given(T),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFallArgs {
    pub y_init: f64,
    pub n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileArgs {
    pub v_init: f64,
    pub theta: f64,
    pub n: usize,
}

/// `a` is the load position for a point load and unused for v4, where
/// `n` point loads are spread over the span instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamArgs {
    pub load: f64,
    pub span: f64,
    pub position: f64,
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    FreeFall(Variant, Input<FreeFallArgs>),
    Projectile(Variant, Input<ProjectileArgs>),
    Beam(Variant, Input<BeamArgs>),
}

/// Sample counts arrive as numbers; negatives and junk become 0 and are
/// rejected later.
fn count(text: &str) -> usize {
    let value = leading_f64(text);
    if value.is_finite() && value > 0.0 {
        value as usize
    } else {
        0
    }
}

fn parse_variant(flag: &str) -> Option<Variant> {
    match flag {
        "/v1" => Some(Variant::V1),
        "/v2" => Some(Variant::V2),
        "/v3" => Some(Variant::V3),
        "/v4" => Some(Variant::V4),
        _ => None,
    }
}

/// Map the full argument list (program name first) to a command.
///
/// Flags ignore case. The arity has to match the variant exactly; any
/// other shape prints the help screen.
pub fn parse(args: &[String]) -> Command {
    let lowered: Vec<String> = args.iter().map(|arg| arg.to_lowercase()).collect();
    let words: Vec<&str> = lowered.iter().map(String::as_str).collect();

    let (problem, variant, rest) = match words.as_slice() {
        [_, problem, flag, rest @ ..] => match parse_variant(flag) {
            Some(variant) => (*problem, variant, rest),
            None => return Command::Help,
        },
        _ => return Command::Help,
    };

    match (problem, variant, rest) {
        // free fall
        ("/1d", Variant::V1, []) => Command::FreeFall(variant, Input::Defaults),
        ("/1d", Variant::V2 | Variant::V3 | Variant::V4, ["/i"]) => Command::FreeFall(variant, Input::Prompt),
        ("/1d", Variant::V2 | Variant::V3, ["/p", y_init]) => Command::FreeFall(
            variant,
            Input::Given(FreeFallArgs {
                y_init: leading_f64(y_init),
                n: MAX_SAMPLES,
            }),
        ),
        ("/1d", Variant::V4, ["/p", y_init, n]) => Command::FreeFall(
            variant,
            Input::Given(FreeFallArgs {
                y_init: leading_f64(y_init),
                n: count(n),
            }),
        ),

        // 2D projectile
        ("/2d", Variant::V1, []) => Command::Projectile(variant, Input::Defaults),
        ("/2d", Variant::V2 | Variant::V3 | Variant::V4, ["/i"]) => Command::Projectile(variant, Input::Prompt),
        ("/2d", Variant::V2 | Variant::V3, ["/p", v_init, theta]) => Command::Projectile(
            variant,
            Input::Given(ProjectileArgs {
                v_init: leading_f64(v_init),
                theta: leading_f64(theta),
                n: MAX_SAMPLES,
            }),
        ),
        ("/2d", Variant::V4, ["/p", v_init, theta, n]) => Command::Projectile(
            variant,
            Input::Given(ProjectileArgs {
                v_init: leading_f64(v_init),
                theta: leading_f64(theta),
                n: count(n),
            }),
        ),

        // beam
        ("/beam", Variant::V1, []) => Command::Beam(variant, Input::Defaults),
        ("/beam", Variant::V2 | Variant::V3 | Variant::V4, ["/i"]) => Command::Beam(variant, Input::Prompt),
        ("/beam", Variant::V2 | Variant::V3, ["/p", load, span, position]) => Command::Beam(
            variant,
            Input::Given(BeamArgs {
                load: leading_f64(load),
                span: leading_f64(span),
                position: leading_f64(position),
                n: 0,
            }),
        ),
        ("/beam", Variant::V4, ["/p", load, span, n]) => Command::Beam(
            variant,
            Input::Given(BeamArgs {
                load: leading_f64(load),
                span: leading_f64(span),
                position: 0.0,
                n: count(n),
            }),
        ),

        _ => Command::Help,
    }
}

/// Usage and example invocations.
pub fn write_help<W: Write>(out: &mut W) -> DemoResult<()> {
    let rule = "==================================================";
    writeln!(out, "{}", rule)?;
    writeln!(out, "Desc: Physics Calculator")?;
    writeln!(out, "Vers: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "    /i - Interactive mode")?;
    writeln!(out, "        /1D - One dimensional motion")?;
    writeln!(out, "        /2D - Two dimensional motion")?;
    writeln!(out, "        /beam - Beam problem")?;
    writeln!(out, "    /p - Parametric mode")?;
    writeln!(out, "        /1D - One dimensional motion")?;
    writeln!(out, "        /2D - Two dimensional motion")?;
    writeln!(out, "        /beam - Beam problem")?;
    writeln!(out, "    /h - Help")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Examples:")?;
    for example in [
        "/1D /v1",
        "/1D /v2 /i",
        "/1D /v2 /p 100.0",
        "/1D /v3 /i",
        "/1D /v3 /p 100.0",
        "/1D /v4 /i",
        "/1D /v4 /p 100.0 11",
        "/2D /v1",
        "/2D /v2 /i",
        "/2D /v2 /p 100.0 0.785",
        "/2D /v3 /i",
        "/2D /v3 /p 100.0 0.785",
        "/2D /v4 /i",
        "/2D /v4 /p 100.0 0.785 11",
        "/beam /v1",
        "/beam /v2 /i",
        "/beam /v2 /p 100.0 10.0 6.0",
        "/beam /v3 /i",
        "/beam /v3 /p 100.0 10.0 6.0",
        "/beam /v4 /i",
        "/beam /v4 /p 100.0 10.0 11",
    ] {
        writeln!(out, "    physics_demo {}", example)?;
    }
    Ok(())
}

fn announce<T, R: BufRead, W: Write>(console: &mut Console<R, W>, input: &Input<T>) -> DemoResult<()> {
    match input {
        Input::Prompt => writeln!(console, "Using interactive mode")?,
        Input::Given(_) => writeln!(console, "Using parametric mode")?,
        Input::Defaults => {}
    }
    Ok(())
}

fn free_fall_args<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    variant: Variant,
    input: Input<FreeFallArgs>,
) -> DemoResult<FreeFallArgs> {
    match input {
        Input::Defaults => Ok(FreeFallArgs {
            y_init: DEFAULT_Y_INIT_FT,
            n: MAX_SAMPLES,
        }),
        Input::Given(args) => Ok(args),
        Input::Prompt => {
            let y_init = console.prompt("Please enter a height (ft):")?;
            let n = if variant == Variant::V4 {
                console.prompt("Please enter the number of points:")?
            } else {
                MAX_SAMPLES
            };
            Ok(FreeFallArgs { y_init, n })
        }
    }
}

fn projectile_args<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    variant: Variant,
    input: Input<ProjectileArgs>,
) -> DemoResult<ProjectileArgs> {
    match input {
        Input::Defaults => Ok(ProjectileArgs {
            v_init: DEFAULT_V_INIT_FTPS,
            theta: DEFAULT_THETA_RAD,
            n: MAX_SAMPLES,
        }),
        Input::Given(args) => Ok(args),
        Input::Prompt => {
            let v_init = console.prompt("Please enter a velocity (ft/s):")?;
            let theta = console.prompt("Please enter an angle (radians):")?;
            let n = if variant == Variant::V4 {
                console.prompt("Please enter the number of points:")?
            } else {
                MAX_SAMPLES
            };
            Ok(ProjectileArgs { v_init, theta, n })
        }
    }
}

fn beam_args<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    variant: Variant,
    input: Input<BeamArgs>,
) -> DemoResult<BeamArgs> {
    match input {
        Input::Defaults => Ok(BeamArgs {
            load: DEFAULT_LOAD_LB,
            span: DEFAULT_SPAN_FT,
            position: DEFAULT_LOAD_POSITION_FT,
            n: 0,
        }),
        Input::Given(args) => Ok(args),
        Input::Prompt if variant == Variant::V4 => {
            let load = console.prompt("Enter in the (distributed) load (lbs):")?;
            let span = console.prompt("Enter in the length of the beam (ft):")?;
            let n = console.prompt("Enter in the number of points:")?;
            Ok(BeamArgs {
                load,
                span,
                position: 0.0,
                n,
            })
        }
        Input::Prompt => {
            let load = console.prompt("Enter in the load (lbs):")?;
            let span = console.prompt("Enter in the length of the beam (ft):")?;
            let position = console.prompt("Enter in the location of the load (ft):")?;
            Ok(BeamArgs {
                load,
                span,
                position,
                n: 0,
            })
        }
    }
}

/// Startup echo of the raw argument list.
pub fn write_arguments<W: Write>(out: &mut W, args: &[String]) -> DemoResult<()> {
    for (index, arg) in args.iter().enumerate() {
        writeln!(out, "argv[ {} ]: {}", index, arg)?;
    }
    Ok(())
}

/// Run one command against the console.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, command: &Command) -> DemoResult<()> {
    debug!(?command, "dispatch");

    match *command {
        Command::Help => write_help(console)?,
        Command::FreeFall(variant, input) => {
            announce(console, &input)?;
            let args = free_fall_args(console, variant, input)?;
            match variant {
                Variant::V3 => write_free_fall_summary(console, &free_fall_final(args.y_init)?)?,
                _ => write_free_fall_report(console, &free_fall_table(args.y_init, args.n)?)?,
            }
        }
        Command::Projectile(variant, input) => {
            announce(console, &input)?;
            let args = projectile_args(console, variant, input)?;
            match variant {
                Variant::V3 => write_projectile_2d_summary(console, &projectile_2d_final(args.v_init, args.theta)?)?,
                _ => write_projectile_2d_report(console, &projectile_2d_table(args.v_init, args.theta, args.n)?)?,
            }
        }
        Command::Beam(variant, input) => {
            announce(console, &input)?;
            let args = beam_args(console, variant, input)?;
            match variant {
                Variant::V4 => write_distributed_beam(console, &simply_supported_distributed(args.load, args.span, args.n)?)?,
                _ => write_beam_summary(console, &simply_supported_point_load(args.load, args.span, args.position)?)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("physics_demo")
            .chain(line.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    fn run_with(line: &str, input: &str) -> (DemoResult<()>, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let result = run(&mut console, &parse(&args(line)));
        (result, console.output_text())
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse(&args("/1D /V1")), Command::FreeFall(Variant::V1, Input::Defaults));
        assert_eq!(parse(&args("/BEAM /v3 /I")), Command::Beam(Variant::V3, Input::Prompt));
    }

    #[test]
    fn test_parse_parametric_values() {
        assert_eq!(
            parse(&args("/2D /v4 /p 100.0 0.785 5")),
            Command::Projectile(
                Variant::V4,
                Input::Given(ProjectileArgs {
                    v_init: 100.0,
                    theta: 0.785,
                    n: 5
                })
            )
        );
        // unparseable numbers become zero, like atof
        assert_eq!(
            parse(&args("/1D /v2 /p tall")),
            Command::FreeFall(Variant::V2, Input::Given(FreeFallArgs { y_init: 0.0, n: MAX_SAMPLES }))
        );
        // a numeric prefix still counts
        assert_eq!(
            parse(&args("/1D /v4 /p 100ft 5pts")),
            Command::FreeFall(Variant::V4, Input::Given(FreeFallArgs { y_init: 100.0, n: 5 }))
        );
    }

    #[test]
    fn test_wrong_arity_is_help() {
        assert_eq!(parse(&args("")), Command::Help);
        assert_eq!(parse(&args("/h")), Command::Help);
        assert_eq!(parse(&args("/1D /v1 /i")), Command::Help);
        assert_eq!(parse(&args("/1D /v2 /p")), Command::Help);
        assert_eq!(parse(&args("/1D /v4 /p 100.0")), Command::Help);
        assert_eq!(parse(&args("/beam /v5 /i")), Command::Help);
    }

    #[test]
    fn test_help_lists_examples() {
        let (result, text) = run_with("/h", "");
        assert!(result.is_ok());
        assert!(text.contains("physics_demo /beam /v4 /p 100.0 10.0 11"));
    }

    #[test]
    fn test_beam_v3_parametric() {
        let (result, text) = run_with("/beam /v3 /p 100 10 6", "");
        assert!(result.is_ok());
        assert!(text.starts_with("Using parametric mode\n"));
        assert!(text.contains("R1 (lbs):                40.0000\n"), "{}", text);
        assert!(text.contains("R2 (lbs):                60.0000\n"), "{}", text);
    }

    #[test]
    fn test_free_fall_v4_interactive() {
        let (result, text) = run_with("/1D /v4 /i", "100\n3\n");
        assert!(result.is_ok());
        assert!(text.contains("Please enter the number of points:"));
        assert!(text.contains("\n2      "));
        assert!(!text.contains("\n3      "));
    }

    #[test]
    fn test_projectile_v4_interactive() {
        let (result, text) = run_with("/2D /v4 /i", "100\n0.785\n3\n");
        assert!(result.is_ok());
        assert!(text.starts_with("Using interactive mode\n"));
        assert!(text.contains("Please enter a velocity (ft/s):"));
        assert!(text.contains("Please enter the number of points:"));
        assert!(text.contains("index      time (s)"));
        assert!(text.contains("\n2         "));
        assert!(!text.contains("\n3         "));
    }

    #[test]
    fn test_beam_v4_interactive() {
        // loads of 100 at 0, 5 and 10 ft
        let (result, text) = run_with("/beam /v4 /i", "100\n10\n3\n");
        assert!(result.is_ok());
        assert!(text.contains("Enter in the (distributed) load (lbs):"));
        assert!(text.contains("Enter in the number of points:"));
        assert!(text.contains("W (lbs):                300.0000\n"), "{}", text);
        assert!(text.contains("R1 (lbs):               150.0000\n"), "{}", text);
        assert!(text.contains("R2 (lbs):               150.0000\n"), "{}", text);
    }

    #[test]
    fn test_argument_echo() {
        let mut out = Vec::new();
        write_arguments(&mut out, &args("/beam /v1")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "argv[ 0 ]: physics_demo\nargv[ 1 ]: /beam\nargv[ 2 ]: /v1\n"
        );
    }

    #[test]
    fn test_free_fall_v1_uses_defaults() {
        let (result, text) = run_with("/1D /v1", "");
        assert!(result.is_ok());
        assert!(!text.contains("Using"));
        assert!(text.contains("y_init (ft):            100.0000\n"));
        assert!(text.contains("\n10      "));
    }

    #[test]
    fn test_projectile_v3_summary_only() {
        let (result, text) = run_with("/2D /v3 /p 100.0 0.785", "");
        assert!(result.is_ok());
        assert!(text.contains("theta (radians):"));
        assert!(!text.contains("x_time (ft)"));
    }

    #[test]
    fn test_invalid_inputs_are_errors() {
        let (result, text) = run_with("/1D /v2 /p -5", "");
        assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
        assert!(!text.contains("Name"));

        let (result, _) = run_with("/beam /v4 /p 100 10 1", "");
        assert!(result.is_err());

        let (result, _) = run_with("/2D /v4 /p 100 0.785 12", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_distributed_beam_sums_reactions() {
        let (result, text) = run_with("/beam /v4 /p 100.0 10.0 11", "");
        assert!(result.is_ok());
        assert!(text.contains("W (lbs):                1100.0000\n"), "{}", text);
        assert!(text.contains("R1 (lbs):               550.0000\n"), "{}", text);
    }
}
