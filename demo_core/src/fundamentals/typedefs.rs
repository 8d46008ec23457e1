//! # Record Demos
//!
//! Build, display and persist the record types from [`crate::records`]:
//! a vehicle entered at the prompt, two fixed cross sections, user records
//! moved through comma-separated files, and a free-fall table collected
//! into one result value.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::console::{leading_i32, Console};
use crate::constants::MAX_SAMPLES;
use crate::errors::DemoResult;
use crate::physics::{free_fall_table, FreeFallTable};
use crate::records::cross_section::{CrossSection, SectionShape};
use crate::records::user::{export_record_file, import_record_file, RecordMode, UserProperties, UserStatus};
use crate::records::vehicle::{Engine, Vehicle};
use crate::settings::DemoSettings;

const USER_RULE: &str = "=============================================================";
const WIDE_RULE: &str = "===============================================================";
const TABLE_RULE: &str = "==============================================";

/// `/typedefs_01`: prompt for a vehicle and show its layout.
pub fn typedefs_01<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<Vehicle> {
    let make = console.prompt("Please enter a make:")?;
    let model = console.prompt("Please enter a model:")?;
    let color = console.prompt("Please enter a color:")?;
    let doors = console.prompt("Please enter the number of doors (zero or more):")?;
    let mileage = console.prompt("Please enter the mileage (zero or more):")?;
    let cylinders = console.prompt("Please enter the number of cylinders (zero or more):")?;
    let orientation = console.prompt_char("Please enter the orientation (I, B, V, R, O)")?;
    let fuel = console.prompt("Please enter the fuel:")?;

    let vehicle = Vehicle {
        make,
        model,
        color,
        doors,
        mileage,
        engine: Engine {
            orientation,
            cylinders,
            fuel,
        },
    };
    vehicle.display(console)?;
    Ok(vehicle)
}

/// `/typedefs_02`: a unit-radius circle and a 1 x 2 rectangle.
pub fn typedefs_02<W: Write>(out: &mut W) -> DemoResult<()> {
    let circle = CrossSection::with_inputs(SectionShape::FilledCircle, &[("radius", 1.0)])?;
    let rectangle = CrossSection::with_inputs(SectionShape::FilledRectangle, &[("length", 1.0), ("width", 2.0)])?;

    circle.display(out)?;
    rectangle.display(out)?;
    Ok(())
}

// =============================================================================
// typedefs_03: user records
// =============================================================================

/// Sub-command selected by the third argument of `/typedefs_03`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Help,
    GetInfoInteractive,
    GetUserPropertiesInteractive,
    GetUserPropertiesParametric(UserProperties),
    ImportUserPropertiesFile(PathBuf),
}

impl UserCommand {
    /// Pick the sub-command from the full argument list
    /// (`program /typedefs_03 <flag> ...`). Flags ignore case; anything
    /// unrecognized, or with the wrong number of arguments, is `Help`.
    pub fn parse(args: &[String]) -> Self {
        let flag = args.get(2).map(|s| s.to_lowercase());
        match (flag.as_deref(), args) {
            (Some("/get_info_interactive"), [_, _, _]) => UserCommand::GetInfoInteractive,
            (Some("/get_user_properties_interactive"), [_, _, _]) => UserCommand::GetUserPropertiesInteractive,
            (Some("/get_user_properties_parametric"), [_, _, _, id, first, last, status]) => {
                let code = leading_i32(status);
                UserCommand::GetUserPropertiesParametric(UserProperties::new(
                    id.as_str(),
                    first.as_str(),
                    last.as_str(),
                    UserStatus::from_code(code),
                ))
            }
            (Some("/import_user_properties_file"), [_, _, _, path]) => {
                UserCommand::ImportUserPropertiesFile(PathBuf::from(path))
            }
            _ => UserCommand::Help,
        }
    }
}

/// Usage lines for `/typedefs_03`.
pub fn help_typedefs_03<W: Write>(out: &mut W, program: &str, command: &str) -> DemoResult<()> {
    writeln!(out, "Usage:")?;
    writeln!(
        out,
        "    {} {} /h                                                       ... calls help",
        program, command
    )?;
    writeln!(
        out,
        "    {} {} /get_info_interactive                                    ... uses individual variables",
        program, command
    )?;
    writeln!(
        out,
        "    {} {} /get_user_properties_interactive                         ... uses a struct",
        program, command
    )?;
    writeln!(
        out,
        "    {} {} /get_user_properties_parametric chattada Chattada Viriyaphap 1   ... uses a struct",
        program, command
    )?;
    writeln!(
        out,
        "    {} {} /import_user_properties_file example_01.csv              ... uses a struct",
        program, command
    )?;
    Ok(())
}

/// Boxed listing of one user record.
pub fn display_user_properties<W: Write>(out: &mut W, record: &UserProperties) -> DemoResult<()> {
    writeln!(out, "{}", USER_RULE)?;
    writeln!(out, "user_id:                                {}", record.user_id)?;
    writeln!(out, "first_name:                             {}", record.first_name)?;
    writeln!(out, "last_name:                              {}", record.last_name)?;
    writeln!(out, "status:                                 {}", record.status.code())?;
    writeln!(out, "{}", USER_RULE)?;
    Ok(())
}

fn prompt_user<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<UserProperties> {
    let user_id: String = console.prompt("Please enter a user_id:")?;
    let first_name: String = console.prompt("Please enter a first_name:")?;
    let last_name: String = console.prompt("Please enter a last_name:")?;
    let code: i32 = console.prompt("Please enter the status (0 = unknown, 1 = active, 2 = inactive)")?;
    Ok(UserProperties::new(user_id, first_name, last_name, UserStatus::from_code(code)))
}

/// Read `source`, show it, mark it inactive, then write it to the modified
/// file and append it to the log.
pub fn import_and_retire<W: Write>(out: &mut W, source: &Path, settings: &DemoSettings) -> DemoResult<UserProperties> {
    let mut record = import_record_file(source)?;
    display_user_properties(out, &record)?;
    record.status = UserStatus::Inactive;

    export_record_file(Path::new(&settings.modified_record_file), RecordMode::Write, &record)?;
    export_record_file(Path::new(&settings.log_file), RecordMode::Append, &record)?;
    info!(user_id = %record.user_id, log = %settings.log_file, "record retired");
    Ok(record)
}

/// `/typedefs_03 <flag> ...`: user records on the console and on disk.
pub fn typedefs_03<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    args: &[String],
    settings: &DemoSettings,
) -> DemoResult<()> {
    writeln!(console, "argc: {}", args.len())?;
    for (index, arg) in args.iter().enumerate() {
        writeln!(console, "argv[ {} ] has the value {}.", index, arg)?;
    }
    for status in UserStatus::ALL {
        writeln!(console, "{:<10}{}", format!("{}:", status.label()), status.code())?;
    }

    let command = UserCommand::parse(args);
    debug!(?command, "typedefs_03");

    match command {
        UserCommand::Help => {
            let program = args.first().map(String::as_str).unwrap_or("fundamentals_demo");
            let flag = args.get(1).map(String::as_str).unwrap_or("/typedefs_03");
            help_typedefs_03(console, program, flag)?;
        }
        UserCommand::GetInfoInteractive => {
            let record = prompt_user(console)?;
            writeln!(console, "{}", WIDE_RULE)?;
            writeln!(console, "user_id:                                           {}", record.user_id)?;
            writeln!(console, "first_name:                                        {}", record.first_name)?;
            writeln!(console, "last_name:                                         {}", record.last_name)?;
            writeln!(console, "status:                                            {}", record.status.code())?;
            writeln!(console, "{}", WIDE_RULE)?;
        }
        UserCommand::GetUserPropertiesInteractive => {
            let record = prompt_user(console)?;
            display_user_properties(console, &record)?;
        }
        UserCommand::GetUserPropertiesParametric(record) => {
            display_user_properties(console, &record)?;
            export_record_file(Path::new(&settings.record_file), RecordMode::Write, &record)?;
        }
        UserCommand::ImportUserPropertiesFile(path) => {
            import_and_retire(console, &path, settings)?;
        }
    }
    Ok(())
}

// =============================================================================
// typedefs_04: projectile results record
// =============================================================================

/// `/typedefs_04`: prompt until `1 < n <= MAX_SAMPLES` and a positive
/// height, then list the free-fall samples.
pub fn typedefs_04<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<FreeFallTable> {
    writeln!(console, "Welcome to typedefs_04!")?;

    let n = loop {
        let message = format!(
            "Please enter the number of values (1 < n <= {}) you want to calculate.",
            MAX_SAMPLES
        );
        let n: i64 = console.prompt(&message)?;
        match usize::try_from(n) {
            Ok(n) if n > 1 && n <= MAX_SAMPLES => break n,
            _ => {}
        }
    };
    let y_init = loop {
        let y_init: f64 = console.prompt("Please enter a positive height.")?;
        if y_init.is_finite() && y_init > 0.0 {
            break y_init;
        }
    };

    let table = free_fall_table(y_init, n)?;

    writeln!(console, "Name                                    Values")?;
    writeln!(console, "{}", TABLE_RULE)?;
    writeln!(console, "y_init:                                 {:.4}", table.y_init_ft)?;
    writeln!(console, "n:                                      {}", table.samples.len())?;
    for (index, sample) in table.samples.iter().enumerate() {
        writeln!(console, "    time[ {} ]:                          {:.4}", index, sample.time_s)?;
        writeln!(console, "    y_time[ {} ]:                        {:.4}", index, sample.height_ft)?;
        writeln!(console, "    v_y_time[ {} ]:                      {:.4}", index, sample.velocity_ftps)?;
    }
    writeln!(console, "{}\n", TABLE_RULE)?;
    Ok(table)
}
