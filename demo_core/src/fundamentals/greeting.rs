//! Author profile and the interactive/parametric greeting demos.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::errors::DemoResult;

/// Course enrollment shown in the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub first_name: String,
    pub last_name: String,
    pub course_department: String,
    pub course_number: i32,
}

impl Enrollment {
    /// Collect the four fields prompt by prompt.
    pub fn prompt<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<Self> {
        Ok(Enrollment {
            first_name: console.prompt("Please enter a first name:")?,
            last_name: console.prompt("Please enter a last name:")?,
            course_department: console.prompt("Please enter a course department:")?,
            course_number: console.prompt("Please enter a course number:")?,
        })
    }

    /// `Hello <first> <last>! Welcome to <dept><number>!`
    pub fn greeting(&self) -> String {
        format!(
            "Hello {} {}! Welcome to {}{}!",
            self.first_name, self.last_name, self.course_department, self.course_number
        )
    }
}

/// `/get_info`
pub fn get_info<W: Write>(out: &mut W) -> DemoResult<()> {
    writeln!(out, "Firstname: Chattada")?;
    writeln!(out, "Lastname: Viriyaphap")?;
    writeln!(out, "BlazerID: chattada")?;
    writeln!(out, "Initials: CV")?;
    writeln!(out, "Languages: MatLab, C/C++, Python")?;
    writeln!(out, "Goals (Class): To be proficient in C language (and get an A!)")?;
    writeln!(out, "Goals (Professional): Become an airline pilot")?;
    writeln!(out, "Graduation: Spring 2024")?;
    writeln!(out, "Computer Model: Dell Latitude 5510")?;
    writeln!(out, "Computer CPU: i5-10210U @1.60 Ghz")?;
    writeln!(out, "Computer Memory: 8 Gb (7.64 Gb Usable)")?;
    Ok(())
}

/// `/interactive_01`: prompts spell out the expected lengths.
pub fn interactive_01<R: BufRead, W: Write>(console: &mut Console<R, W>) -> DemoResult<()> {
    let enrollment = Enrollment {
        first_name: console.prompt("Please enter your first name (no more than 9 characters):")?,
        last_name: console.prompt("Please enter your last name (no more than 9 characters):")?,
        course_department: console.prompt("Please enter a course department (no more than 2 characters):")?,
        course_number: console.prompt("Please enter a course number:")?,
    };
    writeln!(console, "{}", enrollment.greeting())?;
    Ok(())
}

/// `/parametric_01`
pub fn parametric_01<W: Write>(out: &mut W, enrollment: &Enrollment) -> DemoResult<()> {
    writeln!(out, "{}", enrollment.greeting())?;
    Ok(())
}
