//! # Geometric Cross-Section Record
//!
//! A shape tag, up to four named inputs and the section properties the
//! shape would produce. Only construction and display are implemented;
//! the per-shape property formulas are not, so area, perimeter, centroid
//! and second moments stay at zero.
//!
//! ```rust
//! use demo_core::records::cross_section::{CrossSection, SectionShape};
//!
//! let rectangle = CrossSection::with_inputs(
//!     SectionShape::FilledRectangle,
//!     &[("length", 1.0), ("width", 2.0)],
//! ).unwrap();
//! assert_eq!(rectangle.populated_inputs().count(), 2);
//! assert_eq!(rectangle.area, 0.0);
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::errors::{DemoError, DemoResult};

/// Number of name/value input slots in every record.
pub const INPUT_SLOTS: usize = 4;

/// Cross-section variants, numbered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectionShape {
    #[default]
    Unknown = 0,
    FilledRectangle = 1,
    HollowRectangle = 2,
    FilledCircle = 3,
    HollowCircle = 4,
    FilledRightTriangle = 5,
}

impl SectionShape {
    /// How many named inputs describe this shape.
    pub fn input_count(self) -> usize {
        match self {
            SectionShape::Unknown => 0,
            SectionShape::FilledCircle => 1,
            SectionShape::FilledRectangle | SectionShape::HollowCircle | SectionShape::FilledRightTriangle => 2,
            SectionShape::HollowRectangle => 4,
        }
    }

    /// snake_case name used in the display table.
    pub fn name(self) -> &'static str {
        match self {
            SectionShape::Unknown => "unknown",
            SectionShape::FilledRectangle => "filled_rectangle",
            SectionShape::HollowRectangle => "hollow_rectangle",
            SectionShape::FilledCircle => "filled_circle",
            SectionShape::HollowCircle => "hollow_circle",
            SectionShape::FilledRightTriangle => "filled_right_triangle",
        }
    }
}

/// One named input (e.g. `radius = 1.0`). Empty name and 0.0 mean unused.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionInput {
    pub name: String,
    pub value: f64,
}

impl SectionInput {
    pub fn is_populated(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Cross-section record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossSection {
    pub shape: SectionShape,
    pub inputs: [SectionInput; INPUT_SLOTS],
    pub area: f64,
    pub perimeter: f64,
    pub x_bar: f64,
    pub y_bar: f64,
    pub i_x: f64,
    pub i_y: f64,
}

impl CrossSection {
    /// Blank record: unknown shape, empty inputs, zero properties.
    pub fn empty() -> Self {
        CrossSection::default()
    }

    /// Record for `shape` with exactly `shape.input_count()` named inputs.
    pub fn with_inputs(shape: SectionShape, inputs: &[(&str, f64)]) -> DemoResult<Self> {
        if inputs.len() != shape.input_count() {
            return Err(DemoError::invalid_input(
                "inputs",
                inputs.len().to_string(),
                format!("{} takes {} inputs", shape.name(), shape.input_count()),
            ));
        }
        if let Some((name, _)) = inputs.iter().find(|(name, _)| name.is_empty()) {
            return Err(DemoError::invalid_input("inputs", *name, "Input names must not be empty"));
        }

        let mut section = CrossSection::empty();
        section.shape = shape;
        for (slot, (name, value)) in section.inputs.iter_mut().zip(inputs) {
            slot.name = (*name).to_string();
            slot.value = *value;
        }
        Ok(section)
    }

    /// Inputs that carry a name, in slot order.
    pub fn populated_inputs(&self) -> impl Iterator<Item = &SectionInput> {
        self.inputs.iter().filter(|input| input.is_populated())
    }

    /// Print the shape, its inputs and its (uncomputed) properties.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "===============================================================";
        writeln!(out, "Description                                     Value")?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "Cross_Section_Name                              {}", self.shape.name())?;
        for input in self.inputs.iter().take(self.shape.input_count()) {
            writeln!(out, "{:<48}{:.4}", input.name, input.value)?;
        }
        writeln!(out, "Cross_Section Enum                              {}", self.shape as i32)?;
        writeln!(out, "Perimeter                                       {:.4}", self.perimeter)?;
        writeln!(out, "Area                                            {:.4}", self.area)?;
        writeln!(out, "I_x                                             {:.4}", self.i_x)?;
        writeln!(out, "I_y                                             {:.4}", self.i_y)?;
        writeln!(out, "x_bar                                           {:.4}", self.x_bar)?;
        writeln!(out, "y_bar                                           {:.4}", self.y_bar)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_zeroed() {
        let section = CrossSection::empty();
        assert_eq!(section.shape, SectionShape::Unknown);
        assert_eq!(section.populated_inputs().count(), 0);
        assert!(section.inputs.iter().all(|i| i.name.is_empty() && i.value == 0.0));
    }

    #[test]
    fn test_input_count_enforced() {
        assert!(CrossSection::with_inputs(SectionShape::FilledCircle, &[("radius", 1.0)]).is_ok());
        assert!(CrossSection::with_inputs(SectionShape::FilledCircle, &[]).is_err());
        assert!(CrossSection::with_inputs(SectionShape::HollowRectangle, &[("a", 1.0), ("b", 2.0)]).is_err());
        assert!(CrossSection::with_inputs(SectionShape::HollowCircle, &[("outer", 2.0), ("", 1.0)]).is_err());
    }

    #[test]
    fn test_unused_slots_keep_sentinel() {
        let section = CrossSection::with_inputs(SectionShape::FilledRectangle, &[("length", 1.0), ("width", 2.0)]).unwrap();
        assert_eq!(section.inputs[1].name, "width");
        assert_eq!(section.inputs[2], SectionInput::default());
        assert_eq!(section.inputs[3], SectionInput::default());
    }

    #[test]
    fn test_display_circle() {
        let section = CrossSection::with_inputs(SectionShape::FilledCircle, &[("radius", 1.0)]).unwrap();
        let mut buf = Vec::new();
        section.display(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Cross_Section_Name                              filled_circle\n"));
        assert!(text.contains("radius                                          1.0000\n"));
        assert!(text.contains("Cross_Section Enum                              3\n"));
        assert!(text.contains("Area                                            0.0000\n"));
    }
}
