//! Vehicle record with a nested engine record.

use std::io::{self, Write};
use std::mem::size_of_val;

use serde::{Deserialize, Serialize};

/// Engine sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engine {
    /// Layout code: I (inline), B (boxer), V, R (rotary), O (other)
    pub orientation: char,
    pub cylinders: i32,
    pub fuel: String,
}

/// A car as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub color: String,
    pub doors: i32,
    pub mileage: i32,
    pub engine: Engine,
}

impl Vehicle {
    /// Print field values, then where each field lives and how big the records are.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "===============================================================";
        writeln!(out, "Description                                 Value")?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "current_auto.make                           {}", self.make)?;
        writeln!(out, "current_auto.model                          {}", self.model)?;
        writeln!(out, "current_auto.color                          {}", self.color)?;
        writeln!(out, "current_auto.doors                          {}", self.doors)?;
        writeln!(out, "current_auto.mileage                        {}", self.mileage)?;
        writeln!(out, "current_auto.engine.cylinders               {}", self.engine.cylinders)?;
        writeln!(out, "current_auto.engine.orientation             {}", self.engine.orientation)?;
        writeln!(out, "current_auto.engine.fuel                    {}", self.engine.fuel)?;
        writeln!(out)?;

        writeln!(out, "address of current_auto                     {:p}", self)?;
        writeln!(out, "address of current_auto.make                {:p}", &self.make)?;
        writeln!(out, "address of current_auto.model               {:p}", &self.model)?;
        writeln!(out, "address of current_auto.color               {:p}", &self.color)?;
        writeln!(out, "address of current_auto.doors               {:p}", &self.doors)?;
        writeln!(out, "address of current_auto.mileage             {:p}", &self.mileage)?;
        writeln!(out, "address of current_auto.engine              {:p}", &self.engine)?;
        writeln!(out, "address of current_auto.engine.orientation  {:p}", &self.engine.orientation)?;
        writeln!(out, "address of current_auto.engine.cylinders    {:p}", &self.engine.cylinders)?;
        writeln!(out, "address of current_auto.engine.fuel         {:p}", &self.engine.fuel)?;
        writeln!(out)?;

        let reference = self;
        writeln!(out, "value of current_auto_pointer               {:p}", reference)?;
        writeln!(out, "address of current_auto_pointer             {:p}", &reference)?;
        writeln!(out)?;

        writeln!(out, "size of current_auto                        {}", size_of_val(self))?;
        writeln!(out, "size of current_auto engine                 {}", size_of_val(&self.engine))?;
        writeln!(out, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_values_and_sizes() {
        let vehicle = Vehicle {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            color: "Blue".to_string(),
            doors: 4,
            mileage: 42_000,
            engine: Engine {
                orientation: 'I',
                cylinders: 4,
                fuel: "Gasoline".to_string(),
            },
        };

        let mut buf = Vec::new();
        vehicle.display(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("current_auto.make                           Honda\n"));
        assert!(text.contains("current_auto.engine.orientation             I\n"));
        assert!(text.contains("current_auto.mileage                        42000\n"));
        assert!(text.contains(&format!(
            "size of current_auto engine                 {}\n",
            std::mem::size_of::<Engine>()
        )));
        assert!(text.contains("address of current_auto.engine.fuel         0x"));
    }
}
