//! Console tables for physics results.
//!
//! Column layout follows the course handouts: `Name / Value` summaries with
//! `%8.4f`-style numbers, then an indexed sample table where one applies.

use std::io::{self, Write};

use crate::physics::beam::{BeamReactions, DistributedLoadResult};
use crate::physics::projectile::{FreeFallFinal, FreeFallTable, Projectile2DFinal, Projectile2DTable};

const RULE_SHORT: &str = "==================================";
const RULE_BEAM: &str = "================================";
const RULE_1D_TABLE: &str = "================================================";
const RULE_2D: &str = "========================================================================================";
const RULE_BEAM_TABLE: &str = "===========================================================================";

/// Start/end summary of a free fall.
pub fn write_free_fall_summary<W: Write>(out: &mut W, result: &FreeFallFinal) -> io::Result<()> {
    writeln!(out, "Name                    Value")?;
    writeln!(out, "{}", RULE_SHORT)?;
    writeln!(out, "y_init (ft):            {:8.4}", result.y_init_ft)?;
    writeln!(out, "y_final (ft):           {:8.4}", result.y_final_ft)?;
    writeln!(out, "t_init (s):             {:8.4}", 0.0)?;
    writeln!(out, "t_final (s):            {:8.4}", result.t_final_s)?;
    writeln!(out, "v_y_init (ft/s):        {:8.4}", 0.0)?;
    writeln!(out, "v_y_final (ft/s):       {:8.4}", result.v_y_final_ftps)?;
    writeln!(out, "{}", RULE_SHORT)
}

/// Indexed free-fall samples.
pub fn write_free_fall_samples<W: Write>(out: &mut W, table: &FreeFallTable) -> io::Result<()> {
    writeln!(out, "Index   Time (s)     y_time (ft)   v_y_time (ft/s)")?;
    writeln!(out, "{}", RULE_1D_TABLE)?;
    for (index, sample) in table.samples.iter().enumerate() {
        writeln!(
            out,
            "{}      {:8.4}       {:8.4}       {:8.4}",
            index, sample.time_s, sample.height_ft, sample.velocity_ftps
        )?;
    }
    writeln!(out, "{}", RULE_1D_TABLE)
}

/// Summary followed by the sample table.
pub fn write_free_fall_report<W: Write>(out: &mut W, table: &FreeFallTable) -> io::Result<()> {
    write_free_fall_summary(out, &table.final_state())?;
    writeln!(out)?;
    write_free_fall_samples(out, table)
}

/// Launch and landing summary of a 2D projectile.
pub fn write_projectile_2d_summary<W: Write>(out: &mut W, result: &Projectile2DFinal) -> io::Result<()> {
    let launch = &result.launch;
    let landing = &result.landing;
    writeln!(out, "Name                        Value")?;
    writeln!(out, "{}", RULE_2D)?;
    writeln!(out, "t_init (s):               {:8.4}", 0.0)?;
    writeln!(out, "t_final (s):              {:8.4}", landing.time_s)?;
    writeln!(out, "theta (radians):          {:8.4}", launch.theta_rad)?;
    writeln!(out, "y_init (ft):              {:8.4}", 0.0)?;
    writeln!(out, "y_final (ft):             {:8.4}", landing.y_ft)?;
    writeln!(out, "v_y_init (ft/s):          {:8.4}", launch.v_y_init())?;
    writeln!(out, "v_y_final (ft/s):         {:8.4}", landing.v_y_ftps)?;
    writeln!(out, "x_init (ft):              {:8.4}", 0.0)?;
    writeln!(out, "x_final (ft):             {:8.4}", landing.x_ft)?;
    writeln!(out, "v_x_init (ft/s):          {:8.4}", launch.v_x())?;
    writeln!(out, "v_x_final (ft/s):         {:8.4}", landing.v_x_ftps)?;
    writeln!(out, "{}", RULE_2D)
}

/// Indexed 2D projectile samples.
pub fn write_projectile_2d_samples<W: Write>(out: &mut W, table: &Projectile2DTable) -> io::Result<()> {
    writeln!(
        out,
        "index      time (s)      x_time (ft)    v_x_time (ft/s)    y_time (ft)   v_y_time (ft/s)"
    )?;
    writeln!(out, "{}", RULE_2D)?;
    for (index, sample) in table.samples.iter().enumerate() {
        writeln!(
            out,
            "{}         {:8.4}        {:8.4}         {:8.4}         {:8.4}     {:8.4}",
            index, sample.time_s, sample.x_ft, sample.v_x_ftps, sample.y_ft, sample.v_y_ftps
        )?;
    }
    writeln!(out, "{}", RULE_2D)
}

/// Summary followed by the sample table.
pub fn write_projectile_2d_report<W: Write>(out: &mut W, table: &Projectile2DTable) -> io::Result<()> {
    write_projectile_2d_summary(out, &table.final_state())?;
    writeln!(out)?;
    write_projectile_2d_samples(out, table)
}

/// Point-load beam summary.
pub fn write_beam_summary<W: Write>(out: &mut W, result: &BeamReactions) -> io::Result<()> {
    writeln!(out, "Name                    Value")?;
    writeln!(out, "{}", RULE_BEAM)?;
    writeln!(out, "W (lbs):                {:8.4}", result.load_lb)?;
    writeln!(out, "L (ft):                 {:8.4}", result.span_ft)?;
    writeln!(out, "a (ft):                 {:8.4}", result.position_ft)?;
    writeln!(out, "R1 (lbs):               {:8.4}", result.r1_lb)?;
    writeln!(out, "R2 (lbs):               {:8.4}", result.r2_lb)?;
    writeln!(out, "{}", RULE_BEAM)
}

/// Per-point table for a distributed load, then the summed reactions.
pub fn write_distributed_beam<W: Write>(out: &mut W, result: &DistributedLoadResult) -> io::Result<()> {
    writeln!(
        out,
        "Index   W (lbs)         L (ft)         a (pts)      R1 (lbs)        R2 (lbs)"
    )?;
    writeln!(out, "{}", RULE_BEAM_TABLE)?;
    for (index, point) in result.points.iter().enumerate() {
        writeln!(
            out,
            "{}      {:8.4}       {:8.4}       {:8.4}       {:8.4}       {:8.4}",
            index, point.load_lb, point.span_ft, point.position_ft, point.r1_lb, point.r2_lb
        )?;
    }
    writeln!(out, "{}", RULE_BEAM_TABLE)?;
    writeln!(out)?;
    writeln!(out, "Name                    Value")?;
    writeln!(out, "{}", RULE_BEAM)?;
    writeln!(out, "W (lbs):                {:8.4}", result.total_load_lb)?;
    writeln!(out, "L (ft):                 {:8.4}", result.span_ft)?;
    writeln!(out, "R1 (lbs):               {:8.4}", result.r1_lb)?;
    writeln!(out, "R2 (lbs):               {:8.4}", result.r2_lb)?;
    writeln!(out, "{}", RULE_BEAM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{free_fall_table, simply_supported_distributed, simply_supported_point_load};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_beam_summary_layout() {
        let result = simply_supported_point_load(100.0, 10.0, 6.0).unwrap();
        let text = render(|out| write_beam_summary(out, &result));
        assert!(text.contains("R1 (lbs):                40.0000\n"), "{}", text);
        assert!(text.contains("R2 (lbs):                60.0000\n"), "{}", text);
    }

    #[test]
    fn test_free_fall_report_has_every_row() {
        let table = free_fall_table(100.0, 11).unwrap();
        let text = render(|out| write_free_fall_report(out, &table));
        assert!(text.contains("y_init (ft):            100.0000"));
        assert!(text.starts_with("Name                    Value\n"));
        assert!(text.contains("\n10      "));
        assert!(!text.contains("\n11      "));
    }

    #[test]
    fn test_distributed_totals_row() {
        let result = simply_supported_distributed(100.0, 10.0, 3).unwrap();
        let text = render(|out| write_distributed_beam(out, &result));
        assert!(text.contains("W (lbs):                300.0000"), "{}", text);
        assert!(text.contains("R1 (lbs):               150.0000"), "{}", text);
    }
}
