//! Text rendering of a [`VerifyReport`].

use crate::verify::VerifyReport;
use std::io;

const BANNER: &str =
    "======================================================================";
const RULE: &str =
    "----------------------------------------------------------------------";

/// Render the human-readable verification report.
///
/// One line per path, a summary line per category, and a final aggregate
/// `TOTAL: X/Y files present` line. Writes to the given sink so tests can
/// capture output without touching stdout.
pub fn render(report: &VerifyReport, out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "  PROJECT VERIFICATION")?;
    writeln!(out, "  base directory: {}", report.base_dir.display())?;
    writeln!(out, "{BANNER}")?;

    if !report.base_dir_exists {
        writeln!(out)?;
        writeln!(
            out,
            "warning: base directory does not exist; is this the right location?"
        )?;
    }

    for category in &report.categories {
        writeln!(out)?;
        writeln!(out, "{}", category.name)?;
        writeln!(out, "{RULE}")?;
        for check in &category.checks {
            if check.found {
                writeln!(out, "  [ok]      {}", check.path)?;
            } else {
                writeln!(out, "  [MISSING] {}", check.path)?;
            }
        }
        writeln!(
            out,
            "  -> {}/{} files present",
            category.found(),
            category.expected()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(
        out,
        "TOTAL: {}/{} files present",
        report.total_found, report.total_expected
    )?;
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;

    if report.is_complete() {
        writeln!(out, "Project complete: all files present.")?;
    } else {
        writeln!(out, "{} file(s) missing", report.missing())?;
    }
    writeln!(out)?;

    Ok(())
}
