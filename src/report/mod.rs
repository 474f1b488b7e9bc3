//! Report writers: render experiment results for people or tools.
//!
//! The tester and the survey return plain values; everything textual
//! happens here, against any `std::io::Write` sink:
//!
//! ```text
//! HypothesisReport ─┬─ write_text() → one line per case + summary
//!                   └─ write_json() → pretty JSON (degrees as strings)
//! ```

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::hypothesis::{Case, HypothesisReport};
use crate::survey::HookProfile;
use crate::Result;

/// Write a report as text: a header, one line per retained case, and a
/// pass/fail summary.
pub fn write_text<C>(report: &HypothesisReport<C>, writer: &mut dyn Write) -> Result<()>
where
    C: Case + Display,
{
    writeln!(writer, "# {}", report.hypothesis)?;
    writeln!(writer, "# n < {}", report.max_n)?;
    writeln!(writer)?;

    for case in &report.cases {
        writeln!(writer, "{case}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", summary_line(report))?;
    Ok(())
}

/// Write only the failing cases, one per line. Writes nothing on success.
pub fn write_failures<C>(report: &HypothesisReport<C>, writer: &mut dyn Write) -> Result<()>
where
    C: Case + Display,
{
    for case in report.failures() {
        writeln!(writer, "{case}")?;
    }
    Ok(())
}

/// Write any serializable result as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a self-conjugate survey in the layout of the exploratory runs.
pub fn write_survey(n: u32, profiles: &[HookProfile], writer: &mut dyn Write) -> Result<()> {
    if profiles.is_empty() {
        writeln!(writer, "No self-conjugate partitions of {n}.")?;
        return Ok(());
    }

    let listed: Vec<String> = profiles.iter().map(|p| p.partition.to_string()).collect();
    writeln!(writer, "Self-conjugate partitions of {n}: {}", listed.join(", "))?;
    for profile in profiles {
        writeln!(writer)?;
        writeln!(writer, "partition:     {}", profile.partition)?;
        writeln!(writer, "hook lengths:  {}", format_rows(profile.hooks.rows()))?;
        writeln!(writer, "hook product:  {} = {}", profile.hook_product, profile.factorization)?;
        writeln!(writer, "degree:        {}", profile.degree)?;
    }
    Ok(())
}

fn summary_line<C: Case>(report: &HypothesisReport<C>) -> String {
    if report.is_success() {
        format!("PASS: {} cases checked, no failures", report.checked)
    } else {
        format!("FAIL: {} of {} cases did not pass", report.failed, report.checked)
    }
}

fn format_rows(rows: &[Vec<u32>]) -> String {
    let inner: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u32::to_string).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    format!("[{}]", inner.join(", "))
}
