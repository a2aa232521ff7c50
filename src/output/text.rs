//! Plain-text report rendering
//!
//! Produces the console report:
//!
//! ```text
//! Found total of 5 internal links.
//! ===================
//! All links with 2 inbound references:
//! example.com
//! example.com/about
//! ------------------------
//! All links with 1 inbound reference:
//! example.com/contact
//! ------------------------
//! ```

use crate::output::report::Report;
use std::fmt;
use std::io::{self, Write};

const HEADER_RULE: &str = "===================";
const GROUP_RULE: &str = "------------------------";

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found total of {} internal links.", self.total)?;
        writeln!(f, "{}", HEADER_RULE)?;

        for group in &self.groups {
            let plural = if group.count == 1 { "" } else { "s" };
            writeln!(
                f,
                "All links with {} inbound reference{}:",
                group.count, plural
            )?;
            for link in &group.links {
                writeln!(f, "{}", link)?;
            }
            writeln!(f, "{}", GROUP_RULE)?;
        }

        Ok(())
    }
}

/// Formats a report as plain text, one line per entry
pub fn format_report(report: &Report) -> String {
    report.to_string()
}

/// Writes the plain-text report to `writer`
///
/// # Arguments
///
/// * `report` - The report to render
/// * `writer` - Destination, typically stdout
pub fn write_report<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", report)?;
    writer.flush()
}
