//! Output module for turning crawl results into a report
//!
//! This module handles:
//! - Grouping visit counts into an ordered report
//! - Rendering the report as console text

mod report;
mod text;

pub use report::{build_report, Report, ReportGroup};
pub use text::{format_report, write_report};
