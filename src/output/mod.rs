//! Output module for writing scrape reports
//!
//! The only output format is the semicolon-delimited product report. Despite
//! the conventional `.csv` file name, fields are separated by `;`.

mod report;

pub use report::{format_report, write_report, write_report_to, REPORT_HEADER, SEPARATOR};
