//! Report generation
//!
//! Serializes a scrape result to the semicolon-delimited report. Fields are
//! written as-is: a `;` inside a description or price is not escaped.

use crate::model::{ReportRow, ScrapeResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Fixed header line of the report
pub const REPORT_HEADER: &str = "Section;Description;Prices";

/// Field separator
pub const SEPARATOR: char = ';';

/// Writes the report for `result` to `output_path`
///
/// The file is created or truncated. It is closed when this function
/// returns, whether or not writing succeeded.
pub fn write_report(result: &ScrapeResult, output_path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_report_to(result, &mut writer)?;
    writer.flush()
}

/// Writes the report to any writer
pub fn write_report_to<W: Write>(result: &ScrapeResult, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", REPORT_HEADER)?;
    for row in result.rows() {
        writeln!(writer, "{}", format_row(&row))?;
    }
    Ok(())
}

/// Formats the report as a string
pub fn format_report(result: &ScrapeResult) -> String {
    let mut report = String::new();

    report.push_str(REPORT_HEADER);
    report.push('\n');
    for row in result.rows() {
        report.push_str(&format_row(&row));
        report.push('\n');
    }

    report
}

/// Formats one data line, without the line terminator
fn format_row(row: &ReportRow<'_>) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        row.department,
        row.description,
        row.price,
        sep = SEPARATOR
    )
}
