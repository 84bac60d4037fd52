//! Plain-text report rendering

use crate::types::UserRecord;
use chrono::NaiveDateTime;
use std::fmt::Display;

/// Width of the banner and header separator lines
const BANNER_WIDTH: usize = 60;

/// Width of the separator after each record
const RECORD_SEPARATOR_WIDTH: usize = 30;

/// Column width of field labels (`Username` plus one space)
const LABEL_WIDTH: usize = 9;

/// Report title, centered in the banner
pub const REPORT_TITLE: &str = "PORTABLE DOC REPORT";

/// Timestamp format of the `Generated on:` header line
pub const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used in report filenames
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Renders user records with a fixed generation timestamp
#[derive(Clone, Copy, Debug)]
pub struct ReportRenderer {
    generated_at: NaiveDateTime,
}

impl ReportRenderer {
    /// Create a renderer stamping reports with `generated_at`
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    /// Timestamp this renderer stamps on reports
    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Render `records` into report text
    pub fn render(&self, records: &[UserRecord]) -> String {
        render_report(records, self.generated_at)
    }

    /// `Report_<YYYYMMDD_HHMMSS>.txt` for this renderer's timestamp
    pub fn filename(&self) -> String {
        report_filename(self.generated_at)
    }
}

/// Render `records` into the plain-text report
///
/// Pure: the output depends only on the arguments. Lines are joined with
/// `\n` and there is no trailing newline.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use portable_report::report::render_report;
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 2)
///     .and_then(|d| d.and_hms_opt(3, 4, 5))
///     .unwrap();
/// let text = render_report(&[], at);
/// assert!(text.contains("Generated on: 2024-01-02 03:04:05"));
/// assert!(text.ends_with("Total Users: 0"));
/// ```
#[must_use]
pub fn render_report(records: &[UserRecord], generated_at: NaiveDateTime) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut lines = Vec::with_capacity(6 + records.len() * 7);

    lines.push(banner.clone());
    lines.push(format!("{REPORT_TITLE:^BANNER_WIDTH$}"));
    lines.push(banner);
    lines.push(format!(
        "Generated on: {}",
        generated_at.format(HEADER_TIMESTAMP_FORMAT)
    ));
    lines.push("-".repeat(BANNER_WIDTH));

    for record in records {
        lines.push(field_line("ID", optional(record.id.as_ref())));
        lines.push(field_line("Name", optional(record.name.as_ref())));
        lines.push(field_line("Username", optional(record.username.as_ref())));
        lines.push(field_line("Email", optional(record.email.as_ref())));
        lines.push(field_line("Company", &record.company_name));
        lines.push(field_line("City", &record.city));
        lines.push("-".repeat(RECORD_SEPARATOR_WIDTH));
    }

    lines.push(format!("Total Users: {}", records.len()));
    lines.join("\n")
}

/// `Report_<YYYYMMDD_HHMMSS>.txt`
#[must_use]
pub fn report_filename(generated_at: NaiveDateTime) -> String {
    format!(
        "Report_{}.txt",
        generated_at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

fn field_line(label: &str, value: impl Display) -> String {
    format!("{label:<LABEL_WIDTH$}: {value}")
}

// Absent values render as empty text.
fn optional<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
