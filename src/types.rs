//! Core types for portable-report

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Placeholder used when nested data (`company.name`, `address.city`) is absent
pub const NOT_AVAILABLE: &str = "N/A";

/// Upstream `id`, kept as sent
///
/// Numbers keep their exact JSON value (integers wider than `i64`, floats);
/// anything else is carried as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// JSON number
    Number(serde_json::Number),
    /// Non-numeric id in its text form
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// One user, flattened from the upstream JSON object
///
/// Top-level fields are optional because upstream data is accepted as-is:
/// a missing `id` or `email` is carried through as `None` rather than
/// rejecting the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Upstream id
    pub id: Option<UserId>,
    /// Full name
    pub name: Option<String>,
    /// Login handle
    pub username: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// `company.name`, or [`NOT_AVAILABLE`]
    pub company_name: String,
    /// `address.city`, or [`NOT_AVAILABLE`]
    pub city: String,
}

/// Progress event emitted while the pipeline runs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Request is about to be sent
    FetchStarted {
        /// Endpoint URL
        url: String,
    },

    /// Body decoded and every element mapped
    FetchCompleted {
        /// Number of records mapped
        count: usize,
    },

    /// Report file written
    ReportSaved {
        /// Absolute path of the written file
        path: PathBuf,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FetchStarted { url } => write!(f, "Fetching data from {url}..."),
            Event::FetchCompleted { count } => {
                write!(f, "Successfully fetched {count} records.")
            }
            Event::ReportSaved { path } => write!(f, "Report saved to: {}", path.display()),
        }
    }
}

/// Outcome of a successful run
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Absolute path of the report file
    pub path: PathBuf,
    /// Number of user records in the report
    pub record_count: usize,
    /// Timestamp printed in the header and used in the filename
    pub generated_at: NaiveDateTime,
}
