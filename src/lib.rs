//! # portable-report
//!
//! One-shot batch tool that fetches a list of users from an HTTP JSON
//! endpoint and writes them to a timestamped plain-text report.
//!
//! The run is a straight pipeline, executed once:
//!
//! 1. [`fetch`] - single GET, status check, JSON array decode
//! 2. [`mapper`] - each element flattened into a [`UserRecord`]
//! 3. [`report`] - records rendered into the fixed text layout
//! 4. [`writer`] - text written to `Report_<YYYYMMDD_HHMMSS>.txt`
//!
//! ## Quick Start
//!
//! ```no_run
//! use portable_report::{Config, ReportPipeline};
//! use portable_report::events::ConsoleSink;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.output.directory = "reports".into();
//!
//!     let summary = ReportPipeline::new(config)?.run(&ConsoleSink).await?;
//!     println!("wrote {} users", summary.record_count);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Progress event sinks
pub mod events;
/// Upstream HTTP fetch
pub mod fetch;
/// JSON to record mapping
pub mod mapper;
/// Pipeline driver
pub mod pipeline;
/// Text report rendering
pub mod report;
/// Core types and events
pub mod types;
/// Report file output
pub mod writer;

// Re-export commonly used types
pub use config::{Config, OutputConfig, SourceConfig};
pub use error::{Error, Result};
pub use fetch::FetchClient;
pub use pipeline::ReportPipeline;
pub use report::{ReportRenderer, render_report, report_filename};
pub use types::{Event, NOT_AVAILABLE, RunSummary, UserId, UserRecord};
pub use writer::write_report;
