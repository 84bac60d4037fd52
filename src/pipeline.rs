//! End-to-end report run: fetch, render, write
//!
//! Each stage runs once, in order, and the first error aborts the run. The
//! report file is written last, so a failed fetch never leaves a partial
//! report behind.

use crate::config::Config;
use crate::error::Result;
use crate::events::EventSink;
use crate::fetch::FetchClient;
use crate::report::ReportRenderer;
use crate::types::{Event, RunSummary};
use crate::writer::write_report;
use chrono::{Local, NaiveDateTime};
use tracing::info;

/// One configured report run
///
/// # Examples
///
/// ```no_run
/// use portable_report::{Config, ReportPipeline};
/// use portable_report::events::ConsoleSink;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = ReportPipeline::new(Config::default())?;
/// let summary = pipeline.run(&ConsoleSink).await?;
/// println!("{} users written to {}", summary.record_count, summary.path.display());
/// # Ok(())
/// # }
/// ```
pub struct ReportPipeline {
    config: Config,
}

impl ReportPipeline {
    /// Create a pipeline after validating `config`
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] if the configuration is invalid
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this pipeline runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run once, stamping the report with the current local time
    pub async fn run(&self, sink: &dyn EventSink) -> Result<RunSummary> {
        self.run_at(sink, Local::now().naive_local()).await
    }

    /// Run once with an explicit timestamp
    ///
    /// The same timestamp is used for the `Generated on:` line and the
    /// report filename.
    pub async fn run_at(
        &self,
        sink: &dyn EventSink,
        generated_at: NaiveDateTime,
    ) -> Result<RunSummary> {
        let client = FetchClient::new(&self.config.source)?;
        let records = client.fetch_all(sink).await?;

        let renderer = ReportRenderer::new(generated_at);
        let content = renderer.render(&records);

        let path = write_report(&content, &self.config.output.directory, &renderer.filename()).await?;
        sink.emit(&Event::ReportSaved { path: path.clone() });

        info!(path = %path.display(), records = records.len(), "Report run finished");

        Ok(RunSummary {
            path,
            record_count: records.len(),
            generated_at,
        })
    }
}
