//! portable-report command line entry point

use clap::Parser;
use portable_report::events::ConsoleSink;
use portable_report::{Config, Error, ReportPipeline, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "portable-report", version)]
#[command(about = "Fetch user records and write a timestamped text report", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, env = "PORTABLE_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Endpoint returning a JSON array of users
    #[arg(long, env = "PORTABLE_REPORT_URL")]
    url: Option<String>,

    /// Directory the report is written to
    #[arg(short, long, env = "PORTABLE_REPORT_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", env = "PORTABLE_REPORT_TIMEOUT")]
    timeout: Option<u64>,

    /// Wait for Enter after a fatal error before exiting
    #[arg(long)]
    wait_on_error: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then command line flags
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(secs) = self.timeout {
            config.source.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("Starting Portable DOC Generator...");

    match run(&cli).await {
        Ok(()) => {
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "Report run failed");
            println!("{}", fatal_line(&e));
            if cli.wait_on_error {
                wait_for_enter();
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let pipeline = ReportPipeline::new(config)?;
    pipeline.run(&ConsoleSink).await?;
    Ok(())
}

/// The single console line printed when a run fails
fn fatal_line(error: &Error) -> String {
    format!("Fatal Error: {error}")
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "portable_report=debug"
    } else {
        "portable_report=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn wait_for_enter() {
    print!("Press Enter to exit...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
