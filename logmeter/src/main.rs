use anyhow::Context;
use clap::Parser;
use logmeter_core::ingest::{self, MalformedPolicy};
use logmeter_core::logging::init_logging;
use logmeter_core::monitor::{Monitor, MonitorConfig};
use logmeter_core::report::ConsoleSink;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "logmeter",
    version,
    about = "Streaming access-log monitor: per-window top sections and trailing-average alerting"
)]
struct Cli {
    /// CSV access log to read; stdin when omitted
    file: Option<PathBuf>,

    /// Reporting window length in seconds
    #[arg(long, default_value_t = 10)]
    segment_secs: u64,

    /// Alerting span in seconds (must cover at least one segment)
    #[arg(long, default_value_t = 120)]
    span_secs: u64,

    /// Alert when the average hits per segment over the span exceeds this
    #[arg(long, default_value_t = 100.0)]
    threshold: f64,

    /// How many sections to show per window report
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Log and skip malformed records instead of aborting
    #[arg(long)]
    skip_malformed: bool,
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("logmeter: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = MonitorConfig {
        segment_secs: cli.segment_secs,
        span_secs: cli.span_secs,
        threshold: cli.threshold,
        top_sections: cli.top,
    };

    let policy = if cli.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };

    let mut monitor = Monitor::new(&config, ConsoleSink).context("invalid configuration")?;

    info!(
        event = "monitor_start",
        segment_secs = cli.segment_secs,
        span_secs = cli.span_secs,
        threshold = cli.threshold,
    );

    match &cli.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            ingest::process(BufReader::new(file), &mut monitor, policy)?;
        }
        None => {
            let stdin = io::stdin();
            ingest::process(stdin.lock(), &mut monitor, policy)?;
        }
    }

    Ok(())
}
