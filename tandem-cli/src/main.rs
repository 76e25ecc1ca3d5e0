//! Tandem queue simulator
//!
//! Runs a fixed number of independent replications of the two-stage tandem
//! queueing network and writes a per-replication report.
//!
//! # Usage
//!
//! ```bash
//! # Config file holds four numbers: mean interarrival, mean service 1,
//! # mean service 2, run length (all in minutes).
//! tandem tandem.in
//!
//! # Write the report to a file instead of stdout
//! tandem tandem.in --output tandem.out
//!
//! # Change the replication count or the random seed
//! tandem tandem.in --replications 5 --seed 1234
//! ```

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tandem_core::{
    init_logging_with_level, run_replications, Report, SeededUniform, SimConfig, StationId,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "tandem", about = "Two-stage tandem queueing network simulator")]
struct Cli {
    /// Path to the configuration file (four whitespace-separated numbers:
    /// mean interarrival, mean service 1, mean service 2, run length).
    config: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of independent replications to run.
    #[arg(short, long, default_value_t = 10)]
    replications: usize,

    /// Seed for the random stream shared by all replications.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Log level (trace, debug, info, warn, error). RUST_LOG overrides.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with_level(&cli.log_level);

    let config = SimConfig::from_path(&cli.config)
        .with_context(|| format!("reading configuration from {}", cli.config.display()))?;

    info!(?config, seed = cli.seed, replications = cli.replications, "starting run");

    let mut source = SeededUniform::new(cli.seed);
    let reports = run_replications(config, &mut source, cli.replications)?;

    let mut out: BufWriter<Box<dyn Write>> = BufWriter::new(match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    });

    write_heading(&mut out, &config)?;
    for report in &reports {
        write_report(&mut out, report)?;
    }
    out.flush()?;
    Ok(())
}

fn write_heading(out: &mut impl Write, config: &SimConfig) -> io::Result<()> {
    writeln!(out, "Tandem queueing system with fixed run length")?;
    writeln!(out)?;
    writeln!(
        out,
        "Mean interarrival time{:>11.3} minutes",
        config.mean_interarrival
    )?;
    writeln!(out, "Mean service time 1{:>16.3} minutes", config.mean_service1)?;
    writeln!(out, "Mean service time 2{:>16.3} minutes", config.mean_service2)?;
    writeln!(out, "Length of the simulation{:>9.3} minutes", config.run_length)?;
    writeln!(out)?;
    writeln!(out, "*********************************")
}

fn write_report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Average delay in queue 1{} minutes",
        measure(report.avg_delay(StationId::First), 11)
    )?;
    writeln!(
        out,
        "Average delay in queue 2{} minutes",
        measure(report.avg_delay(StationId::Second), 11)
    )?;
    writeln!(
        out,
        "Average number in queue 1{}",
        measure(report.avg_queue_length(StationId::First), 10)
    )?;
    writeln!(
        out,
        "Average number in queue 2{}",
        measure(report.avg_queue_length(StationId::Second), 10)
    )?;
    writeln!(
        out,
        "Server 1 utilization{}",
        measure(report.utilization(StationId::First), 15)
    )?;
    writeln!(
        out,
        "Server 2 utilization{}",
        measure(report.utilization(StationId::Second), 15)
    )?;
    writeln!(
        out,
        "Number of delays completed{:>7}",
        report.customers_delayed()
    )?;
    writeln!(out)?;
    writeln!(out, "*********************************")
}

/// Fixed-width measure column; a degenerate (NaN) value prints as
/// "undefined" rather than crashing or emitting NaN.
fn measure(value: f64, width: usize) -> String {
    if value.is_nan() {
        format!("{:>width$}", "undefined")
    } else {
        format!("{value:>width$.3}")
    }
}
