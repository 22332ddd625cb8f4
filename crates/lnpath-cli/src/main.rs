//! lnpath CLI: local route computation over an LND graph snapshot.
//!
//! Subcommands: init, route, summary.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lnpath_core::LnpathConfig;

/// lnpath: find Lightning routes without the daemon's pathfinder.
#[derive(Parser, Debug)]
#[command(name = "lnpath", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, global = true, default_value = "lnpath.toml")]
    config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
    /// Compute the cheapest route across a graph snapshot.
    Route(commands::route::RouteArgs),
    /// Summarize channel counts and capacity per node.
    Summary(commands::summary::SummaryArgs),
}

fn init_tracing(config: &LnpathConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout stays machine-readable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = LnpathConfig::load(&cli.config)?;
    init_tracing(&config, cli.log_level.as_deref());

    match &cli.command {
        Commands::Init(args) => commands::init::run(args, &cli.config),
        Commands::Route(args) => commands::route::run(args, &config),
        Commands::Summary(args) => commands::summary::run(args),
    }
}
