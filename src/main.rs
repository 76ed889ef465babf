//! TeamSplit - split competition results into institution and team tables

use anyhow::{bail, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use teamsplit::commands::{run_once, run_prompt};
use teamsplit::config::Config;
use teamsplit::utils::fuzzy::Scorer;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Split this file and exit instead of prompting
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Similarity a name must exceed to join an existing group (0-99)
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Directory the result tables are written to
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Scoring function for name grouping
    #[arg(long, value_enum)]
    scorer: Option<Scorer>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging before the config is read so its warnings are seen;
    // stdout is reserved for the prompt
    let builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(if args.verbose { "debug" } else { "info" }))
        .with_writer(io::stderr)
        .with_filter_reloading();
    let filter_handle = builder.reload_handle();
    tracing::subscriber::set_global_default(builder.finish())?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(dir) = args.results_dir {
        config.results_dir = dir;
    }
    if let Some(scorer) = args.scorer {
        config.scorer = scorer;
    }

    if !args.verbose {
        let filter = EnvFilter::try_new(config.log_level.to_lowercase())
            .unwrap_or_else(|_| EnvFilter::new("info"));
        filter_handle.reload(filter)?;
    }

    config.validate()?;
    debug!("Using config: {:?}", config);
    info!("📊 TeamSplit v{} starting...", env!("CARGO_PKG_VERSION"));

    match args.input {
        Some(path) => {
            let mut stdout = io::stdout();
            if !run_once(&path, &config, &mut stdout)? {
                bail!("could not split {}", path.display());
            }
        }
        None => run_prompt(io::stdin().lock(), io::stdout(), &config)?,
    }

    Ok(())
}
