mod cli;
mod config;
mod error;
mod report;
mod workflow;

use anyhow::{Context, Result};
use clap::Parser;
use cli::CliArgs;
use config::KeygenConfig;
use std::io;
use tracing::{debug, info};
use workflow::KeygenRequest;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Missing config file means defaults
    let mut cfg = KeygenConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config file {}", args.config))?;
    args.apply_to(&mut cfg);

    let _log_guard = common::init_tracing(cfg.log_dir.as_deref(), &cfg.log_file, &cfg.log_level);
    debug!("Effective configuration: {:?}", cfg);

    let request = KeygenRequest::resolve(&cfg)?;
    let outcome = workflow::run(&request).context("Failed to generate key pair")?;

    if args.save_config {
        cfg.save(&args.config)
            .with_context(|| format!("Failed to save config file {}", args.config))?;
        info!("Configuration saved to {}", args.config);
    }

    let stdout = io::stdout();
    report::write_outcome(&mut stdout.lock(), &outcome, args.show)?;
    Ok(())
}
