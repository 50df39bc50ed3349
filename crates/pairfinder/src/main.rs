mod cli;

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "pairfinder=warn";

/// Logs go to stderr so stdout carries only the result.
fn init_logging(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level: {directive}"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::parse();
    init_logging(args.log_level.as_deref())?;

    tracing::debug!("pairfinder v{} starting", pairfinder::VERSION);

    println!("{}", cli::run(&args, io::stdin().lock())?);
    Ok(())
}
