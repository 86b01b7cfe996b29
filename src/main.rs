//! Storefront command line entry point

use std::io;

use anyhow::Context;

use storefront::{
    cli::{self, Cli},
    logging,
};

fn main() -> anyhow::Result<()> {
    // Load configuration from .env and CLI arguments
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    logging::init_subscriber(&cli.logging).context("failed to initialise logging")?;

    cli::run(&cli, io::stdout().lock()).context("storefront command failed")?;

    Ok(())
}
