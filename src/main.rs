use anyhow::{Context, Result};
use clap::Parser;
use email_builder::cli::{self, Cli};
use email_builder::{config, telemetry};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    telemetry::init(&config);

    cli::run(cli)
}
