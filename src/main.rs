//! nsroute - Namespace routing for documentation site URLs.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod router;

use std::io::{Write, stdout};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::NsConfig;

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = NsConfig::load(&cli)?;
    debug!("config"; "loaded {} ({} mode, {} namespaces)",
        config.config_path.display(), config.router.mode, config.namespaces.len());
    debug!("config"; "location {}", cli.command.location().url);

    let mut out = stdout().lock();
    match &cli.command {
        Commands::Mount { location } => cli::mount::run_mount(&config, location, &mut out)?,
        Commands::Open {
            location,
            slot,
            value,
        } => cli::open::run_open(&config, location, *slot, value.as_deref(), &mut out)?,
        Commands::Extract {
            location,
            json,
            pretty,
        } => cli::extract::run_extract(&config, location, *json, *pretty, &mut out)?,
        Commands::Rewrite { location, input } => {
            cli::rewrite::run_rewrite(&config, location, input.as_deref(), &mut out)?
        }
    }
    out.flush()?;

    Ok(())
}
