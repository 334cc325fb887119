// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hi::{io, DEFAULT_NAMES};

/// Greet names on standard output.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_BIN_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    /// names to greet instead of the defaults
    names: Vec<String>,

    /// log more to stderr; repeat for more detail
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = App::parse();
    init_logging(args.verbose)?;

    if args.names.is_empty() {
        info!("no names given, using defaults");
        io::run(&DEFAULT_NAMES)
    } else {
        io::run(&args.names)
    }
}

/// Installs a stderr subscriber. `RUST_LOG` applies unless `-v` is given.
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}
