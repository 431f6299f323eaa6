//! Command-line arguments for the quote server.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the application config file.
    #[clap(long, default_value = "plugin.toml")]
    pub config: PathBuf,

    /// Address to bind the HTTP listener to.
    #[clap(long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Listening port. Overrides the port from the config file.
    #[clap(long)]
    pub port: Option<u16>,
}
