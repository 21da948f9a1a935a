pub mod check;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use netreach_common::config::{DEFAULT_CONCURRENCY, DEFAULT_FALLBACK_PORTS, DEFAULT_TIMEOUT_MS};

#[derive(Parser)]
#[command(name = "netreach")]
#[command(about = "Checks whether hosts and TCP ports are reachable.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Per-probe timeout in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Maximum number of probes running at once
    #[arg(long, global = true, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Write the completed batch to this path as `target,status,message` CSV
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check host reachability (HTTPS/HTTP HEAD, then TCP fallback ports)
    #[command(alias = "h")]
    Host {
        /// Hosts to check; read from --file or stdin when omitted
        targets: Vec<String>,
        /// Read targets from a file, one per line
        #[arg(long)]
        file: Option<PathBuf>,
        /// TCP ports tried, in order, after both HEAD probes fail
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FALLBACK_PORTS)]
        ports: Vec<u16>,
    },
    /// Check one TCP port per target, given as host:port
    #[command(alias = "t")]
    Tcp {
        /// host:port pairs to check; read from --file or stdin when omitted
        targets: Vec<String>,
        /// Read targets from a file, one per line
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
