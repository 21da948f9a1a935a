mod commands;
mod export;
mod terminal;

use commands::{CommandLine, Commands, check};
use netreach_common::config::{Config, Mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    terminal::logging::init();

    match command_line.command {
        Commands::Host {
            targets,
            file,
            ports,
        } => {
            let mut cfg = Config::new(Mode::Host);
            cfg.timeout_ms = command_line.timeout;
            cfg.concurrency = command_line.concurrency;
            cfg.fallback_ports = ports;

            terminal::print::header("host reachability check");
            check::check(targets, file, command_line.csv, cfg).await
        }
        Commands::Tcp { targets, file } => {
            let mut cfg = Config::new(Mode::TcpPort);
            cfg.timeout_ms = command_line.timeout;
            cfg.concurrency = command_line.concurrency;

            terminal::print::header("tcp port check");
            check::check(targets, file, command_line.csv, cfg).await
        }
    }
}
