use std::io;
use std::process::ExitCode;

use clap::Parser;
use rps_agent::{client::Client, config::AgentConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = AgentConfig::parse();
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();
    info!(strategy = ?config.strategy, "Starting agent");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match Client::new(config.strategy.build()).run(stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            info!(?summary, "Session over");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
