use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::strategy::StrategyKind;

/// Reference rock-paper-scissors bot. Reads judge commands on stdin and
/// answers on stdout; logs go to stderr.
#[derive(Parser, Debug, Clone)]
#[command(name = "rps-agent", version)]
pub struct AgentConfig {
    /// Move selection policy
    #[arg(short, long, value_enum, env = "AGENT_STRATEGY", default_value_t = StrategyKind::Rock)]
    pub strategy: StrategyKind,

    /// Log filter directives, e.g. `debug` or `rps_agent=trace`
    #[arg(long = "log", env = "AGENT_LOG", default_value = "warn", value_parser = parse_log_filter)]
    pub log_filter: String,
}

fn parse_log_filter(directives: &str) -> Result<String, String> {
    EnvFilter::try_new(directives)
        .map(|_| directives.to_owned())
        .map_err(|e| format!("invalid log filter: {}", e))
}
