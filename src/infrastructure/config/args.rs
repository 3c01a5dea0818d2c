use super::app_config::LogLevel;
use crate::application::FailurePolicy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "greeter",
    version,
    about = "A lightweight terminal client for a remote greeting service",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the greeting service.
    #[arg(long, env = "GREETER_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Form behavior after a failed call.
    #[arg(long, value_enum)]
    pub on_failure: Option<FailurePolicy>,

    /// Skip the startup health check.
    #[arg(long)]
    pub skip_health_check: bool,

    /// Greet this name once, print the result and exit.
    #[arg(short, long)]
    pub name: Option<String>,
}
