use crate::commands::Commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "ag")]
#[command(about = "authgate client: register, log in, and navigate behind the auth gate")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Directory holding the persisted session (default: <data dir>/authgate)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Wait before each gate evaluation, e.g. "1s" or "250ms"
    #[arg(long, global = true, default_value = "1s", value_parser = humantime::parse_duration)]
    pub hydration_delay: Duration,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
