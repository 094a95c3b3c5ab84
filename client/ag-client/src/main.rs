//! ag - authgate client
//!
//! # Examples
//!
//! ```bash
//! ag register --name Ada --email ada@example.com --password correct-horse --confirm-password correct-horse
//! ag login --email ada@example.com --password correct-horse --remember-me
//! ag open /dashboard
//! ag logout
//! ```

use ag_client::app;
use ag_client::cli::Cli;
use ag_client::logger;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(cli.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }

    match app::run(&cli).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.display_message());
            ExitCode::FAILURE
        }
    }
}
