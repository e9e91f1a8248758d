// External crates
use clap::Parser;
use tracing::info;

// Internal imports
use snapaudit_core::audit_error;

// Local modules
mod cli;
mod commands;
mod config;

use cli::Args;
use commands::execute_command;

#[tokio::main]
async fn main() {
    let _log_guard = snapaudit_logging::init_subscriber();

    let args = Args::parse();
    if args.debug {
        info!("Starting snapaudit command");
    }

    if let Err(e) = execute_command(args).await {
        if e.is_fatal_setup() {
            audit_error!("{}", e);
            std::process::exit(1);
        }
        // Non-setup failures are reported without a failing exit status.
        audit_error!("An error occurred: {}", e);
    }
}
